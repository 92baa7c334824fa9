//! PocketPay Core Library
//!
//! Framework-free logic behind the PocketPay wallet front-end.
//!
//! ## Overview
//!
//! The interaction widgets of the app are small state machines with timing
//! contracts. They live here, independent of any renderer, so they can be
//! driven by DOM events in the UI crate and by plain method calls in tests:
//!
//! - **tilt**: device-orientation smoothing for the 3D card effect
//! - **sheet**: drag-to-resize bottom sheet
//! - **segmented**: segmented control selection and indicator placement
//! - **carousel**: auto-advancing onboarding carousel with swipe
//!
//! Alongside them sit the login/PIN logic (`auth`), durable key-value
//! storage (`storage`) and the worker notification queue (`notify`).
//!
//! ## Quick Start
//!
//! ```ignore
//! use pocketpay_core::{SheetController, SheetRelease};
//!
//! let mut sheet = SheetController::default();
//! sheet.open();
//! sheet.finish_opening();
//! sheet.pointer_down(1, 300.0, true);
//! sheet.pointer_move(1, 450.0);
//! assert_eq!(sheet.pointer_up(1), SheetRelease::Dismiss);
//! ```

pub mod auth;
pub mod carousel;
pub mod config;
pub mod error;
pub mod frame;
pub mod notify;
pub mod segmented;
pub mod sheet;
pub mod storage;
pub mod tilt;

// Re-exports
pub use auth::{
    AuthConfig, AuthError, Authenticator, BiometricStub, Credentials, FieldError, LoginErrors,
    LoginForm, PinOutcome, PinPad, SimulatedAuthenticator, PIN_LENGTH,
};
pub use carousel::{CarouselConfig, CarouselController, StepCause, StepChange, SwipeDirection};
pub use config::{WalletConfig, FRAME_INTERVAL};
pub use error::{WalletError, WalletResult};
pub use frame::{FrameGate, FrameTicket};
pub use notify::{NotificationSpec, Notifier, WorkerMessage};
pub use segmented::{IndicatorPlacement, SegmentGeometry, SegmentKey, SegmentedState};
pub use sheet::{DragPhase, SheetConfig, SheetController, SheetHeight, SheetPhase, SheetRelease};
pub use storage::{SavedLogin, Session, Storage};
pub use tilt::{
    MotionGate, MotionPermission, MotionSource, TiltConfig, TiltEngine, TiltSample, TiltState,
};
