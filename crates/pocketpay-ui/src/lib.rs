//! PocketPay UI Components
//!
//! Dioxus widgets for the PocketPay wallet. Each interactive widget is a thin
//! event adapter around a state machine from `pocketpay-core`: DOM events go
//! in, the controller decides, and the widget paints the result through
//! inline styles built from [`tokens`].
//!
//! ## Widgets
//!
//! - `BottomSheet`: drag-to-resize modal sheet
//! - `SegmentedControl`: tabs with a measured, animated indicator
//! - `TiltCard`: device-orientation driven 3D tilt
//! - `use_carousel` / `SwipeArea` / `StepProgress`: auto-advancing carousel
//! - `PinDots` / `Keypad`: PIN entry
//! - `Button`, `TextField`, `NotificationToast`

pub mod components;
pub mod motion;
pub mod tokens;

pub use components::*;
