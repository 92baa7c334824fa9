//! App-level components for PocketPay.
//!
//! Reusable widgets live in `pocketpay-ui`; this module only holds pieces
//! tied to the app's routes.

mod mobile_nav;

pub use mobile_nav::{MobileNav, Tab};
