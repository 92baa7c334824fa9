//! Page components for PocketPay.

mod activity;
mod home;
mod login;
mod onboarding;
mod pin;
mod profile;
mod send;

pub use activity::Activity;
pub use home::Home;
pub use login::Login;
pub use onboarding::Onboarding;
pub use pin::Pin;
pub use profile::Profile;
pub use send::SendMoney;
