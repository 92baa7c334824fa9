//! Runtime configuration
//!
//! `WalletConfig` bundles the tunables of every interaction widget plus the
//! simulated-auth settings. The desktop binary builds it from command line
//! arguments; everything has a `Default` so tests and widgets can use it
//! directly.

use std::time::Duration;

use crate::auth::AuthConfig;
use crate::carousel::CarouselConfig;
use crate::error::WalletResult;
use crate::sheet::SheetConfig;
use crate::tilt::TiltConfig;

/// Aggregated configuration for the wallet front-end
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletConfig {
    pub tilt: TiltConfig,
    pub sheet: SheetConfig,
    pub carousel: CarouselConfig,
    pub auth: AuthConfig,
}

impl WalletConfig {
    /// Check every sub-configuration, returning the first violation.
    pub fn validate(&self) -> WalletResult<()> {
        self.tilt.validate()?;
        self.sheet.validate()?;
        self.carousel.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Override the maximum tilt angle (degrees).
    pub fn with_max_tilt(mut self, max_tilt: f64) -> Self {
        self.tilt.max_tilt = max_tilt;
        self
    }

    /// Override the PIN the gate accepts.
    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.auth.expected_pin = pin.into();
        self
    }

    /// Make the simulated authenticator reject one address.
    pub fn with_rejected_email(mut self, email: impl Into<String>) -> Self {
        self.auth.rejected_email = Some(email.into());
        self
    }
}

/// Approximate animation-frame cadence (60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(WalletConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let cfg = WalletConfig::default()
            .with_max_tilt(20.0)
            .with_pin("9876")
            .with_rejected_email("blocked@example.com");
        assert_eq!(cfg.tilt.max_tilt, 20.0);
        assert_eq!(cfg.auth.expected_pin, "9876");
        assert_eq!(cfg.auth.rejected_email.as_deref(), Some("blocked@example.com"));
    }

    #[test]
    fn invalid_tilt_rejected() {
        let cfg = WalletConfig::default().with_max_tilt(0.0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_pin_rejected() {
        assert!(WalletConfig::default().with_pin("12a4").validate().is_err());
        assert!(WalletConfig::default().with_pin("12345").validate().is_err());
        assert!(WalletConfig::default().with_pin("0000").validate().is_ok());
    }
}
