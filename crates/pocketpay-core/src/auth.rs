//! Login form validation, PIN gate and simulated authentication.
//!
//! There is no backend: `SimulatedAuthenticator` stands in for one and
//! only ever reports a single generic failure.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::error::{WalletError, WalletResult};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Number of digits in the PIN
pub const PIN_LENGTH: usize = 4;

/// Settings for the PIN gate and simulated backend
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub expected_pin: String,
    /// Address the simulated backend refuses, to exercise the error path
    pub rejected_email: Option<String>,
    /// Artificial latency of the simulated backend
    pub latency: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            expected_pin: "1234".to_string(),
            rejected_email: None,
            latency: Duration::from_millis(1200),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> WalletResult<()> {
        let pin = &self.expected_pin;
        if pin.chars().count() != PIN_LENGTH || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(WalletError::InvalidConfig(format!(
                "PIN must be exactly {} digits",
                PIN_LENGTH
            )));
        }
        Ok(())
    }
}

/// Field-level validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

/// Authentication failure. Deliberately a single opaque message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Accepts `local@domain.tld`: one `@`, no whitespace, and a domain with a
/// dot that has something on both sides.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(FieldError::EmailInvalid);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FieldError::EmailInvalid);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(FieldError::EmailInvalid);
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(FieldError::EmailInvalid),
    }
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        Err(FieldError::PasswordRequired)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Err(FieldError::PasswordTooShort)
    } else {
        Ok(())
    }
}

/// Validated login input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Per-field messages shown inline under the inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Raw login form contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember: false,
        }
    }

    pub fn validate(&self) -> Result<Credentials, LoginErrors> {
        let errors = LoginErrors {
            email: validate_email(&self.email).err(),
            password: validate_password(&self.password).err(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            remember: self.remember,
        })
    }

    /// Validate and hand the credentials to `on_submit`. The callback runs
    /// exactly once for valid input and never for invalid input.
    pub fn submit<F>(&self, on_submit: F) -> Result<(), LoginErrors>
    where
        F: FnOnce(Credentials),
    {
        let credentials = self.validate()?;
        on_submit(credentials);
        Ok(())
    }
}

/// Backend seam for signing in.
pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), AuthError>>;
}

/// Offline stand-in that accepts every validated credential pair except
/// the configured rejected address.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    rejected_email: Option<String>,
    latency: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            rejected_email: config.rejected_email.clone(),
            latency: config.latency,
        }
    }
}

impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let rejected = self
            .rejected_email
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case(&credentials.email));
        if rejected {
            tracing::info!("simulated sign-in rejected");
            Err(AuthError::InvalidCredentials)
        } else {
            tracing::info!("simulated sign-in accepted");
            Ok(())
        }
    }
}

/// Biometric login stub: no sensor, always succeeds after a short pause.
#[derive(Debug, Clone, Copy)]
pub struct BiometricStub {
    pub delay: Duration,
}

impl Default for BiometricStub {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(800),
        }
    }
}

impl BiometricStub {
    pub async fn authenticate(&self) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!("biometric stub accepted");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    Incomplete,
    Accepted,
    /// Wrong PIN; the pad has been cleared
    Rejected { attempts: u32 },
}

/// Digit entry for the PIN gate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinPad {
    digits: String,
    failed_attempts: u32,
}

impl PinPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entered(&self) -> usize {
        self.digits.len()
    }

    pub fn is_complete(&self) -> bool {
        self.digits.len() == PIN_LENGTH
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Append a digit. Non-digits and presses on a full pad are ignored.
    pub fn press(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.is_complete() {
            return false;
        }
        self.digits.push(digit);
        true
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Compare a complete entry against `expected`.
    pub fn submit(&mut self, expected: &str) -> PinOutcome {
        if !self.is_complete() {
            return PinOutcome::Incomplete;
        }
        if self.digits == expected {
            self.failed_attempts = 0;
            PinOutcome::Accepted
        } else {
            self.failed_attempts += 1;
            self.digits.clear();
            tracing::warn!(attempts = self.failed_attempts, "incorrect PIN entered");
            PinOutcome::Rejected {
                attempts: self.failed_attempts,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn email_without_tld_rejected() {
        assert_eq!(validate_email("a@b"), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn email_variants() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("  first.last@mail.example.org ").is_ok());
        assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("ab.com"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("@b.com"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@.com"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b."), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@@b.com"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a b@c.com"), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn password_length() {
        assert_eq!(validate_password(""), Err(FieldError::PasswordRequired));
        assert_eq!(validate_password("1234567"), Err(FieldError::PasswordTooShort));
        assert!(validate_password("12345678").is_ok());
    }

    #[test]
    fn valid_form_submits_exactly_once() {
        let calls = Cell::new(0);
        let form = LoginForm::new("a@b.com", "abcdefgh");
        form.submit(|c| {
            assert_eq!(c.email, "a@b.com");
            calls.set(calls.get() + 1);
        })
        .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn invalid_form_never_submits() {
        let calls = Cell::new(0);
        let form = LoginForm::new("a@b", "short");
        let errors = form.submit(|_| calls.set(calls.get() + 1)).unwrap_err();
        assert_eq!(calls.get(), 0);
        assert_eq!(errors.email, Some(FieldError::EmailInvalid));
        assert_eq!(errors.password, Some(FieldError::PasswordTooShort));
    }

    #[test]
    fn field_messages() {
        assert_eq!(
            FieldError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[tokio::test]
    async fn simulated_backend() {
        let auth = SimulatedAuthenticator::new(&AuthConfig {
            rejected_email: Some("blocked@example.com".to_string()),
            latency: Duration::ZERO,
            ..AuthConfig::default()
        });
        let ok = LoginForm::new("a@b.com", "abcdefgh").validate().unwrap();
        let blocked = LoginForm::new("Blocked@Example.com", "abcdefgh")
            .validate()
            .unwrap();
        assert_eq!(auth.authenticate(&ok).await, Ok(()));
        assert_eq!(
            auth.authenticate(&blocked).await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn biometric_stub_succeeds() {
        assert_eq!(BiometricStub::default().authenticate().await, Ok(()));
    }

    #[test]
    fn pin_pad_flow() {
        let mut pad = PinPad::new();
        assert!(!pad.press('x'));
        for d in "123".chars() {
            pad.press(d);
        }
        assert_eq!(pad.submit("1234"), PinOutcome::Incomplete);
        pad.press('5');
        assert!(!pad.press('6'));
        assert_eq!(pad.submit("1234"), PinOutcome::Rejected { attempts: 1 });
        assert_eq!(pad.entered(), 0);

        for d in "1234".chars() {
            pad.press(d);
        }
        assert_eq!(pad.submit("1234"), PinOutcome::Accepted);
        assert_eq!(pad.failed_attempts(), 0);
    }

    #[test]
    fn pin_backspace() {
        let mut pad = PinPad::new();
        pad.press('1');
        pad.press('2');
        pad.backspace();
        assert_eq!(pad.entered(), 1);
        pad.clear();
        assert_eq!(pad.entered(), 0);
    }
}
