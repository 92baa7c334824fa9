//! End-to-end sign-in flow without a renderer
//!
//! PIN gate -> login form -> simulated backend -> remembered login.

use std::time::Duration;

use pocketpay_core::{
    AuthConfig, AuthError, Authenticator, LoginForm, PinOutcome, PinPad, SavedLogin, Session,
    SimulatedAuthenticator, Storage, WalletConfig,
};
use tempfile::tempdir;

fn instant_auth(rejected: Option<&str>) -> SimulatedAuthenticator {
    SimulatedAuthenticator::new(&AuthConfig {
        rejected_email: rejected.map(str::to_string),
        latency: Duration::ZERO,
        ..AuthConfig::default()
    })
}

#[test]
fn pin_gate_sets_session_flag() {
    let config = WalletConfig::default().with_pin("2468");
    let session = Session::new();
    let mut pad = PinPad::new();

    for d in "1357".chars() {
        pad.press(d);
    }
    assert!(matches!(
        pad.submit(&config.auth.expected_pin),
        PinOutcome::Rejected { attempts: 1 }
    ));
    assert!(!session.pin_validated());

    for d in "2468".chars() {
        pad.press(d);
    }
    if pad.submit(&config.auth.expected_pin) == PinOutcome::Accepted {
        session.set_pin_validated(true);
    }
    assert!(session.pin_validated());
}

#[tokio::test]
async fn remembered_login_round_trip() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let storage = Storage::new(dir.path().join("wallet.db"))?;
    let auth = instant_auth(None);

    let mut form = LoginForm::new("ana@example.com", "correct horse");
    form.remember = true;

    let mut submitted = Vec::new();
    form.submit(|c| submitted.push(c)).expect("form is valid");
    assert_eq!(submitted.len(), 1);

    let credentials = &submitted[0];
    auth.authenticate(credentials).await?;
    if credentials.remember {
        storage.save_remembered(&SavedLogin::new(credentials.email.clone()))?;
    }

    let saved = storage.load_remembered_or_default().expect("login was saved");
    assert_eq!(saved.email, "ana@example.com");
    assert_eq!(saved.password, None);
    Ok(())
}

#[tokio::test]
async fn rejected_login_saves_nothing() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let storage = Storage::new(dir.path().join("wallet.db"))?;
    let auth = instant_auth(Some("blocked@example.com"));

    let mut form = LoginForm::new("blocked@example.com", "whatever123");
    form.remember = true;
    let credentials = form.validate().expect("form is valid");

    let result = auth.authenticate(&credentials).await;
    assert_eq!(result, Err(AuthError::InvalidCredentials));
    assert!(storage.load_remembered_or_default().is_none());
    Ok(())
}
