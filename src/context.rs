//! Application context for PocketPay.
//!
//! Provides storage, the session flags, the wallet configuration and the
//! notifier to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| AppContext::open(&get_data_dir(), get_wallet_config()).0);
//!
//! // In child components
//! let app = use_app();
//! ```

use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use pocketpay_core::{NotificationSpec, Notifier, Session, Storage, WalletConfig};
use tokio::sync::mpsc::UnboundedReceiver;

/// Database file inside the data directory
const DB_FILE: &str = "pocketpay.redb";

/// Services shared by every page.
///
/// `storage` is `None` when the database could not be opened; the app then
/// runs without "remember me" instead of refusing to start.
#[derive(Clone)]
pub struct AppContext {
    pub storage: Option<Storage>,
    pub session: Session,
    pub config: WalletConfig,
    pub notifier: Notifier,
}

impl AppContext {
    /// Open storage under `data_dir` and create the notification channel.
    pub fn open(
        data_dir: &Path,
        config: WalletConfig,
    ) -> (Self, UnboundedReceiver<NotificationSpec>) {
        let storage = match Storage::new(data_dir.join(DB_FILE)) {
            Ok(storage) => Some(storage),
            Err(e) => {
                tracing::warn!("Storage unavailable, continuing without persistence: {}", e);
                None
            }
        };
        let (notifier, rx) = Notifier::new();
        (
            Self {
                storage,
                session: Session::new(),
                config,
                notifier,
            },
            rx,
        )
    }
}

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the wallet configuration resolved from command line args.
pub fn get_wallet_config() -> WalletConfig {
    crate::get_wallet_config()
}

/// Hook to access the application context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Hook to access the notification currently shown as a toast.
pub fn use_notification() -> Signal<Option<NotificationSpec>> {
    use_context::<Signal<Option<NotificationSpec>>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_storage_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = AppContext::open(dir.path(), WalletConfig::default());
        assert!(ctx.storage.is_some());
        assert!(dir.path().join(DB_FILE).exists());
        assert!(!ctx.session.pin_validated());
    }

    #[test]
    fn carries_configured_sheet_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = WalletConfig::default();
        config.sheet.collapsed_height = 380.0;
        let (ctx, _rx) = AppContext::open(dir.path(), config);
        assert_eq!(ctx.config.sheet.collapsed_height, 380.0);
        assert!(pocketpay_core::SheetController::new(ctx.config.sheet.clone()).is_ok());
    }
}
