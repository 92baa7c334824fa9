//! Durable key-value storage using redb.
//!
//! The wallet persists exactly one thing across launches: the "remember me"
//! login, stored as a JSON object under a fixed key. The PIN validation flag
//! is session-scoped and lives in [`Session`] instead.
//!
//! Reads used by the UI go through [`Storage::load_remembered_or_default`],
//! which logs and degrades to "nothing saved" instead of failing.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::error::WalletResult;

/// Opaque JSON values keyed by name
const KV_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

/// Key of the remembered-login entry
pub const REMEMBERED_LOGIN_KEY: &str = "remembered_login";

/// Remembered login entry: `{email, password, savedAt}`.
///
/// `password` is kept in the schema so entries written by older builds
/// still parse, but it is never written: see [`Storage::save_remembered`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLogin {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Unix milliseconds
    pub saved_at: i64,
}

impl SavedLogin {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: None,
            saved_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Open (or create) the database at `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "storage opened");
        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Store `value` as JSON under `key`, replacing any previous value.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> WalletResult<()> {
        let data = serde_json::to_vec(value)?;
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load and parse the JSON value under `key`.
    pub fn get_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> WalletResult<Option<T>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;

        match table.get(key)? {
            Some(v) => Ok(Some(serde_json::from_slice(v.value())?)),
            None => Ok(None),
        }
    }

    /// Remove `key`. Succeeds when the key was already absent.
    pub fn remove(&self, key: &str) -> WalletResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Remembered login
    // ═══════════════════════════════════════════════════════════════════════

    /// Persist the remembered login.
    ///
    /// Any password on `login` is stripped before writing; the entry only
    /// ever pre-fills the email field.
    pub fn save_remembered(&self, login: &SavedLogin) -> WalletResult<()> {
        if login.password.is_some() {
            tracing::warn!("refusing to persist a cleartext password; saving email only");
        }
        let entry = SavedLogin {
            password: None,
            ..login.clone()
        };
        self.put_json(REMEMBERED_LOGIN_KEY, &entry)
    }

    pub fn load_remembered(&self) -> WalletResult<Option<SavedLogin>> {
        let login: Option<SavedLogin> = self.get_json(REMEMBERED_LOGIN_KEY)?;
        Ok(login.map(|mut l| {
            if l.password.take().is_some() {
                tracing::warn!("discarding cleartext password from remembered login");
            }
            l
        }))
    }

    /// Like [`Self::load_remembered`] but never fails: storage and parse
    /// errors are logged and read as "nothing saved".
    pub fn load_remembered_or_default(&self) -> Option<SavedLogin> {
        match self.load_remembered() {
            Ok(login) => login,
            Err(e) => {
                tracing::warn!("Failed to load remembered login: {}", e);
                None
            }
        }
    }

    pub fn clear_remembered(&self) -> WalletResult<()> {
        self.remove(REMEMBERED_LOGIN_KEY)
    }
}

/// Session-scoped flags. Lives as long as the process; never written to disk.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pin_validated: Arc<AtomicBool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin_validated(&self) -> bool {
        self.pin_validated.load(Ordering::Acquire)
    }

    pub fn set_pin_validated(&self, validated: bool) {
        self.pin_validated.store(validated, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn storage() -> (tempfile::TempDir, Storage) {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("wallet.db")).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_nothing_saved_initially() {
        let (_dir, storage) = storage();
        assert!(storage.load_remembered().unwrap().is_none());
        assert!(storage.load_remembered_or_default().is_none());
    }

    #[test]
    fn test_save_and_load_remembered() {
        let (_dir, storage) = storage();
        let login = SavedLogin::new("a@b.com");
        storage.save_remembered(&login).unwrap();
        assert_eq!(storage.load_remembered().unwrap(), Some(login));
    }

    #[test]
    fn test_password_never_persisted() {
        let (_dir, storage) = storage();
        let mut login = SavedLogin::new("a@b.com");
        login.password = Some("hunter22".to_string());
        storage.save_remembered(&login).unwrap();

        let raw: serde_json::Value = storage.get_json(REMEMBERED_LOGIN_KEY).unwrap().unwrap();
        assert!(raw.get("password").is_none());
        assert_eq!(raw["email"], "a@b.com");
        assert!(raw.get("savedAt").is_some());
    }

    #[test]
    fn test_legacy_entry_password_dropped_on_load() {
        let (_dir, storage) = storage();
        let legacy = serde_json::json!({
            "email": "old@b.com",
            "password": "plaintext",
            "savedAt": 1_700_000_000_000i64,
        });
        storage.put_json(REMEMBERED_LOGIN_KEY, &legacy).unwrap();

        let login = storage.load_remembered().unwrap().unwrap();
        assert_eq!(login.email, "old@b.com");
        assert_eq!(login.password, None);
        assert_eq!(login.saved_at, 1_700_000_000_000);
    }

    #[test]
    fn test_corrupt_entry_degrades_to_none() {
        let (_dir, storage) = storage();
        storage
            .put_json(REMEMBERED_LOGIN_KEY, &serde_json::json!({"unexpected": true}))
            .unwrap();
        assert!(storage.load_remembered().is_err());
        assert!(storage.load_remembered_or_default().is_none());
    }

    #[test]
    fn test_clear_remembered() {
        let (_dir, storage) = storage();
        storage.save_remembered(&SavedLogin::new("a@b.com")).unwrap();
        storage.clear_remembered().unwrap();
        assert!(storage.load_remembered().unwrap().is_none());
        // clearing twice is fine
        storage.clear_remembered().unwrap();
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("wallet.db");
        {
            let storage = Storage::new(&path).unwrap();
            storage.save_remembered(&SavedLogin::new("a@b.com")).unwrap();
        }
        let storage = Storage::new(&path).unwrap();
        assert_eq!(storage.load_remembered().unwrap().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_session_flag() {
        let session = Session::new();
        assert!(!session.pin_validated());
        let shared = session.clone();
        shared.set_pin_validated(true);
        assert!(session.pin_validated());
    }
}
