//! Error types for PocketPay

use thiserror::Error;

/// Main error type for PocketPay operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// A configuration value is out of its accepted range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker message could not be interpreted
    #[error("Unknown worker message: {0}")]
    UnknownMessage(String),

    /// Notification channel has no receiver left
    #[error("Notification channel closed")]
    ChannelClosed,
}

/// Result type alias using WalletError
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalletError::InvalidConfig("smoothing must be in (0, 1]".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: smoothing must be in (0, 1]"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WalletError = io_err.into();
        assert!(matches!(err, WalletError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: WalletError = json_err.into();
        assert!(matches!(err, WalletError::Serialization(_)));
    }
}
