//! Error types for the TakeItFree core store

use thiserror::Error;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum AppError {
    /// Item was not found in the catalog
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Request was not found on the item it was addressed to
    #[error("Request not found: {0}")]
    RequestNotFound(String),

    /// Moment was not found in the ledger
    #[error("Moment not found: {0}")]
    MomentNotFound(String),

    /// No profile is active; the operation needs an acting user
    #[error("No active profile")]
    Unauthenticated,

    /// Input failed validation at the store boundary
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Name of the offending input field
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The acting user already has a request on this item
    #[error("Duplicate request on item: {0}")]
    DuplicateRequest(String),

    /// Operation not allowed for the entity's current status
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Error from the durable key-value collaborator
    #[error("Storage error: {0}")]
    Storage(String),

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

    /// Error during serialization/deserialization of snapshots
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Shorthand for a validation failure on `field`.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
