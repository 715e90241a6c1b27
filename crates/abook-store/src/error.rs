use abook_types::AddressId;

/// Errors from store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced id has no corresponding record.
    #[error("address not found: {0}")]
    NotFound(AddressId),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
