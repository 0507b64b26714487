use super::domain::{ReceiptId, ReceiptRecord};

/// Storage abstraction so the service can be exercised in isolation.
pub trait ReceiptRepository: Send + Sync {
    /// Store a new record. Must reject ids that are already taken with `Conflict`.
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("receipt id already in use")]
    Conflict,
    #[error("no receipt found for that id")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
