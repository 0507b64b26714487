use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{Receipt, ReceiptId, ReceiptRecord};
use super::ids::IdGenerator;
use super::points;
use super::repository::{ReceiptRepository, RepositoryError};

/// Fresh ids drawn before a storage conflict is reported to the caller.
pub const MAX_ID_ATTEMPTS: usize = 3;

/// Service composing the points engine, id generation and the repository.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Score a receipt and store it under a newly generated id.
    pub fn process(&self, receipt: Receipt) -> Result<ReceiptRecord, ReceiptServiceError> {
        let points = points::score(&receipt);

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let record = ReceiptRecord {
                id: self.ids.next_id(),
                receipt: receipt.clone(),
                points,
            };

            match self.repository.insert(record) {
                Ok(stored) => {
                    info!(id = %stored.id, points, retailer = %stored.receipt.retailer, "receipt processed");
                    return Ok(stored);
                }
                Err(RepositoryError::Conflict) => {
                    warn!(attempt, "generated receipt id already in use");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ReceiptServiceError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Fetch a stored receipt for API responses.
    pub fn get(&self, id: &ReceiptId) -> Result<ReceiptRecord, ReceiptServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Points awarded to a previously processed receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<u32, ReceiptServiceError> {
        let record = self.get(id)?;
        debug!(%id, points = record.points, "points looked up");
        Ok(record.points)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("could not allocate a unique receipt id after {attempts} attempts")]
    IdExhausted { attempts: usize },
}

impl ReceiptServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReceiptServiceError::Repository(RepositoryError::NotFound))
    }
}
