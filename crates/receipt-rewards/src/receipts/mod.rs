//! Receipt intake, points scoring and lookup.
//!
//! The points engine in [`points`] is a pure function over a decoded [`Receipt`]; the service
//! and router wrap it with id generation and storage.

pub mod domain;
pub mod ids;
pub mod points;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Item, PointsView, ProcessedReceiptView, Receipt, ReceiptId, ReceiptRecord};
pub use ids::{IdGenerator, IdStrategy, SequenceGenerator, UuidGenerator};
pub use points::{breakdown, score, PointsRule, ScoreBreakdown, ScoreComponent};
pub use repository::{ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use service::{ReceiptService, ReceiptServiceError, MAX_ID_ATTEMPTS};
