use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use uuid::Uuid;

use super::domain::ReceiptId;

/// Source of receipt identifiers. Implementations return ids that are unique with high
/// probability; the service still checks for collisions before storing.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ReceiptId;
}

/// Random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId(Uuid::new_v4().to_string())
    }
}

/// Monotonic `rcpt-000001` style ids, handy for demos and deterministic tests.
#[derive(Debug)]
pub struct SequenceGenerator {
    next: AtomicU64,
}

impl SequenceGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequenceGenerator {
    fn next_id(&self) -> ReceiptId {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        ReceiptId(format!("rcpt-{id:06}"))
    }
}

/// Which generator the service is wired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Uuid,
    Sequence,
}

impl IdStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uuid" => Some(Self::Uuid),
            "sequence" | "seq" => Some(Self::Sequence),
            _ => None,
        }
    }

    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Arc::new(UuidGenerator),
            IdStrategy::Sequence => Arc::new(SequenceGenerator::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_ids_are_zero_padded_and_increasing() {
        let ids = SequenceGenerator::default();
        assert_eq!(ids.next_id(), ReceiptId("rcpt-000001".to_string()));
        assert_eq!(ids.next_id(), ReceiptId("rcpt-000002".to_string()));
    }

    #[test]
    fn uuid_ids_parse_back_as_uuids() {
        let id = UuidGenerator.next_id();
        assert!(Uuid::parse_str(&id.0).is_ok());
        assert_ne!(id, UuidGenerator.next_id());
    }

    #[test]
    fn strategy_parsing_is_case_insensitive() {
        assert_eq!(IdStrategy::parse(" UUID "), Some(IdStrategy::Uuid));
        assert_eq!(IdStrategy::parse("seq"), Some(IdStrategy::Sequence));
        assert_eq!(IdStrategy::parse("random"), None);
    }
}
