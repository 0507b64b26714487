use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId, ReceiptRecord};
use crate::receipts::ids::{IdGenerator, SequenceGenerator};
use crate::receipts::repository::{ReceiptRepository, RepositoryError};
use crate::receipts::service::ReceiptService;

pub(super) fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

/// Five item receipt worth 28 points.
pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

/// Four Gatorades worth 109 points.
pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

/// Receipt whose only scoring field is the retailer name.
pub(super) fn plain_receipt(retailer: &str) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: "2022-03-14".to_string(),
        purchase_time: "09:15".to_string(),
        items: vec![item("Milk", "3.49")],
        total: "3.49".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ReceiptId, ReceiptRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ReceiptRepository for MemoryRepository {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn insert(&self, _record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }
}

/// Generator that always hands out the same id.
pub(super) struct FixedIds(pub(super) &'static str);

impl IdGenerator for FixedIds {
    fn next_id(&self) -> ReceiptId {
        ReceiptId(self.0.to_string())
    }
}

pub(super) fn build_service() -> (ReceiptService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = ReceiptService::new(
        Arc::new(repository.clone()),
        Arc::new(SequenceGenerator::default()),
    );
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
