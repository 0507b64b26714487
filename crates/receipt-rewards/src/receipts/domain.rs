use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier handed back to clients after intake.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Purchase receipt as submitted on the wire.
///
/// Date, time and amounts stay as raw text: the points engine decides how values that fail to
/// parse degrade, so decoding only enforces the overall shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// Single line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Stored receipt with its computed points attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub points: u32,
}

impl ReceiptRecord {
    pub fn processed_view(&self) -> ProcessedReceiptView {
        ProcessedReceiptView {
            id: self.id.clone(),
        }
    }
}

/// Response body for `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedReceiptView {
    pub id: ReceiptId,
}

/// Response body for `GET /receipts/:id/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsView {
    pub points: u32,
}
