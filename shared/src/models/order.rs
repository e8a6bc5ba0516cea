//! Order Line Model

use serde::{Deserialize, Serialize};

/// One line of the in-memory order being built at the till.
///
/// Name, price and category are captured when the item is first added,
/// so later menu edits never retroactively change an open order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub category: String,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Result of a successful order commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommittedSale {
    pub total: f64,
    /// Absent when the receipt snapshot could not be persisted
    /// (the sale itself still stands).
    pub receipt_id: Option<String>,
}
