//! Receipt Model

use super::order::OrderLine;
use serde::{Deserialize, Serialize};

/// Immutable receipt snapshot of a committed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Receipt {
    pub id: i64,
    /// Globally unique id, 32 hex chars
    pub receipt_id: String,
    pub sale_date: String,
    pub total: f64,
    /// JSON snapshot of the committed order lines
    pub items_json: String,
    pub created_at: i64,
}

impl Receipt {
    /// Decode the line-item snapshot.
    pub fn lines(&self) -> serde_json::Result<Vec<OrderLine>> {
        serde_json::from_str(&self.items_json)
    }
}
