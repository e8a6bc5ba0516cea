//! Sale Ledger Model

use serde::{Deserialize, Serialize};

/// One row of the append-only sale ledger: a single line item of a
/// committed order. Never updated; deleted only by the bulk
/// historical-data clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SaleRecord {
    pub id: i64,
    pub item_name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// quantity * unit_price at commit time
    pub total: f64,
    /// "YYYY-MM-DD HH:MM:SS" — business date plus wall-clock time of day
    pub sale_date: String,
    pub created_at: i64,
}
