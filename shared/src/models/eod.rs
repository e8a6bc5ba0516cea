//! End-of-Day Summary Model

use serde::{Deserialize, Serialize};

/// One of the day's best sellers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TopItem {
    pub name: String,
    pub quantity: i64,
}

/// Menu item running low on stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LowStockItem {
    pub name: String,
    pub stock: i64,
}

/// End-of-day summary for one business date.
///
/// At most one summary exists per date; saving a second one for the same
/// date is refused, never overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EodSummary {
    /// "YYYY-MM-DD"
    pub report_date: String,
    pub total_revenue: f64,
    /// Up to 3 items by summed quantity descending; tie order unspecified
    pub top_items: Vec<TopItem>,
    /// Items below the low-stock threshold, ascending by stock
    pub low_stock: Vec<LowStockItem>,
}
