//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    /// Display name, unique across the menu
    pub name: String,
    /// Unit price, positive
    pub price: f64,
    /// Units on hand. Decremented by sale commits with no floor check
    /// (single-till trusted environment; known validation gap).
    pub stock: i64,
    pub category: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
}

/// Update menu item payload (full replacement, as submitted by the admin form)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
}
