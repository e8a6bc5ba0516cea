//! Menu Repository

use super::{RepoError, RepoResult};
use shared::models::{LowStockItem, MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

const MENU_SELECT: &str =
    "SELECT id, name, price, stock, category, created_at, updated_at FROM menu";

fn validate_item(name: &str, price: f64, stock: i64, category: &str) -> RepoResult<()> {
    if name.trim().is_empty() {
        return Err(RepoError::Validation("Item name cannot be empty".into()));
    }
    if price <= 0.0 {
        return Err(RepoError::Validation(format!(
            "Price must be positive: {price}"
        )));
    }
    if stock < 0 {
        return Err(RepoError::Validation(format!(
            "Stock cannot be negative: {stock}"
        )));
    }
    if category.trim().is_empty() {
        return Err(RepoError::Validation("Category cannot be empty".into()));
    }
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("{MENU_SELECT} WHERE id = ?");
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

/// All menu items, name ascending (display order for the POS grid).
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let sql = format!("{MENU_SELECT} ORDER BY name ASC");
    let items = sqlx::query_as::<_, MenuItem>(&sql).fetch_all(pool).await?;
    Ok(items)
}

pub async fn categories(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let rows = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT category FROM menu ORDER BY category ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    validate_item(&data.name, data.price, data.stock, &data.category)?;

    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO menu (name, price, stock, category, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.stock)
    .bind(&data.category)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

/// Full-field replacement, as submitted by the admin form.
pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    validate_item(&data.name, data.price, data.stock, &data.category)?;

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE menu SET name = ?1, price = ?2, stock = ?3, category = ?4, updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.stock)
    .bind(&data.category)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Items with stock strictly below `threshold`, lowest first.
pub async fn low_stock(pool: &SqlitePool, threshold: i64) -> RepoResult<Vec<LowStockItem>> {
    let rows = sqlx::query_as::<_, LowStockItem>(
        "SELECT name, stock FROM menu WHERE stock < ? ORDER BY stock ASC",
    )
    .bind(threshold)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
