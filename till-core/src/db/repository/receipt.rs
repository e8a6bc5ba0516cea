//! Receipt Repository

use super::{RepoError, RepoResult};
use shared::models::{OrderLine, Receipt};
use sqlx::SqlitePool;

const RECEIPT_SELECT: &str =
    "SELECT id, receipt_id, sale_date, total, items_json, created_at FROM receipts";

/// Persist an immutable receipt snapshot of a committed sale.
pub async fn create(
    pool: &SqlitePool,
    receipt_id: &str,
    sale_date: &str,
    total: f64,
    lines: &[OrderLine],
) -> RepoResult<Receipt> {
    let items_json = serde_json::to_string(lines)?;
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO receipts (receipt_id, sale_date, total, items_json, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(receipt_id)
    .bind(sale_date)
    .bind(total)
    .bind(&items_json)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_receipt_id(pool, receipt_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create receipt".into()))
}

pub async fn find_by_receipt_id(pool: &SqlitePool, receipt_id: &str) -> RepoResult<Option<Receipt>> {
    let sql = format!("{RECEIPT_SELECT} WHERE receipt_id = ?");
    let row = sqlx::query_as::<_, Receipt>(&sql)
        .bind(receipt_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Most recent receipts, optionally limited in count.
pub async fn find_recent(pool: &SqlitePool, limit: Option<i64>) -> RepoResult<Vec<Receipt>> {
    let rows = match limit {
        Some(n) => {
            let sql = format!("{RECEIPT_SELECT} ORDER BY created_at DESC, id DESC LIMIT ?");
            sqlx::query_as::<_, Receipt>(&sql)
                .bind(n)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!("{RECEIPT_SELECT} ORDER BY created_at DESC, id DESC");
            sqlx::query_as::<_, Receipt>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

/// Delete exactly one receipt by its public id; false when nothing matched.
pub async fn delete_by_receipt_id(pool: &SqlitePool, receipt_id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM receipts WHERE receipt_id = ?")
        .bind(receipt_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
