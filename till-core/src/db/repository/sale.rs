//! Sale Ledger Repository

use super::RepoResult;
use shared::models::{OrderLine, SaleRecord, TopItem};
use sqlx::SqlitePool;

const SALE_SELECT: &str =
    "SELECT id, item_name, category, quantity, unit_price, total, sale_date, created_at FROM sales";

/// Record one committed order atomically: insert a ledger row per line and
/// decrement the matching menu stock in the same transaction. Any failure
/// rolls everything back.
///
/// The stock decrement has no non-negative floor (preserved behavior of
/// this system; single-till trusted environment).
pub async fn record_sale(pool: &SqlitePool, lines: &[OrderLine], sale_date: &str) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    for line in lines {
        sqlx::query(
            "INSERT INTO sales (item_name, category, quantity, unit_price, total, sale_date, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&line.name)
        .bind(&line.category)
        .bind(line.quantity as i64)
        .bind(line.unit_price)
        .bind(line.line_total())
        .bind(sale_date)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE menu SET stock = stock - ?1, updated_at = ?2 WHERE id = ?3")
            .bind(line.quantity as i64)
            .bind(now)
            .bind(line.item_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Ledger rows from the last `days_back` days, newest first (reports tab).
pub async fn find_since(pool: &SqlitePool, days_back: i64) -> RepoResult<Vec<SaleRecord>> {
    let date_limit = (chrono::Local::now() - chrono::Duration::days(days_back))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let sql = format!("{SALE_SELECT} WHERE sale_date >= ? ORDER BY sale_date DESC");
    let rows = sqlx::query_as::<_, SaleRecord>(&sql)
        .bind(date_limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Summed revenue for one business date ("YYYY-MM-DD"); 0.0 with no sales.
pub async fn revenue_for_date(pool: &SqlitePool, date: &str) -> RepoResult<f64> {
    let revenue = sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(total), 0.0) FROM sales WHERE substr(sale_date, 1, 10) = ?",
    )
    .bind(date)
    .fetch_one(pool)
    .await?;
    Ok(revenue)
}

/// Best sellers for one business date by summed quantity, descending.
/// Tie order between equal quantities is unspecified.
pub async fn top_items_for_date(
    pool: &SqlitePool,
    date: &str,
    limit: i64,
) -> RepoResult<Vec<TopItem>> {
    let rows = sqlx::query_as::<_, TopItem>(
        "SELECT item_name AS name, SUM(quantity) AS quantity FROM sales WHERE substr(sale_date, 1, 10) = ? GROUP BY item_name ORDER BY quantity DESC LIMIT ?",
    )
    .bind(date)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
