//! End-of-Day Summary Repository
//!
//! Live summaries are keyed uniquely by report date and never overwritten.
//! The archive table is a copy-on-clear shadow, populated with
//! insert-or-ignore semantics and restorable in bulk.

use super::RepoResult;
use shared::models::{EodSummary, LowStockItem, TopItem};
use sqlx::SqlitePool;

/// Raw row shape shared by eod_summary and eod_summary_archive.
#[derive(sqlx::FromRow)]
struct EodRow {
    report_date: String,
    total_revenue: f64,
    top_items_json: String,
    low_stock_json: String,
}

impl EodRow {
    fn into_summary(self) -> RepoResult<EodSummary> {
        let top_items: Vec<TopItem> = serde_json::from_str(&self.top_items_json)?;
        let low_stock: Vec<LowStockItem> = serde_json::from_str(&self.low_stock_json)?;
        Ok(EodSummary {
            report_date: self.report_date,
            total_revenue: self.total_revenue,
            top_items,
            low_stock,
        })
    }
}

fn into_summaries(rows: Vec<EodRow>) -> RepoResult<Vec<EodSummary>> {
    rows.into_iter().map(EodRow::into_summary).collect()
}

/// Insert a summary for its date. A summary already saved for that date
/// surfaces as `RepoError::Duplicate` — the existing row is never touched.
pub async fn insert_summary(pool: &SqlitePool, summary: &EodSummary) -> RepoResult<()> {
    let top_items_json = serde_json::to_string(&summary.top_items)?;
    let low_stock_json = serde_json::to_string(&summary.low_stock)?;
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO eod_summary (report_date, total_revenue, top_items_json, low_stock_json, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&summary.report_date)
    .bind(summary.total_revenue)
    .bind(&top_items_json)
    .bind(&low_stock_json)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_date(pool: &SqlitePool, date: &str) -> RepoResult<Option<EodSummary>> {
    let row = sqlx::query_as::<_, EodRow>(
        "SELECT report_date, total_revenue, top_items_json, low_stock_json FROM eod_summary WHERE report_date = ?",
    )
    .bind(date)
    .fetch_optional(pool)
    .await?;
    row.map(EodRow::into_summary).transpose()
}

/// All saved summaries, newest date first.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<EodSummary>> {
    let rows = sqlx::query_as::<_, EodRow>(
        "SELECT report_date, total_revenue, top_items_json, low_stock_json FROM eod_summary ORDER BY report_date DESC",
    )
    .fetch_all(pool)
    .await?;
    into_summaries(rows)
}

/// Mirror one summary into the archive; a date already archived is left as
/// is (insert-or-ignore).
pub async fn archive_one(pool: &SqlitePool, summary: &EodSummary) -> RepoResult<()> {
    let top_items_json = serde_json::to_string(&summary.top_items)?;
    let low_stock_json = serde_json::to_string(&summary.low_stock)?;
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT OR IGNORE INTO eod_summary_archive (report_date, total_revenue, top_items_json, low_stock_json, archived_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&summary.report_date)
    .bind(summary.total_revenue)
    .bind(&top_items_json)
    .bind(&low_stock_json)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_archived(pool: &SqlitePool) -> RepoResult<Vec<EodSummary>> {
    let rows = sqlx::query_as::<_, EodRow>(
        "SELECT report_date, total_revenue, top_items_json, low_stock_json FROM eod_summary_archive ORDER BY report_date DESC",
    )
    .fetch_all(pool)
    .await?;
    into_summaries(rows)
}

/// Bulk historical clear: copy every live summary into the archive
/// (ignoring dates already archived), then delete all sale ledger rows and
/// all live summaries. One transaction. Sales are NOT recoverable — only
/// the summaries survive via the archive.
pub async fn clear_sales_and_summaries(pool: &SqlitePool) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT OR IGNORE INTO eod_summary_archive (report_date, total_revenue, top_items_json, low_stock_json, archived_at) SELECT report_date, total_revenue, top_items_json, low_stock_json, ?1 FROM eod_summary",
    )
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM sales").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM eod_summary").execute(&mut *tx).await?;

    tx.commit().await?;
    Ok(())
}

/// Bulk-restore archived summaries into the live table, skipping dates
/// that already exist live. Returns the live row count afterwards.
pub async fn restore_archived(pool: &SqlitePool) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT OR IGNORE INTO eod_summary (report_date, total_revenue, top_items_json, low_stock_json, created_at) SELECT report_date, total_revenue, top_items_json, low_stock_json, ?1 FROM eod_summary_archive",
    )
    .bind(now)
    .execute(pool)
    .await?;

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM eod_summary")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
