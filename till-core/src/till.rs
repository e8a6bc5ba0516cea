//! Till Transaction Engine
//!
//! Orchestrates order commits, receipt issuance, end-of-day summaries and
//! business-day advancement over the persistent store. One `Till` is the
//! explicit context for the whole session — no ambient globals.

use crate::config::Config;
use crate::db::DbService;
use crate::db::repository::{RepoError, RepoResult, eod, menu, receipt, sale, user};
use crate::order::Order;
use crate::session::{self, Session};
use chrono::NaiveDate;
use shared::models::{
    CommittedSale, EodSummary, MenuItem, MenuItemCreate, MenuItemUpdate, OrderLine,
    PasswordChangeOutcome, Receipt, SaleRecord,
};
use thiserror::Error;

/// Commit failure. Expected business conditions only — the UI maps each
/// variant to its own message surface.
#[derive(Debug, Error)]
pub enum CommitError {
    #[error("order is empty")]
    EmptyOrder,

    #[error("storage failure: {0}")]
    Storage(#[from] RepoError),
}

/// Outcome of an end-of-day save attempt. `AlreadySaved` is a defined
/// idempotent result, not a failure: the existing summary stays untouched
/// and the business day does not advance.
#[derive(Debug)]
pub enum EodSaveOutcome {
    Saved(EodSummary),
    AlreadySaved(EodSummary),
}

/// The single-till engine: persistent store handle, session gate, order
/// accumulator and the simulated business day.
pub struct Till {
    db: DbService,
    session: Session,
    order: Order,
    business_day: NaiveDate,
    low_stock_threshold: i64,
}

impl Till {
    /// Open the till: connect the store, apply migrations, start with an
    /// empty order and today's date as the business day.
    pub async fn open(config: &Config) -> RepoResult<Self> {
        let db = DbService::new(&config.db_path).await?;
        Ok(Self {
            db,
            session: Session::new(),
            order: Order::new(),
            business_day: chrono::Local::now().date_naive(),
            low_stock_threshold: config.low_stock_threshold,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The simulated POS date. Advances only on a successful EOD save,
    /// independent of the wall-clock date.
    pub fn business_day(&self) -> NaiveDate {
        self.business_day
    }

    /// Pin the business day, e.g. when resuming a till that closed its
    /// last day before midnight.
    pub fn set_business_day(&mut self, day: NaiveDate) {
        self.business_day = day;
    }

    // ========== Session gate ==========

    pub async fn login(&mut self, username: &str, password: &str) -> RepoResult<bool> {
        self.session.login(self.db.pool(), username, password).await
    }

    /// Clear the role and abandon any open order.
    pub fn logout(&mut self) {
        self.session.logout();
        self.order.clear();
    }

    pub async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> RepoResult<PasswordChangeOutcome> {
        session::change_password(self.db.pool(), username, old_password, new_password).await
    }

    // ========== Order accumulator ==========

    /// Add one unit of a menu item to the open order. Stock is not checked
    /// here — only the commit-time decrement enforces it.
    pub async fn add_item(&mut self, item_id: i64) -> RepoResult<()> {
        let item = menu::find_by_id(self.db.pool(), item_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {item_id} not found")))?;
        self.order.add(&item);
        Ok(())
    }

    pub fn remove_item(&mut self, item_id: i64) -> bool {
        self.order.remove(item_id)
    }

    pub fn clear_order(&mut self) {
        self.order.clear();
    }

    pub fn order_total(&self) -> f64 {
        self.order.total()
    }

    /// Open order lines in display order (item id ascending).
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.order.snapshot()
    }

    // ========== Transaction engine ==========

    /// Commit the open order: one transaction inserts the ledger rows and
    /// decrements stock; on failure everything rolls back and the order is
    /// left untouched. On success a receipt snapshot is persisted
    /// best-effort — the sale stands even if the receipt write fails
    /// (the money already moved), in which case `receipt_id` is `None`.
    pub async fn commit_order(&mut self) -> Result<CommittedSale, CommitError> {
        if self.order.is_empty() {
            return Err(CommitError::EmptyOrder);
        }

        let lines = self.order.snapshot();
        let total = self.order.total();
        let sale_date = self.sale_timestamp();

        sale::record_sale(self.db.pool(), &lines, &sale_date).await?;

        let receipt_id = shared::util::receipt_id();
        let receipt_ref =
            match receipt::create(self.db.pool(), &receipt_id, &sale_date, total, &lines).await {
                Ok(_) => Some(receipt_id),
                Err(err) => {
                    tracing::warn!(%err, "receipt snapshot not persisted; sale already recorded");
                    None
                }
            };

        self.order.clear();
        tracing::info!(total, lines = lines.len(), %sale_date, "order committed");
        Ok(CommittedSale {
            total,
            receipt_id: receipt_ref,
        })
    }

    /// Summary for the current business day: revenue, top-3 sellers and
    /// the low-stock list. Pure read, safe to call repeatedly.
    pub async fn generate_eod_summary(&self) -> RepoResult<EodSummary> {
        let date = self.business_day.format("%Y-%m-%d").to_string();
        let total_revenue = sale::revenue_for_date(self.db.pool(), &date).await?;
        let top_items = sale::top_items_for_date(self.db.pool(), &date, 3).await?;
        let low_stock = menu::low_stock(self.db.pool(), self.low_stock_threshold).await?;
        Ok(EodSummary {
            report_date: date,
            total_revenue,
            top_items,
            low_stock,
        })
    }

    /// Save the current day's summary and advance the business day by one.
    /// A date that already has a saved summary yields `AlreadySaved`: no
    /// write, no advance. The archive mirror write is best-effort.
    pub async fn save_eod_and_advance(&mut self) -> RepoResult<EodSaveOutcome> {
        let summary = self.generate_eod_summary().await?;

        match eod::insert_summary(self.db.pool(), &summary).await {
            Ok(()) => {}
            Err(RepoError::Duplicate(_)) => {
                tracing::warn!(date = %summary.report_date, "eod already saved for this date");
                return Ok(EodSaveOutcome::AlreadySaved(summary));
            }
            Err(err) => return Err(err),
        }

        if let Err(err) = eod::archive_one(self.db.pool(), &summary).await {
            tracing::warn!(%err, date = %summary.report_date, "eod archive mirror failed");
        }

        // succ_opt is None only at NaiveDate::MAX
        self.business_day = self.business_day.succ_opt().unwrap_or(self.business_day);
        tracing::info!(
            date = %summary.report_date,
            revenue = summary.total_revenue,
            next_day = %self.business_day,
            "eod saved, business day advanced"
        );
        Ok(EodSaveOutcome::Saved(summary))
    }

    /// Archive every live summary, then delete all sale ledger rows and
    /// live summaries. Receipts and menu are unaffected; sales are gone
    /// for good.
    pub async fn clear_historical_data(&self) -> RepoResult<()> {
        eod::clear_sales_and_summaries(self.db.pool()).await?;
        tracing::info!("historical sales and EOD summaries cleared (summaries archived)");
        Ok(())
    }

    /// Bulk-restore archived summaries into the live table, skipping dates
    /// already present. Returns the live row count afterwards.
    pub async fn restore_archived_summaries(&self) -> RepoResult<i64> {
        let count = eod::restore_archived(self.db.pool()).await?;
        tracing::info!(count, "archived EOD summaries restored");
        Ok(count)
    }

    pub async fn delete_receipt(&self, receipt_id: &str) -> RepoResult<bool> {
        receipt::delete_by_receipt_id(self.db.pool(), receipt_id).await
    }

    // ========== Read accessors for the UI ==========

    pub async fn menu_items(&self) -> RepoResult<Vec<MenuItem>> {
        menu::find_all(self.db.pool()).await
    }

    pub async fn menu_categories(&self) -> RepoResult<Vec<String>> {
        menu::categories(self.db.pool()).await
    }

    pub async fn sales_since(&self, days_back: i64) -> RepoResult<Vec<SaleRecord>> {
        sale::find_since(self.db.pool(), days_back).await
    }

    pub async fn historical_eod(&self) -> RepoResult<Vec<EodSummary>> {
        eod::find_all(self.db.pool()).await
    }

    pub async fn archived_eod(&self) -> RepoResult<Vec<EodSummary>> {
        eod::find_archived(self.db.pool()).await
    }

    pub async fn receipts(&self, limit: Option<i64>) -> RepoResult<Vec<Receipt>> {
        receipt::find_recent(self.db.pool(), limit).await
    }

    pub async fn usernames(&self) -> RepoResult<Vec<String>> {
        user::usernames(self.db.pool()).await
    }

    // ========== Menu administration (UI gates these behind Manager) ==========

    pub async fn create_item(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        menu::create(self.db.pool(), data).await
    }

    pub async fn update_item(&self, item_id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        menu::update(self.db.pool(), item_id, data).await
    }

    pub async fn delete_item(&self, item_id: i64) -> RepoResult<bool> {
        menu::delete(self.db.pool(), item_id).await
    }

    /// "YYYY-MM-DD HH:MM:SS": the simulated business date plus the real
    /// wall-clock time of day.
    fn sale_timestamp(&self) -> String {
        format!(
            "{} {}",
            self.business_day.format("%Y-%m-%d"),
            chrono::Local::now().format("%H:%M:%S")
        )
    }
}
