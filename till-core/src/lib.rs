//! till-core — single-till point-of-sale engine
//!
//! The transactional core behind a desktop POS: menu persistence, the
//! in-memory order accumulator, atomic sale commits with receipt
//! issuance, end-of-day summaries with exactly-once save semantics, and
//! the two-role session gate. The UI layer is an external collaborator
//! that calls [`Till`] operations and renders the plain structures they
//! return.

pub mod config;
pub mod db;
pub mod logger;
pub mod order;
pub mod session;
pub mod till;

pub use config::Config;
pub use db::DbService;
pub use db::repository::{RepoError, RepoResult};
pub use till::{CommitError, EodSaveOutcome, Till};
