//! Data Models
//!
//! Plain structures crossing the engine/UI boundary.

pub mod eod;
pub mod menu_item;
pub mod order;
pub mod receipt;
pub mod sale;
pub mod user;

pub use eod::{EodSummary, LowStockItem, TopItem};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{CommittedSale, OrderLine};
pub use receipt::Receipt;
pub use sale::SaleRecord;
pub use user::{PasswordChangeOutcome, User, UserCreate};
