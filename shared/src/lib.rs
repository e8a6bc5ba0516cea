//! Shared types for the till-core POS engine
//!
//! Plain data models exchanged between the engine and its UI caller,
//! domain enums, and small utilities. Database derives are gated behind
//! the `db` feature so UI-side consumers stay free of sqlx.

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::Role;
