//! User / Credential Model

use crate::types::Role;
use serde::{Deserialize, Serialize};

/// Till user credential.
///
/// The username is stored already normalized (trimmed, lowercase); the
/// password is stored in plain text by design of this system — hardening
/// is an explicit non-goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub created_at: i64,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Outcome of a password change attempt.
///
/// The checks run strictly in this order: unknown user, wrong old
/// password, new password equal to old. Callers match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordChangeOutcome {
    Success,
    UserNotFound,
    IncorrectOldPassword,
    /// New password must differ from the old one
    NoOpPassword,
}
