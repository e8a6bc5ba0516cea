//! Session / Access Gate
//!
//! Holds the active role for the single till session and performs the
//! credential checks. There is no lockout, hashing or rate limiting —
//! plain-text comparison is the designed behavior of this system.

use crate::db::repository::{RepoResult, user};
use shared::Role;
use shared::models::PasswordChangeOutcome;
use sqlx::SqlitePool;

/// The single till session. Constructed once at startup; the role is set
/// by a successful login and cleared by logout or a failed login.
#[derive(Debug, Default)]
pub struct Session {
    active_role: Option<Role>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.active_role
    }

    pub fn is_manager(&self) -> bool {
        self.active_role == Some(Role::Manager)
    }

    /// Authenticate against the users table. The username is normalized
    /// (trimmed, lowercase) and the password trimmed before a literal
    /// comparison. Any mismatch or unknown user clears the active role.
    pub async fn login(
        &mut self,
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> RepoResult<bool> {
        let username = shared::util::normalize_username(username);
        let password = password.trim();

        match user::find_by_username(pool, &username).await? {
            Some(user) if user.password == password => {
                self.active_role = Some(user.role);
                tracing::info!(%username, role = %user.role, "login accepted");
                Ok(true)
            }
            _ => {
                self.active_role = None;
                tracing::warn!(%username, "login rejected");
                Ok(false)
            }
        }
    }

    pub fn logout(&mut self) {
        self.active_role = None;
    }
}

/// Change a user's password. The checks run strictly in this order —
/// unknown user, wrong old password, new equal to old — and nothing is
/// written unless all three pass.
pub async fn change_password(
    pool: &SqlitePool,
    username: &str,
    old_password: &str,
    new_password: &str,
) -> RepoResult<PasswordChangeOutcome> {
    let username = shared::util::normalize_username(username);

    let Some(user) = user::find_by_username(pool, &username).await? else {
        return Ok(PasswordChangeOutcome::UserNotFound);
    };

    if user.password != old_password {
        return Ok(PasswordChangeOutcome::IncorrectOldPassword);
    }

    if old_password == new_password {
        return Ok(PasswordChangeOutcome::NoOpPassword);
    }

    user::update_password(pool, &username, new_password).await?;
    tracing::info!(%username, "password changed");
    Ok(PasswordChangeOutcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    #[tokio::test]
    async fn test_login_normalizes_and_sets_role() {
        let pool = test_pool().await;
        let mut session = Session::new();

        assert!(session.login(&pool, "  MANAGER ", " admin123 ").await.unwrap());
        assert_eq!(session.role(), Some(Role::Manager));
        assert!(session.is_manager());
    }

    #[tokio::test]
    async fn test_failed_login_clears_role() {
        let pool = test_pool().await;
        let mut session = Session::new();

        session.login(&pool, "cashier", "password").await.unwrap();
        assert_eq!(session.role(), Some(Role::Cashier));

        assert!(!session.login(&pool, "cashier", "wrong").await.unwrap());
        assert_eq!(session.role(), None);

        assert!(!session.login(&pool, "nobody", "password").await.unwrap());
        assert_eq!(session.role(), None);
    }

    #[tokio::test]
    async fn test_logout() {
        let pool = test_pool().await;
        let mut session = Session::new();
        session.login(&pool, "manager", "admin123").await.unwrap();
        session.logout();
        assert_eq!(session.role(), None);
    }

    #[tokio::test]
    async fn test_change_password_check_order() {
        let pool = test_pool().await;

        // Unknown user wins even when old == new
        assert_eq!(
            change_password(&pool, "ghost", "same", "same").await.unwrap(),
            PasswordChangeOutcome::UserNotFound
        );

        // Wrong old password wins even when new == old
        assert_eq!(
            change_password(&pool, "manager", "wrong", "wrong").await.unwrap(),
            PasswordChangeOutcome::IncorrectOldPassword
        );

        // old == new is a refused no-op that leaves storage untouched
        assert_eq!(
            change_password(&pool, "manager", "admin123", "admin123")
                .await
                .unwrap(),
            PasswordChangeOutcome::NoOpPassword
        );
        let user = user::find_by_username(&pool, "manager").await.unwrap().unwrap();
        assert_eq!(user.password, "admin123");
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let pool = test_pool().await;
        assert_eq!(
            change_password(&pool, "Manager", "admin123", "espresso")
                .await
                .unwrap(),
            PasswordChangeOutcome::Success
        );

        let mut session = Session::new();
        assert!(!session.login(&pool, "manager", "admin123").await.unwrap());
        assert!(session.login(&pool, "manager", "espresso").await.unwrap());
    }
}
