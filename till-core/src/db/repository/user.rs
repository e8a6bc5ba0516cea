//! User Repository
//!
//! Usernames are stored pre-normalized (trimmed, lowercase); callers
//! normalize before lookup. Passwords are plain text by design.

use super::{RepoError, RepoResult};
use shared::models::{User, UserCreate};
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, username, password, role, created_at FROM users";

/// Point lookup by normalized username.
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE username = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    let username = shared::util::normalize_username(&data.username);
    if username.is_empty() {
        return Err(RepoError::Validation("Username cannot be empty".into()));
    }

    let now = shared::util::now_millis();
    sqlx::query("INSERT INTO users (username, password, role, created_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(&username)
        .bind(&data.password)
        .bind(data.role)
        .bind(now)
        .execute(pool)
        .await?;

    find_by_username(pool, &username)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn update_password(
    pool: &SqlitePool,
    username: &str,
    new_password: &str,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE users SET password = ?1 WHERE username = ?2")
        .bind(new_password)
        .bind(username)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {username} not found")));
    }
    Ok(())
}

/// All usernames, sorted (the UI's password-change combo).
pub async fn usernames(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let rows = sqlx::query_scalar::<_, String>("SELECT username FROM users ORDER BY username ASC")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;
    use shared::Role;

    #[tokio::test]
    async fn test_seeded_users() {
        let pool = test_pool().await;
        let manager = find_by_username(&pool, "manager").await.unwrap().unwrap();
        assert_eq!(manager.role, Role::Manager);
        assert_eq!(manager.password, "admin123");

        let cashier = find_by_username(&pool, "cashier").await.unwrap().unwrap();
        assert_eq!(cashier.role, Role::Cashier);
    }

    #[tokio::test]
    async fn test_create_normalizes_username() {
        let pool = test_pool().await;
        let user = create(
            &pool,
            UserCreate {
                username: "  Barista ".into(),
                password: "espresso".into(),
                role: Role::Cashier,
            },
        )
        .await
        .unwrap();
        assert_eq!(user.username, "barista");
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let pool = test_pool().await;
        let err = create(
            &pool,
            UserCreate {
                username: "MANAGER".into(),
                password: "other".into(),
                role: Role::Manager,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_update_password() {
        let pool = test_pool().await;
        update_password(&pool, "cashier", "newpass").await.unwrap();
        let user = find_by_username(&pool, "cashier").await.unwrap().unwrap();
        assert_eq!(user.password, "newpass");

        let err = update_password(&pool, "ghost", "x").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_usernames_sorted() {
        let pool = test_pool().await;
        assert_eq!(usernames(&pool).await.unwrap(), vec!["cashier", "manager"]);
    }
}
