//! # User Repository
//!
//! Database operations for user accounts.
//!
//! Users are created on registration and read on login; accounts are
//! never updated or deleted. Only argon2 hashes reach this layer - raw
//! passwords stay in almacen-app.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use almacen_core::{NewUser, User};

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at";

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new user.
    ///
    /// ## Returns
    /// * `Ok(User)` - Stored row with its generated id
    /// * `Err(DbError::UniqueViolation)` - Email already registered
    pub async fn insert(&self, new: &NewUser) -> DbResult<User> {
        debug!(email = %new.email, "Inserting user");

        let now = Utc::now();

        let result = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password_hash, created_at) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        // Re-attach the offending value: SQLite's constraint message only
        // carries the column name.
        match result {
            Err(sqlx::Error::Database(db_err))
                if db_err.message().contains("UNIQUE constraint failed") =>
            {
                Err(DbError::duplicate("email", &new.email))
            }
            other => Ok(other?),
        }
    }

    /// Gets a user by email (the login lookup).
    ///
    /// ## Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No account with that email
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Counts users (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn paula() -> NewUser {
        NewUser {
            name: "Paula".to_string(),
            email: "paula@example.com".to_string(),
            password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.users();

        let inserted = repo.insert(&paula()).await.unwrap();
        assert_eq!(inserted.id, 1);

        let fetched = repo
            .get_by_email("paula@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "Paula");
        assert_eq!(fetched.password_hash, "$argon2id$fake-hash-for-tests");

        assert!(repo.get_by_email("nadie@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.users();

        repo.insert(&paula()).await.unwrap();
        let err = repo.insert(&paula()).await.unwrap_err();

        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "email");
                assert_eq!(value, "paula@example.com");
            }
            other => panic!("expected UniqueViolation, got {other:?}"),
        }
    }
}
