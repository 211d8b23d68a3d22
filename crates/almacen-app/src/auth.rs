//! # Authentication
//!
//! User registration and login against the `users` table. Passwords are
//! hashed with Argon2id; a successful login yields an [`AuthContext`]
//! that callers pass explicitly into gated operations.
//!
//! Both failure modes of `login` (unknown email, wrong password) collapse
//! into the same [`AppError::InvalidCredentials`] so the response does not
//! reveal which emails are registered.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use almacen_core::types::{NewUser, User};
use almacen_core::validation::{validate_client_name, validate_email, validate_password};
use almacen_db::Database;

use crate::error::{AppError, AppResult};

// =============================================================================
// Auth Context
// =============================================================================

/// Identity of a logged-in user, scoped to the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

impl AuthContext {
    fn for_user(user: &User) -> Self {
        AuthContext {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

// =============================================================================
// Auth Service
// =============================================================================

/// Registration and login operations.
pub struct AuthService {
    db: Database,
}

impl AuthService {
    pub fn new(db: Database) -> Self {
        AuthService { db }
    }

    /// Registers a new user.
    ///
    /// Validates the name, email and password, hashes the password and
    /// inserts the row. A duplicate email surfaces as
    /// [`AppError::DuplicateEmail`].
    ///
    /// ## Arguments
    /// * `name` - Display name
    /// * `email` - Login email, unique across users
    /// * `password` - Plaintext password, 8 to 128 characters
    ///
    /// ## Returns
    /// The stored [`User`] row (hash included; it is skipped on
    /// serialization).
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        validate_client_name(name).map_err(almacen_core::CoreError::from)?;
        validate_email(email).map_err(almacen_core::CoreError::from)?;
        validate_password(password).map_err(almacen_core::CoreError::from)?;

        let password_hash = hash_password(password)?;

        let user = self
            .db
            .users()
            .insert(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "User registered");
        Ok(user)
    }

    /// Verifies credentials and returns the identity on success.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthContext> {
        let user = match self.db.users().get_by_email(email).await? {
            Some(user) => user,
            None => {
                debug!(email = %email, "Login rejected: unknown email");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !verify_password(password, &user.password_hash) {
            debug!(user_id = user.id, "Login rejected: bad password");
            return Err(AppError::InvalidCredentials);
        }

        info!(user_id = user.id, "User logged in");
        Ok(AuthContext::for_user(&user))
    }
}

// =============================================================================
// Password Hashing
// =============================================================================

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        // An unparseable stored hash can only mean row corruption; treat
        // it as a failed login rather than a 500.
        Err(_) => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
