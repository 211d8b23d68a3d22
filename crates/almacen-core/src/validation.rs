//! # Validation Module
//!
//! Input validation for the inventory manager.
//!
//! The presentation layer is responsible for rejecting non-numeric input
//! before it reaches the core; these checks are the second layer, run again
//! before any business logic or database statement executes. The database
//! constraints (NOT NULL, UNIQUE) are the last line of defense.
//!
//! ## Usage
//! ```rust
//! use almacen_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("Cafe molido 500g").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_MOVEMENT_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a client name for an invoice.
///
/// Same rules as product names; an invoice with no client is rejected
/// before any document is generated.
pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "client".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "client".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a login email.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 254 characters
/// - Must contain exactly one `@` with non-empty local and domain parts
///
/// Not a full RFC 5321 check; the unique index on the users table catches
/// duplicates regardless.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || parts.next().is_some() || !domain.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates a raw password before hashing.
///
/// ## Rules
/// - Must be at least 8 characters
/// - Must be at most 128 characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.len() < 8 {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: 8,
        });
    }

    if password.len() > 128 {
        return Err(ValidationError::TooLong {
            field: "password".to_string(),
            max: 128,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock-movement or invoice quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_MOVEMENT_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_MOVEMENT_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_MOVEMENT_QUANTITY,
        });
    }

    Ok(())
}

/// Validates an initial stock level at product registration.
///
/// Zero is allowed: a product can be registered before any stock arrives.
pub fn validate_initial_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_MOVEMENT_QUANTITY,
        });
    }

    if qty > MAX_MOVEMENT_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_MOVEMENT_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a low-stock threshold.
///
/// ## Rules
/// - Must be non-negative; a threshold of 0 flags only empty stock
pub fn validate_threshold(threshold: i64) -> ValidationResult<()> {
    if threshold < 0 {
        return Err(ValidationError::OutOfRange {
            field: "threshold".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Cafe molido 500g").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_client_name() {
        assert!(validate_client_name("Alice").is_ok());
        assert!(validate_client_name("").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("paula@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("paula@").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("paula@localhost").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_MOVEMENT_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_initial_quantity_allows_zero() {
        assert!(validate_initial_quantity(0).is_ok());
        assert!(validate_initial_quantity(10).is_ok());
        assert!(validate_initial_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_threshold() {
        assert!(validate_threshold(0).is_ok());
        assert!(validate_threshold(5).is_ok());
        assert!(validate_threshold(-1).is_err());
    }
}
