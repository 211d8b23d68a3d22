//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Stock Adjustment Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ❌ WRONG: read-modify-write (loses updates between requests)   │
//! │     SELECT quantity ... ; UPDATE ... SET quantity = 7           │
//! │                                                                 │
//! │  ✅ CORRECT: atomic guarded delta                               │
//! │     UPDATE products                                             │
//! │     SET quantity = quantity + ?delta                            │
//! │     WHERE id = ? AND quantity + ?delta >= 0                     │
//! │                                                                 │
//! │  Two simultaneous outbound movements on the same product both   │
//! │  land, or the second one fails the guard - never a lost update  │
//! │  and never a negative quantity.                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use almacen_core::{NewProduct, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// let all = repo.list().await?;
/// let low = repo.list_low_stock(5).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

const PRODUCT_COLUMNS: &str = "id, name, quantity, price_cents, image_path, created_at, updated_at";

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products in natural row order (ascending id).
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Lists products at or below the low-stock threshold, ascending id.
    pub async fn list_low_stock(&self, threshold: i64) -> DbResult<Vec<Product>> {
        debug!(threshold, "Listing low-stock products");

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE quantity <= ?1 ORDER BY id"
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns the stored row with its
    /// generated id and timestamps.
    pub async fn insert(&self, new: &NewProduct) -> DbResult<Product> {
        debug!(name = %new.name, "Inserting product");

        let now = Utc::now();

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, quantity, price_cents, image_path, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(new.quantity)
        .bind(new.price_cents)
        .bind(&new.image_path)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Atomically adjusts a product's quantity by a signed delta.
    ///
    /// The UPDATE carries a `quantity + delta >= 0` guard, so the
    /// non-negative invariant holds under concurrent movements without any
    /// read-modify-write window.
    ///
    /// ## Arguments
    /// * `id` - Product ID
    /// * `delta` - Change in stock (positive for inbound, negative for outbound)
    ///
    /// ## Returns
    /// * `Ok(new_quantity)` - Quantity after the adjustment
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    /// * `Err(DbError::CheckViolation)` - Adjustment would go negative
    pub async fn adjust_quantity(&self, id: i64, delta: i64) -> DbResult<i64> {
        debug!(id, delta, "Adjusting stock");

        let now = Utc::now();

        let new_quantity: Option<i64> = sqlx::query_scalar(
            "UPDATE products \
             SET quantity = quantity + ?2, updated_at = ?3 \
             WHERE id = ?1 AND quantity + ?2 >= 0 \
             RETURNING quantity",
        )
        .bind(id)
        .bind(delta)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        match new_quantity {
            Some(q) => Ok(q),
            // Zero rows matched: either the id is absent or the guard
            // failed. A second read disambiguates for the error message.
            None => match self.get_by_id(id).await? {
                None => Err(DbError::not_found("Product", id)),
                Some(p) => Err(DbError::CheckViolation {
                    message: format!(
                        "quantity would go negative: product {} has {}, delta {}",
                        id, p.quantity, delta
                    ),
                }),
            },
        }
    }

    /// Counts products (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
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

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn widget(quantity: i64) -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            quantity,
            price_cents: 250,
            image_path: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let db = db().await;
        let repo = db.products();

        let first = repo.insert(&widget(10)).await.unwrap();
        let second = repo.insert(&widget(3)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.quantity, 10);
        assert_eq!(first.price_cents, 250);
    }

    #[tokio::test]
    async fn test_list_is_id_ordered() {
        let db = db().await;
        let repo = db.products();

        for q in [7, 2, 9] {
            repo.insert(&widget(q)).await.unwrap();
        }

        let all = repo.list().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = db().await;
        let repo = db.products();

        let inserted = repo.insert(&widget(10)).await.unwrap();
        let fetched = repo.get_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Widget");

        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_adjust_quantity_inbound_and_outbound() {
        let db = db().await;
        let repo = db.products();
        let product = repo.insert(&widget(10)).await.unwrap();

        assert_eq!(repo.adjust_quantity(product.id, 5).await.unwrap(), 15);
        assert_eq!(repo.adjust_quantity(product.id, -15).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_adjust_quantity_never_goes_negative() {
        let db = db().await;
        let repo = db.products();
        let product = repo.insert(&widget(10)).await.unwrap();

        let err = repo.adjust_quantity(product.id, -20).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { .. }));

        // Stored quantity is untouched after the failed guard
        let fetched = repo.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(fetched.quantity, 10);
    }

    #[tokio::test]
    async fn test_adjust_quantity_missing_product() {
        let db = db().await;
        let err = db.products().adjust_quantity(42, 1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_low_stock() {
        let db = db().await;
        let repo = db.products();

        for (name, q) in [("A", 3), ("B", 10), ("C", 5)] {
            repo.insert(&NewProduct {
                name: name.to_string(),
                quantity: q,
                price_cents: 100,
                image_path: None,
            })
            .await
            .unwrap();
        }

        let low = repo.list_low_stock(5).await.unwrap();
        let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
