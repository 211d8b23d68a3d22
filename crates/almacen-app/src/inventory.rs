//! # Inventory Operations
//!
//! Product registration, stock movements and the low-stock alert listing.
//!
//! Movements run in two steps: the pure ledger math validates the movement
//! against a fresh read of the product (producing the friendly error when
//! stock is short), then the delta is persisted with the guarded atomic
//! UPDATE in `almacen-db`. The guard re-checks under the write lock, so
//! two concurrent outbounds can never drive a quantity negative even
//! though the pre-check read is racy.

use tracing::{debug, info};

use almacen_core::ledger::{self, MovementKind};
use almacen_core::types::{NewProduct, Product};
use almacen_core::validation::{
    validate_initial_quantity, validate_price_cents, validate_product_name, validate_quantity,
    validate_threshold,
};
use almacen_core::{CoreError, DEFAULT_LOW_STOCK_THRESHOLD};
use almacen_db::{Database, DbError};

use crate::auth::AuthContext;
use crate::error::{AppError, AppResult};

/// Product and stock operations. Every method takes the caller's
/// [`AuthContext`]; the identity is logged with each mutation.
pub struct InventoryService {
    db: Database,
}

impl InventoryService {
    pub fn new(db: Database) -> Self {
        InventoryService { db }
    }

    /// Registers a new product.
    ///
    /// ## Arguments
    /// * `name` - Product name, 1 to 200 characters
    /// * `quantity` - Initial stock; zero is allowed
    /// * `price_cents` - Unit price in cents, non-negative
    /// * `image_path` - Optional stored image reference
    pub async fn register_product(
        &self,
        ctx: &AuthContext,
        name: &str,
        quantity: i64,
        price_cents: i64,
        image_path: Option<String>,
    ) -> AppResult<Product> {
        validate_product_name(name).map_err(CoreError::from)?;
        validate_initial_quantity(quantity).map_err(CoreError::from)?;
        validate_price_cents(price_cents).map_err(CoreError::from)?;

        let product = self
            .db
            .products()
            .insert(&NewProduct {
                name: name.trim().to_string(),
                quantity,
                price_cents,
                image_path,
            })
            .await?;

        info!(
            user_id = ctx.user_id,
            product_id = product.id,
            name = %product.name,
            "Product registered"
        );
        Ok(product)
    }

    /// Lists every product, ordered by id.
    pub async fn list_products(&self, _ctx: &AuthContext) -> AppResult<Vec<Product>> {
        Ok(self.db.products().list().await?)
    }

    /// Records an inbound stock movement and returns the new quantity.
    pub async fn record_inbound(
        &self,
        ctx: &AuthContext,
        product_id: i64,
        quantity: i64,
    ) -> AppResult<i64> {
        self.record_movement(ctx, product_id, MovementKind::Inbound, quantity)
            .await
    }

    /// Records an outbound stock movement and returns the new quantity.
    ///
    /// An outbound larger than the available stock is rejected with
    /// [`CoreError::InsufficientStock`]; the stored quantity is untouched.
    pub async fn record_outbound(
        &self,
        ctx: &AuthContext,
        product_id: i64,
        quantity: i64,
    ) -> AppResult<i64> {
        self.record_movement(ctx, product_id, MovementKind::Outbound, quantity)
            .await
    }

    async fn record_movement(
        &self,
        ctx: &AuthContext,
        product_id: i64,
        kind: MovementKind,
        quantity: i64,
    ) -> AppResult<i64> {
        validate_quantity(quantity).map_err(CoreError::from)?;

        let product = self
            .db
            .products()
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::ProductNotFound(product_id))?;

        // Pre-check against the snapshot for the friendly error message.
        ledger::apply_movement(&product, kind, quantity)?;

        let new_quantity = match self
            .db
            .products()
            .adjust_quantity(product_id, kind.signed(quantity))
            .await
        {
            Ok(q) => q,
            // The guard lost a race: stock moved between our read and the
            // UPDATE. Report it with the authoritative state.
            Err(DbError::CheckViolation { .. }) => {
                let current = self
                    .db
                    .products()
                    .get_by_id(product_id)
                    .await?
                    .ok_or(CoreError::ProductNotFound(product_id))?;
                return Err(AppError::Core(CoreError::InsufficientStock {
                    name: current.name,
                    available: current.quantity,
                    requested: quantity,
                }));
            }
            Err(other) => return Err(other.into()),
        };

        info!(
            user_id = ctx.user_id,
            product_id,
            kind = ?kind,
            quantity,
            new_quantity,
            "Stock movement recorded"
        );
        Ok(new_quantity)
    }

    /// Returns the products at or below the threshold, ordered by id.
    ///
    /// `threshold = None` uses the default of 5.
    pub async fn low_stock_alerts(
        &self,
        _ctx: &AuthContext,
        threshold: Option<i64>,
    ) -> AppResult<Vec<Product>> {
        let threshold = threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);
        validate_threshold(threshold).map_err(CoreError::from)?;

        let low = self.db.products().list_low_stock(threshold).await?;
        debug!(threshold, alerts = low.len(), "Low-stock listing computed");
        Ok(low)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
