//! Inventory transaction engine.
//!
//! The single owner of all stock mutation: reserving a batch decrements each
//! listed product by one, releasing increments. A batch runs inside one
//! transaction, and every product row is read with a row-level write lock
//! (`SELECT ... FOR UPDATE`) before it is touched, so concurrent adjustments
//! to the same code serialize through the lock and a failed batch rolls back
//! as a unit. Codes are processed in sorted order; without a canonical lock
//! order, two batches locking the same codes in opposite order can deadlock.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::entities::product::{self, Entity as ProductEntity};
use crate::errors::ServiceError;

/// Remaining stock for a single product, as returned by the read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemainingProduct {
    pub code: String,
    pub quantity: i32,
}

impl From<product::Model> for RemainingProduct {
    fn from(model: product::Model) -> Self {
        Self {
            code: model.code,
            quantity: model.quantity,
        }
    }
}

/// Service for transactional batch stock adjustments.
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DatabaseConnection>,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self { db_pool }
    }

    /// Reserves one unit of every product named in `codes`.
    ///
    /// All-or-nothing: an unknown code fails the batch with `NotFound`, a
    /// code with no stock left fails it with `OutOfStock`, and in both cases
    /// every decrement made earlier in the batch is rolled back. A code
    /// listed twice is decremented twice.
    #[instrument(skip(self))]
    pub async fn reserve_products(&self, codes: &[String]) -> Result<(), ServiceError> {
        let codes = lock_order(codes)?;

        let txn = self
            .db_pool
            .begin()
            .await
            .map_err(ServiceError::DatabaseError)?;

        match reserve_in_txn(&txn, &codes).await {
            Ok(()) => {
                txn.commit().await.map_err(ServiceError::DatabaseError)?;
                info!(batch_size = codes.len(), "Reserved product batch");
                Ok(())
            }
            Err(err) => {
                rollback(txn).await;
                Err(err)
            }
        }
    }

    /// Releases one unit of every product named in `codes`.
    ///
    /// The increment is unconditional: no check is made that a matching
    /// reservation ever happened. Uses the same locked-read-then-update
    /// pattern as `reserve_products` so a release on a code serializes
    /// against concurrent reservations of that code.
    #[instrument(skip(self))]
    pub async fn release_products(&self, codes: &[String]) -> Result<(), ServiceError> {
        let codes = lock_order(codes)?;

        let txn = self
            .db_pool
            .begin()
            .await
            .map_err(ServiceError::DatabaseError)?;

        match release_in_txn(&txn, &codes).await {
            Ok(()) => {
                txn.commit().await.map_err(ServiceError::DatabaseError)?;
                info!(batch_size = codes.len(), "Released product batch");
                Ok(())
            }
            Err(err) => {
                rollback(txn).await;
                Err(err)
            }
        }
    }

    /// Returns `{code, quantity}` for every product of the warehouse.
    ///
    /// Non-locking snapshot read; may observe stale quantities while a
    /// reservation is in flight. An unknown or empty warehouse yields an
    /// empty list, not an error.
    #[instrument(skip(self))]
    pub async fn remaining_products(
        &self,
        warehouse_id: i32,
    ) -> Result<Vec<RemainingProduct>, ServiceError> {
        let products = ProductEntity::find()
            .filter(product::Column::WarehouseId.eq(warehouse_id))
            .all(&*self.db_pool)
            .await
            .map_err(ServiceError::DatabaseError)?;

        Ok(products.into_iter().map(RemainingProduct::from).collect())
    }
}

async fn reserve_in_txn(txn: &DatabaseTransaction, codes: &[String]) -> Result<(), ServiceError> {
    for code in codes {
        let found = lock_product_by_code(txn, code).await?;

        if found.quantity < 1 {
            return Err(ServiceError::OutOfStock(format!(
                "product {} is out of stock",
                code
            )));
        }

        let quantity = found.quantity;
        let mut active: product::ActiveModel = found.into();
        active.quantity = Set(quantity - 1);
        active.update(txn).await.map_err(ServiceError::DatabaseError)?;
    }

    Ok(())
}

async fn release_in_txn(txn: &DatabaseTransaction, codes: &[String]) -> Result<(), ServiceError> {
    for code in codes {
        let found = lock_product_by_code(txn, code).await?;

        let quantity = found.quantity;
        let mut active: product::ActiveModel = found.into();
        active.quantity = Set(quantity + 1);
        active.update(txn).await.map_err(ServiceError::DatabaseError)?;
    }

    Ok(())
}

/// Looks a product up by code, acquiring a row-level write lock that is held
/// until the surrounding transaction ends.
async fn lock_product_by_code(
    txn: &DatabaseTransaction,
    code: &str,
) -> Result<product::Model, ServiceError> {
    ProductEntity::find()
        .filter(product::Column::Code.eq(code))
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(ServiceError::DatabaseError)?
        .ok_or_else(|| ServiceError::NotFound(format!("product {} not found", code)))
}

async fn rollback(txn: DatabaseTransaction) {
    if let Err(err) = txn.rollback().await {
        error!("Failed to roll back inventory transaction: {}", err);
    }
}

/// Validates the batch and puts it into canonical lock order.
fn lock_order(codes: &[String]) -> Result<Vec<String>, ServiceError> {
    if codes.is_empty() {
        return Err(ServiceError::ValidationError(
            "empty product codes".to_string(),
        ));
    }

    let mut ordered = codes.to_vec();
    ordered.sort();
    Ok(ordered)
}
