use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::entities::warehouse;
use crate::errors::ServiceError;

/// Service for creating warehouses.
#[derive(Clone)]
pub struct WarehouseService {
    db_pool: Arc<DatabaseConnection>,
}

impl WarehouseService {
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self { db_pool }
    }

    /// Inserts a warehouse and returns its generated id.
    #[instrument(skip(self))]
    pub async fn create_warehouse(
        &self,
        name: String,
        is_available: bool,
    ) -> Result<i32, ServiceError> {
        let created = warehouse::ActiveModel {
            name: Set(name),
            is_available: Set(is_available),
            ..Default::default()
        }
        .insert(&*self.db_pool)
        .await
        .map_err(ServiceError::DatabaseError)?;

        info!(warehouse_id = created.id, "Created warehouse");
        Ok(created.id)
    }
}
