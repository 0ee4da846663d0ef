use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::entities::product::{self, Entity as ProductEntity};
use crate::errors::ServiceError;

/// Input for creating a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub size: String,
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: String,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,
    pub warehouse_id: i32,
}

/// Service for product creation and deletion.
#[derive(Clone)]
pub struct ProductService {
    db_pool: Arc<DatabaseConnection>,
}

impl ProductService {
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self { db_pool }
    }

    /// Inserts a product and returns its generated id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, input: NewProduct) -> Result<i32, ServiceError> {
        input.validate()?;

        let created = product::ActiveModel {
            name: Set(input.name),
            size: Set(input.size),
            code: Set(input.code),
            quantity: Set(input.quantity),
            warehouse_id: Set(input.warehouse_id),
            ..Default::default()
        }
        .insert(&*self.db_pool)
        .await
        .map_err(ServiceError::DatabaseError)?;

        info!(product_id = created.id, code = %created.code, "Created product");
        Ok(created.id)
    }

    /// Deletes a product by id, regardless of its stock state.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&*self.db_pool)
            .await
            .map_err(ServiceError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("product {} not found", id)));
        }

        info!(product_id = id, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_fails_validation() {
        let input = NewProduct {
            name: "T-shirt".to_string(),
            size: "M".to_string(),
            code: "SKU1".to_string(),
            quantity: -1,
            warehouse_id: 1,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_code_fails_validation() {
        let input = NewProduct {
            name: "T-shirt".to_string(),
            size: "M".to_string(),
            code: String::new(),
            quantity: 3,
            warehouse_id: 1,
        };
        assert!(input.validate().is_err());
    }
}
