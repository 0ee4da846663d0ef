//! Warehouse Inventory Service Library
//!
//! Tracks products and their stock counts per warehouse. All stock mutation
//! goes through the inventory transaction engine in `services::inventory`;
//! the HTTP layer here is a thin collaborator that binds requests and maps
//! errors to status codes.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod services;

use axum::{extract::State, response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

use services::inventory::InventoryService;
use services::products::ProductService;
use services::warehouses::WarehouseService;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub inventory_service: InventoryService,
    pub warehouse_service: WarehouseService,
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        Self {
            inventory_service: InventoryService::new(db.clone()),
            warehouse_service: WarehouseService::new(db.clone()),
            product_service: ProductService::new(db.clone()),
            db,
            config,
        }
    }
}

/// Assemble the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest(
            "/api/v1/warehouses",
            handlers::warehouses::warehouses_router(),
        )
        .nest("/api/v1/products", handlers::products::products_router())
        .nest("/api/v1/inventory", handlers::inventory::inventory_router())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    Json(json!({
        "status": db_status,
        "service": "warehouse-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
