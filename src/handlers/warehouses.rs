use crate::errors::ServiceError;
use crate::AppState;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateWarehouseRequest {
    pub name: String,
    pub is_available: bool,
}

/// Create the warehouses router
pub fn warehouses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_warehouse))
        .route("/:id/remaining", get(remaining_products))
}

/// Create a new warehouse
async fn create_warehouse(
    State(state): State<AppState>,
    Json(req): Json<CreateWarehouseRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = state
        .warehouse_service
        .create_warehouse(req.name, req.is_available)
        .await?;
    Ok((StatusCode::CREATED, axum::Json(json!({ "id": id }))))
}

/// Remaining stock per product code for a warehouse
async fn remaining_products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let products = state.inventory_service.remaining_products(id).await?;
    Ok((StatusCode::OK, axum::Json(products)))
}
