use crate::errors::ServiceError;
use crate::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::Deserialize;

/// A batch of product codes submitted to reserve or release as one unit.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub product_codes: Vec<String>,
}

/// Create the inventory router
pub fn inventory_router() -> Router<AppState> {
    Router::new()
        .route("/reserve", post(reserve_products))
        .route("/release", post(release_products))
}

/// Reserve one unit of every product code in the batch
async fn reserve_products(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .inventory_service
        .reserve_products(&req.product_codes)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Release one unit of every product code in the batch
async fn release_products(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .inventory_service
        .release_products(&req.product_codes)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
