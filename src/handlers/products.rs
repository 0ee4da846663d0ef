use crate::errors::ServiceError;
use crate::services::products::NewProduct;
use crate::AppState;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post},
    Router,
};
use serde_json::json;

/// Create the products router
pub fn products_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/:id", delete(delete_product))
}

/// Create a new product in a warehouse
async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<NewProduct>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = state.product_service.create_product(req).await?;
    Ok((StatusCode::CREATED, axum::Json(json!({ "id": id }))))
}

/// Delete a product by id
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
