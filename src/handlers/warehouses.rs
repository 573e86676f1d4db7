use super::common::{created_response, no_content_response, success_response};
use crate::{
    entities::warehouse,
    errors::{ErrorResponse, ServiceError},
    services::{inventories::InventorySummary, warehouses::CreateWarehouseInput},
    AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};

#[utoipa::path(
    get,
    path = "/api/warehouses",
    responses(
        (status = 200, description = "Warehouses returned", body = [warehouse::Model],
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn list_warehouses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouses = state.warehouse_service().list_warehouses().await?;
    Ok(success_response(warehouses))
}

#[utoipa::path(
    post,
    path = "/api/warehouses",
    request_body = CreateWarehouseInput,
    responses(
        (status = 201, description = "Warehouse created", body = warehouse::Model,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    payload: Result<Json<CreateWarehouseInput>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(input) = payload?;
    let created = state.warehouse_service().create_warehouse(input).await?;
    Ok(created_response(created))
}

#[utoipa::path(
    get,
    path = "/api/warehouses/{id}",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse returned", body = warehouse::Model),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn get_warehouse(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id?;
    let warehouse = state.warehouse_service().get_warehouse(id).await?;
    Ok(success_response(warehouse))
}

#[utoipa::path(
    delete,
    path = "/api/warehouses/{id}",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 204, description = "Warehouse and its inventory deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn delete_warehouse(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id?;
    state.warehouse_service().delete_warehouse(id).await?;
    Ok(no_content_response())
}

#[utoipa::path(
    get,
    path = "/api/warehouses/{id}/inventories",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Inventory held by the warehouse", body = [InventorySummary]),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn list_warehouse_inventories(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id?;
    let items = state.inventory_service().list_for_warehouse(id).await?;
    Ok(success_response(items))
}

pub fn warehouse_routes() -> Router<AppState> {
    Router::new()
        .route("/warehouses", get(list_warehouses).post(create_warehouse))
        .route("/warehouses/:id", get(get_warehouse).delete(delete_warehouse))
        .route("/warehouses/:id/inventories", get(list_warehouse_inventories))
}
