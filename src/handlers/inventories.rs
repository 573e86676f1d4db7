use super::common::{created_response, no_content_response, success_response};
use crate::{
    entities::inventory,
    errors::{ErrorResponse, ServiceError},
    services::inventories::{CreateInventoryInput, InventoryDetail, UpdateInventoryInput},
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
    path = "/api/inventories",
    responses(
        (status = 200, description = "Every inventory item with its warehouse name", body = [InventoryDetail],
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn list_inventories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let items = state.inventory_service().list_inventories().await?;
    Ok(success_response(items))
}

#[utoipa::path(
    post,
    path = "/api/inventories",
    request_body = CreateInventoryInput,
    responses(
        (status = 201, description = "Inventory item created", body = inventory::Model,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Invalid request or unknown warehouse", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    payload: Result<Json<CreateInventoryInput>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(input) = payload?;
    let created = state.inventory_service().create_inventory(input).await?;
    Ok(created_response(created))
}

#[utoipa::path(
    get,
    path = "/api/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item returned", body = InventoryDetail),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id?;
    let item = state.inventory_service().get_inventory(id).await?;
    Ok(success_response(item))
}

#[utoipa::path(
    put,
    path = "/api/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    request_body = UpdateInventoryInput,
    responses(
        (status = 200, description = "Inventory item updated", body = inventory::Model),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateInventoryInput>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let updated = state.inventory_service().update_inventory(id, input).await?;
    Ok(success_response(updated))
}

#[utoipa::path(
    delete,
    path = "/api/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 204, description = "Inventory item deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn delete_inventory(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id?;
    state.inventory_service().delete_inventory(id).await?;
    Ok(no_content_response())
}

pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/inventories", get(list_inventories).post(create_inventory))
        .route(
            "/inventories/:id",
            get(get_inventory)
                .put(update_inventory)
                .delete(delete_inventory),
        )
}
