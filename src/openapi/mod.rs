use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse API",
        version = "1.0.0",
        description = r#"
# Warehouse Inventory API

Manage warehouses and the inventory items stored in them.

## Error Handling

Every failure uses the same JSON body. `type` names the offending field when a
single field failed validation:

```json
{
  "error": "Bad Request",
  "message": "Please provide a correct phone number for the warehouse",
  "type": "phone",
  "request_id": "5f1c0d0e-8d1f-4a52-9b0e-2f8f3c2c8a11",
  "timestamp": "2024-01-01T00:00:00Z"
}
```

Deleting a warehouse also deletes every inventory item it holds.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "warehouses", description = "Warehouse management endpoints"),
        (name = "inventories", description = "Inventory management endpoints")
    ),
    paths(
        crate::handlers::warehouses::list_warehouses,
        crate::handlers::warehouses::create_warehouse,
        crate::handlers::warehouses::get_warehouse,
        crate::handlers::warehouses::delete_warehouse,
        crate::handlers::warehouses::list_warehouse_inventories,

        crate::handlers::inventories::list_inventories,
        crate::handlers::inventories::create_inventory,
        crate::handlers::inventories::get_inventory,
        crate::handlers::inventories::update_inventory,
        crate::handlers::inventories::delete_inventory,
    ),
    components(
        schemas(
            crate::entities::warehouse::Model,
            crate::entities::inventory::Model,
            crate::services::warehouses::CreateWarehouseInput,
            crate::services::inventories::CreateInventoryInput,
            crate::services::inventories::UpdateInventoryInput,
            crate::services::inventories::InventorySummary,
            crate::services::inventories::InventoryDetail,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
