use crate::{
    entities::{inventory, warehouse},
    errors::ServiceError,
    validation,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

/// Summary row returned when listing the inventory of one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct InventorySummary {
    pub id: i32,
    pub item_name: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

/// Inventory row joined with the name of the warehouse holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct InventoryDetail {
    pub id: i32,
    pub warehouse_name: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

/// Body of an inventory creation request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateInventoryInput {
    #[schema(value_type = Option<i32>, example = 1)]
    pub warehouse_id: Option<Value>,
    #[schema(example = "Television")]
    pub item_name: Option<String>,
    #[schema(example = "This 50\", 4K LED TV provides a crystal-clear picture.")]
    pub description: Option<String>,
    #[schema(example = "Electronics")]
    pub category: Option<String>,
    #[schema(example = "In Stock")]
    pub status: Option<String>,
    #[schema(value_type = Option<i32>, example = 500)]
    pub quantity: Option<Value>,
}

/// Body of an inventory update request. The owning warehouse cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateInventoryInput {
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[schema(example = "Out of Stock")]
    pub status: Option<String>,
    #[schema(value_type = Option<i32>, example = 0)]
    pub quantity: Option<Value>,
}

/// Item fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemValues {
    item_name: String,
    description: String,
    category: String,
    status: String,
    quantity: i32,
}

impl ItemValues {
    fn stored_quantity(&self) -> i32 {
        inventory::effective_quantity(&self.status, self.quantity)
    }
}

const RESOURCE: &str = "inventory item";

impl CreateInventoryInput {
    /// Presence, then quantity, then the shape of the warehouse reference.
    fn validate(self) -> Result<(i32, ItemValues), ServiceError> {
        validation::require_fields(
            RESOURCE,
            &[
                ("warehouse_id", validation::is_present_value(&self.warehouse_id)),
                ("item_name", validation::is_present(&self.item_name)),
                ("description", validation::is_present(&self.description)),
                ("category", validation::is_present(&self.category)),
                ("status", validation::is_present(&self.status)),
                ("quantity", validation::is_present_value(&self.quantity)),
            ],
        )?;

        let quantity = validation::require_quantity(self.quantity.as_ref())?;
        let warehouse_id = self
            .warehouse_id
            .as_ref()
            .and_then(validation::parse_integer)
            .ok_or_else(|| {
                ServiceError::invalid_field("warehouse_id", "Please provide a valid warehouse id")
            })?;

        Ok((
            warehouse_id,
            ItemValues {
                item_name: validation::text(self.item_name),
                description: validation::text(self.description),
                category: validation::text(self.category),
                status: validation::text(self.status),
                quantity,
            },
        ))
    }
}

impl UpdateInventoryInput {
    fn validate(self) -> Result<ItemValues, ServiceError> {
        validation::require_fields(
            RESOURCE,
            &[
                ("item_name", validation::is_present(&self.item_name)),
                ("description", validation::is_present(&self.description)),
                ("category", validation::is_present(&self.category)),
                ("status", validation::is_present(&self.status)),
                ("quantity", validation::is_present_value(&self.quantity)),
            ],
        )?;

        let quantity = validation::require_quantity(self.quantity.as_ref())?;

        Ok(ItemValues {
            item_name: validation::text(self.item_name),
            description: validation::text(self.description),
            category: validation::text(self.category),
            status: validation::text(self.status),
            quantity,
        })
    }
}

/// Service for managing inventory items
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DatabaseConnection>,
}

impl InventoryService {
    /// Creates a new inventory service instance
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self { db_pool }
    }

    /// Inventory joined with warehouses, projected to the detail shape
    fn detail_query() -> Select<inventory::Entity> {
        inventory::Entity::find()
            .select_only()
            .column(inventory::Column::Id)
            .column_as(warehouse::Column::WarehouseName, "warehouse_name")
            .column(inventory::Column::ItemName)
            .column(inventory::Column::Description)
            .column(inventory::Column::Category)
            .column(inventory::Column::Status)
            .column(inventory::Column::Quantity)
            .inner_join(warehouse::Entity)
    }

    async fn warehouse_exists(&self, warehouse_id: i32) -> Result<bool, ServiceError> {
        let db = &*self.db_pool;
        let found = warehouse::Entity::find_by_id(warehouse_id)
            .one(db)
            .await
            .map_err(ServiceError::DatabaseError)?;
        Ok(found.is_some())
    }

    fn not_found(id: i32) -> ServiceError {
        ServiceError::NotFound(format!("Inventory item with ID {} not found", id))
    }

    /// Lists the inventory stored in one warehouse
    #[instrument(skip(self))]
    pub async fn list_for_warehouse(
        &self,
        warehouse_id: i32,
    ) -> Result<Vec<InventorySummary>, ServiceError> {
        let db = &*self.db_pool;
        let items = inventory::Entity::find()
            .select_only()
            .columns([
                inventory::Column::Id,
                inventory::Column::ItemName,
                inventory::Column::Category,
                inventory::Column::Status,
                inventory::Column::Quantity,
            ])
            .filter(inventory::Column::WarehouseId.eq(warehouse_id))
            .order_by_asc(inventory::Column::Id)
            .into_model::<InventorySummary>()
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)?;

        Ok(items)
    }

    /// Lists every inventory item with its warehouse name
    #[instrument(skip(self))]
    pub async fn list_inventories(&self) -> Result<Vec<InventoryDetail>, ServiceError> {
        let db = &*self.db_pool;
        let items = Self::detail_query()
            .order_by_asc(inventory::Column::Id)
            .into_model::<InventoryDetail>()
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)?;

        Ok(items)
    }

    /// Gets one inventory item with its warehouse name
    #[instrument(skip(self))]
    pub async fn get_inventory(&self, id: i32) -> Result<InventoryDetail, ServiceError> {
        let db = &*self.db_pool;
        Self::detail_query()
            .filter(inventory::Column::Id.eq(id))
            .into_model::<InventoryDetail>()
            .one(db)
            .await
            .map_err(ServiceError::DatabaseError)?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Validates and stores a new inventory item in an existing warehouse
    #[instrument(skip(self, input))]
    pub async fn create_inventory(
        &self,
        input: CreateInventoryInput,
    ) -> Result<inventory::Model, ServiceError> {
        let (warehouse_id, values) = input.validate()?;

        if !self.warehouse_exists(warehouse_id).await? {
            return Err(ServiceError::invalid_field(
                "warehouse_id",
                "Warehouse does not exist",
            ));
        }

        let db = &*self.db_pool;
        let created = inventory::ActiveModel {
            warehouse_id: Set(warehouse_id),
            quantity: Set(values.stored_quantity()),
            item_name: Set(values.item_name),
            description: Set(values.description),
            category: Set(values.category),
            status: Set(values.status),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(ServiceError::DatabaseError)?;

        info!(
            inventory_id = created.id,
            warehouse_id = created.warehouse_id,
            "Inventory item created"
        );
        Ok(created)
    }

    /// Replaces the fields of an existing inventory item
    #[instrument(skip(self, input))]
    pub async fn update_inventory(
        &self,
        id: i32,
        input: UpdateInventoryInput,
    ) -> Result<inventory::Model, ServiceError> {
        let db = &*self.db_pool;
        let existing = inventory::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::DatabaseError)?
            .ok_or_else(|| Self::not_found(id))?;

        let values = input.validate()?;

        if !self.warehouse_exists(existing.warehouse_id).await? {
            warn!(
                inventory_id = id,
                warehouse_id = existing.warehouse_id,
                "Inventory item references a missing warehouse"
            );
            return Err(ServiceError::invalid_field(
                "warehouse_id",
                "Warehouse does not exist",
            ));
        }

        let quantity = values.stored_quantity();
        let mut item = existing.into_active_model();
        item.item_name = Set(values.item_name);
        item.description = Set(values.description);
        item.category = Set(values.category);
        item.status = Set(values.status);
        item.quantity = Set(quantity);

        let updated = item.update(db).await.map_err(ServiceError::DatabaseError)?;

        info!(inventory_id = id, "Inventory item updated");
        Ok(updated)
    }

    /// Deletes an inventory item
    #[instrument(skip(self))]
    pub async fn delete_inventory(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = inventory::Entity::delete_by_id(id)
            .exec(db)
            .await
            .map_err(ServiceError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        info!(inventory_id = id, "Inventory item deleted");
        Ok(())
    }
}
