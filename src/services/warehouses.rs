use crate::{
    entities::{inventory, warehouse},
    errors::ServiceError,
    validation,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

/// Body of a warehouse creation request. Every field is required.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateWarehouseInput {
    #[schema(example = "Manhattan")]
    pub warehouse_name: Option<String>,
    #[schema(example = "503 Broadway")]
    pub address: Option<String>,
    #[schema(example = "New York")]
    pub city: Option<String>,
    #[schema(example = "USA")]
    pub country: Option<String>,
    #[schema(example = "Parmin Aujla")]
    pub contact_name: Option<String>,
    #[schema(example = "Warehouse Manager")]
    pub contact_position: Option<String>,
    #[schema(example = "+1 (646) 123-1234")]
    pub contact_phone: Option<String>,
    #[schema(example = "paujla@instock.com")]
    pub contact_email: Option<String>,
}

impl CreateWarehouseInput {
    /// Presence, then phone, then email.
    pub fn validate(&self) -> Result<(), ServiceError> {
        validation::require_fields(
            "warehouse",
            &[
                ("warehouse_name", validation::is_present(&self.warehouse_name)),
                ("address", validation::is_present(&self.address)),
                ("city", validation::is_present(&self.city)),
                ("country", validation::is_present(&self.country)),
                ("contact_name", validation::is_present(&self.contact_name)),
                ("contact_position", validation::is_present(&self.contact_position)),
                ("contact_phone", validation::is_present(&self.contact_phone)),
                ("contact_email", validation::is_present(&self.contact_email)),
            ],
        )?;

        if !validation::is_valid_phone(self.contact_phone.as_deref().unwrap_or_default()) {
            return Err(ServiceError::invalid_field(
                "phone",
                "Please provide a correct phone number for the warehouse",
            ));
        }

        if !validation::is_valid_email(self.contact_email.as_deref().unwrap_or_default()) {
            return Err(ServiceError::invalid_field(
                "email",
                "Please provide a correct email address for the warehouse",
            ));
        }

        Ok(())
    }

    fn into_active_model(self) -> warehouse::ActiveModel {
        warehouse::ActiveModel {
            warehouse_name: Set(validation::text(self.warehouse_name)),
            address: Set(validation::text(self.address)),
            city: Set(validation::text(self.city)),
            country: Set(validation::text(self.country)),
            contact_name: Set(validation::text(self.contact_name)),
            contact_position: Set(validation::text(self.contact_position)),
            contact_phone: Set(validation::text(self.contact_phone)),
            contact_email: Set(validation::text(self.contact_email)),
            ..Default::default()
        }
    }
}

/// Service for managing warehouses
#[derive(Clone)]
pub struct WarehouseService {
    db_pool: Arc<DatabaseConnection>,
}

impl WarehouseService {
    /// Creates a new warehouse service instance
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self { db_pool }
    }

    /// Lists every warehouse ordered by id
    #[instrument(skip(self))]
    pub async fn list_warehouses(&self) -> Result<Vec<warehouse::Model>, ServiceError> {
        let db = &*self.db_pool;
        let warehouses = warehouse::Entity::find()
            .order_by_asc(warehouse::Column::Id)
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)?;

        Ok(warehouses)
    }

    /// Gets a warehouse by ID
    #[instrument(skip(self))]
    pub async fn get_warehouse(&self, id: i32) -> Result<warehouse::Model, ServiceError> {
        let db = &*self.db_pool;
        warehouse::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::DatabaseError)?
            .ok_or_else(|| ServiceError::NotFound(format!("Warehouse with ID {} not found", id)))
    }

    /// Validates and stores a new warehouse, returning the stored row
    #[instrument(skip(self, input))]
    pub async fn create_warehouse(
        &self,
        input: CreateWarehouseInput,
    ) -> Result<warehouse::Model, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let created = input
            .into_active_model()
            .insert(db)
            .await
            .map_err(ServiceError::DatabaseError)?;

        info!(warehouse_id = created.id, "Warehouse created");
        Ok(created)
    }

    /// Deletes a warehouse together with the inventory stored in it
    #[instrument(skip(self))]
    pub async fn delete_warehouse(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self
            .db_pool
            .begin()
            .await
            .map_err(ServiceError::DatabaseError)?;

        let removed_items = inventory::Entity::delete_many()
            .filter(inventory::Column::WarehouseId.eq(id))
            .exec(&txn)
            .await
            .map_err(ServiceError::DatabaseError)?;

        let result = warehouse::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(ServiceError::DatabaseError)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(ServiceError::DatabaseError)?;
            return Err(ServiceError::NotFound(format!(
                "Warehouse with ID {} not found",
                id
            )));
        }

        txn.commit().await.map_err(ServiceError::DatabaseError)?;

        info!(
            warehouse_id = id,
            inventory_removed = removed_items.rows_affected,
            "Warehouse deleted"
        );
        Ok(())
    }
}
