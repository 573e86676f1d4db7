pub mod common;
pub mod inventories;
pub mod warehouses;

use crate::services::{inventories::InventoryService, warehouses::WarehouseService};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub warehouses: Arc<WarehouseService>,
    pub inventories: Arc<InventoryService>,
}

impl AppServices {
    /// Builds every service over one shared connection pool.
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self {
            warehouses: Arc::new(WarehouseService::new(db_pool.clone())),
            inventories: Arc::new(InventoryService::new(db_pool)),
        }
    }
}
