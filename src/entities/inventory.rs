use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status value that forces a zero quantity.
pub const OUT_OF_STOCK: &str = "Out of Stock";

/// A stored inventory item.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "inventories")]
#[schema(as = InventoryItem)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub warehouse_id: i32,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::WarehouseId",
        to = "super::warehouse::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Warehouse,
}

impl Related<super::warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Quantity to persist for `status`: "Out of Stock" always stores zero.
pub fn effective_quantity(status: &str, quantity: i32) -> i32 {
    if status == OUT_OF_STOCK {
        0
    } else {
        quantity
    }
}
