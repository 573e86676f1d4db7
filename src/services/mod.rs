//! Business logic for the warehouse and inventory resources.

pub mod inventories;
pub mod warehouses;
