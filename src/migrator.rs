use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_warehouses_table::Migration),
            Box::new(m20240101_000002_create_inventories_table::Migration),
        ]
    }
}

mod m20240101_000001_create_warehouses_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_warehouses_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Warehouses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Warehouses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Warehouses::WarehouseName).string().not_null())
                        .col(ColumnDef::new(Warehouses::Address).string().not_null())
                        .col(ColumnDef::new(Warehouses::City).string().not_null())
                        .col(ColumnDef::new(Warehouses::Country).string().not_null())
                        .col(ColumnDef::new(Warehouses::ContactName).string().not_null())
                        .col(
                            ColumnDef::new(Warehouses::ContactPosition)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Warehouses::ContactPhone).string().not_null())
                        .col(ColumnDef::new(Warehouses::ContactEmail).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Warehouses::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Warehouses {
        Table,
        Id,
        WarehouseName,
        Address,
        City,
        Country,
        ContactName,
        ContactPosition,
        ContactPhone,
        ContactEmail,
    }
}

mod m20240101_000002_create_inventories_table {

    use super::m20240101_000001_create_warehouses_table::Warehouses;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_inventories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Inventories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Inventories::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Inventories::WarehouseId).integer().not_null())
                        .col(ColumnDef::new(Inventories::ItemName).string().not_null())
                        .col(ColumnDef::new(Inventories::Description).text().not_null())
                        .col(ColumnDef::new(Inventories::Category).string().not_null())
                        .col(ColumnDef::new(Inventories::Status).string().not_null())
                        .col(
                            ColumnDef::new(Inventories::Quantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_inventories_warehouse_id")
                                .from(Inventories::Table, Inventories::WarehouseId)
                                .to(Warehouses::Table, Warehouses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventories_warehouse_id")
                        .table(Inventories::Table)
                        .col(Inventories::WarehouseId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Inventories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Inventories {
        Table,
        Id,
        WarehouseId,
        ItemName,
        Description,
        Category,
        Status,
        Quantity,
    }
}
