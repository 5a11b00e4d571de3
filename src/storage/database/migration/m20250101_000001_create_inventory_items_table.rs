use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InventoryItems::UserId).uuid().not_null())
                    .col(ColumnDef::new(InventoryItems::Name).string().not_null())
                    .col(ColumnDef::new(InventoryItems::Category).string().null())
                    .col(
                        ColumnDef::new(InventoryItems::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(InventoryItems::ExpirationDate).date().null())
                    .col(
                        ColumnDef::new(InventoryItems::RiskScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::RiskExplanation)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inventory_items_user_id")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::UserId)
                    .to_owned(),
            )
            .await?;

        // The alert generation query filters by user and orders by score
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inventory_items_user_risk")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::UserId)
                    .col(InventoryItems::RiskScore)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    Id,
    UserId,
    Name,
    Category,
    Quantity,
    ExpirationDate,
    RiskScore,
    RiskExplanation,
    CreatedAt,
    UpdatedAt,
}
