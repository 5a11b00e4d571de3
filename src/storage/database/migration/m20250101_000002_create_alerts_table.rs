use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alerts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alerts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alerts::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Alerts::InventoryItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alerts::AlertType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alerts::RiskScore).double().not_null())
                    .col(ColumnDef::new(Alerts::Message).text().not_null())
                    .col(
                        ColumnDef::new(Alerts::IsDismissed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Alerts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Alerts::DismissedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_inventory_item_id")
                            .from(Alerts::Table, Alerts::InventoryItemId)
                            .to(InventoryItems::Table, InventoryItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_alerts_user_dismissed")
                    .table(Alerts::Table)
                    .col(Alerts::UserId)
                    .col(Alerts::IsDismissed)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_alerts_dismissed_at")
                    .table(Alerts::Table)
                    .col(Alerts::DismissedAt)
                    .to_owned(),
            )
            .await?;

        // One active alert per item, enforced by the database. The schema
        // builder cannot express partial indexes, and this statement is valid
        // on both PostgreSQL and SQLite.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS uq_alerts_item_active \
                 ON alerts (inventory_item_id) WHERE NOT is_dismissed",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alerts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Alerts {
    Table,
    Id,
    UserId,
    InventoryItemId,
    AlertType,
    RiskScore,
    Message,
    IsDismissed,
    CreatedAt,
    DismissedAt,
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    Id,
}
