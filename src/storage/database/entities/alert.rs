use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::services::alerts::types::{Alert, AlertKind};

/// Expiration alert database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    /// Alert ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// User this alert belongs to
    pub user_id: Uuid,

    /// Inventory item this alert was raised for
    pub inventory_item_id: i64,

    /// Severity class, snapshot at creation ("consume_now", "expiring_soon", "high_risk")
    pub alert_type: String,

    /// Risk score at creation, snapshot, not live-updated
    pub risk_score: f64,

    /// User-facing message composed at creation
    pub message: String,

    /// Dismissal flag
    pub is_dismissed: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Dismissal timestamp, set once on dismissal
    pub dismissed_at: Option<DateTimeWithTimeZone>,
}

/// Alert entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to inventory item relation
    #[sea_orm(
        belongs_to = "super::inventory_item::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_item::Column::Id"
    )]
    InventoryItem,
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion between the SeaORM model and the domain alert
impl Model {
    /// Convert SeaORM model to the domain alert model
    pub fn to_domain_alert(&self) -> Alert {
        Alert {
            id: self.id,
            user_id: self.user_id,
            inventory_item_id: self.inventory_item_id,
            kind: AlertKind::from_stored(&self.alert_type),
            risk_score: self.risk_score,
            message: self.message.clone(),
            is_dismissed: self.is_dismissed,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            dismissed_at: self.dismissed_at.map(|t| t.with_timezone(&chrono::Utc)),
        }
    }
}
