use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::services::alerts::types::RiskSignal;

/// Inventory item database model
///
/// Owned by the inventory subsystem; the alert engine only reads the risk
/// columns the external scorer maintains.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    /// Item ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// User who owns this item
    pub user_id: Uuid,

    /// Display name (e.g. "Milk")
    pub name: String,

    /// Category (e.g. "Dairy", optional)
    pub category: Option<String>,

    /// Quantity on hand
    pub quantity: i32,

    /// Printed expiration date, if known
    pub expiration_date: Option<Date>,

    /// Latest waste risk score, 0-100, written by the scorer
    pub risk_score: f64,

    /// Scorer's explanation for the latest score (optional)
    pub risk_explanation: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Inventory item entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Alerts raised for this item
    #[sea_orm(has_many = "super::alert::Entity")]
    Alerts,
}

impl Related<super::alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alerts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion between the SeaORM model and the scorer's read view
impl Model {
    /// Project this item into the risk signal the alert engine consumes
    pub fn to_risk_signal(&self) -> RiskSignal {
        RiskSignal {
            inventory_item_id: self.id,
            user_id: self.user_id,
            name: self.name.clone(),
            category: self.category.clone(),
            expiration_date: self.expiration_date,
            risk_score: self.risk_score,
            explanation: self.risk_explanation.clone(),
        }
    }
}
