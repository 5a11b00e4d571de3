use crate::services::alerts::types::RiskSignal;
use crate::utils::error::{AppError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, inventory_item};
use super::types::SeaOrmDatabase;

/// A new inventory item about to be persisted; the store assigns id and
/// timestamps.
///
/// Items are owned by the external inventory subsystem. This write path
/// exists for the scorer integration and for tests; the alert engine itself
/// only ever reads.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    /// Owning user
    pub user_id: uuid::Uuid,
    /// Item display name
    pub name: String,
    /// Item category, if known
    pub category: Option<String>,
    /// Quantity on hand
    pub quantity: i32,
    /// Printed expiration date, if known
    pub expiration_date: Option<chrono::NaiveDate>,
    /// Initial risk score, 0-100
    pub risk_score: f64,
    /// Scorer's explanation for the initial score
    pub risk_explanation: Option<String>,
}

impl SeaOrmDatabase {
    /// Fetch the current risk signals for a user, strongest first.
    ///
    /// Only items scoring strictly above `min_score` qualify; the ordering
    /// determines the order of the alert generation pass.
    pub async fn risk_signals(
        &self,
        user_id: uuid::Uuid,
        min_score: f64,
    ) -> Result<Vec<RiskSignal>> {
        debug!(
            "Fetching risk signals above {} for user: {}",
            min_score, user_id
        );

        let items = entities::InventoryItem::find()
            .filter(inventory_item::Column::UserId.eq(user_id))
            .filter(inventory_item::Column::RiskScore.gt(min_score))
            .order_by_desc(inventory_item::Column::RiskScore)
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(items.iter().map(|item| item.to_risk_signal()).collect())
    }

    /// Insert a new inventory item; returns the assigned id
    pub async fn insert_inventory_item(&self, item: &NewInventoryItem) -> Result<i64> {
        debug!("Inserting inventory item: {}", item.name);

        let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();
        let active_model = inventory_item::ActiveModel {
            id: NotSet,
            user_id: Set(item.user_id),
            name: Set(item.name.clone()),
            category: Set(item.category.clone()),
            quantity: Set(item.quantity),
            expiration_date: Set(item.expiration_date),
            risk_score: Set(item.risk_score),
            risk_explanation: Set(item.risk_explanation.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.id)
    }

    /// Write a fresh risk score for an item, as the external scorer does
    pub async fn update_risk_score(
        &self,
        item_id: i64,
        risk_score: f64,
        explanation: Option<&str>,
    ) -> Result<()> {
        debug!("Updating risk score for item {}: {}", item_id, risk_score);

        let item = entities::InventoryItem::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", item_id)))?;

        let mut active_model: inventory_item::ActiveModel = item.into();
        active_model.risk_score = Set(risk_score);
        active_model.risk_explanation = Set(explanation.map(|e| e.to_string()));
        active_model.updated_at = Set(chrono::Utc::now().into());

        active_model
            .update(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }

    /// Fetch a single inventory item by id (test and diagnostic path)
    pub async fn find_inventory_item(&self, item_id: i64) -> Result<Option<inventory_item::Model>> {
        debug!("Finding inventory item by ID: {}", item_id);

        entities::InventoryItem::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)
    }
}
