use crate::services::alerts::types::{ActiveAlert, Alert, NewAlert};
use crate::utils::error::{AppError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::{debug, warn};

use super::super::entities::{self, alert};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Check whether an item already has an active (non-dismissed) alert
    pub async fn active_alert_exists(&self, inventory_item_id: i64) -> Result<bool> {
        debug!("Checking for active alert on item: {}", inventory_item_id);

        let existing = entities::Alert::find()
            .filter(alert::Column::InventoryItemId.eq(inventory_item_id))
            .filter(alert::Column::IsDismissed.eq(false))
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(existing.is_some())
    }

    /// Insert a new alert; the store assigns id and created_at
    ///
    /// The partial unique index on active alerts makes a concurrent
    /// duplicate insert fail with a unique-constraint violation; callers
    /// decide whether that is an error or a benign race.
    pub async fn insert_alert(&self, alert: &NewAlert) -> Result<Alert> {
        debug!(
            "Inserting {} alert for item: {}",
            alert.kind, alert.inventory_item_id
        );

        let active_model = entities::alert::ActiveModel {
            id: NotSet,
            user_id: Set(alert.user_id),
            inventory_item_id: Set(alert.inventory_item_id),
            alert_type: Set(alert.kind.as_str().to_string()),
            risk_score: Set(alert.risk_score),
            message: Set(alert.message.clone()),
            is_dismissed: Set(false),
            created_at: Set(chrono::Utc::now().into()),
            dismissed_at: Set(None),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.to_domain_alert())
    }

    /// List a user's active alerts joined with item name and category,
    /// most severe first, newest first within equal severity
    pub async fn active_alerts_with_items(&self, user_id: uuid::Uuid) -> Result<Vec<ActiveAlert>> {
        debug!("Listing active alerts for user: {}", user_id);

        let rows = entities::Alert::find()
            .filter(alert::Column::UserId.eq(user_id))
            .filter(alert::Column::IsDismissed.eq(false))
            .order_by_desc(alert::Column::RiskScore)
            .order_by_desc(alert::Column::CreatedAt)
            .find_also_related(entities::InventoryItem)
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        let mut alerts = Vec::with_capacity(rows.len());
        for (alert_model, item_model) in rows {
            // The cascade on inventory_items makes a missing item
            // impossible for rows this engine wrote; skip rather than fail
            // if one shows up anyway.
            let Some(item) = item_model else {
                warn!(
                    "Alert {} references missing inventory item {}",
                    alert_model.id, alert_model.inventory_item_id
                );
                continue;
            };

            let domain = alert_model.to_domain_alert();
            alerts.push(ActiveAlert {
                id: domain.id,
                inventory_item_id: domain.inventory_item_id,
                kind: domain.kind,
                risk_score: domain.risk_score,
                message: domain.message,
                created_at: domain.created_at,
                item_name: item.name,
                category: item.category,
                expiration_date: item.expiration_date,
            });
        }

        Ok(alerts)
    }

    /// Dismiss a single alert, scoped to its owner.
    ///
    /// Conditional update: only an active alert owned by this user is
    /// touched. Returns the number of rows updated (0 or 1).
    pub async fn dismiss_alert(&self, alert_id: i64, user_id: uuid::Uuid) -> Result<u64> {
        debug!("Dismissing alert {} for user: {}", alert_id, user_id);

        let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();
        let result = entities::Alert::update_many()
            .col_expr(alert::Column::IsDismissed, Expr::value(true))
            .col_expr(alert::Column::DismissedAt, Expr::value(Some(now)))
            .filter(alert::Column::Id.eq(alert_id))
            .filter(alert::Column::UserId.eq(user_id))
            .filter(alert::Column::IsDismissed.eq(false))
            .exec(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected)
    }

    /// Dismiss every active alert for a user; returns the number dismissed
    pub async fn dismiss_all_alerts(&self, user_id: uuid::Uuid) -> Result<u64> {
        debug!("Dismissing all alerts for user: {}", user_id);

        let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();
        let result = entities::Alert::update_many()
            .col_expr(alert::Column::IsDismissed, Expr::value(true))
            .col_expr(alert::Column::DismissedAt, Expr::value(Some(now)))
            .filter(alert::Column::UserId.eq(user_id))
            .filter(alert::Column::IsDismissed.eq(false))
            .exec(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected)
    }

    /// Permanently delete alerts dismissed before the cutoff, across all users
    pub async fn delete_dismissed_before(
        &self,
        cutoff: chrono::DateTime<chrono::Utc>,
    ) -> Result<u64> {
        debug!("Deleting alerts dismissed before: {}", cutoff);

        let result = entities::Alert::delete_many()
            .filter(alert::Column::IsDismissed.eq(true))
            .filter(alert::Column::DismissedAt.lt(cutoff))
            .exec(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected)
    }

    /// Count a user's active alerts
    pub async fn count_active_alerts(&self, user_id: uuid::Uuid) -> Result<u64> {
        debug!("Counting active alerts for user: {}", user_id);

        let count = entities::Alert::find()
            .filter(alert::Column::UserId.eq(user_id))
            .filter(alert::Column::IsDismissed.eq(false))
            .count(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(count)
    }

    /// Fetch a single alert by id (test and diagnostic path)
    pub async fn find_alert(&self, alert_id: i64) -> Result<Option<Alert>> {
        debug!("Finding alert by ID: {}", alert_id);

        let model = entities::Alert::find_by_id(alert_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain_alert()))
    }
}
