//! Alert lifecycle engine
//!
//! Turns risk-scored inventory snapshots into deduplicated, classified
//! alerts and retires them. The engine owns no background tasks and no
//! shared mutable state; every operation is a bounded sequence of store
//! calls.
//!
//! Error posture is split by path. Generation, listing, and dismissal
//! return `Result` and propagate store failures, because silent failure
//! there would hide real risk from the user. Cleanup and the badge count
//! return plain values and log instead; a failing maintenance pass or a
//! flaky count must never take down the request that triggered it.

use std::sync::Arc;

use sea_orm::SqlErr;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AlertsConfig;
use crate::storage::database::Database;
use crate::utils::error::{AppError, Result};

use super::classify::{self, ALERT_THRESHOLD};
use super::types::{ActiveAlert, Alert, NewAlert};

/// The expiration alert engine
#[derive(Debug)]
pub struct AlertService {
    db: Arc<Database>,
    config: AlertsConfig,
}

impl AlertService {
    /// Create a new alert service over the shared database
    pub fn new(db: Arc<Database>, config: AlertsConfig) -> Self {
        Self { db, config }
    }

    /// Generate alerts for every high-risk item the user has not been
    /// alerted about yet.
    ///
    /// Returns exactly the alerts created by this invocation, strongest
    /// risk first. Items that already carry an active alert are silently
    /// skipped, whatever their current score; severity is a snapshot taken
    /// here and never re-evaluated afterwards.
    ///
    /// Each insert is independently durable. A store failure aborts the
    /// pass and propagates, but alerts created by earlier iterations stay
    /// committed.
    pub async fn generate_alerts(&self, user_id: Uuid) -> Result<Vec<Alert>> {
        debug!("Generating alerts for user: {}", user_id);

        let signals = self.db.risk_signals(user_id, ALERT_THRESHOLD).await?;
        let mut created = Vec::new();

        for signal in signals {
            if self.db.active_alert_exists(signal.inventory_item_id).await? {
                debug!(
                    "Item {} already has an active alert, skipping",
                    signal.inventory_item_id
                );
                continue;
            }

            let kind = classify::classify(signal.risk_score);
            let new_alert = NewAlert {
                user_id,
                inventory_item_id: signal.inventory_item_id,
                kind,
                risk_score: signal.risk_score,
                message: classify::compose_message(kind, &signal.name),
            };

            match self.db.insert_alert(&new_alert).await {
                Ok(alert) => created.push(alert),
                Err(e) => {
                    // A concurrent pass won the insert race on the active
                    // unique index; the item is alerted either way.
                    if is_unique_violation(&e) {
                        debug!(
                            "Item {} was alerted concurrently, skipping",
                            signal.inventory_item_id
                        );
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        if !created.is_empty() {
            info!("Created {} alerts for user {}", created.len(), user_id);
        }

        Ok(created)
    }

    /// List the user's active alerts, joined with the item fields the UI
    /// renders, most severe first and newest first within equal severity
    pub async fn active_alerts(&self, user_id: Uuid) -> Result<Vec<ActiveAlert>> {
        self.db.active_alerts_with_items(user_id).await
    }

    /// Dismiss a single alert, scoped to its owner.
    ///
    /// Returns whether a matching active alert was updated. A missing,
    /// foreign-owned, or already dismissed alert is `Ok(false)`, never an
    /// error; store failures propagate.
    pub async fn dismiss_alert(&self, alert_id: i64, user_id: Uuid) -> Result<bool> {
        let affected = self.db.dismiss_alert(alert_id, user_id).await?;
        Ok(affected > 0)
    }

    /// Dismiss every active alert the user currently has; returns the
    /// number dismissed. Idempotent: a second call returns 0.
    pub async fn dismiss_all_alerts(&self, user_id: Uuid) -> Result<u64> {
        let affected = self.db.dismiss_all_alerts(user_id).await?;
        if affected > 0 {
            info!("Dismissed {} alerts for user {}", affected, user_id);
        }
        Ok(affected)
    }

    /// Permanently delete alerts dismissed longer ago than the retention
    /// window, across all users. Best-effort: failures are logged and
    /// reported as 0 purged.
    pub async fn cleanup_old_alerts(&self) -> u64 {
        let cutoff = chrono::Utc::now() - chrono::Duration::days(self.config.retention_days);

        match self.db.delete_dismissed_before(cutoff).await {
            Ok(purged) => {
                if purged > 0 {
                    info!(
                        "Purged {} alerts dismissed more than {} days ago",
                        purged, self.config.retention_days
                    );
                }
                purged
            }
            Err(e) => {
                warn!("Alert cleanup failed: {}", e);
                0
            }
        }
    }

    /// Count of the user's active alerts, for badge display. Fail-soft: a
    /// store failure is logged and reported as 0.
    pub async fn active_alert_count(&self, user_id: Uuid) -> u64 {
        match self.db.count_active_alerts(user_id).await {
            Ok(count) => count,
            Err(e) => {
                warn!("Alert count query failed for user {}: {}", user_id, e);
                0
            }
        }
    }
}

fn is_unique_violation(error: &AppError) -> bool {
    match error {
        AppError::Database(db_err) => {
            matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        }
        _ => false,
    }
}
