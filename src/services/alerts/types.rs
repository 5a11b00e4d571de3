//! Type definitions for the alert engine

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Severity class of an alert, derived from the risk score at creation time
/// and never recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Score 90 or above: the item must be used immediately
    ConsumeNow,
    /// Score 80-89: the item expires within days
    ExpiringSoon,
    /// Score above the alert threshold but below 80
    HighRisk,
}

impl AlertKind {
    /// Stable string form used in the database and over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::ConsumeNow => "consume_now",
            AlertKind::ExpiringSoon => "expiring_soon",
            AlertKind::HighRisk => "high_risk",
        }
    }

    /// Parse a stored alert type string.
    ///
    /// Rows written by this engine always carry one of the three known
    /// strings; anything else is floored to the least severe class so a
    /// stray row cannot take the listing down.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "consume_now" => AlertKind::ConsumeNow,
            "expiring_soon" => AlertKind::ExpiringSoon,
            "high_risk" => AlertKind::HighRisk,
            other => {
                warn!("Unknown stored alert type '{}', treating as high_risk", other);
                AlertKind::HighRisk
            }
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An alert as stored, the engine's own record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert ID, assigned by the store on creation
    pub id: i64,
    /// User this alert belongs to
    pub user_id: Uuid,
    /// Inventory item this alert was raised for
    pub inventory_item_id: i64,
    /// Severity class, snapshot at creation
    #[serde(rename = "alert_type")]
    pub kind: AlertKind,
    /// Risk score at creation, snapshot
    pub risk_score: f64,
    /// User-facing message composed at creation
    pub message: String,
    /// Dismissal flag
    pub is_dismissed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Dismissal timestamp, None while active
    pub dismissed_at: Option<DateTime<Utc>>,
}

/// A new alert about to be persisted; the store assigns id and created_at
#[derive(Debug, Clone)]
pub struct NewAlert {
    /// User the alert is for
    pub user_id: Uuid,
    /// Item the alert is about
    pub inventory_item_id: i64,
    /// Severity class
    pub kind: AlertKind,
    /// Risk score snapshot
    pub risk_score: f64,
    /// Composed message
    pub message: String,
}

/// A scored inventory item as seen by the generation pass.
///
/// Read-only input produced by the external scorer; fetched fresh on every
/// generation run, never cached by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSignal {
    /// Item ID
    pub inventory_item_id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Item display name
    pub name: String,
    /// Item category, if set
    pub category: Option<String>,
    /// Printed expiration date, if known
    pub expiration_date: Option<NaiveDate>,
    /// Current risk score, 0-100
    pub risk_score: f64,
    /// Scorer's explanation, if any
    pub explanation: Option<String>,
}

/// An active alert joined with the item fields the UI renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveAlert {
    /// Alert ID
    pub id: i64,
    /// Inventory item the alert is about
    pub inventory_item_id: i64,
    /// Severity class
    #[serde(rename = "alert_type")]
    pub kind: AlertKind,
    /// Risk score at creation
    pub risk_score: f64,
    /// User-facing message
    pub message: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Item display name
    pub item_name: String,
    /// Item category, if set
    pub category: Option<String>,
    /// Item expiration date, if known
    pub expiration_date: Option<NaiveDate>,
}
