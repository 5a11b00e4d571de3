//! Alert engine configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Alert engine configuration
///
/// Operational knobs only. The risk thresholds that decide when an item
/// qualifies for an alert are product rules and live with the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// How long dismissed alerts are kept before permanent deletion, in days
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
    /// How often the background cleanup task runs, in hours
    #[serde(default = "default_cleanup_interval_hours")]
    pub cleanup_interval_hours: u64,
    /// Run the background cleanup task
    #[serde(default = "default_cleanup_enabled")]
    pub cleanup_enabled: bool,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            cleanup_interval_hours: default_cleanup_interval_hours(),
            cleanup_enabled: default_cleanup_enabled(),
        }
    }
}

impl AlertsConfig {
    /// Merge alert configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.retention_days != default_retention_days() {
            self.retention_days = other.retention_days;
        }
        if other.cleanup_interval_hours != default_cleanup_interval_hours() {
            self.cleanup_interval_hours = other.cleanup_interval_hours;
        }
        if !other.cleanup_enabled {
            self.cleanup_enabled = other.cleanup_enabled;
        }
        self
    }

    /// Validate alert configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.retention_days <= 0 {
            return Err("Retention days must be positive".to_string());
        }

        if self.cleanup_enabled && self.cleanup_interval_hours == 0 {
            return Err("Cleanup interval cannot be 0 when cleanup is enabled".to_string());
        }

        Ok(())
    }
}

fn default_cleanup_enabled() -> bool {
    true
}
