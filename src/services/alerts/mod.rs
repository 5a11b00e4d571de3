//! Expiration alert engine
//!
//! Consumes risk-scored inventory snapshots, decides which items warrant a
//! new alert, classifies severity, composes a message, and owns the alert
//! lifecycle through dismissal and retention cleanup.

pub mod classify;
mod scheduler;
pub mod service;
pub mod types;

pub use service::AlertService;
pub use types::{ActiveAlert, Alert, AlertKind, NewAlert, RiskSignal};
