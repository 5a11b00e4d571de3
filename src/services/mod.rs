//! Business logic layer
//!
//! Today that is the alert lifecycle engine; the risk scorer that feeds it
//! runs as a separate service.

pub mod alerts;

pub use alerts::{ActiveAlert, Alert, AlertKind, AlertService, RiskSignal};
