//! Severity classification and message composition
//!
//! Pure product rules: which score earns which alert class, and what the
//! alert says. The thresholds are deliberately compile-time constants, not
//! configuration; the listing and badge tests pin them.

use super::types::AlertKind;

/// Items at or below this score never produce an alert
pub const ALERT_THRESHOLD: f64 = 70.0;

const CONSUME_NOW_THRESHOLD: f64 = 90.0;
const EXPIRING_SOON_THRESHOLD: f64 = 80.0;

/// Classify a risk score into a severity class.
///
/// Callers only pass scores above [`ALERT_THRESHOLD`]; the bottom arm is
/// what the 71-79 band lands on.
pub fn classify(risk_score: f64) -> AlertKind {
    if risk_score >= CONSUME_NOW_THRESHOLD {
        AlertKind::ConsumeNow
    } else if risk_score >= EXPIRING_SOON_THRESHOLD {
        AlertKind::ExpiringSoon
    } else {
        AlertKind::HighRisk
    }
}

/// Compose the user-facing message for an alert.
///
/// One template per class; the match is exhaustive, so adding a class
/// without deciding its message does not compile.
pub fn compose_message(kind: AlertKind, item_name: &str) -> String {
    match kind {
        AlertKind::ConsumeNow => {
            format!("URGENT: {} needs to be consumed today to avoid waste!", item_name)
        }
        AlertKind::ExpiringSoon => {
            format!("{} is expiring soon. Plan to use it in the next few days.", item_name)
        }
        AlertKind::HighRisk => {
            format!("{} is at high risk of going to waste. Consider using it soon.", item_name)
        }
    }
}
