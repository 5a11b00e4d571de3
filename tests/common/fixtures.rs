//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use freshguard::storage::database::entities::alert;
use freshguard::storage::database::{Database, NewInventoryItem};

/// Factory for creating inventory items
pub struct ItemFactory;

impl ItemFactory {
    /// Create a basic item for a user, below every alert threshold
    pub fn for_user(user_id: Uuid) -> NewInventoryItem {
        NewInventoryItem {
            user_id,
            name: format!("Item {}", &Uuid::new_v4().to_string()[..8]),
            category: Some("Dairy".to_string()),
            quantity: 1,
            expiration_date: Some((Utc::now() + Duration::days(3)).date_naive()),
            risk_score: 40.0,
            risk_explanation: None,
        }
    }

    /// Create a named item with a specific risk score
    pub fn scored(user_id: Uuid, name: &str, risk_score: f64) -> NewInventoryItem {
        let mut item = Self::for_user(user_id);
        item.name = name.to_string();
        item.risk_score = risk_score;
        item
    }

    /// Create a named item with a specific category and risk score
    pub fn in_category(
        user_id: Uuid,
        name: &str,
        category: &str,
        risk_score: f64,
    ) -> NewInventoryItem {
        let mut item = Self::scored(user_id, name, risk_score);
        item.category = Some(category.to_string());
        item
    }
}

/// Insert an item and return its assigned id
pub async fn insert_item(db: &Database, item: &NewInventoryItem) -> i64 {
    db.insert_inventory_item(item)
        .await
        .expect("Failed to insert test inventory item")
}

/// Rewrite an alert's dismissal timestamp to `days_ago` days in the past
///
/// Retention behavior depends on wall-clock age, so tests age dismissed
/// alerts artificially instead of waiting.
pub async fn backdate_dismissal(db: &Database, alert_id: i64, days_ago: i64) {
    let backdated: chrono::DateTime<chrono::FixedOffset> =
        (Utc::now() - Duration::days(days_ago)).into();

    let result = alert::Entity::update_many()
        .col_expr(alert::Column::DismissedAt, Expr::value(Some(backdated)))
        .filter(alert::Column::Id.eq(alert_id))
        .exec(db.connection())
        .await
        .expect("Failed to backdate dismissal timestamp");

    assert_eq!(result.rows_affected, 1, "Expected to backdate exactly one alert");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_factory_defaults() {
        let user_id = Uuid::new_v4();
        let item = ItemFactory::for_user(user_id);
        assert_eq!(item.user_id, user_id);
        assert!(!item.name.is_empty());
        assert!(item.risk_score < 70.0);
    }

    #[test]
    fn test_scored_factory() {
        let item = ItemFactory::scored(Uuid::new_v4(), "Milk", 92.0);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.risk_score, 92.0);
    }

    #[test]
    fn test_category_factory() {
        let item = ItemFactory::in_category(Uuid::new_v4(), "Spinach", "Produce", 85.0);
        assert_eq!(item.category.as_deref(), Some("Produce"));
        assert_eq!(item.risk_score, 85.0);
    }
}
