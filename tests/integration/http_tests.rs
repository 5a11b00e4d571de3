//! HTTP endpoint integration tests
//!
//! Spins up the actix app in-process over an in-memory SQLite database and
//! exercises the alert and health endpoints through real requests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::Value;
    use uuid::Uuid;

    use freshguard::config::Config;
    use freshguard::server::routes;
    use freshguard::server::state::AppState;
    use freshguard::services::alerts::AlertService;

    use crate::common::fixtures::{self, ItemFactory};
    use crate::common::TestDatabase;

    async fn test_state() -> (TestDatabase, AppState) {
        let db = TestDatabase::new().await;
        let config = Config::default();
        let alerts = Arc::new(AlertService::new(db.db_arc(), config.alerts().clone()));
        let state = AppState::new(config, db.db_arc(), alerts);
        (db, state)
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(routes::health::configure_routes)
                    .configure(routes::alerts::configure_routes),
            )
            .await
        };
    }

    /// POST /api/v1/alerts/generate creates and returns new alerts
    #[tokio::test]
    async fn test_generate_endpoint() {
        let (db, state) = test_state().await;
        let app = test_app!(state);
        let user_id = Uuid::new_v4();

        fixtures::insert_item(db.db(), &ItemFactory::scored(user_id, "Milk", 92.0)).await;
        fixtures::insert_item(db.db(), &ItemFactory::scored(user_id, "Rice", 30.0)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/alerts/generate")
            .insert_header(("X-User-Id", user_id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["alert_type"], "consume_now");
        assert!(data[0]["message"].as_str().unwrap().contains("Milk"));
    }

    /// Requests without a caller identity are rejected with 400
    #[tokio::test]
    async fn test_missing_user_header_is_rejected() {
        let (_db, state) = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/alerts/generate")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    /// A malformed user id is rejected with 400
    #[tokio::test]
    async fn test_invalid_user_header_is_rejected() {
        let (_db, state) = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/v1/alerts")
            .insert_header(("X-User-Id", "not-a-uuid"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("not-a-uuid")
        );
    }

    /// GET /api/v1/alerts lists active alerts with joined item fields
    #[tokio::test]
    async fn test_list_endpoint() {
        let (db, state) = test_state().await;
        let alerts = Arc::clone(&state.alerts);
        let app = test_app!(state);
        let user_id = Uuid::new_v4();

        fixtures::insert_item(
            db.db(),
            &ItemFactory::in_category(user_id, "Milk", "Dairy", 95.0),
        )
        .await;
        fixtures::insert_item(
            db.db(),
            &ItemFactory::in_category(user_id, "Bread", "Bakery", 72.0),
        )
        .await;
        alerts.generate_alerts(user_id).await.unwrap();

        let req = test::TestRequest::get()
            .uri("/api/v1/alerts")
            .insert_header(("X-User-Id", user_id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        // Strongest risk first
        assert_eq!(data[0]["item_name"], "Milk");
        assert_eq!(data[0]["category"], "Dairy");
        assert_eq!(data[1]["item_name"], "Bread");
    }

    /// GET /api/v1/alerts/count returns the badge count
    #[tokio::test]
    async fn test_count_endpoint() {
        let (db, state) = test_state().await;
        let alerts = Arc::clone(&state.alerts);
        let app = test_app!(state);
        let user_id = Uuid::new_v4();

        fixtures::insert_item(db.db(), &ItemFactory::scored(user_id, "Milk", 95.0)).await;
        fixtures::insert_item(db.db(), &ItemFactory::scored(user_id, "Yogurt", 85.0)).await;
        alerts.generate_alerts(user_id).await.unwrap();

        let req = test::TestRequest::get()
            .uri("/api/v1/alerts/count")
            .insert_header(("X-User-Id", user_id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["count"], 2);
    }

    /// POST /api/v1/alerts/{id}/dismiss reports whether anything changed
    #[tokio::test]
    async fn test_dismiss_endpoint() {
        let (db, state) = test_state().await;
        let alerts = Arc::clone(&state.alerts);
        let app = test_app!(state);
        let user_id = Uuid::new_v4();

        fixtures::insert_item(db.db(), &ItemFactory::scored(user_id, "Milk", 95.0)).await;
        let created = alerts.generate_alerts(user_id).await.unwrap();
        let uri = format!("/api/v1/alerts/{}/dismiss", created[0].id);

        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header(("X-User-Id", user_id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["dismissed"], true);

        // Second dismissal finds nothing active
        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header(("X-User-Id", user_id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["dismissed"], false);
    }

    /// Dismissing another user's alert reports false over HTTP too
    #[tokio::test]
    async fn test_dismiss_endpoint_is_owner_scoped() {
        let (db, state) = test_state().await;
        let alerts = Arc::clone(&state.alerts);
        let app = test_app!(state);
        let alice = Uuid::new_v4();

        fixtures::insert_item(db.db(), &ItemFactory::scored(alice, "Milk", 95.0)).await;
        let created = alerts.generate_alerts(alice).await.unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/alerts/{}/dismiss", created[0].id))
            .insert_header(("X-User-Id", Uuid::new_v4().to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["dismissed"], false);
        assert_eq!(alerts.active_alert_count(alice).await, 1);
    }

    /// POST /api/v1/alerts/dismiss-all clears the slate and counts it
    #[tokio::test]
    async fn test_dismiss_all_endpoint() {
        let (db, state) = test_state().await;
        let alerts = Arc::clone(&state.alerts);
        let app = test_app!(state);
        let user_id = Uuid::new_v4();

        fixtures::insert_item(db.db(), &ItemFactory::scored(user_id, "Milk", 95.0)).await;
        fixtures::insert_item(db.db(), &ItemFactory::scored(user_id, "Yogurt", 85.0)).await;
        alerts.generate_alerts(user_id).await.unwrap();

        let req = test::TestRequest::post()
            .uri("/api/v1/alerts/dismiss-all")
            .insert_header(("X-User-Id", user_id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["dismissed"], 2);

        // Idempotent
        let req = test::TestRequest::post()
            .uri("/api/v1/alerts/dismiss-all")
            .insert_header(("X-User-Id", user_id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["dismissed"], 0);
    }

    /// GET /health reports healthy without touching the store
    #[tokio::test]
    async fn test_health_endpoint() {
        let (_db, state) = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "healthy");
    }

    /// GET /health/detailed probes the store
    #[tokio::test]
    async fn test_detailed_health_endpoint() {
        let (_db, state) = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/health/detailed").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["database"]["connected"], true);
    }

    /// GET /version reports build metadata
    #[tokio::test]
    async fn test_version_endpoint() {
        let (_db, state) = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/version").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["data"]["build_time"].is_string());
    }
}
