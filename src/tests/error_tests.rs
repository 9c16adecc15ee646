// src/tests/error_tests.rs

#[cfg(test)]
mod error_tests {
    use std::{sync::Arc, time::Duration};

    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::{
        common::error::StorageError,
        config::AppState,
        routes,
        tests::{
            fakes::MemStore,
            support::{app, error_message, send, send_raw, StallingSellers},
        },
    };

    #[tokio::test]
    async fn health_answers_ok() {
        let app = app(&MemStore::new());

        let (status, body) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("OK"));
    }

    #[tokio::test]
    async fn openapi_document_lists_the_routes() {
        let app = app(&MemStore::new());

        let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/sellers"].is_object());
        assert!(body["paths"]["/api/v1/sections/reportProducts"].is_object());
        assert_eq!(body["servers"][0]["url"], "http://localhost:8080");
    }

    #[tokio::test]
    async fn non_numeric_path_id_is_a_bad_request() {
        let app = app(&MemStore::new());

        for uri in ["/api/v1/sellers/abc", "/api/v1/sections/1.5", "/api/v1/inboundOrders/x"] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(error_message(&body), "invalid id");
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let store = MemStore::new();
        let app = app(&store);

        let (status, body) = send_raw(&app, Method::POST, "/api/v1/buyers", "{\"card_number_id\": ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&body), "invalid request body");

        // Tipo errado também é corpo inválido, não erro de validação.
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/sections",
            Some(json!({ "section_number": "one" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(store.tables().writes, 0);
    }

    #[tokio::test]
    async fn storage_failure_hides_the_detail() {
        let store = MemStore::new();
        store.tables().fault = Some(StorageError::Internal("connection reset by peer".into()));
        let app = app(&store);

        let (status, body) = send(&app, Method::GET, "/api/v1/warehouses", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_message(&body), "internal server error");
    }

    #[tokio::test]
    async fn failing_existence_check_does_not_insert() {
        let store = MemStore::new();
        store.tables().fault = Some(StorageError::Internal("pool timed out".into()));
        let app = app(&store);

        let body = json!({ "card_number_id": "BUY-9", "first_name": "Carla", "last_name": "Dias" });
        let (status, _) = send(&app, Method::POST, "/api/v1/buyers", Some(body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        store.tables().fault = None;
        assert!(store.tables().buyers.is_empty());
    }

    #[tokio::test]
    async fn store_range_errors_are_unprocessable() {
        let store = MemStore::new();
        let buyer = store.seed_buyer("BUY-1");
        store.tables().fault = Some(StorageError::ValueOutOfRange("numeric field overflow".into()));
        let app = app(&store);

        let (status, body) =
            send(&app, Method::GET, &format!("/api/v1/buyers/{}", buyer.id), None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_message(&body), "invalid value");
    }

    #[tokio::test]
    async fn deadline_cancels_the_pending_storage_call() {
        let store = MemStore::new();
        let stalling = StallingSellers::default();

        let mut repos = store.repositories();
        repos.sellers = Arc::new(stalling.clone());
        let app = routes::router(AppState::new(repos, Duration::from_millis(50), "localhost:8080"));

        let (status, body) = send(&app, Method::GET, "/api/v1/sellers", None).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(error_message(&body), "request timed out");

        let token = stalling.seen_token().expect("storage call never started");
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = app(&MemStore::new());

        let (status, _) = send(&app, Method::GET, "/api/v1/unknown", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
