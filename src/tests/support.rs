// src/tests/support.rs

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::{
    common::{error::StorageError, scope::RequestScope},
    config::AppState,
    db::SellerRepository,
    models::seller::Seller,
    routes,
    tests::fakes::MemStore,
};

pub fn app(store: &MemStore) -> Router {
    routes::router(AppState::new(store.repositories(), Duration::from_secs(5), "localhost:8080"))
}

/// Envia uma requisição ao router e devolve status + corpo em JSON.
///
/// Corpos que não são JSON (ex.: o health) voltam como `Value::String`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    send_request(app, builder.body(body).unwrap()).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();

    send_request(app, req).await
}

async fn send_request(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = tokio::time::timeout(Duration::from_secs(5), app.clone().oneshot(req))
        .await
        .expect("request hung")
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}

// ---
// Repositório de vendedores que nunca responde antes do cancelamento.
// Guarda o token do escopo para o teste conferir que ele foi disparado.
// ---
#[derive(Clone, Default)]
pub struct StallingSellers {
    seen: Arc<Mutex<Option<CancellationToken>>>,
}

impl StallingSellers {
    pub fn seen_token(&self) -> Option<CancellationToken> {
        self.seen.lock().unwrap().clone()
    }

    async fn stall<T>(&self, scope: &RequestScope) -> Result<T, StorageError> {
        *self.seen.lock().unwrap() = Some(scope.token().clone());
        scope.token().cancelled().await;
        Err(StorageError::Cancelled)
    }
}

#[async_trait]
impl SellerRepository for StallingSellers {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Seller>, StorageError> {
        self.stall(scope).await
    }

    async fn get(&self, scope: &RequestScope, _id: i64) -> Result<Seller, StorageError> {
        self.stall(scope).await
    }

    async fn exists(&self, scope: &RequestScope, _cid: i64) -> Result<bool, StorageError> {
        self.stall(scope).await
    }

    async fn save(&self, scope: &RequestScope, _seller: &Seller) -> Result<i64, StorageError> {
        self.stall(scope).await
    }

    async fn update(&self, scope: &RequestScope, _seller: &Seller) -> Result<(), StorageError> {
        self.stall(scope).await
    }

    async fn delete(&self, scope: &RequestScope, _id: i64) -> Result<(), StorageError> {
        self.stall(scope).await
    }
}
