// src/middleware/scope.rs

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Instrument;

use crate::{
    common::{error::ApiError, scope::RequestScope},
    config::AppState,
};

// ---
// Middleware: abre o `RequestScope` de cada requisição.
//
// - coloca o escopo nas extensions (o extrator `RequestScope` o lê de lá);
// - se o future da requisição for descartado (cliente desconectou), o drop
//   guard cancela o token e as chamadas ao banco em andamento são abortadas;
// - se o prazo configurado estourar, cancela o token e responde 504.
// ---
pub async fn request_scope(
    State(app_state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let scope = RequestScope::new();
    req.extensions_mut().insert(scope.clone());

    let guard = scope.token().clone().drop_guard();

    let span = tracing::info_span!(
        "request",
        request_id = %scope.request_id(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    let outcome = tokio::time::timeout(app_state.request_timeout, next.run(req))
        .instrument(span)
        .await;

    let response = match outcome {
        Ok(response) => response,
        Err(_) => {
            scope.cancel();
            tracing::warn!(
                request_id = %scope.request_id(),
                timeout_ms = app_state.request_timeout.as_millis() as u64,
                "request deadline elapsed"
            );
            ApiError::new(StatusCode::GATEWAY_TIMEOUT, "request timed out").into_response()
        }
    };

    // Requisição concluída: o token não deve mais disparar.
    guard.disarm();
    response
}
