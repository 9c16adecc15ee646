// src/common/scope.rs

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::common::{db_utils::classify, error::StorageError};

/// Escopo de uma requisição: id para os logs e o sinal de cancelamento que
/// desce do handler até a chamada ao banco.
#[derive(Debug, Clone)]
pub struct RequestScope {
    request_id: Uuid,
    token: CancellationToken,
}

impl RequestScope {
    pub fn new() -> Self {
        Self { request_id: Uuid::new_v4(), token: CancellationToken::new() }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Falha cedo se a requisição já foi abandonada.
    pub fn check(&self) -> Result<(), StorageError> {
        if self.is_cancelled() {
            return Err(StorageError::Cancelled);
        }
        Ok(())
    }

    /// Executa uma chamada ao banco disputando com o cancelamento.
    ///
    /// Se o token disparar primeiro, o future do sqlx é descartado (o que
    /// aborta o statement em andamento) e o resultado é `Cancelled`.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        self.check()?;
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(StorageError::Cancelled),
            res = fut => res.map_err(classify),
        }
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

// O middleware de escopo coloca o `RequestScope` nas extensions; sem ele
// (ex.: testes montando só um handler) cria-se um escopo novo.
impl<S> FromRequestParts<S> for RequestScope
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<RequestScope>().cloned().unwrap_or_default())
    }
}
