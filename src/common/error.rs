// src/common/error.rs

use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// ---
// Entidade referenciada por uma chave estrangeira
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referenced {
    Employee,
    Warehouse,
    ProductBatch,
    ProductRecord,
    Product,
    Section,
    Locality,
    Seller,
    Buyer,
    Unknown,
}

impl Referenced {
    pub fn as_str(&self) -> &'static str {
        match self {
            Referenced::Employee => "employee",
            Referenced::Warehouse => "warehouse",
            Referenced::ProductBatch => "product_batch",
            Referenced::ProductRecord => "product_record",
            Referenced::Product => "product",
            Referenced::Section => "section",
            Referenced::Locality => "locality",
            Referenced::Seller => "seller",
            Referenced::Buyer => "buyer",
            Referenced::Unknown => "entity",
        }
    }
}

impl fmt::Display for Referenced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---
// Camada de repositório: o que o banco "disse", já classificado.
// Nenhum erro do driver sobe além daqui.
// ---
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("no rows matched")]
    NotFound,

    #[error("duplicate key (constraint: {})", .constraint.as_deref().unwrap_or("?"))]
    DuplicateKey { constraint: Option<String> },

    #[error("foreign key points to a missing {0}")]
    ForeignKeyMissing(Referenced),

    #[error("value out of range: {0}")]
    ValueOutOfRange(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("storage failure: {0}")]
    Internal(String),
}

// ---
// Camada de serviço: a taxonomia estável que os handlers conhecem.
// ---
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("the associated {0} does not exist")]
    ForeignKeyNotFound(Referenced),

    #[error("{0}")]
    InvalidValue(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("internal server error")]
    Internal(String),
}

// Violação de unicidade inesperada num DELETE (ex.: trigger).
const DELETE_CONFLICT: &str = "delete conflicts with an existing record";

impl AppError {
    /// Traduz um erro de armazenamento para a taxonomia do serviço e registra o original.
    ///
    /// `not_found` e `conflict` são as mensagens do recurso que está sendo operado.
    pub fn from_storage(err: StorageError, not_found: &str, conflict: &str) -> Self {
        match err {
            StorageError::NotFound => {
                tracing::warn!("{}", not_found);
                AppError::NotFound(not_found.to_string())
            }
            StorageError::DuplicateKey { constraint } => {
                tracing::warn!(constraint = ?constraint, "{}", conflict);
                AppError::AlreadyExists(conflict.to_string())
            }
            StorageError::ForeignKeyMissing(parent) => {
                tracing::warn!("referenced {} missing", parent);
                AppError::ForeignKeyNotFound(parent)
            }
            StorageError::ValueOutOfRange(detail) => {
                tracing::warn!(detail = %detail, "value rejected by the store");
                AppError::InvalidValue("invalid value".to_string())
            }
            StorageError::Cancelled => {
                tracing::warn!("storage call aborted by cancelled request");
                AppError::Cancelled
            }
            StorageError::Internal(detail) => {
                tracing::error!(detail = %detail, "storage failure");
                AppError::Internal(detail)
            }
        }
    }

    /// No delete, uma FK violada quer dizer que ainda há linhas filhas apontando para o registro.
    pub fn from_delete(err: StorageError, not_found: &str, still_referenced: &str) -> Self {
        match err {
            StorageError::ForeignKeyMissing(via) => {
                tracing::warn!(via = %via, "{}", still_referenced);
                AppError::InvalidValue(still_referenced.to_string())
            }
            other => Self::from_storage(other, not_found, DELETE_CONFLICT),
        }
    }

    /// Chave de negócio já ocupada (detectada pelo pré-check `exists`).
    pub fn conflict(message: &str) -> Self {
        tracing::warn!("{}", message);
        AppError::AlreadyExists(message.to_string())
    }

    pub fn invalid(message: &str) -> Self {
        tracing::warn!("{}", message);
        AppError::InvalidValue(message.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::ForeignKeyNotFound(_) => StatusCode::CONFLICT,
            AppError::InvalidValue(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Cancelled => client_closed_request(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// 499 não existe em `StatusCode`; é o código de fato para "cliente desistiu".
pub fn client_closed_request() -> StatusCode {
    StatusCode::from_u16(499).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

// ---
// Camada de transporte: status + mensagem, pronto para virar resposta.
// ---
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError { status: err.status(), message: err.to_string() }
    }
}

// Erros de validação viram 422 com a mensagem do primeiro campo (ordem alfabética,
// para a resposta ser determinística).
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .next()
            .unwrap_or_else(|| "invalid request".to_string());

        ApiError::unprocessable(message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "rejected request body");
        ApiError::bad_request("invalid request body")
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "rejected path parameter");
        ApiError::bad_request("invalid id")
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "rejected query string");
        ApiError::bad_request("invalid query parameter")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
