// src/common/db_utils.rs

use crate::common::error::{Referenced, StorageError};

// SQLSTATEs do PostgreSQL que interessam à classificação
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";
const INVALID_DATETIME_FORMAT: &str = "22007";
const DATETIME_FIELD_OVERFLOW: &str = "22008";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

// Ordem importa: nomes mais longos primeiro ("product_batch_id" antes de "product_id").
const FOREIGN_KEY_COLUMNS: &[(&str, Referenced)] = &[
    ("product_batch_id", Referenced::ProductBatch),
    ("product_record_id", Referenced::ProductRecord),
    ("employee_id", Referenced::Employee),
    ("warehouse_id", Referenced::Warehouse),
    ("product_id", Referenced::Product),
    ("section_id", Referenced::Section),
    ("locality_id", Referenced::Locality),
    ("seller_id", Referenced::Seller),
    ("buyer_id", Referenced::Buyer),
];

/// O que sobra de um erro do driver depois de extrair os metadados estruturados.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DriverSignal {
    pub code: Option<String>,
    pub constraint: Option<String>,
    pub message: String,
}

/// Classifica um `sqlx::Error` em um `StorageError`.
///
/// É o único ponto da aplicação que olha para códigos do driver.
pub fn classify(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::RowNotFound => StorageError::NotFound,
        sqlx::Error::Database(db_err) => classify_signal(DriverSignal {
            code: db_err.code().map(|c| c.into_owned()),
            constraint: db_err.constraint().map(str::to_owned),
            message: db_err.message().to_owned(),
        }),
        // Pool esgotado, conexão perdida, falha de decode, etc.
        other => StorageError::Internal(other.to_string()),
    }
}

pub fn classify_signal(signal: DriverSignal) -> StorageError {
    match signal.code.as_deref() {
        Some(UNIQUE_VIOLATION) => StorageError::DuplicateKey { constraint: signal.constraint },
        Some(FOREIGN_KEY_VIOLATION) => StorageError::ForeignKeyMissing(referenced_parent(&signal)),
        Some(
            INVALID_DATETIME_FORMAT
            | DATETIME_FIELD_OVERFLOW
            | NUMERIC_VALUE_OUT_OF_RANGE
            | STRING_DATA_RIGHT_TRUNCATION
            | CHECK_VIOLATION,
        ) => StorageError::ValueOutOfRange(signal.message),
        _ => StorageError::Internal(signal.message),
    }
}

/// Descobre qual entidade-pai está faltando: primeiro pelo nome da constraint
/// (`<tabela>_<coluna>_fkey`), depois varrendo a mensagem do driver.
pub fn referenced_parent(signal: &DriverSignal) -> Referenced {
    signal
        .constraint
        .as_deref()
        .and_then(parent_from_text)
        .or_else(|| parent_from_text(&signal.message))
        .unwrap_or(Referenced::Unknown)
}

fn parent_from_text(text: &str) -> Option<Referenced> {
    FOREIGN_KEY_COLUMNS
        .iter()
        .find(|(column, _)| text.contains(column))
        .map(|(_, parent)| *parent)
}

/// Relatório "por chave" sem linha nenhuma significa que o pai não existe.
pub fn non_empty<T>(rows: Vec<T>) -> Result<Vec<T>, StorageError> {
    if rows.is_empty() {
        return Err(StorageError::NotFound);
    }
    Ok(rows)
}
