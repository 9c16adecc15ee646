// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_negative_f64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    #[schema(example = "Bananas")]
    pub description: String,
    #[schema(example = "PRD-001")]
    pub product_code: String,
    pub expiration_rate: f64,
    pub freezing_rate: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
    pub net_weight: f64,
    pub recommended_freezing_temperature: f64,
    pub product_type_id: i64,
    // Opcional: produto sem vendedor continua sem vendedor.
    pub seller_id: Option<i64>,
}

#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductPatch {
    pub description: Option<String>,
    pub product_code: Option<String>,
    #[validate(custom(function = "validate_not_negative_f64"))]
    pub expiration_rate: Option<f64>,
    #[validate(custom(function = "validate_not_negative_f64"))]
    pub freezing_rate: Option<f64>,
    #[validate(custom(function = "validate_not_negative_f64"))]
    pub height: Option<f64>,
    #[validate(custom(function = "validate_not_negative_f64"))]
    pub length: Option<f64>,
    #[validate(custom(function = "validate_not_negative_f64"))]
    pub width: Option<f64>,
    #[validate(custom(function = "validate_not_negative_f64"))]
    pub net_weight: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub product_type_id: Option<i64>,
    pub seller_id: Option<i64>,
}

// Relatório: produto + quantidade de registros de preço
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct ReportRecord {
    pub product_id: i64,
    pub description: String,
    pub records_count: i64,
}
