// src/models/warehouse.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_negative_i32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Warehouse {
    pub id: i64,
    #[schema(example = "WH-01")]
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: String,
}

#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
pub struct WarehousePatch {
    pub warehouse_code: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    #[validate(custom(function = "validate_not_negative_i32"))]
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
    pub locality_id: Option<String>,
}
