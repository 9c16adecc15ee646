// src/models/section.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_negative_i32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Section {
    pub id: i64,
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i64,
    pub product_type_id: i64,
}

// Temperaturas: `None` ou -273 deixam o valor como está; 0 é um valor real.
#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
pub struct SectionPatch {
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    #[validate(custom(function = "validate_not_negative_i32"))]
    pub current_capacity: Option<i32>,
    #[validate(custom(function = "validate_not_negative_i32"))]
    pub minimum_capacity: Option<i32>,
    #[validate(custom(function = "validate_not_negative_i32"))]
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<i64>,
    pub product_type_id: Option<i64>,
}

// Relatório: seção + soma das quantidades atuais dos lotes
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct ProductsBySection {
    pub section_id: i64,
    pub section_number: i32,
    pub products_count: i64,
}
