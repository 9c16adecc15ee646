// src/models/product_batch.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductBatch {
    pub id: i64,
    pub batch_number: i32,
    pub current_quantity: i32,
    pub current_temperature: f64,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    pub initial_quantity: i32,
    #[schema(value_type = String, format = Date)]
    pub manufacturing_date: NaiveDate,
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    pub product_id: i64,
    pub section_id: i64,
}
