// src/models/product_record.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductRecord {
    pub id: i64,
    #[schema(value_type = String, format = Date, example = "2030-12-24")]
    pub last_update_date: NaiveDate,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub product_id: i64,
}
