// src/models/inbound_order.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InboundOrder {
    pub id: i64,
    #[schema(value_type = String, format = Date)]
    pub order_date: NaiveDate,
    #[schema(example = "IO-0001")]
    pub order_number: String,
    pub employee_id: i64,
    pub product_batch_id: i64,
    pub warehouse_id: i64,
}
