// src/models/purchase_order.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PurchaseOrder {
    pub id: i64,
    #[schema(example = "PO-0001")]
    pub order_number: String,
    #[schema(value_type = String, format = Date)]
    pub order_date: NaiveDate,
    pub tracking_code: String,
    pub buyer_id: i64,
    pub product_record_id: i64,
    pub order_status_id: i64,
}
