// src/models/buyer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Buyer {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
pub struct BuyerPatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct PurchaseOrdersByBuyer {
    pub buyer_id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub orders_count: i64,
}
