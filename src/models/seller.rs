// src/models/seller.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Seller {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 10)]
    pub cid: i64,
    #[schema(example = "Frutas do Vale")]
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    #[schema(example = "5700")]
    pub locality_id: String,
}

// PATCH: tudo opcional, nada obrigatório
#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
pub struct SellerPatch {
    #[validate(range(min = 1, message = "cid must be positive"))]
    pub cid: Option<i64>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<String>,
}
