// src/models/locality.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Locality {
    #[schema(example = "5700")]
    pub id: String,
    #[schema(example = "San Luis")]
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

// --- Relatórios por localidade ---

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct ReportSellers {
    pub locality_id: String,
    pub locality_name: String,
    pub sellers_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct ReportCarries {
    pub locality_id: String,
    pub locality_name: String,
    pub carries_count: i64,
}
