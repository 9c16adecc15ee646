// src/models/employee.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: i64,
    #[schema(example = "402323")]
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
}

#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
pub struct EmployeePatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i64>,
}

// Relatório: funcionário + quantidade de ordens de entrada
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct EmployeeWithInboundOrders {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
    pub inbound_orders_count: i64,
}
