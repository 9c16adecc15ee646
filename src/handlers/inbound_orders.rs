// src/handlers/inbound_orders.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{error::ApiError, response, scope::RequestScope},
    config::AppState,
    models::inbound_order::InboundOrder,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInboundOrderPayload {
    #[schema(value_type = Option<String>, format = Date)]
    #[validate(required(message = "orderDate field is required"))]
    pub order_date: Option<NaiveDate>,

    #[validate(
        required(message = "orderNumber field is required"),
        length(min = 1, message = "orderNumber field cannot be empty")
    )]
    pub order_number: Option<String>,

    #[validate(
        required(message = "employeeId field is required"),
        range(min = 1, message = "employeeId must be positive")
    )]
    pub employee_id: Option<i64>,

    #[validate(
        required(message = "productBatchId field is required"),
        range(min = 1, message = "productBatchId must be positive")
    )]
    pub product_batch_id: Option<i64>,

    #[validate(
        required(message = "warehouseId field is required"),
        range(min = 1, message = "warehouseId must be positive")
    )]
    pub warehouse_id: Option<i64>,
}

impl CreateInboundOrderPayload {
    fn into_order(self) -> InboundOrder {
        InboundOrder {
            id: 0,
            order_date: self.order_date.unwrap_or_default(),
            order_number: self.order_number.unwrap_or_default(),
            employee_id: self.employee_id.unwrap_or_default(),
            product_batch_id: self.product_batch_id.unwrap_or_default(),
            warehouse_id: self.warehouse_id.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/inboundOrders",
    tag = "Inbound Orders",
    responses((status = 200, description = "Todas as ordens de entrada", body = [InboundOrder]))
)]
pub async fn list_inbound_orders(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let orders = app_state.inbound_order_service.get_all(&scope).await?;
    Ok(response::ok(orders))
}

#[utoipa::path(
    get,
    path = "/api/v1/inboundOrders/{id}",
    tag = "Inbound Orders",
    params(("id" = i64, Path, description = "ID da ordem")),
    responses(
        (status = 200, description = "Ordem de entrada", body = InboundOrder),
        (status = 404, description = "inbound order not found")
    )
)]
pub async fn get_inbound_order(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let order = app_state.inbound_order_service.get(&scope, id).await?;
    Ok(response::ok(order))
}

#[utoipa::path(
    post,
    path = "/api/v1/inboundOrders",
    tag = "Inbound Orders",
    request_body = CreateInboundOrderPayload,
    responses(
        (status = 201, description = "Ordem criada", body = InboundOrder),
        (status = 409, description = "order_number já existe ou funcionário / armazém / lote inexistente"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_inbound_order(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateInboundOrderPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let order = app_state
        .inbound_order_service
        .create(&scope, payload.into_order())
        .await?;
    Ok(response::created(order))
}
