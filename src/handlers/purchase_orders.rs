// src/handlers/purchase_orders.rs

use axum::{
    extract::{Path, Query, State},
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
    handlers::ReportQuery,
    models::{buyer::PurchaseOrdersByBuyer, purchase_order::PurchaseOrder},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePurchaseOrderPayload {
    #[validate(
        required(message = "orderNumber field is required"),
        length(min = 1, message = "orderNumber field cannot be empty")
    )]
    pub order_number: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    #[validate(required(message = "orderDate field is required"))]
    pub order_date: Option<NaiveDate>,

    #[validate(
        required(message = "trackingCode field is required"),
        length(min = 1, message = "trackingCode field cannot be empty")
    )]
    pub tracking_code: Option<String>,

    #[validate(
        required(message = "buyerId field is required"),
        range(min = 1, message = "buyerId must be positive")
    )]
    pub buyer_id: Option<i64>,

    #[validate(
        required(message = "productRecordId field is required"),
        range(min = 1, message = "productRecordId must be positive")
    )]
    pub product_record_id: Option<i64>,

    #[validate(
        required(message = "orderStatusId field is required"),
        range(min = 1, message = "orderStatusId must be positive")
    )]
    pub order_status_id: Option<i64>,
}

impl CreatePurchaseOrderPayload {
    fn into_order(self) -> PurchaseOrder {
        PurchaseOrder {
            id: 0,
            order_number: self.order_number.unwrap_or_default(),
            order_date: self.order_date.unwrap_or_default(),
            tracking_code: self.tracking_code.unwrap_or_default(),
            buyer_id: self.buyer_id.unwrap_or_default(),
            product_record_id: self.product_record_id.unwrap_or_default(),
            order_status_id: self.order_status_id.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/purchase_orders",
    tag = "Purchase Orders",
    responses((status = 200, description = "Todos os pedidos de compra", body = [PurchaseOrder]))
)]
pub async fn list_purchase_orders(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let orders = app_state.purchase_order_service.get_all(&scope).await?;
    Ok(response::ok(orders))
}

#[utoipa::path(
    get,
    path = "/api/v1/purchase_orders/{id}",
    tag = "Purchase Orders",
    params(("id" = i64, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido de compra", body = PurchaseOrder),
        (status = 404, description = "purchase order not found")
    )
)]
pub async fn get_purchase_order(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let order = app_state.purchase_order_service.get(&scope, id).await?;
    Ok(response::ok(order))
}

#[utoipa::path(
    post,
    path = "/api/v1/purchase_orders",
    tag = "Purchase Orders",
    request_body = CreatePurchaseOrderPayload,
    responses(
        (status = 201, description = "Pedido criado", body = PurchaseOrder),
        (status = 409, description = "order_number já existe, comprador ou registro inexistente"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_purchase_order(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreatePurchaseOrderPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let order = app_state
        .purchase_order_service
        .create(&scope, payload.into_order())
        .await?;
    Ok(response::created(order))
}

// Mesmo relatório de `/buyers/reportPurchaseOrder`, exposto também sob os pedidos.
#[utoipa::path(
    get,
    path = "/api/v1/purchase_orders/reportPurchaseOrder",
    tag = "Purchase Orders",
    params(ReportQuery),
    responses(
        (status = 200, description = "Pedidos de compra por comprador", body = [PurchaseOrdersByBuyer]),
        (status = 404, description = "buyer not found")
    )
)]
pub async fn report_by_buyer(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Query(query), _): WithRejection<Query<ReportQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state
        .buyer_service
        .report_purchase_orders(&scope, query.id)
        .await?;
    Ok(response::ok(report))
}
