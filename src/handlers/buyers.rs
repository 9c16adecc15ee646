// src/handlers/buyers.rs

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{error::ApiError, response, scope::RequestScope},
    config::AppState,
    handlers::ReportQuery,
    models::buyer::{Buyer, BuyerPatch, PurchaseOrdersByBuyer},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBuyerPayload {
    #[validate(
        required(message = "cardNumberId field is required"),
        length(min = 1, message = "cardNumberId field cannot be empty")
    )]
    pub card_number_id: Option<String>,

    #[validate(
        required(message = "firstName field is required"),
        length(min = 1, message = "firstName field cannot be empty")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "lastName field is required"),
        length(min = 1, message = "lastName field cannot be empty")
    )]
    pub last_name: Option<String>,
}

impl CreateBuyerPayload {
    fn into_buyer(self) -> Buyer {
        Buyer {
            id: 0,
            card_number_id: self.card_number_id.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/buyers",
    tag = "Buyers",
    responses((status = 200, description = "Todos os compradores", body = [Buyer]))
)]
pub async fn list_buyers(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let buyers = app_state.buyer_service.get_all(&scope).await?;
    Ok(response::ok(buyers))
}

#[utoipa::path(
    get,
    path = "/api/v1/buyers/{id}",
    tag = "Buyers",
    params(("id" = i64, Path, description = "ID do comprador")),
    responses(
        (status = 200, description = "Comprador", body = Buyer),
        (status = 404, description = "buyer not found")
    )
)]
pub async fn get_buyer(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let buyer = app_state.buyer_service.get(&scope, id).await?;
    Ok(response::ok(buyer))
}

#[utoipa::path(
    post,
    path = "/api/v1/buyers",
    tag = "Buyers",
    request_body = CreateBuyerPayload,
    responses(
        (status = 201, description = "Comprador criado", body = Buyer),
        (status = 409, description = "card_number_id already exists"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_buyer(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateBuyerPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let buyer = app_state.buyer_service.create(&scope, payload.into_buyer()).await?;
    Ok(response::created(buyer))
}

#[utoipa::path(
    patch,
    path = "/api/v1/buyers/{id}",
    tag = "Buyers",
    request_body = BuyerPatch,
    params(("id" = i64, Path, description = "ID do comprador")),
    responses(
        (status = 200, description = "Comprador atualizado", body = Buyer),
        (status = 404, description = "buyer not found")
    )
)]
pub async fn update_buyer(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(changes), _): WithRejection<Json<BuyerPatch>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    changes.validate()?;

    let buyer = app_state.buyer_service.update(&scope, id, changes).await?;
    Ok(response::ok(buyer))
}

#[utoipa::path(
    delete,
    path = "/api/v1/buyers/{id}",
    tag = "Buyers",
    params(("id" = i64, Path, description = "ID do comprador")),
    responses(
        (status = 204, description = "Comprador removido"),
        (status = 404, description = "buyer not found")
    )
)]
pub async fn delete_buyer(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.buyer_service.delete(&scope, id).await?;
    Ok(response::no_content())
}

#[utoipa::path(
    get,
    path = "/api/v1/buyers/reportPurchaseOrder",
    tag = "Buyers",
    params(ReportQuery),
    responses(
        (status = 200, description = "Pedidos de compra por comprador", body = [PurchaseOrdersByBuyer]),
        (status = 404, description = "buyer not found")
    )
)]
pub async fn report_purchase_orders(
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
