// src/handlers/product_records.rs

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
    common::{
        error::ApiError, response, scope::RequestScope, validation::validate_not_negative_f64,
    },
    config::AppState,
    models::product_record::ProductRecord,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRecordPayload {
    // YYYY-MM-DD; a regra "não pode ser passado" fica no serviço.
    #[schema(value_type = Option<String>, format = Date, example = "2030-12-24")]
    #[validate(required(message = "lastUpdateDate field is required"))]
    pub last_update_date: Option<NaiveDate>,

    #[validate(
        required(message = "purchasePrice field is required"),
        custom(function = "validate_not_negative_f64")
    )]
    pub purchase_price: Option<f64>,

    #[validate(
        required(message = "salePrice field is required"),
        custom(function = "validate_not_negative_f64")
    )]
    pub sale_price: Option<f64>,

    #[validate(
        required(message = "productId field is required"),
        range(min = 1, message = "productId must be positive")
    )]
    pub product_id: Option<i64>,
}

impl CreateProductRecordPayload {
    fn into_record(self) -> ProductRecord {
        ProductRecord {
            id: 0,
            last_update_date: self.last_update_date.unwrap_or_default(),
            purchase_price: self.purchase_price.unwrap_or_default(),
            sale_price: self.sale_price.unwrap_or_default(),
            product_id: self.product_id.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/productRecords",
    tag = "Product Records",
    responses((status = 200, description = "Todos os registros de preço", body = [ProductRecord]))
)]
pub async fn list_product_records(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let records = app_state.product_record_service.get_all(&scope).await?;
    Ok(response::ok(records))
}

#[utoipa::path(
    get,
    path = "/api/v1/productRecords/{id}",
    tag = "Product Records",
    params(("id" = i64, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro de preço", body = ProductRecord),
        (status = 404, description = "product record not found")
    )
)]
pub async fn get_product_record(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let record = app_state.product_record_service.get(&scope, id).await?;
    Ok(response::ok(record))
}

#[utoipa::path(
    post,
    path = "/api/v1/productRecords",
    tag = "Product Records",
    request_body = CreateProductRecordPayload,
    responses(
        (status = 201, description = "Registro criado", body = ProductRecord),
        (status = 409, description = "the associated product does not exist"),
        (status = 422, description = "invalid date / payload inválido")
    )
)]
pub async fn create_product_record(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProductRecordPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let record = app_state
        .product_record_service
        .create(&scope, payload.into_record())
        .await?;
    Ok(response::created(record))
}
