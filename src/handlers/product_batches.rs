// src/handlers/product_batches.rs

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
        error::ApiError, response, scope::RequestScope, validation::validate_not_negative_i32,
    },
    config::AppState,
    models::product_batch::ProductBatch,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductBatchPayload {
    #[validate(
        required(message = "batchNumber field is required"),
        range(min = 1, message = "batchNumber must be positive")
    )]
    pub batch_number: Option<i32>,

    #[validate(
        required(message = "currentQuantity field is required"),
        custom(function = "validate_not_negative_i32")
    )]
    pub current_quantity: Option<i32>,

    #[validate(required(message = "currentTemperature field is required"))]
    pub current_temperature: Option<f64>,

    #[schema(value_type = Option<String>, format = Date)]
    #[validate(required(message = "dueDate field is required"))]
    pub due_date: Option<NaiveDate>,

    #[validate(
        required(message = "initialQuantity field is required"),
        custom(function = "validate_not_negative_i32")
    )]
    pub initial_quantity: Option<i32>,

    #[schema(value_type = Option<String>, format = Date)]
    #[validate(required(message = "manufacturingDate field is required"))]
    pub manufacturing_date: Option<NaiveDate>,

    #[validate(
        required(message = "manufacturingHour field is required"),
        range(min = 0, max = 23, message = "manufacturingHour must be between 0 and 23")
    )]
    pub manufacturing_hour: Option<i32>,

    #[validate(required(message = "minimumTemperature field is required"))]
    pub minimum_temperature: Option<f64>,

    #[validate(
        required(message = "productId field is required"),
        range(min = 1, message = "productId must be positive")
    )]
    pub product_id: Option<i64>,

    #[validate(
        required(message = "sectionId field is required"),
        range(min = 1, message = "sectionId must be positive")
    )]
    pub section_id: Option<i64>,
}

impl CreateProductBatchPayload {
    fn into_batch(self) -> ProductBatch {
        ProductBatch {
            id: 0,
            batch_number: self.batch_number.unwrap_or_default(),
            current_quantity: self.current_quantity.unwrap_or_default(),
            current_temperature: self.current_temperature.unwrap_or_default(),
            due_date: self.due_date.unwrap_or_default(),
            initial_quantity: self.initial_quantity.unwrap_or_default(),
            manufacturing_date: self.manufacturing_date.unwrap_or_default(),
            manufacturing_hour: self.manufacturing_hour.unwrap_or_default(),
            minimum_temperature: self.minimum_temperature.unwrap_or_default(),
            product_id: self.product_id.unwrap_or_default(),
            section_id: self.section_id.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/productBatches",
    tag = "Product Batches",
    responses((status = 200, description = "Todos os lotes", body = [ProductBatch]))
)]
pub async fn list_product_batches(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let batches = app_state.product_batch_service.get_all(&scope).await?;
    Ok(response::ok(batches))
}

#[utoipa::path(
    get,
    path = "/api/v1/productBatches/{id}",
    tag = "Product Batches",
    params(("id" = i64, Path, description = "ID do lote")),
    responses(
        (status = 200, description = "Lote", body = ProductBatch),
        (status = 404, description = "product batch not found")
    )
)]
pub async fn get_product_batch(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let batch = app_state.product_batch_service.get(&scope, id).await?;
    Ok(response::ok(batch))
}

#[utoipa::path(
    post,
    path = "/api/v1/productBatches",
    tag = "Product Batches",
    request_body = CreateProductBatchPayload,
    responses(
        (status = 201, description = "Lote criado", body = ProductBatch),
        (status = 409, description = "batch_number já existe, produto ou seção inexistente"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_product_batch(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProductBatchPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let batch = app_state
        .product_batch_service
        .create(&scope, payload.into_batch())
        .await?;
    Ok(response::created(batch))
}
