// src/handlers/products.rs

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
    common::{
        error::ApiError, response, scope::RequestScope, validation::validate_not_negative_f64,
    },
    config::AppState,
    handlers::ReportQuery,
    models::product::{Product, ProductPatch, ReportRecord},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductPayload {
    #[validate(
        required(message = "description field is required"),
        length(min = 1, message = "description field cannot be empty")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "productCode field is required"),
        length(min = 1, message = "productCode field cannot be empty")
    )]
    pub product_code: Option<String>,

    #[validate(
        required(message = "expirationRate field is required"),
        custom(function = "validate_not_negative_f64")
    )]
    pub expiration_rate: Option<f64>,

    #[validate(
        required(message = "freezingRate field is required"),
        custom(function = "validate_not_negative_f64")
    )]
    pub freezing_rate: Option<f64>,

    #[validate(
        required(message = "height field is required"),
        custom(function = "validate_not_negative_f64")
    )]
    pub height: Option<f64>,

    #[validate(
        required(message = "length field is required"),
        custom(function = "validate_not_negative_f64")
    )]
    pub length: Option<f64>,

    #[validate(
        required(message = "width field is required"),
        custom(function = "validate_not_negative_f64")
    )]
    pub width: Option<f64>,

    #[validate(
        required(message = "netWeight field is required"),
        custom(function = "validate_not_negative_f64")
    )]
    pub net_weight: Option<f64>,

    #[validate(required(message = "recommendedFreezingTemperature field is required"))]
    pub recommended_freezing_temperature: Option<f64>,

    #[validate(
        required(message = "productTypeId field is required"),
        range(min = 1, message = "productTypeId must be positive")
    )]
    pub product_type_id: Option<i64>,

    // Opcional: produto pode não ter vendedor.
    #[validate(range(min = 1, message = "sellerId must be positive"))]
    pub seller_id: Option<i64>,
}

impl CreateProductPayload {
    fn into_product(self) -> Product {
        Product {
            id: 0,
            description: self.description.unwrap_or_default(),
            product_code: self.product_code.unwrap_or_default(),
            expiration_rate: self.expiration_rate.unwrap_or_default(),
            freezing_rate: self.freezing_rate.unwrap_or_default(),
            height: self.height.unwrap_or_default(),
            length: self.length.unwrap_or_default(),
            width: self.width.unwrap_or_default(),
            net_weight: self.net_weight.unwrap_or_default(),
            recommended_freezing_temperature: self.recommended_freezing_temperature.unwrap_or_default(),
            product_type_id: self.product_type_id.unwrap_or_default(),
            seller_id: self.seller_id,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    responses((status = 200, description = "Todos os produtos", body = [Product]))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let products = app_state.product_service.get_all(&scope).await?;
    Ok(response::ok(products))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto", body = Product),
        (status = 404, description = "product not found")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let product = app_state.product_service.get(&scope, id).await?;
    Ok(response::ok(product))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 409, description = "product_code já existe ou vendedor inexistente"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProductPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let product = app_state
        .product_service
        .create(&scope, payload.into_product())
        .await?;
    Ok(response::created(product))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "Products",
    request_body = ProductPatch,
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 404, description = "product not found"),
        (status = 409, description = "product_code already exists")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(changes), _): WithRejection<Json<ProductPatch>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    changes.validate()?;

    let product = app_state.product_service.update(&scope, id, changes).await?;
    Ok(response::ok(product))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "product not found")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.product_service.delete(&scope, id).await?;
    Ok(response::no_content())
}

#[utoipa::path(
    get,
    path = "/api/v1/products/reportRecords",
    tag = "Products",
    params(ReportQuery),
    responses(
        (status = 200, description = "Registros de preço por produto", body = [ReportRecord]),
        (status = 404, description = "product not found")
    )
)]
pub async fn report_records(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Query(query), _): WithRejection<Query<ReportQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state.product_service.report_records(&scope, query.id).await?;
    Ok(response::ok(report))
}
