// src/handlers/sections.rs

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
        error::ApiError, response, scope::RequestScope, validation::validate_not_negative_i32,
    },
    config::AppState,
    handlers::ReportQuery,
    models::section::{ProductsBySection, Section, SectionPatch},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSectionPayload {
    #[validate(
        required(message = "sectionNumber field is required"),
        range(min = 1, message = "sectionNumber must be positive")
    )]
    pub section_number: Option<i32>,

    #[validate(required(message = "currentTemperature field is required"))]
    pub current_temperature: Option<f64>,

    #[validate(required(message = "minimumTemperature field is required"))]
    pub minimum_temperature: Option<f64>,

    #[validate(
        required(message = "currentCapacity field is required"),
        custom(function = "validate_not_negative_i32")
    )]
    pub current_capacity: Option<i32>,

    #[validate(
        required(message = "minimumCapacity field is required"),
        custom(function = "validate_not_negative_i32")
    )]
    pub minimum_capacity: Option<i32>,

    #[validate(
        required(message = "maximumCapacity field is required"),
        custom(function = "validate_not_negative_i32")
    )]
    pub maximum_capacity: Option<i32>,

    #[validate(
        required(message = "warehouseId field is required"),
        range(min = 1, message = "warehouseId must be positive")
    )]
    pub warehouse_id: Option<i64>,

    #[validate(
        required(message = "productTypeId field is required"),
        range(min = 1, message = "productTypeId must be positive")
    )]
    pub product_type_id: Option<i64>,
}

impl CreateSectionPayload {
    fn into_section(self) -> Section {
        Section {
            id: 0,
            section_number: self.section_number.unwrap_or_default(),
            current_temperature: self.current_temperature.unwrap_or_default(),
            minimum_temperature: self.minimum_temperature.unwrap_or_default(),
            current_capacity: self.current_capacity.unwrap_or_default(),
            minimum_capacity: self.minimum_capacity.unwrap_or_default(),
            maximum_capacity: self.maximum_capacity.unwrap_or_default(),
            warehouse_id: self.warehouse_id.unwrap_or_default(),
            product_type_id: self.product_type_id.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/sections",
    tag = "Sections",
    responses((status = 200, description = "Todas as seções", body = [Section]))
)]
pub async fn list_sections(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let sections = app_state.section_service.get_all(&scope).await?;
    Ok(response::ok(sections))
}

#[utoipa::path(
    get,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    params(("id" = i64, Path, description = "ID da seção")),
    responses(
        (status = 200, description = "Seção", body = Section),
        (status = 404, description = "section not found")
    )
)]
pub async fn get_section(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let section = app_state.section_service.get(&scope, id).await?;
    Ok(response::ok(section))
}

#[utoipa::path(
    post,
    path = "/api/v1/sections",
    tag = "Sections",
    request_body = CreateSectionPayload,
    responses(
        (status = 201, description = "Seção criada", body = Section),
        (status = 409, description = "section_number já existe ou armazém inexistente"),
        (status = 422, description = "Payload ou capacidades inválidos")
    )
)]
pub async fn create_section(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateSectionPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let section = app_state
        .section_service
        .create(&scope, payload.into_section())
        .await?;
    Ok(response::created(section))
}

#[utoipa::path(
    patch,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    request_body = SectionPatch,
    params(("id" = i64, Path, description = "ID da seção")),
    responses(
        (status = 200, description = "Seção atualizada", body = Section),
        (status = 404, description = "section not found"),
        (status = 409, description = "section_number already exists")
    )
)]
pub async fn update_section(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(changes), _): WithRejection<Json<SectionPatch>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    changes.validate()?;

    let section = app_state.section_service.update(&scope, id, changes).await?;
    Ok(response::ok(section))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    params(("id" = i64, Path, description = "ID da seção")),
    responses(
        (status = 204, description = "Seção removida"),
        (status = 404, description = "section not found"),
        (status = 422, description = "section is still referenced")
    )
)]
pub async fn delete_section(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.section_service.delete(&scope, id).await?;
    Ok(response::no_content())
}

#[utoipa::path(
    get,
    path = "/api/v1/sections/reportProducts",
    tag = "Sections",
    params(ReportQuery),
    responses(
        (status = 200, description = "Quantidade de produtos por seção", body = [ProductsBySection]),
        (status = 404, description = "section not found")
    )
)]
pub async fn report_products(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Query(query), _): WithRejection<Query<ReportQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state.section_service.report_products(&scope, query.id).await?;
    Ok(response::ok(report))
}
