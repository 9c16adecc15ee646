// src/handlers/localities.rs

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
    handlers::LocalityReportQuery,
    models::locality::{Locality, ReportCarries, ReportSellers},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocalityPayload {
    #[validate(
        required(message = "id field is required"),
        length(min = 1, message = "id field cannot be empty")
    )]
    pub id: Option<String>,

    #[validate(
        required(message = "localityName field is required"),
        length(min = 1, message = "localityName field cannot be empty")
    )]
    pub locality_name: Option<String>,

    #[validate(
        required(message = "provinceName field is required"),
        length(min = 1, message = "provinceName field cannot be empty")
    )]
    pub province_name: Option<String>,

    #[validate(
        required(message = "countryName field is required"),
        length(min = 1, message = "countryName field cannot be empty")
    )]
    pub country_name: Option<String>,
}

impl CreateLocalityPayload {
    fn into_locality(self) -> Locality {
        Locality {
            id: self.id.unwrap_or_default(),
            locality_name: self.locality_name.unwrap_or_default(),
            province_name: self.province_name.unwrap_or_default(),
            country_name: self.country_name.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/localities",
    tag = "Localities",
    responses((status = 200, description = "Todas as localidades", body = [Locality]))
)]
pub async fn list_localities(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let localities = app_state.locality_service.get_all(&scope).await?;
    Ok(response::ok(localities))
}

#[utoipa::path(
    get,
    path = "/api/v1/localities/{id}",
    tag = "Localities",
    params(("id" = String, Path, description = "Código da localidade")),
    responses(
        (status = 200, description = "Localidade", body = Locality),
        (status = 404, description = "locality not found")
    )
)]
pub async fn get_locality(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let locality = app_state.locality_service.get(&scope, &id).await?;
    Ok(response::ok(locality))
}

#[utoipa::path(
    post,
    path = "/api/v1/localities",
    tag = "Localities",
    request_body = CreateLocalityPayload,
    responses(
        (status = 201, description = "Localidade criada", body = Locality),
        (status = 409, description = "locality already exists"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_locality(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateLocalityPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let locality = app_state.locality_service.create(&scope, payload.into_locality()).await?;
    Ok(response::created(locality))
}

#[utoipa::path(
    get,
    path = "/api/v1/localities/reportSellers",
    tag = "Localities",
    params(LocalityReportQuery),
    responses(
        (status = 200, description = "Vendedores por localidade", body = [ReportSellers]),
        (status = 404, description = "locality not found")
    )
)]
pub async fn report_sellers(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Query(query), _): WithRejection<Query<LocalityReportQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state
        .locality_service
        .report_sellers(&scope, query.id.as_deref())
        .await?;
    Ok(response::ok(report))
}

#[utoipa::path(
    get,
    path = "/api/v1/localities/reportCarries",
    tag = "Localities",
    params(LocalityReportQuery),
    responses(
        (status = 200, description = "Transportadoras por localidade", body = [ReportCarries]),
        (status = 404, description = "locality not found")
    )
)]
pub async fn report_carries(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Query(query), _): WithRejection<Query<LocalityReportQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state
        .locality_service
        .report_carries(&scope, query.id.as_deref())
        .await?;
    Ok(response::ok(report))
}
