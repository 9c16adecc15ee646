// src/handlers/carries.rs

use axum::{
    extract::{Path, State},
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
    models::carry::Carry,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCarryPayload {
    #[validate(
        required(message = "cid field is required"),
        length(min = 1, message = "cid field cannot be empty")
    )]
    pub cid: Option<String>,

    #[validate(
        required(message = "companyName field is required"),
        length(min = 1, message = "companyName field cannot be empty")
    )]
    pub company_name: Option<String>,

    #[validate(
        required(message = "address field is required"),
        length(min = 1, message = "address field cannot be empty")
    )]
    pub address: Option<String>,

    #[validate(
        required(message = "telephone field is required"),
        length(min = 1, message = "telephone field cannot be empty")
    )]
    pub telephone: Option<String>,

    #[validate(
        required(message = "localityId field is required"),
        length(min = 1, message = "localityId field cannot be empty")
    )]
    pub locality_id: Option<String>,
}

impl CreateCarryPayload {
    fn into_carry(self) -> Carry {
        Carry {
            id: 0,
            cid: self.cid.unwrap_or_default(),
            company_name: self.company_name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            telephone: self.telephone.unwrap_or_default(),
            locality_id: self.locality_id.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/carries",
    tag = "Carries",
    responses((status = 200, description = "Todas as transportadoras", body = [Carry]))
)]
pub async fn list_carries(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let carries = app_state.carry_service.get_all(&scope).await?;
    Ok(response::ok(carries))
}

#[utoipa::path(
    get,
    path = "/api/v1/carries/{id}",
    tag = "Carries",
    params(("id" = i64, Path, description = "ID da transportadora")),
    responses(
        (status = 200, description = "Transportadora", body = Carry),
        (status = 404, description = "carry not found")
    )
)]
pub async fn get_carry(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let carry = app_state.carry_service.get(&scope, id).await?;
    Ok(response::ok(carry))
}

#[utoipa::path(
    post,
    path = "/api/v1/carries",
    tag = "Carries",
    request_body = CreateCarryPayload,
    responses(
        (status = 201, description = "Transportadora criada", body = Carry),
        (status = 409, description = "cid já existe ou localidade inexistente"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_carry(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateCarryPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let carry = app_state.carry_service.create(&scope, payload.into_carry()).await?;
    Ok(response::created(carry))
}
