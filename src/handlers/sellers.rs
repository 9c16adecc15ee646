// src/handlers/sellers.rs

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
    models::seller::{Seller, SellerPatch},
};

// ---
// Payload: CreateSeller
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSellerPayload {
    #[validate(
        required(message = "cid field is required"),
        range(min = 1, message = "cid must be positive")
    )]
    pub cid: Option<i64>,

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

impl CreateSellerPayload {
    // Chamado só depois de `validate()`: os campos obrigatórios estão presentes.
    fn into_seller(self) -> Seller {
        Seller {
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
    path = "/api/v1/sellers",
    tag = "Sellers",
    responses((status = 200, description = "Todos os vendedores", body = [Seller]))
)]
pub async fn list_sellers(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let sellers = app_state.seller_service.get_all(&scope).await?;
    Ok(response::ok(sellers))
}

#[utoipa::path(
    get,
    path = "/api/v1/sellers/{id}",
    tag = "Sellers",
    params(("id" = i64, Path, description = "ID do vendedor")),
    responses(
        (status = 200, description = "Vendedor", body = Seller),
        (status = 404, description = "seller not found")
    )
)]
pub async fn get_seller(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let seller = app_state.seller_service.get(&scope, id).await?;
    Ok(response::ok(seller))
}

#[utoipa::path(
    post,
    path = "/api/v1/sellers",
    tag = "Sellers",
    request_body = CreateSellerPayload,
    responses(
        (status = 201, description = "Vendedor criado", body = Seller),
        (status = 409, description = "cid já existe ou localidade inexistente"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_seller(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateSellerPayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let seller = app_state.seller_service.create(&scope, payload.into_seller()).await?;
    Ok(response::created(seller))
}

#[utoipa::path(
    patch,
    path = "/api/v1/sellers/{id}",
    tag = "Sellers",
    request_body = SellerPatch,
    params(("id" = i64, Path, description = "ID do vendedor")),
    responses(
        (status = 200, description = "Vendedor atualizado", body = Seller),
        (status = 404, description = "seller not found"),
        (status = 409, description = "cid já existe")
    )
)]
pub async fn update_seller(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(changes), _): WithRejection<Json<SellerPatch>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    changes.validate()?;

    let seller = app_state.seller_service.update(&scope, id, changes).await?;
    Ok(response::ok(seller))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sellers/{id}",
    tag = "Sellers",
    params(("id" = i64, Path, description = "ID do vendedor")),
    responses(
        (status = 204, description = "Vendedor removido"),
        (status = 404, description = "seller not found")
    )
)]
pub async fn delete_seller(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.seller_service.delete(&scope, id).await?;
    Ok(response::no_content())
}
