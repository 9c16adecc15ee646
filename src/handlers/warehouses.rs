// src/handlers/warehouses.rs

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
    common::{
        error::ApiError, response, scope::RequestScope, validation::validate_not_negative_i32,
    },
    config::AppState,
    models::warehouse::{Warehouse, WarehousePatch},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWarehousePayload {
    #[validate(
        required(message = "warehouseCode field is required"),
        length(min = 1, message = "warehouseCode field cannot be empty")
    )]
    pub warehouse_code: Option<String>,

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
        required(message = "minimumCapacity field is required"),
        custom(function = "validate_not_negative_i32")
    )]
    pub minimum_capacity: Option<i32>,

    // Zero e negativos são temperaturas válidas; só a ausência é erro.
    #[validate(required(message = "minimumTemperature field is required"))]
    pub minimum_temperature: Option<f64>,

    #[validate(
        required(message = "localityId field is required"),
        length(min = 1, message = "localityId field cannot be empty")
    )]
    pub locality_id: Option<String>,
}

impl CreateWarehousePayload {
    fn into_warehouse(self) -> Warehouse {
        Warehouse {
            id: 0,
            warehouse_code: self.warehouse_code.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            telephone: self.telephone.unwrap_or_default(),
            minimum_capacity: self.minimum_capacity.unwrap_or_default(),
            minimum_temperature: self.minimum_temperature.unwrap_or_default(),
            locality_id: self.locality_id.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses",
    tag = "Warehouses",
    responses((status = 200, description = "Todos os armazéns", body = [Warehouse]))
)]
pub async fn list_warehouses(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let warehouses = app_state.warehouse_service.get_all(&scope).await?;
    Ok(response::ok(warehouses))
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouses",
    params(("id" = i64, Path, description = "ID do armazém")),
    responses(
        (status = 200, description = "Armazém", body = Warehouse),
        (status = 404, description = "warehouse not found")
    )
)]
pub async fn get_warehouse(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let warehouse = app_state.warehouse_service.get(&scope, id).await?;
    Ok(response::ok(warehouse))
}

#[utoipa::path(
    post,
    path = "/api/v1/warehouses",
    tag = "Warehouses",
    request_body = CreateWarehousePayload,
    responses(
        (status = 201, description = "Armazém criado", body = Warehouse),
        (status = 409, description = "warehouse_code already exists"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_warehouse(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateWarehousePayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let warehouse = app_state
        .warehouse_service
        .create(&scope, payload.into_warehouse())
        .await?;
    Ok(response::created(warehouse))
}

#[utoipa::path(
    patch,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouses",
    request_body = WarehousePatch,
    params(("id" = i64, Path, description = "ID do armazém")),
    responses(
        (status = 200, description = "Armazém atualizado", body = Warehouse),
        (status = 404, description = "warehouse not found")
    )
)]
pub async fn update_warehouse(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(changes), _): WithRejection<Json<WarehousePatch>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    changes.validate()?;

    let warehouse = app_state.warehouse_service.update(&scope, id, changes).await?;
    Ok(response::ok(warehouse))
}

#[utoipa::path(
    delete,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouses",
    params(("id" = i64, Path, description = "ID do armazém")),
    responses(
        (status = 204, description = "Armazém removido"),
        (status = 404, description = "warehouse not found"),
        (status = 422, description = "Armazém ainda referenciado")
    )
)]
pub async fn delete_warehouse(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.warehouse_service.delete(&scope, id).await?;
    Ok(response::no_content())
}
