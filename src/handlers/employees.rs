// src/handlers/employees.rs

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
    models::employee::{Employee, EmployeePatch, EmployeeWithInboundOrders},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeePayload {
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

    #[validate(
        required(message = "warehouseId field is required"),
        range(min = 1, message = "warehouseId must be positive")
    )]
    pub warehouse_id: Option<i64>,
}

impl CreateEmployeePayload {
    fn into_employee(self) -> Employee {
        Employee {
            id: 0,
            card_number_id: self.card_number_id.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            warehouse_id: self.warehouse_id.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "Employees",
    responses((status = 200, description = "Todos os funcionários", body = [Employee]))
)]
pub async fn list_employees(
    State(app_state): State<AppState>,
    scope: RequestScope,
) -> Result<impl IntoResponse, ApiError> {
    let employees = app_state.employee_service.get_all(&scope).await?;
    Ok(response::ok(employees))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "Funcionário", body = Employee),
        (status = 404, description = "employee not found")
    )
)]
pub async fn get_employee(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = app_state.employee_service.get(&scope, id).await?;
    Ok(response::ok(employee))
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "Employees",
    request_body = CreateEmployeePayload,
    responses(
        (status = 201, description = "Funcionário criado", body = Employee),
        (status = 409, description = "card_number_id já existe ou armazém inexistente"),
        (status = 422, description = "Payload inválido")
    )
)]
pub async fn create_employee(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Json(payload), _): WithRejection<Json<CreateEmployeePayload>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let employee = app_state
        .employee_service
        .create(&scope, payload.into_employee())
        .await?;
    Ok(response::created(employee))
}

#[utoipa::path(
    patch,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    request_body = EmployeePatch,
    params(("id" = i64, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "Funcionário atualizado", body = Employee),
        (status = 404, description = "employee not found")
    )
)]
pub async fn update_employee(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(changes), _): WithRejection<Json<EmployeePatch>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    changes.validate()?;

    let employee = app_state.employee_service.update(&scope, id, changes).await?;
    Ok(response::ok(employee))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "ID do funcionário")),
    responses(
        (status = 204, description = "Funcionário removido"),
        (status = 404, description = "employee not found")
    )
)]
pub async fn delete_employee(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.employee_service.delete(&scope, id).await?;
    Ok(response::no_content())
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/reportInboundOrders",
    tag = "Employees",
    params(ReportQuery),
    responses(
        (status = 200, description = "Ordens de entrada por funcionário", body = [EmployeeWithInboundOrders]),
        (status = 404, description = "employee not found")
    )
)]
pub async fn report_inbound_orders(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Query(query), _): WithRejection<Query<ReportQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state
        .employee_service
        .report_inbound_orders(&scope, query.id)
        .await?;
    Ok(response::ok(report))
}

// Mesma consulta, com a chave no path.
#[utoipa::path(
    get,
    path = "/api/v1/employees/reportInboundOrders/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "Ordens de entrada do funcionário", body = [EmployeeWithInboundOrders]),
        (status = 404, description = "employee not found")
    )
)]
pub async fn report_inbound_orders_by_id(
    State(app_state): State<AppState>,
    scope: RequestScope,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state
        .employee_service
        .report_inbound_orders(&scope, Some(id))
        .await?;
    Ok(response::ok(report))
}
