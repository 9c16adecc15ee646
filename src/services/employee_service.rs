// src/services/employee_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        patch,
        scope::RequestScope,
    },
    db::employee_repo::EmployeeRepository,
    models::employee::{Employee, EmployeePatch, EmployeeWithInboundOrders},
};

const NOT_FOUND: &str = "employee not found";
const CONFLICT: &str = "card_number_id already exists";
const STILL_REFERENCED: &str = "employee is still referenced";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Employee>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<Employee, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        mut employee: Employee,
    ) -> Result<Employee, AppError> {
        self.ensure_unique(scope, &employee.card_number_id).await?;

        employee.id = self.repo.save(scope, &employee).await.map_err(map_err)?;
        tracing::info!(id = employee.id, "employee created");
        Ok(employee)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        changes: EmployeePatch,
    ) -> Result<Employee, AppError> {
        let mut employee = self.repo.get(scope, id).await.map_err(map_err)?;

        if let Some(card) = patch::changed_key(&employee.card_number_id, &changes.card_number_id) {
            self.ensure_unique(scope, card).await?;
        }

        patch::apply(&mut employee.card_number_id, changes.card_number_id);
        patch::apply(&mut employee.first_name, changes.first_name);
        patch::apply(&mut employee.last_name, changes.last_name);
        patch::apply(&mut employee.warehouse_id, changes.warehouse_id);

        self.repo.update(scope, &employee).await.map_err(map_err)?;
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), AppError> {
        self.repo
            .delete(scope, id)
            .await
            .map_err(|err| AppError::from_delete(err, NOT_FOUND, STILL_REFERENCED))
    }

    /// Sem id: todos os funcionários. Com id: só ele (ou 404).
    pub async fn report_inbound_orders(
        &self,
        scope: &RequestScope,
        id: Option<i64>,
    ) -> Result<Vec<EmployeeWithInboundOrders>, AppError> {
        match id {
            None => self.repo.report_inbound_orders_all(scope).await,
            Some(id) => self.repo.report_inbound_orders_by_id(scope, id).await,
        }
        .map_err(map_err)
    }

    async fn ensure_unique(&self, scope: &RequestScope, card_number_id: &str) -> Result<(), AppError> {
        if self.repo.exists(scope, card_number_id).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }
        Ok(())
    }
}
