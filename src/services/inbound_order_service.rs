// src/services/inbound_order_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        scope::RequestScope,
    },
    db::inbound_order_repo::InboundOrderRepository,
    models::inbound_order::InboundOrder,
};

const NOT_FOUND: &str = "inbound order not found";
const CONFLICT: &str = "order_number already exists";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct InboundOrderService {
    repo: Arc<dyn InboundOrderRepository>,
}

impl InboundOrderService {
    pub fn new(repo: Arc<dyn InboundOrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<InboundOrder>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<InboundOrder, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    /// Employee, warehouse e product batch inexistentes chegam como `ForeignKeyNotFound`
    /// nomeando o pai que faltou.
    pub async fn create(
        &self,
        scope: &RequestScope,
        mut order: InboundOrder,
    ) -> Result<InboundOrder, AppError> {
        if self.repo.exists(scope, &order.order_number).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }

        order.id = self.repo.save(scope, &order).await.map_err(map_err)?;
        tracing::info!(id = order.id, employee_id = order.employee_id, "inbound order created");
        Ok(order)
    }
}
