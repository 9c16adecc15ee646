// src/services/purchase_order_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        scope::RequestScope,
    },
    db::purchase_order_repo::PurchaseOrderRepository,
    models::purchase_order::PurchaseOrder,
};

const NOT_FOUND: &str = "purchase order not found";
const CONFLICT: &str = "order_number already exists";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct PurchaseOrderService {
    repo: Arc<dyn PurchaseOrderRepository>,
}

impl PurchaseOrderService {
    pub fn new(repo: Arc<dyn PurchaseOrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<PurchaseOrder>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<PurchaseOrder, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        mut order: PurchaseOrder,
    ) -> Result<PurchaseOrder, AppError> {
        if self.repo.exists(scope, &order.order_number).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }

        order.id = self.repo.save(scope, &order).await.map_err(map_err)?;
        tracing::info!(id = order.id, buyer_id = order.buyer_id, "purchase order created");
        Ok(order)
    }
}
