// src/services/product_batch_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        scope::RequestScope,
    },
    db::product_batch_repo::ProductBatchRepository,
    models::product_batch::ProductBatch,
};

const NOT_FOUND: &str = "product batch not found";
const CONFLICT: &str = "batch_number already exists";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct ProductBatchService {
    repo: Arc<dyn ProductBatchRepository>,
}

impl ProductBatchService {
    pub fn new(repo: Arc<dyn ProductBatchRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<ProductBatch>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<ProductBatch, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        mut batch: ProductBatch,
    ) -> Result<ProductBatch, AppError> {
        check_consistency(&batch)?;

        if self.repo.exists(scope, batch.batch_number).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }

        batch.id = self.repo.save(scope, &batch).await.map_err(map_err)?;
        tracing::info!(id = batch.id, batch_number = batch.batch_number, "product batch created");
        Ok(batch)
    }
}

fn check_consistency(batch: &ProductBatch) -> Result<(), AppError> {
    if batch.manufacturing_date > batch.due_date {
        return Err(AppError::invalid("manufacturing_date cannot be after due_date"));
    }
    if batch.current_quantity > batch.initial_quantity {
        return Err(AppError::invalid("current_quantity cannot exceed initial_quantity"));
    }
    if !(0..=23).contains(&batch.manufacturing_hour) {
        return Err(AppError::invalid("manufacturing_hour must be between 0 and 23"));
    }
    Ok(())
}
