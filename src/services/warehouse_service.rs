// src/services/warehouse_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        patch,
        scope::RequestScope,
    },
    db::warehouse_repo::WarehouseRepository,
    models::warehouse::{Warehouse, WarehousePatch},
};

const NOT_FOUND: &str = "warehouse not found";
const CONFLICT: &str = "warehouse_code already exists";
const STILL_REFERENCED: &str = "warehouse is still referenced";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct WarehouseService {
    repo: Arc<dyn WarehouseRepository>,
}

impl WarehouseService {
    pub fn new(repo: Arc<dyn WarehouseRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Warehouse>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<Warehouse, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        mut warehouse: Warehouse,
    ) -> Result<Warehouse, AppError> {
        self.ensure_unique(scope, &warehouse.warehouse_code).await?;

        warehouse.id = self.repo.save(scope, &warehouse).await.map_err(map_err)?;
        tracing::info!(id = warehouse.id, code = %warehouse.warehouse_code, "warehouse created");
        Ok(warehouse)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        changes: WarehousePatch,
    ) -> Result<Warehouse, AppError> {
        let mut warehouse = self.repo.get(scope, id).await.map_err(map_err)?;

        if let Some(code) = patch::changed_key(&warehouse.warehouse_code, &changes.warehouse_code) {
            self.ensure_unique(scope, code).await?;
        }

        patch::apply(&mut warehouse.warehouse_code, changes.warehouse_code);
        patch::apply(&mut warehouse.address, changes.address);
        patch::apply(&mut warehouse.telephone, changes.telephone);
        patch::apply(&mut warehouse.minimum_capacity, changes.minimum_capacity);
        patch::apply_temperature(&mut warehouse.minimum_temperature, changes.minimum_temperature);
        patch::apply(&mut warehouse.locality_id, changes.locality_id);

        self.repo.update(scope, &warehouse).await.map_err(map_err)?;
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), AppError> {
        self.repo
            .delete(scope, id)
            .await
            .map_err(|err| AppError::from_delete(err, NOT_FOUND, STILL_REFERENCED))
    }

    async fn ensure_unique(&self, scope: &RequestScope, code: &str) -> Result<(), AppError> {
        if self.repo.exists(scope, code).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }
        Ok(())
    }
}
