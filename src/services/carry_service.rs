// src/services/carry_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        scope::RequestScope,
    },
    db::carry_repo::CarryRepository,
    models::carry::Carry,
};

const NOT_FOUND: &str = "carry not found";
const CONFLICT: &str = "cid already exists";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct CarryService {
    repo: Arc<dyn CarryRepository>,
}

impl CarryService {
    pub fn new(repo: Arc<dyn CarryRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Carry>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<Carry, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(&self, scope: &RequestScope, mut carry: Carry) -> Result<Carry, AppError> {
        if self.repo.exists(scope, &carry.cid).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }

        carry.id = self.repo.save(scope, &carry).await.map_err(map_err)?;
        tracing::info!(id = carry.id, cid = %carry.cid, "carry created");
        Ok(carry)
    }
}
