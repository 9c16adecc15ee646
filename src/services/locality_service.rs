// src/services/locality_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        scope::RequestScope,
    },
    db::locality_repo::LocalityRepository,
    models::locality::{Locality, ReportCarries, ReportSellers},
};

const NOT_FOUND: &str = "locality not found";
const CONFLICT: &str = "locality already exists";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct LocalityService {
    repo: Arc<dyn LocalityRepository>,
}

impl LocalityService {
    pub fn new(repo: Arc<dyn LocalityRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Locality>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: &str) -> Result<Locality, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    // A chave da localidade vem de fora (código postal), então não há id gerado.
    pub async fn create(&self, scope: &RequestScope, locality: Locality) -> Result<Locality, AppError> {
        if self.repo.exists(scope, &locality.id).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }

        let id = self.repo.save(scope, &locality).await.map_err(map_err)?;
        tracing::info!(id = %id, "locality created");
        Ok(Locality { id, ..locality })
    }

    pub async fn report_sellers(
        &self,
        scope: &RequestScope,
        id: Option<&str>,
    ) -> Result<Vec<ReportSellers>, AppError> {
        match id {
            None => self.repo.report_sellers_all(scope).await,
            Some(id) => self.repo.report_sellers_by_id(scope, id).await,
        }
        .map_err(map_err)
    }

    pub async fn report_carries(
        &self,
        scope: &RequestScope,
        id: Option<&str>,
    ) -> Result<Vec<ReportCarries>, AppError> {
        match id {
            None => self.repo.report_carries_all(scope).await,
            Some(id) => self.repo.report_carries_by_id(scope, id).await,
        }
        .map_err(map_err)
    }
}
