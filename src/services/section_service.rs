// src/services/section_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        patch,
        scope::RequestScope,
    },
    db::section_repo::SectionRepository,
    models::section::{ProductsBySection, Section, SectionPatch},
};

const NOT_FOUND: &str = "section not found";
const CONFLICT: &str = "section_number already exists";
const STILL_REFERENCED: &str = "section is still referenced";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct SectionService {
    repo: Arc<dyn SectionRepository>,
}

impl SectionService {
    pub fn new(repo: Arc<dyn SectionRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Section>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<Section, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(&self, scope: &RequestScope, mut section: Section) -> Result<Section, AppError> {
        check_capacity(&section)?;
        self.ensure_unique(scope, section.section_number).await?;

        section.id = self.repo.save(scope, &section).await.map_err(map_err)?;
        tracing::info!(id = section.id, section_number = section.section_number, "section created");
        Ok(section)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        changes: SectionPatch,
    ) -> Result<Section, AppError> {
        let mut section = self.repo.get(scope, id).await.map_err(map_err)?;

        if let Some(number) = patch::changed_key(&section.section_number, &changes.section_number) {
            self.ensure_unique(scope, *number).await?;
        }

        patch::apply(&mut section.section_number, changes.section_number);
        patch::apply_section_temperature(&mut section.current_temperature, changes.current_temperature);
        patch::apply_section_temperature(&mut section.minimum_temperature, changes.minimum_temperature);
        patch::apply(&mut section.current_capacity, changes.current_capacity);
        patch::apply(&mut section.minimum_capacity, changes.minimum_capacity);
        patch::apply(&mut section.maximum_capacity, changes.maximum_capacity);
        patch::apply(&mut section.warehouse_id, changes.warehouse_id);
        patch::apply(&mut section.product_type_id, changes.product_type_id);

        // O merge pode combinar valores antigos e novos de forma inconsistente.
        check_capacity(&section)?;

        self.repo.update(scope, &section).await.map_err(map_err)?;
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), AppError> {
        self.repo
            .delete(scope, id)
            .await
            .map_err(|err| AppError::from_delete(err, NOT_FOUND, STILL_REFERENCED))
    }

    pub async fn report_products(
        &self,
        scope: &RequestScope,
        id: Option<i64>,
    ) -> Result<Vec<ProductsBySection>, AppError> {
        match id {
            None => self.repo.report_products_all(scope).await,
            Some(id) => self.repo.report_products_by_id(scope, id).await,
        }
        .map_err(map_err)
    }

    async fn ensure_unique(&self, scope: &RequestScope, section_number: i32) -> Result<(), AppError> {
        if self.repo.exists(scope, section_number).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }
        Ok(())
    }
}

fn check_capacity(section: &Section) -> Result<(), AppError> {
    if section.minimum_capacity > section.maximum_capacity {
        return Err(AppError::invalid("minimum_capacity cannot exceed maximum_capacity"));
    }
    if section.current_capacity > section.maximum_capacity {
        return Err(AppError::invalid("current_capacity cannot exceed maximum_capacity"));
    }
    Ok(())
}
