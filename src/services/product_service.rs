// src/services/product_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        patch,
        scope::RequestScope,
    },
    db::product_repo::ProductRepository,
    models::product::{Product, ProductPatch, ReportRecord},
};

const NOT_FOUND: &str = "product not found";
const CONFLICT: &str = "product_code already exists";
const STILL_REFERENCED: &str = "product is still referenced";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Product>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<Product, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(&self, scope: &RequestScope, mut product: Product) -> Result<Product, AppError> {
        self.ensure_unique(scope, &product.product_code).await?;

        product.id = self.repo.save(scope, &product).await.map_err(map_err)?;
        tracing::info!(id = product.id, code = %product.product_code, "product created");
        Ok(product)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        changes: ProductPatch,
    ) -> Result<Product, AppError> {
        let mut product = self.repo.get(scope, id).await.map_err(map_err)?;

        if let Some(code) = patch::changed_key(&product.product_code, &changes.product_code) {
            self.ensure_unique(scope, code).await?;
        }

        patch::apply(&mut product.description, changes.description);
        patch::apply(&mut product.product_code, changes.product_code);
        patch::apply(&mut product.expiration_rate, changes.expiration_rate);
        patch::apply(&mut product.freezing_rate, changes.freezing_rate);
        patch::apply(&mut product.height, changes.height);
        patch::apply(&mut product.length, changes.length);
        patch::apply(&mut product.width, changes.width);
        patch::apply(&mut product.net_weight, changes.net_weight);
        patch::apply_temperature(
            &mut product.recommended_freezing_temperature,
            changes.recommended_freezing_temperature,
        );
        patch::apply(&mut product.product_type_id, changes.product_type_id);
        patch::apply_reference(&mut product.seller_id, changes.seller_id);

        self.repo.update(scope, &product).await.map_err(map_err)?;
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), AppError> {
        self.repo
            .delete(scope, id)
            .await
            .map_err(|err| AppError::from_delete(err, NOT_FOUND, STILL_REFERENCED))
    }

    pub async fn report_records(
        &self,
        scope: &RequestScope,
        id: Option<i64>,
    ) -> Result<Vec<ReportRecord>, AppError> {
        match id {
            None => self.repo.report_records_all(scope).await,
            Some(id) => self.repo.report_records_by_id(scope, id).await,
        }
        .map_err(map_err)
    }

    async fn ensure_unique(&self, scope: &RequestScope, code: &str) -> Result<(), AppError> {
        if self.repo.exists(scope, code).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }
        Ok(())
    }
}
