// src/services/seller_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        patch,
        scope::RequestScope,
    },
    db::seller_repo::SellerRepository,
    models::seller::{Seller, SellerPatch},
};

const NOT_FOUND: &str = "seller not found";
const CONFLICT: &str = "cid already exists";
const STILL_REFERENCED: &str = "seller is still referenced";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct SellerService {
    repo: Arc<dyn SellerRepository>,
}

impl SellerService {
    pub fn new(repo: Arc<dyn SellerRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Seller>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<Seller, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(&self, scope: &RequestScope, mut seller: Seller) -> Result<Seller, AppError> {
        self.ensure_unique(scope, seller.cid).await?;

        seller.id = self.repo.save(scope, &seller).await.map_err(map_err)?;
        tracing::info!(id = seller.id, cid = seller.cid, "seller created");
        Ok(seller)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        changes: SellerPatch,
    ) -> Result<Seller, AppError> {
        let mut seller = self.repo.get(scope, id).await.map_err(map_err)?;

        if let Some(cid) = patch::changed_key(&seller.cid, &changes.cid) {
            self.ensure_unique(scope, *cid).await?;
        }

        patch::apply(&mut seller.cid, changes.cid);
        patch::apply(&mut seller.company_name, changes.company_name);
        patch::apply(&mut seller.address, changes.address);
        patch::apply(&mut seller.telephone, changes.telephone);
        patch::apply(&mut seller.locality_id, changes.locality_id);

        self.repo.update(scope, &seller).await.map_err(map_err)?;
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), AppError> {
        self.repo
            .delete(scope, id)
            .await
            .map_err(|err| AppError::from_delete(err, NOT_FOUND, STILL_REFERENCED))
    }

    async fn ensure_unique(&self, scope: &RequestScope, cid: i64) -> Result<(), AppError> {
        if self.repo.exists(scope, cid).await.map_err(map_err)? {
            return Err(AppError::conflict(CONFLICT));
        }
        Ok(())
    }
}
