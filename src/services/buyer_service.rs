// src/services/buyer_service.rs

use std::sync::Arc;

use crate::{
    common::{
        error::{AppError, StorageError},
        patch,
        scope::RequestScope,
    },
    db::buyer_repo::BuyerRepository,
    models::buyer::{Buyer, BuyerPatch, PurchaseOrdersByBuyer},
};

const NOT_FOUND: &str = "buyer not found";
const CONFLICT: &str = "card_number_id already exists";
const STILL_REFERENCED: &str = "buyer is still referenced";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct BuyerService {
    repo: Arc<dyn BuyerRepository>,
}

impl BuyerService {
    pub fn new(repo: Arc<dyn BuyerRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Buyer>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<Buyer, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(&self, scope: &RequestScope, mut buyer: Buyer) -> Result<Buyer, AppError> {
        self.ensure_unique(scope, &buyer.card_number_id).await?;

        buyer.id = self.repo.save(scope, &buyer).await.map_err(map_err)?;
        tracing::info!(id = buyer.id, "buyer created");
        Ok(buyer)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        changes: BuyerPatch,
    ) -> Result<Buyer, AppError> {
        let mut buyer = self.repo.get(scope, id).await.map_err(map_err)?;

        if let Some(card) = patch::changed_key(&buyer.card_number_id, &changes.card_number_id) {
            self.ensure_unique(scope, card).await?;
        }

        patch::apply(&mut buyer.card_number_id, changes.card_number_id);
        patch::apply(&mut buyer.first_name, changes.first_name);
        patch::apply(&mut buyer.last_name, changes.last_name);

        self.repo.update(scope, &buyer).await.map_err(map_err)?;
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), AppError> {
        self.repo
            .delete(scope, id)
            .await
            .map_err(|err| AppError::from_delete(err, NOT_FOUND, STILL_REFERENCED))
    }

    pub async fn report_purchase_orders(
        &self,
        scope: &RequestScope,
        id: Option<i64>,
    ) -> Result<Vec<PurchaseOrdersByBuyer>, AppError> {
        match id {
            None => self.repo.report_purchase_orders_all(scope).await,
            Some(id) => self.repo.report_purchase_orders_by_id(scope, id).await,
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
