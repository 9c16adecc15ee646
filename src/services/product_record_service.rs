// src/services/product_record_service.rs

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::{
    common::{
        error::{AppError, StorageError},
        scope::RequestScope,
    },
    db::product_record_repo::ProductRecordRepository,
    models::product_record::ProductRecord,
};

const NOT_FOUND: &str = "product record not found";
const CONFLICT: &str = "product record already exists";

fn map_err(err: StorageError) -> AppError {
    AppError::from_storage(err, NOT_FOUND, CONFLICT)
}

#[derive(Clone)]
pub struct ProductRecordService {
    repo: Arc<dyn ProductRecordRepository>,
}

impl ProductRecordService {
    pub fn new(repo: Arc<dyn ProductRecordRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self, scope: &RequestScope) -> Result<Vec<ProductRecord>, AppError> {
        self.repo.get_all(scope).await.map_err(map_err)
    }

    pub async fn get(&self, scope: &RequestScope, id: i64) -> Result<ProductRecord, AppError> {
        self.repo.get(scope, id).await.map_err(map_err)
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        mut record: ProductRecord,
    ) -> Result<ProductRecord, AppError> {
        let today = Local::now().date_naive();
        if is_before_today(record.last_update_date, today) {
            return Err(AppError::invalid("invalid date"));
        }

        record.id = self.repo.save(scope, &record).await.map_err(map_err)?;
        tracing::info!(id = record.id, product_id = record.product_id, "product record created");
        Ok(record)
    }
}

// Granularidade de dia: hoje é aceito.
fn is_before_today(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
