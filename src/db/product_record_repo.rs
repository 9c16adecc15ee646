// src/db/product_record_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{error::StorageError, scope::RequestScope},
    models::product_record::ProductRecord,
};

#[async_trait]
pub trait ProductRecordRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<ProductRecord>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<ProductRecord, StorageError>;
    async fn save(&self, scope: &RequestScope, record: &ProductRecord) -> Result<i64, StorageError>;
}

#[derive(Clone)]
pub struct PgProductRecordRepository {
    pool: PgPool,
}

impl PgProductRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRecordRepository for PgProductRecordRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<ProductRecord>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, ProductRecord>(
                    "SELECT id, last_update_date, purchase_price, sale_price, product_id
                     FROM product_records ORDER BY id ASC",
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<ProductRecord, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, ProductRecord>(
                    "SELECT id, last_update_date, purchase_price, sale_price, product_id
                     FROM product_records WHERE id = $1",
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, record: &ProductRecord) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO product_records (last_update_date, purchase_price, sale_price, product_id)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(record.last_update_date)
                .bind(record.purchase_price)
                .bind(record.sale_price)
                .bind(record.product_id)
                .fetch_one(&self.pool),
            )
            .await
    }
}
