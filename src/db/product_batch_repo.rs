// src/db/product_batch_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{error::StorageError, scope::RequestScope},
    models::product_batch::ProductBatch,
};

#[async_trait]
pub trait ProductBatchRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<ProductBatch>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<ProductBatch, StorageError>;
    async fn exists(&self, scope: &RequestScope, batch_number: i32) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, batch: &ProductBatch) -> Result<i64, StorageError>;
}

#[derive(Clone)]
pub struct PgProductBatchRepository {
    pool: PgPool,
}

impl PgProductBatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductBatchRepository for PgProductBatchRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<ProductBatch>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, ProductBatch>(
                    r#"
                    SELECT id, batch_number, current_quantity, current_temperature, due_date,
                           initial_quantity, manufacturing_date, manufacturing_hour,
                           minimum_temperature, product_id, section_id
                    FROM product_batches ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<ProductBatch, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, ProductBatch>(
                    r#"
                    SELECT id, batch_number, current_quantity, current_temperature, due_date,
                           initial_quantity, manufacturing_date, manufacturing_hour,
                           minimum_temperature, product_id, section_id
                    FROM product_batches WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, batch_number: i32) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM product_batches WHERE batch_number = $1)",
                )
                .bind(batch_number)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, batch: &ProductBatch) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO product_batches (
                        batch_number, current_quantity, current_temperature, due_date,
                        initial_quantity, manufacturing_date, manufacturing_hour,
                        minimum_temperature, product_id, section_id
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    RETURNING id
                    "#,
                )
                .bind(batch.batch_number)
                .bind(batch.current_quantity)
                .bind(batch.current_temperature)
                .bind(batch.due_date)
                .bind(batch.initial_quantity)
                .bind(batch.manufacturing_date)
                .bind(batch.manufacturing_hour)
                .bind(batch.minimum_temperature)
                .bind(batch.product_id)
                .bind(batch.section_id)
                .fetch_one(&self.pool),
            )
            .await
    }
}
