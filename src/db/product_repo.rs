// src/db/product_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{db_utils::non_empty, error::StorageError, scope::RequestScope},
    models::product::{Product, ReportRecord},
};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Product>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Product, StorageError>;
    async fn exists(&self, scope: &RequestScope, product_code: &str) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, product: &Product) -> Result<i64, StorageError>;
    async fn update(&self, scope: &RequestScope, product: &Product) -> Result<(), StorageError>;
    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError>;

    async fn report_records_all(&self, scope: &RequestScope) -> Result<Vec<ReportRecord>, StorageError>;
    async fn report_records_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<ReportRecord>, StorageError>;
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const REPORT_RECORDS: &str = r#"
    SELECT p.id AS product_id, p.description, COUNT(r.id) AS records_count
    FROM products p
    LEFT JOIN product_records r ON r.product_id = p.id
"#;

const GROUP_BY_PRODUCT: &str = " GROUP BY p.id, p.description ORDER BY p.id ASC";

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Product>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, description, product_code, expiration_rate, freezing_rate,
                           height, length, width, net_weight, recommended_freezing_temperature,
                           product_type_id, seller_id
                    FROM products ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Product, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, description, product_code, expiration_rate, freezing_rate,
                           height, length, width, net_weight, recommended_freezing_temperature,
                           product_type_id, seller_id
                    FROM products WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, product_code: &str) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM products WHERE product_code = $1)",
                )
                .bind(product_code)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, product: &Product) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO products (
                        description, product_code, expiration_rate, freezing_rate,
                        height, length, width, net_weight, recommended_freezing_temperature,
                        product_type_id, seller_id
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    RETURNING id
                    "#,
                )
                .bind(&product.description)
                .bind(&product.product_code)
                .bind(product.expiration_rate)
                .bind(product.freezing_rate)
                .bind(product.height)
                .bind(product.length)
                .bind(product.width)
                .bind(product.net_weight)
                .bind(product.recommended_freezing_temperature)
                .bind(product.product_type_id)
                .bind(product.seller_id) // NULL quando não há vendedor
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn update(&self, scope: &RequestScope, product: &Product) -> Result<(), StorageError> {
        scope
            .run(
                sqlx::query(
                    r#"
                    UPDATE products
                    SET description = $1, product_code = $2, expiration_rate = $3,
                        freezing_rate = $4, height = $5, length = $6, width = $7,
                        net_weight = $8, recommended_freezing_temperature = $9,
                        product_type_id = $10, seller_id = $11
                    WHERE id = $12
                    "#,
                )
                .bind(&product.description)
                .bind(&product.product_code)
                .bind(product.expiration_rate)
                .bind(product.freezing_rate)
                .bind(product.height)
                .bind(product.length)
                .bind(product.width)
                .bind(product.net_weight)
                .bind(product.recommended_freezing_temperature)
                .bind(product.product_type_id)
                .bind(product.seller_id)
                .bind(product.id)
                .execute(&self.pool),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let result = scope
            .run(sqlx::query("DELETE FROM products WHERE id = $1").bind(id).execute(&self.pool))
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn report_records_all(&self, scope: &RequestScope) -> Result<Vec<ReportRecord>, StorageError> {
        let sql = format!("{REPORT_RECORDS}{GROUP_BY_PRODUCT}");
        scope
            .run(sqlx::query_as::<_, ReportRecord>(&sql).fetch_all(&self.pool))
            .await
    }

    async fn report_records_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<ReportRecord>, StorageError> {
        let sql = format!("{REPORT_RECORDS} WHERE p.id = $1{GROUP_BY_PRODUCT}");
        let rows = scope
            .run(sqlx::query_as::<_, ReportRecord>(&sql).bind(id).fetch_all(&self.pool))
            .await?;
        non_empty(rows)
    }
}
