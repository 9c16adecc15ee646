// src/db/section_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{db_utils::non_empty, error::StorageError, scope::RequestScope},
    models::section::{ProductsBySection, Section},
};

#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Section>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Section, StorageError>;
    async fn exists(&self, scope: &RequestScope, section_number: i32) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, section: &Section) -> Result<i64, StorageError>;
    async fn update(&self, scope: &RequestScope, section: &Section) -> Result<(), StorageError>;
    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError>;

    async fn report_products_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<ProductsBySection>, StorageError>;
    async fn report_products_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<ProductsBySection>, StorageError>;
}

#[derive(Clone)]
pub struct PgSectionRepository {
    pool: PgPool,
}

impl PgSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// SUM de INTEGER no Postgres é BIGINT; COALESCE cobre seções sem lotes.
const REPORT_PRODUCTS: &str = r#"
    SELECT s.id AS section_id, s.section_number,
           COALESCE(SUM(b.current_quantity), 0)::BIGINT AS products_count
    FROM sections s
    LEFT JOIN product_batches b ON b.section_id = s.id
"#;

const GROUP_BY_SECTION: &str = " GROUP BY s.id, s.section_number ORDER BY s.id ASC";

#[async_trait]
impl SectionRepository for PgSectionRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Section>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Section>(
                    r#"
                    SELECT id, section_number, current_temperature, minimum_temperature,
                           current_capacity, minimum_capacity, maximum_capacity,
                           warehouse_id, product_type_id
                    FROM sections ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Section, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Section>(
                    r#"
                    SELECT id, section_number, current_temperature, minimum_temperature,
                           current_capacity, minimum_capacity, maximum_capacity,
                           warehouse_id, product_type_id
                    FROM sections WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, section_number: i32) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM sections WHERE section_number = $1)",
                )
                .bind(section_number)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, section: &Section) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO sections (
                        section_number, current_temperature, minimum_temperature,
                        current_capacity, minimum_capacity, maximum_capacity,
                        warehouse_id, product_type_id
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    RETURNING id
                    "#,
                )
                .bind(section.section_number)
                .bind(section.current_temperature)
                .bind(section.minimum_temperature)
                .bind(section.current_capacity)
                .bind(section.minimum_capacity)
                .bind(section.maximum_capacity)
                .bind(section.warehouse_id)
                .bind(section.product_type_id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn update(&self, scope: &RequestScope, section: &Section) -> Result<(), StorageError> {
        scope
            .run(
                sqlx::query(
                    r#"
                    UPDATE sections
                    SET section_number = $1, current_temperature = $2, minimum_temperature = $3,
                        current_capacity = $4, minimum_capacity = $5, maximum_capacity = $6,
                        warehouse_id = $7, product_type_id = $8
                    WHERE id = $9
                    "#,
                )
                .bind(section.section_number)
                .bind(section.current_temperature)
                .bind(section.minimum_temperature)
                .bind(section.current_capacity)
                .bind(section.minimum_capacity)
                .bind(section.maximum_capacity)
                .bind(section.warehouse_id)
                .bind(section.product_type_id)
                .bind(section.id)
                .execute(&self.pool),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let result = scope
            .run(sqlx::query("DELETE FROM sections WHERE id = $1").bind(id).execute(&self.pool))
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn report_products_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<ProductsBySection>, StorageError> {
        let sql = format!("{REPORT_PRODUCTS}{GROUP_BY_SECTION}");
        scope
            .run(sqlx::query_as::<_, ProductsBySection>(&sql).fetch_all(&self.pool))
            .await
    }

    async fn report_products_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<ProductsBySection>, StorageError> {
        let sql = format!("{REPORT_PRODUCTS} WHERE s.id = $1{GROUP_BY_SECTION}");
        let rows = scope
            .run(sqlx::query_as::<_, ProductsBySection>(&sql).bind(id).fetch_all(&self.pool))
            .await?;
        non_empty(rows)
    }
}
