// src/db/locality_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{db_utils::non_empty, error::StorageError, scope::RequestScope},
    models::locality::{Locality, ReportCarries, ReportSellers},
};

#[async_trait]
pub trait LocalityRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Locality>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: &str) -> Result<Locality, StorageError>;
    async fn exists(&self, scope: &RequestScope, id: &str) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, locality: &Locality) -> Result<String, StorageError>;

    async fn report_sellers_all(&self, scope: &RequestScope) -> Result<Vec<ReportSellers>, StorageError>;
    async fn report_sellers_by_id(
        &self,
        scope: &RequestScope,
        id: &str,
    ) -> Result<Vec<ReportSellers>, StorageError>;

    async fn report_carries_all(&self, scope: &RequestScope) -> Result<Vec<ReportCarries>, StorageError>;
    async fn report_carries_by_id(
        &self,
        scope: &RequestScope,
        id: &str,
    ) -> Result<Vec<ReportCarries>, StorageError>;
}

#[derive(Clone)]
pub struct PgLocalityRepository {
    pool: PgPool,
}

impl PgLocalityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Uma linha por localidade (LEFT JOIN: localidades sem vendedores aparecem com 0)
const REPORT_SELLERS: &str = r#"
    SELECT l.id AS locality_id, l.locality_name, COUNT(s.id) AS sellers_count
    FROM localities l
    LEFT JOIN sellers s ON s.locality_id = l.id
"#;

const REPORT_CARRIES: &str = r#"
    SELECT l.id AS locality_id, l.locality_name, COUNT(c.id) AS carries_count
    FROM localities l
    LEFT JOIN carries c ON c.locality_id = l.id
"#;

const GROUP_BY_LOCALITY: &str = " GROUP BY l.id, l.locality_name ORDER BY l.id ASC";

#[async_trait]
impl LocalityRepository for PgLocalityRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Locality>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Locality>(
                    "SELECT id, locality_name, province_name, country_name
                     FROM localities ORDER BY id ASC",
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: &str) -> Result<Locality, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Locality>(
                    "SELECT id, locality_name, province_name, country_name
                     FROM localities WHERE id = $1",
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, id: &str) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM localities WHERE id = $1)")
                    .bind(id)
                    .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, locality: &Locality) -> Result<String, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, String>(
                    r#"
                    INSERT INTO localities (id, locality_name, province_name, country_name)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&locality.id)
                .bind(&locality.locality_name)
                .bind(&locality.province_name)
                .bind(&locality.country_name)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn report_sellers_all(&self, scope: &RequestScope) -> Result<Vec<ReportSellers>, StorageError> {
        let sql = format!("{REPORT_SELLERS}{GROUP_BY_LOCALITY}");
        scope
            .run(sqlx::query_as::<_, ReportSellers>(&sql).fetch_all(&self.pool))
            .await
    }

    async fn report_sellers_by_id(
        &self,
        scope: &RequestScope,
        id: &str,
    ) -> Result<Vec<ReportSellers>, StorageError> {
        let sql = format!("{REPORT_SELLERS} WHERE l.id = $1{GROUP_BY_LOCALITY}");
        let rows = scope
            .run(sqlx::query_as::<_, ReportSellers>(&sql).bind(id).fetch_all(&self.pool))
            .await?;
        non_empty(rows)
    }

    async fn report_carries_all(&self, scope: &RequestScope) -> Result<Vec<ReportCarries>, StorageError> {
        let sql = format!("{REPORT_CARRIES}{GROUP_BY_LOCALITY}");
        scope
            .run(sqlx::query_as::<_, ReportCarries>(&sql).fetch_all(&self.pool))
            .await
    }

    async fn report_carries_by_id(
        &self,
        scope: &RequestScope,
        id: &str,
    ) -> Result<Vec<ReportCarries>, StorageError> {
        let sql = format!("{REPORT_CARRIES} WHERE l.id = $1{GROUP_BY_LOCALITY}");
        let rows = scope
            .run(sqlx::query_as::<_, ReportCarries>(&sql).bind(id).fetch_all(&self.pool))
            .await?;
        non_empty(rows)
    }
}
