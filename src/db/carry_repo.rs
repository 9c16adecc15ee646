// src/db/carry_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{error::StorageError, scope::RequestScope},
    models::carry::Carry,
};

#[async_trait]
pub trait CarryRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Carry>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Carry, StorageError>;
    async fn exists(&self, scope: &RequestScope, cid: &str) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, carry: &Carry) -> Result<i64, StorageError>;
}

#[derive(Clone)]
pub struct PgCarryRepository {
    pool: PgPool,
}

impl PgCarryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarryRepository for PgCarryRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Carry>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Carry>(
                    "SELECT id, cid, company_name, address, telephone, locality_id
                     FROM carries ORDER BY id ASC",
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Carry, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Carry>(
                    "SELECT id, cid, company_name, address, telephone, locality_id
                     FROM carries WHERE id = $1",
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, cid: &str) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM carries WHERE cid = $1)")
                    .bind(cid)
                    .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, carry: &Carry) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO carries (cid, company_name, address, telephone, locality_id)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&carry.cid)
                .bind(&carry.company_name)
                .bind(&carry.address)
                .bind(&carry.telephone)
                .bind(&carry.locality_id)
                .fetch_one(&self.pool),
            )
            .await
    }
}
