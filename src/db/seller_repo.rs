// src/db/seller_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{error::StorageError, scope::RequestScope},
    models::seller::Seller,
};

#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Seller>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Seller, StorageError>;
    async fn exists(&self, scope: &RequestScope, cid: i64) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, seller: &Seller) -> Result<i64, StorageError>;
    async fn update(&self, scope: &RequestScope, seller: &Seller) -> Result<(), StorageError>;
    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError>;
}

// O repositório de vendedores, responsável pela tabela 'sellers'
#[derive(Clone)]
pub struct PgSellerRepository {
    pool: PgPool,
}

impl PgSellerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SellerRepository for PgSellerRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Seller>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Seller>(
                    "SELECT id, cid, company_name, address, telephone, locality_id
                     FROM sellers ORDER BY id ASC",
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Seller, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Seller>(
                    "SELECT id, cid, company_name, address, telephone, locality_id
                     FROM sellers WHERE id = $1",
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, cid: i64) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM sellers WHERE cid = $1)")
                    .bind(cid)
                    .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, seller: &Seller) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO sellers (cid, company_name, address, telephone, locality_id)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(seller.cid)
                .bind(&seller.company_name)
                .bind(&seller.address)
                .bind(&seller.telephone)
                .bind(&seller.locality_id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn update(&self, scope: &RequestScope, seller: &Seller) -> Result<(), StorageError> {
        // Zero linhas afetadas não é erro no update (o serviço já carregou a entidade).
        scope
            .run(
                sqlx::query(
                    r#"
                    UPDATE sellers
                    SET cid = $1, company_name = $2, address = $3, telephone = $4, locality_id = $5
                    WHERE id = $6
                    "#,
                )
                .bind(seller.cid)
                .bind(&seller.company_name)
                .bind(&seller.address)
                .bind(&seller.telephone)
                .bind(&seller.locality_id)
                .bind(seller.id)
                .execute(&self.pool),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let result = scope
            .run(sqlx::query("DELETE FROM sellers WHERE id = $1").bind(id).execute(&self.pool))
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
