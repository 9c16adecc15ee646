// src/db/buyer_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{db_utils::non_empty, error::StorageError, scope::RequestScope},
    models::buyer::{Buyer, PurchaseOrdersByBuyer},
};

#[async_trait]
pub trait BuyerRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Buyer>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Buyer, StorageError>;
    async fn exists(&self, scope: &RequestScope, card_number_id: &str) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, buyer: &Buyer) -> Result<i64, StorageError>;
    async fn update(&self, scope: &RequestScope, buyer: &Buyer) -> Result<(), StorageError>;
    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError>;

    async fn report_purchase_orders_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<PurchaseOrdersByBuyer>, StorageError>;
    async fn report_purchase_orders_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<PurchaseOrdersByBuyer>, StorageError>;
}

#[derive(Clone)]
pub struct PgBuyerRepository {
    pool: PgPool,
}

impl PgBuyerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const REPORT_PURCHASE_ORDERS: &str = r#"
    SELECT b.id AS buyer_id, b.card_number_id, b.first_name, b.last_name, COUNT(p.id) AS orders_count
    FROM buyers b
    LEFT JOIN purchase_orders p ON p.buyer_id = b.id
"#;

const GROUP_BY_BUYER: &str = " GROUP BY b.id ORDER BY b.id ASC";

#[async_trait]
impl BuyerRepository for PgBuyerRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Buyer>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Buyer>(
                    "SELECT id, card_number_id, first_name, last_name FROM buyers ORDER BY id ASC",
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Buyer, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Buyer>(
                    "SELECT id, card_number_id, first_name, last_name FROM buyers WHERE id = $1",
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, card_number_id: &str) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM buyers WHERE card_number_id = $1)",
                )
                .bind(card_number_id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, buyer: &Buyer) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO buyers (card_number_id, first_name, last_name)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(&buyer.card_number_id)
                .bind(&buyer.first_name)
                .bind(&buyer.last_name)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn update(&self, scope: &RequestScope, buyer: &Buyer) -> Result<(), StorageError> {
        scope
            .run(
                sqlx::query(
                    "UPDATE buyers SET card_number_id = $1, first_name = $2, last_name = $3 WHERE id = $4",
                )
                .bind(&buyer.card_number_id)
                .bind(&buyer.first_name)
                .bind(&buyer.last_name)
                .bind(buyer.id)
                .execute(&self.pool),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let result = scope
            .run(sqlx::query("DELETE FROM buyers WHERE id = $1").bind(id).execute(&self.pool))
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn report_purchase_orders_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<PurchaseOrdersByBuyer>, StorageError> {
        let sql = format!("{REPORT_PURCHASE_ORDERS}{GROUP_BY_BUYER}");
        scope
            .run(sqlx::query_as::<_, PurchaseOrdersByBuyer>(&sql).fetch_all(&self.pool))
            .await
    }

    async fn report_purchase_orders_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<PurchaseOrdersByBuyer>, StorageError> {
        let sql = format!("{REPORT_PURCHASE_ORDERS} WHERE b.id = $1{GROUP_BY_BUYER}");
        let rows = scope
            .run(sqlx::query_as::<_, PurchaseOrdersByBuyer>(&sql).bind(id).fetch_all(&self.pool))
            .await?;
        non_empty(rows)
    }
}
