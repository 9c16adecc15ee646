// src/db/purchase_order_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{error::StorageError, scope::RequestScope},
    models::purchase_order::PurchaseOrder,
};

#[async_trait]
pub trait PurchaseOrderRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<PurchaseOrder>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<PurchaseOrder, StorageError>;
    async fn exists(&self, scope: &RequestScope, order_number: &str) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, order: &PurchaseOrder) -> Result<i64, StorageError>;
}

#[derive(Clone)]
pub struct PgPurchaseOrderRepository {
    pool: PgPool,
}

impl PgPurchaseOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseOrderRepository for PgPurchaseOrderRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<PurchaseOrder>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, PurchaseOrder>(
                    r#"
                    SELECT id, order_number, order_date, tracking_code, buyer_id,
                           product_record_id, order_status_id
                    FROM purchase_orders ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<PurchaseOrder, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, PurchaseOrder>(
                    r#"
                    SELECT id, order_number, order_date, tracking_code, buyer_id,
                           product_record_id, order_status_id
                    FROM purchase_orders WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, order_number: &str) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM purchase_orders WHERE order_number = $1)",
                )
                .bind(order_number)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, order: &PurchaseOrder) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO purchase_orders (
                        order_number, order_date, tracking_code, buyer_id,
                        product_record_id, order_status_id
                    )
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id
                    "#,
                )
                .bind(&order.order_number)
                .bind(order.order_date)
                .bind(&order.tracking_code)
                .bind(order.buyer_id)
                .bind(order.product_record_id)
                .bind(order.order_status_id)
                .fetch_one(&self.pool),
            )
            .await
    }
}
