// src/db/inbound_order_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{error::StorageError, scope::RequestScope},
    models::inbound_order::InboundOrder,
};

#[async_trait]
pub trait InboundOrderRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<InboundOrder>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<InboundOrder, StorageError>;
    async fn exists(&self, scope: &RequestScope, order_number: &str) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, order: &InboundOrder) -> Result<i64, StorageError>;
}

#[derive(Clone)]
pub struct PgInboundOrderRepository {
    pool: PgPool,
}

impl PgInboundOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InboundOrderRepository for PgInboundOrderRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<InboundOrder>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, InboundOrder>(
                    r#"
                    SELECT id, order_date, order_number, employee_id, product_batch_id, warehouse_id
                    FROM inbound_orders ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<InboundOrder, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, InboundOrder>(
                    r#"
                    SELECT id, order_date, order_number, employee_id, product_batch_id, warehouse_id
                    FROM inbound_orders WHERE id = $1
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
                    "SELECT EXISTS(SELECT 1 FROM inbound_orders WHERE order_number = $1)",
                )
                .bind(order_number)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, order: &InboundOrder) -> Result<i64, StorageError> {
        // A FK violada (employee / warehouse / product_batch) é identificada pelo classificador.
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO inbound_orders (
                        order_date, order_number, employee_id, product_batch_id, warehouse_id
                    )
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(order.order_date)
                .bind(&order.order_number)
                .bind(order.employee_id)
                .bind(order.product_batch_id)
                .bind(order.warehouse_id)
                .fetch_one(&self.pool),
            )
            .await
    }
}
