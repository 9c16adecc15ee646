// src/db/warehouse_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{error::StorageError, scope::RequestScope},
    models::warehouse::Warehouse,
};

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Warehouse>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Warehouse, StorageError>;
    async fn exists(&self, scope: &RequestScope, warehouse_code: &str) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, warehouse: &Warehouse) -> Result<i64, StorageError>;
    async fn update(&self, scope: &RequestScope, warehouse: &Warehouse) -> Result<(), StorageError>;
    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError>;
}

#[derive(Clone)]
pub struct PgWarehouseRepository {
    pool: PgPool,
}

impl PgWarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseRepository for PgWarehouseRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Warehouse>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Warehouse>(
                    r#"
                    SELECT id, warehouse_code, address, telephone, minimum_capacity,
                           minimum_temperature, locality_id
                    FROM warehouses ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Warehouse, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Warehouse>(
                    r#"
                    SELECT id, warehouse_code, address, telephone, minimum_capacity,
                           minimum_temperature, locality_id
                    FROM warehouses WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn exists(&self, scope: &RequestScope, warehouse_code: &str) -> Result<bool, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM warehouses WHERE warehouse_code = $1)",
                )
                .bind(warehouse_code)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, warehouse: &Warehouse) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO warehouses (
                        warehouse_code, address, telephone, minimum_capacity,
                        minimum_temperature, locality_id
                    )
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id
                    "#,
                )
                .bind(&warehouse.warehouse_code)
                .bind(&warehouse.address)
                .bind(&warehouse.telephone)
                .bind(warehouse.minimum_capacity)
                .bind(warehouse.minimum_temperature)
                .bind(&warehouse.locality_id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn update(&self, scope: &RequestScope, warehouse: &Warehouse) -> Result<(), StorageError> {
        scope
            .run(
                sqlx::query(
                    r#"
                    UPDATE warehouses
                    SET warehouse_code = $1, address = $2, telephone = $3,
                        minimum_capacity = $4, minimum_temperature = $5, locality_id = $6
                    WHERE id = $7
                    "#,
                )
                .bind(&warehouse.warehouse_code)
                .bind(&warehouse.address)
                .bind(&warehouse.telephone)
                .bind(warehouse.minimum_capacity)
                .bind(warehouse.minimum_temperature)
                .bind(&warehouse.locality_id)
                .bind(warehouse.id)
                .execute(&self.pool),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let result = scope
            .run(sqlx::query("DELETE FROM warehouses WHERE id = $1").bind(id).execute(&self.pool))
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
