// src/db/employee_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{db_utils::non_empty, error::StorageError, scope::RequestScope},
    models::employee::{Employee, EmployeeWithInboundOrders},
};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Employee>, StorageError>;
    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Employee, StorageError>;
    async fn exists(&self, scope: &RequestScope, card_number_id: &str) -> Result<bool, StorageError>;
    async fn save(&self, scope: &RequestScope, employee: &Employee) -> Result<i64, StorageError>;
    async fn update(&self, scope: &RequestScope, employee: &Employee) -> Result<(), StorageError>;
    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError>;

    async fn report_inbound_orders_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<EmployeeWithInboundOrders>, StorageError>;
    async fn report_inbound_orders_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<EmployeeWithInboundOrders>, StorageError>;
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const REPORT_INBOUND_ORDERS: &str = r#"
    SELECT e.id, e.card_number_id, e.first_name, e.last_name, e.warehouse_id,
           COUNT(i.id) AS inbound_orders_count
    FROM employees e
    LEFT JOIN inbound_orders i ON i.employee_id = e.id
"#;

const GROUP_BY_EMPLOYEE: &str = " GROUP BY e.id ORDER BY e.id ASC";

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Employee>, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Employee>(
                    "SELECT id, card_number_id, first_name, last_name, warehouse_id
                     FROM employees ORDER BY id ASC",
                )
                .fetch_all(&self.pool),
            )
            .await
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Employee, StorageError> {
        scope
            .run(
                sqlx::query_as::<_, Employee>(
                    "SELECT id, card_number_id, first_name, last_name, warehouse_id
                     FROM employees WHERE id = $1",
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
                    "SELECT EXISTS(SELECT 1 FROM employees WHERE card_number_id = $1)",
                )
                .bind(card_number_id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn save(&self, scope: &RequestScope, employee: &Employee) -> Result<i64, StorageError> {
        scope
            .run(
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO employees (card_number_id, first_name, last_name, warehouse_id)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&employee.card_number_id)
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(employee.warehouse_id)
                .fetch_one(&self.pool),
            )
            .await
    }

    async fn update(&self, scope: &RequestScope, employee: &Employee) -> Result<(), StorageError> {
        scope
            .run(
                sqlx::query(
                    r#"
                    UPDATE employees
                    SET card_number_id = $1, first_name = $2, last_name = $3, warehouse_id = $4
                    WHERE id = $5
                    "#,
                )
                .bind(&employee.card_number_id)
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(employee.warehouse_id)
                .bind(employee.id)
                .execute(&self.pool),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let result = scope
            .run(sqlx::query("DELETE FROM employees WHERE id = $1").bind(id).execute(&self.pool))
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn report_inbound_orders_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<EmployeeWithInboundOrders>, StorageError> {
        let sql = format!("{REPORT_INBOUND_ORDERS}{GROUP_BY_EMPLOYEE}");
        scope
            .run(sqlx::query_as::<_, EmployeeWithInboundOrders>(&sql).fetch_all(&self.pool))
            .await
    }

    async fn report_inbound_orders_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<EmployeeWithInboundOrders>, StorageError> {
        let sql = format!("{REPORT_INBOUND_ORDERS} WHERE e.id = $1{GROUP_BY_EMPLOYEE}");
        let rows = scope
            .run(
                sqlx::query_as::<_, EmployeeWithInboundOrders>(&sql)
                    .bind(id)
                    .fetch_all(&self.pool),
            )
            .await?;
        non_empty(rows)
    }
}
