//! MySQL implementation of the OrderRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sf_core::domain::entities::order::{Order, OrderStatus};
use sf_core::errors::DomainError;
use sf_core::repositories::{OrderFilter, OrderRepository};

use super::{column_error, parse_uuid, query_error};

const ORDER_COLUMNS: &str = "id, user_id, product_id, card_last_four, status, created_at";

pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &sqlx::mysql::MySqlRow) -> Result<Order, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;
        let user_id: String = row.try_get("user_id").map_err(column_error("user_id"))?;
        let product_id: String = row
            .try_get("product_id")
            .map_err(column_error("product_id"))?;
        let status: String = row.try_get("status").map_err(column_error("status"))?;

        Ok(Order {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            product_id: parse_uuid(&product_id)?,
            card_last_four: row
                .try_get("card_last_four")
                .map_err(column_error("card_last_four"))?,
            status: status.parse::<OrderStatus>().map_err(DomainError::internal)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
        })
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO orders (id, user_id, product_id, card_last_four, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(order.id.to_string())
        .bind(order.user_id.to_string())
        .bind(order.product_id.to_string())
        .bind(&order.card_last_four)
        .bind(order.status.as_str())
        .bind(order.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_error("insert order"))?;

        Ok(order)
    }

    async fn list(&self, filter: OrderFilter) -> Result<Vec<Order>, DomainError> {
        let rows = match filter.owner {
            Some(owner) => {
                let query = format!(
                    "SELECT {} FROM orders WHERE user_id = ? ORDER BY created_at DESC, id DESC",
                    ORDER_COLUMNS
                );
                sqlx::query(&query)
                    .bind(owner.to_string())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {} FROM orders ORDER BY created_at DESC, id DESC",
                    ORDER_COLUMNS
                );
                sqlx::query(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(query_error("list orders"))?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let query = format!("SELECT {} FROM orders WHERE id = ? LIMIT 1", ORDER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find order"))?;

        row.as_ref().map(Self::row_to_order).transpose()
    }
}
