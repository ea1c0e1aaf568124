//! MySQL implementation of the ProductRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sf_core::domain::entities::product::Product;
use sf_core::errors::DomainError;
use sf_core::repositories::ProductRepository;

use super::{column_error, parse_uuid, query_error};

const PRODUCT_COLUMNS: &str = "id, name, description, price, image_url, created_at";

pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> Result<Product, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;

        Ok(Product {
            id: parse_uuid(&id)?,
            name: row.try_get("name").map_err(column_error("name"))?,
            description: row
                .try_get("description")
                .map_err(column_error("description"))?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(column_error("price"))?,
            image_url: row.try_get("image_url").map_err(column_error("image_url"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let query = format!("SELECT {} FROM products WHERE id = ? LIMIT 1", PRODUCT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find product"))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT {} FROM products WHERE id IN ({})",
            PRODUCT_COLUMNS, placeholders
        );

        let mut statement = sqlx::query(&query);
        for id in ids {
            statement = statement.bind(id.to_string());
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("find products"))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let query = format!("SELECT {} FROM products ORDER BY name, id", PRODUCT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("list products"))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, image_url, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_error("insert product"))?;

        Ok(product)
    }
}
