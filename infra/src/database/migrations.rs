//! Schema migrations
//!
//! Every statement is idempotent so the set can run on each startup.

use sqlx::MySqlPool;
use tracing::info;

use crate::InfrastructureError;

const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create_users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id CHAR(36) NOT NULL PRIMARY KEY,
            username VARCHAR(150) NOT NULL,
            email VARCHAR(254) NULL,
            password_hash VARCHAR(255) NOT NULL,
            role VARCHAR(16) NOT NULL DEFAULT 'customer',
            created_at DATETIME(6) NOT NULL,
            UNIQUE KEY uq_users_username (username)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_bin
        "#,
    ),
    (
        "create_products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id CHAR(36) NOT NULL PRIMARY KEY,
            name VARCHAR(200) NOT NULL,
            description TEXT NOT NULL,
            price DECIMAL(10, 2) NOT NULL,
            image_url VARCHAR(500) NOT NULL,
            created_at DATETIME(6) NOT NULL,
            KEY idx_products_name (name)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
        "#,
    ),
    (
        "create_orders",
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id CHAR(36) NOT NULL PRIMARY KEY,
            user_id CHAR(36) NOT NULL,
            product_id CHAR(36) NOT NULL,
            card_last_four CHAR(4) NOT NULL,
            status VARCHAR(16) NOT NULL,
            created_at DATETIME(6) NOT NULL,
            KEY idx_orders_user_created (user_id, created_at),
            CONSTRAINT fk_orders_user FOREIGN KEY (user_id) REFERENCES users (id),
            CONSTRAINT fk_orders_product FOREIGN KEY (product_id) REFERENCES products (id)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
        "#,
    ),
];

/// Create the users, products and orders tables if missing
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    info!(count = MIGRATIONS.len(), "Running database migrations");

    for (name, sql) in MIGRATIONS {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| InfrastructureError::Migration(format!("{}: {}", name, e)))?;
        info!(migration = name, "Migration applied");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent_statements() {
        for (name, sql) in MIGRATIONS {
            assert!(sql.contains("IF NOT EXISTS"), "{name} must be idempotent");
        }
    }

    #[test]
    fn test_orders_created_after_referenced_tables() {
        let position = |name: &str| MIGRATIONS.iter().position(|(n, _)| *n == name).unwrap();
        assert!(position("create_orders") > position("create_users"));
        assert!(position("create_orders") > position("create_products"));
    }
}
