//! SQLite-backed config persistence.
//!
//! Every record kind shares one `configs` table keyed by `(config_type, config_id)`; the record
//! itself is stored as a JSON blob.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::persistence::{ConfigPersistence, ConfigSchema};
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteConfigPersistence {
    pool_manager: SqlitePoolManager,
}

impl SqliteConfigPersistence {
    pub async fn new(database_url: &str) -> Result<Self, ConfigError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let persistence = Self { pool_manager };
        persistence.init().await?;
        Ok(persistence)
    }

    async fn init(&self) -> Result<(), ConfigError> {
        info!("Creating config tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS configs (
                config_type TEXT NOT NULL,
                config_id TEXT NOT NULL,
                config_blob TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (config_type, config_id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        info!("Config tables created successfully");
        Ok(())
    }

    /// Returns the number of stored records of the given kind.
    pub async fn count(&self, schema: ConfigSchema) -> Result<i64, ConfigError> {
        let pool = self.pool_manager.pool();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM configs WHERE config_type = ?")
            .bind(schema.as_str())
            .fetch_one(pool)
            .await?;

        Ok(count.0)
    }
}

#[async_trait]
impl ConfigPersistence for SqliteConfigPersistence {
    async fn get_config(&self, schema: ConfigSchema, id: &str) -> Result<Value, ConfigError> {
        let pool = self.pool_manager.pool();

        let row: Option<(String,)> = sqlx::query_as(
            "SELECT config_blob FROM configs WHERE config_type = ? AND config_id = ?",
        )
        .bind(schema.as_str())
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let (blob,) = row.ok_or_else(|| ConfigError::not_found(schema, id))?;
        Ok(serde_json::from_str(&blob)?)
    }

    async fn list_configs(&self, schema: ConfigSchema) -> Result<Vec<Value>, ConfigError> {
        let pool = self.pool_manager.pool();

        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT config_blob FROM configs WHERE config_type = ? ORDER BY config_id",
        )
        .bind(schema.as_str())
        .fetch_all(pool)
        .await?;

        debug!(schema = %schema, count = rows.len(), "Listed configs");

        rows.into_iter()
            .map(|(blob,)| serde_json::from_str(&blob).map_err(ConfigError::from))
            .collect()
    }

    async fn write_config(
        &self,
        schema: ConfigSchema,
        id: &str,
        config: &Value,
    ) -> Result<(), ConfigError> {
        let pool = self.pool_manager.pool();
        let blob = serde_json::to_string(config)?;

        sqlx::query(
            r#"
            INSERT INTO configs (config_type, config_id, config_blob, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(config_type, config_id)
            DO UPDATE SET config_blob = excluded.config_blob, updated_at = excluded.updated_at
            "#,
        )
        .bind(schema.as_str())
        .bind(id)
        .bind(&blob)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        debug!(schema = %schema, config_id = %id, "Wrote config");
        Ok(())
    }
}
