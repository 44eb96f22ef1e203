use std::env;
use std::str::FromStr;

use anyhow::Result;

/// Which backend stores config records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStoreType {
    Sqlite,
    Memory,
}

impl FromStr for ConfigStoreType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!(
                "CONFIG_STORE_TYPE must be `sqlite` or `memory`, got `{}`",
                other
            ),
        }
    }
}

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// DATALINE_DATABASE_URL: SQLite file path or `sqlite:` URL
    pub database_url: String,
    /// CONFIG_STORE_TYPE
    pub config_store_type: ConfigStoreType,
    /// DATALINE_LOG_FILE
    pub log_file: String,
}

impl ServerConfig {
    /// Load from environment variables, falling back to defaults for anything unset.
    pub fn load() -> Result<Self> {
        let database_url = env::var("DATALINE_DATABASE_URL")
            .unwrap_or_else(|_| "./data/dataline.db".to_string());
        let config_store_type = env::var("CONFIG_STORE_TYPE")
            .unwrap_or_else(|_| "sqlite".to_string())
            .parse()?;
        let log_file =
            env::var("DATALINE_LOG_FILE").unwrap_or_else(|_| "logs/dataline-server.log".to_string());

        Ok(Self {
            database_url,
            config_store_type,
            log_file,
        })
    }
}
