use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::cache::{CacheConfig, CacheType};
use crate::infrastructure::observability::MetricsConfig;
use crate::infrastructure::services::RecipeCacheConfig;
use crate::infrastructure::storage::{PostgresConfig, StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Document store settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    /// Connection URL, required for postgres
    #[serde(default)]
    pub url: Option<String>,
    /// Collection (table) holding recipe documents
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Listing cache settings
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// `memory` or `redis`
    #[serde(default = "default_cache_backend")]
    pub backend: String,
    /// Connection URL, required for redis
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub key_prefix: Option<String>,
    #[serde(default = "default_listing_key")]
    pub listing_key: String,
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

fn default_storage_backend() -> String {
    "memory".to_string()
}

fn default_table() -> String {
    "recipes".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_cache_backend() -> String {
    "memory".to_string()
}

fn default_listing_key() -> String {
    crate::infrastructure::services::DEFAULT_LISTING_KEY.to_string()
}

fn default_max_capacity() -> u64 {
    1_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            url: None,
            table: default_table(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: default_cache_backend(),
            url: None,
            key_prefix: None,
            listing_key: default_listing_key(),
            max_capacity: default_max_capacity(),
        }
    }
}

impl StorageSettings {
    /// Resolves the settings into a store configuration
    pub fn to_storage_config(&self) -> Result<StorageConfig, DomainError> {
        match self.backend.parse::<StorageType>()? {
            StorageType::InMemory => Ok(StorageConfig::in_memory()),
            StorageType::Postgres => {
                let url = self.url.clone().ok_or_else(|| {
                    DomainError::configuration("storage.url is required for the postgres backend")
                })?;

                Ok(StorageConfig::postgres(
                    PostgresConfig::new(url).with_max_connections(self.max_connections),
                ))
            }
        }
    }
}

impl CacheSettings {
    /// Resolves the settings into a cache configuration
    pub fn to_cache_config(&self) -> Result<CacheConfig, DomainError> {
        match self.backend.parse::<CacheType>()? {
            CacheType::InMemory => Ok(CacheConfig::in_memory(self.max_capacity)),
            CacheType::Redis => {
                let url = self.url.clone().ok_or_else(|| {
                    DomainError::configuration("cache.url is required for the redis backend")
                })?;

                Ok(CacheConfig::redis(url, self.key_prefix.clone()))
            }
        }
    }

    pub fn to_recipe_cache_config(&self) -> RecipeCacheConfig {
        RecipeCacheConfig::default().with_listing_key(self.listing_key.clone())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.storage.backend, "memory");
        assert_eq!(config.storage.table, "recipes");
        assert_eq!(config.cache.backend, "memory");
        assert_eq!(config.cache.listing_key, "recipes");
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"cache": {"backend": "redis", "url": "redis://localhost:6379"}}"#,
        )
        .unwrap();

        assert_eq!(config.cache.backend, "redis");
        assert_eq!(config.cache.listing_key, "recipes");
        assert_eq!(config.storage.backend, "memory");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_partial_server_section() {
        let config: AppConfig = serde_json::from_str(r#"{"server": {"port": 9090}}"#).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_log_format_lowercase() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level": "debug", "format": "json"}"#).unwrap();

        assert!(matches!(config.format, LogFormat::Json));
    }

    #[test]
    fn test_storage_settings_resolution() {
        let memory = StorageSettings::default().to_storage_config().unwrap();
        assert_eq!(memory.storage_type(), StorageType::InMemory);

        let postgres = StorageSettings {
            backend: "postgres".to_string(),
            url: Some("postgres://localhost/recipes".to_string()),
            ..Default::default()
        };
        assert_eq!(
            postgres.to_storage_config().unwrap().storage_type(),
            StorageType::Postgres
        );
    }

    #[test]
    fn test_storage_settings_postgres_requires_url() {
        let settings = StorageSettings {
            backend: "postgres".to_string(),
            ..Default::default()
        };

        let result = settings.to_storage_config();
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_cache_settings_resolution() {
        let settings = CacheSettings {
            backend: "redis".to_string(),
            url: Some("redis://localhost:6379".to_string()),
            key_prefix: Some("recipes-api".to_string()),
            ..Default::default()
        };

        let config = settings.to_cache_config().unwrap();
        assert_eq!(config.cache_type(), CacheType::Redis);

        let memory = CacheSettings::default().to_cache_config().unwrap();
        assert_eq!(memory.cache_type(), CacheType::InMemory);
    }

    #[test]
    fn test_cache_settings_unknown_backend() {
        let settings = CacheSettings {
            backend: "memcached".to_string(),
            ..Default::default()
        };

        assert!(settings.to_cache_config().is_err());
    }

    #[test]
    fn test_recipe_cache_config_uses_listing_key() {
        let settings = CacheSettings {
            listing_key: "recipes:all".to_string(),
            ..Default::default()
        };

        assert_eq!(settings.to_recipe_cache_config().listing_key, "recipes:all");
    }
}
