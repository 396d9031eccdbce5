//! Cache factory for runtime backend selection

use std::sync::Arc;

use crate::domain::cache::Cache;
use crate::domain::DomainError;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Supported cache backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheType {
    #[default]
    InMemory,
    Redis,
}

impl std::fmt::Display for CacheType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InMemory => "memory",
            Self::Redis => "redis",
        })
    }
}

impl std::str::FromStr for CacheType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in_memory" | "in-memory" | "inmemory" | "moka" => Ok(Self::InMemory),
            "redis" => Ok(Self::Redis),
            other => Err(DomainError::configuration(format!(
                "Unknown cache backend: {}. Valid backends: memory, redis",
                other
            ))),
        }
    }
}

/// Backend-specific cache configuration
#[derive(Debug, Clone)]
pub enum CacheConfig {
    InMemory(InMemoryCacheConfig),
    Redis(RedisCacheConfig),
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::InMemory(InMemoryCacheConfig::default())
    }
}

impl CacheConfig {
    pub fn in_memory(max_capacity: u64) -> Self {
        Self::InMemory(InMemoryCacheConfig::default().with_max_capacity(max_capacity))
    }

    pub fn redis(url: impl Into<String>, key_prefix: Option<String>) -> Self {
        let config = RedisCacheConfig::new(url);

        Self::Redis(match key_prefix {
            Some(prefix) => config.with_key_prefix(prefix),
            None => config,
        })
    }

    pub fn cache_type(&self) -> CacheType {
        match self {
            Self::InMemory(_) => CacheType::InMemory,
            Self::Redis(_) => CacheType::Redis,
        }
    }
}

/// Factory for creating cache instances
#[derive(Debug)]
pub struct CacheFactory;

impl CacheFactory {
    /// Creates the configured cache; Redis connects eagerly so a bad URL fails startup
    pub async fn create(config: &CacheConfig) -> Result<Arc<dyn Cache>, DomainError> {
        match config {
            CacheConfig::InMemory(memory) => {
                Ok(Arc::new(InMemoryCache::with_config(memory.clone())))
            }
            CacheConfig::Redis(redis) => Ok(Arc::new(RedisCache::new(redis.clone()).await?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::CacheExt;

    #[test]
    fn test_cache_type_from_str() {
        assert_eq!("memory".parse::<CacheType>().unwrap(), CacheType::InMemory);
        assert_eq!("in-memory".parse::<CacheType>().unwrap(), CacheType::InMemory);
        assert_eq!("REDIS".parse::<CacheType>().unwrap(), CacheType::Redis);

        let result = "memcached".parse::<CacheType>();
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_cache_type_display_round_trips() {
        for cache_type in [CacheType::InMemory, CacheType::Redis] {
            assert_eq!(cache_type.to_string().parse::<CacheType>().unwrap(), cache_type);
        }
    }

    #[test]
    fn test_redis_config_with_prefix() {
        let config = CacheConfig::redis("redis://localhost:6379", Some("recipes-api".to_string()));

        assert_eq!(config.cache_type(), CacheType::Redis);
        match config {
            CacheConfig::Redis(redis) => {
                assert_eq!(redis.prefix_key("recipes"), "recipes-api:recipes");
            }
            CacheConfig::InMemory(_) => panic!("expected redis config"),
        }
    }

    #[tokio::test]
    async fn test_factory_create_in_memory() {
        let cache = CacheFactory::create(&CacheConfig::in_memory(10)).await.unwrap();

        cache.set("recipes", &vec!["Soup"], None).await.unwrap();

        let listing: Option<Vec<String>> = cache.get("recipes").await.unwrap();
        assert_eq!(listing, Some(vec!["Soup".to_string()]));
    }

    #[tokio::test]
    async fn test_factory_create_redis_bad_url() {
        let config = CacheConfig::redis("not-a-redis-url", None);

        let result = CacheFactory::create(&config).await;
        assert!(result.is_err());
    }
}
