use super::DbClient;
use crate::errors::ApiError;
use crate::Result;
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;

impl DbClient {
    pub async fn set_cache(&self, key: &str, value: &str) -> Result<()> {
        let mut redis_conn = self.get_async_redis_conn().await.map_err(|err| {
            tracing::error!("Redis connection error: {}", err);
            ApiError::from(err)
        })?;

        let stored: redis::RedisResult<()> =
            redis_conn.set_ex(key, value, self.cache_ttl_seconds()).await;
        if let Err(err) = stored {
            tracing::error!("Redis SET failed: {}", err);
            self.release_broken_redis_conn(&err).await;
            return Err(err.into());
        }
        tracing::debug!("Cache set for key: {}", key);
        Ok(())
    }

    pub async fn get_cache(&self, key: &str) -> Result<String> {
        let mut redis_conn = self.get_async_redis_conn().await.map_err(|err| {
            tracing::error!("Redis connection error: {}", err);
            ApiError::from(err)
        })?;

        let fetched: redis::RedisResult<Option<String>> = redis_conn.get(key).await;
        let value = match fetched {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("Redis GET failed: {}", err);
                self.release_broken_redis_conn(&err).await;
                return Err(err.into());
            }
        };

        value.ok_or_else(|| ApiError::NotFound(format!("No cache entry for key: {}", key)))
    }

    /// Serves `key` from Redis, or runs `load` and caches its JSON on a miss.
    /// Cache failures are logged and never fail the read.
    pub async fn cached<T, F, Fut>(&self, key: &str, load: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Ok(raw) = self.get_cache(key).await {
            match serde_json::from_str(&raw) {
                Ok(value) => {
                    tracing::debug!("Cache hit for key: {}", key);
                    return Ok(value);
                }
                Err(err) => tracing::warn!("Discarding unreadable cache entry {}: {}", key, err),
            }
        }

        let value = load().await?;
        match serde_json::to_string(&value) {
            Ok(raw) => {
                if let Err(err) = self.set_cache(key, &raw).await {
                    tracing::warn!("Unable to cache {}: {}", key, err);
                }
            }
            Err(err) => tracing::warn!("Unable to serialize {} for caching: {}", key, err),
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_round_trip() {
        dotenv::dotenv().ok();
        let db_url = std::env::var("TEST_DATABASE_URL").unwrap();
        let redis_url = std::env::var("TEST_REDIS_URL").unwrap();
        let client = DbClient::new(&db_url, &redis_url).unwrap();

        client.set_cache("test:greeting", "hello").await.unwrap();
        assert_eq!(client.get_cache("test:greeting").await.unwrap(), "hello");
        assert!(client.get_cache("test:missing-key").await.is_err());
    }
}
