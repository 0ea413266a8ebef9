use crate::errors::ApiError;
use crate::Result;
use diesel_async::pooled_connection::deadpool::{self, PoolError};
use diesel_async::pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager};
use diesel_async::AsyncPgConnection;
use redis::aio::MultiplexedConnection;
use std::sync::Arc;
use tokio::sync::Mutex;

const DEFAULT_POOL_SIZE: usize = 20;
const DEFAULT_CACHE_TTL_SECONDS: u64 = 60;

#[derive(Clone)]
pub struct DbClient {
    pub db_pool: Pool<AsyncPgConnection>,
    pub async_redis_conn: Arc<Mutex<Option<MultiplexedConnection>>>,
    redis_url: String,
    cache_ttl_seconds: u64,
}

impl DbClient {
    pub fn new(db_url: &str, redis_url: &str) -> Result<Self> {
        Self::with_config(db_url, redis_url, DEFAULT_POOL_SIZE, DEFAULT_CACHE_TTL_SECONDS)
    }

    pub fn with_config(
        db_url: &str,
        redis_url: &str,
        pool_size: usize,
        cache_ttl_seconds: u64,
    ) -> Result<Self> {
        let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_url);
        let postgres_pool = Pool::builder(config)
            .max_size(pool_size)
            .build()
            .map_err(|e| ApiError::Custom(format!("Failed to create DB Pool: {e}")))?;

        Ok(Self {
            db_pool: postgres_pool,
            async_redis_conn: Arc::new(Mutex::new(None)),
            redis_url: redis_url.to_string(),
            cache_ttl_seconds,
        })
    }

    /// Get a connection from the Postgres pool
    pub async fn get_db_conn(&self) -> std::result::Result<deadpool::Object<AsyncPgConnection>, PoolError> {
        self.db_pool.get().await
    }

    /// Get async Redis connection (creates one if it doesn't exist)
    pub async fn get_async_redis_conn(&self) -> std::result::Result<MultiplexedConnection, redis::RedisError> {
        let mut conn_guard = self.async_redis_conn.lock().await;

        if let Some(conn) = conn_guard.as_ref() {
            return Ok(conn.clone());
        }

        let client = redis::Client::open(self.redis_url.as_str())?;
        let multiplexed_conn = client.get_multiplexed_async_connection().await?;
        *conn_guard = Some(multiplexed_conn.clone());
        Ok(multiplexed_conn)
    }

    /// Drops the shared Redis connection after `err` if the connection is unusable,
    /// so the next call reconnects
    pub async fn release_broken_redis_conn(&self, err: &redis::RedisError) {
        if err.is_unrecoverable_error() || err.is_connection_dropped() || err.is_io_error() {
            tracing::warn!("Dropping Redis connection: {}", err);
            *self.async_redis_conn.lock().await = None;
        }
    }

    /// Round-trips a PING over the shared Redis connection
    pub async fn ping_redis(&self) -> std::result::Result<(), redis::RedisError> {
        let mut conn = self.get_async_redis_conn().await?;
        match redis::cmd("PING").query_async::<String>(&mut conn).await {
            Ok(_) => Ok(()),
            Err(err) => {
                self.release_broken_redis_conn(&err).await;
                Err(err)
            }
        }
    }

    pub fn cache_ttl_seconds(&self) -> u64 {
        self.cache_ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_db_conn_healthcheck() {
        dotenv::dotenv().ok();
        let db_url = std::env::var("TEST_DATABASE_URL").unwrap();
        let redis_url = std::env::var("TEST_REDIS_URL").unwrap();
        let client = DbClient::new(&db_url, &redis_url).unwrap();

        let postgres_conn = client.get_db_conn().await;
        let redis_conn = client.get_async_redis_conn().await;

        assert!(postgres_conn.is_ok());
        assert!(redis_conn.is_ok());
    }

    #[tokio::test]
    async fn test_broken_redis_conn_is_released() {
        dotenv::dotenv().ok();
        let db_url = std::env::var("TEST_DATABASE_URL").unwrap();
        let redis_url = std::env::var("TEST_REDIS_URL").unwrap();
        let client = DbClient::new(&db_url, &redis_url).unwrap();

        client.ping_redis().await.unwrap();
        assert!(client.async_redis_conn.lock().await.is_some());

        let dropped = redis::RedisError::from(std::io::Error::from(
            std::io::ErrorKind::BrokenPipe,
        ));
        client.release_broken_redis_conn(&dropped).await;
        assert!(client.async_redis_conn.lock().await.is_none());

        client.ping_redis().await.unwrap();
        assert!(client.async_redis_conn.lock().await.is_some());
    }

    #[tokio::test]
    async fn test_unreachable_redis_is_not_cached() {
        let client = DbClient::new("postgres://localhost/unused", "redis://127.0.0.1:1").unwrap();

        assert!(client.ping_redis().await.is_err());
        assert!(client.async_redis_conn.lock().await.is_none());
    }
}
