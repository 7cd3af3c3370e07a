use std::future::Future;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{MySql, Pool};

use crate::state::Config;

pub type DbPool = Pool<MySql>;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

pub fn connect_options(config: &Config) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
}

pub async fn create_pool(config: &Config) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.db_pool_size)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(connect_options(config))
        .await
}

/// Builds the pool, retrying until the database accepts a connection or the
/// configured attempts run out. Returns the last error on exhaustion.
pub async fn connect_with_retry(config: &Config) -> Result<DbPool, sqlx::Error> {
    retry(config.db_connect_retries, config.db_retry_delay, move || async move {
        let pool = create_pool(config).await?;
        pool.acquire().await?;
        Ok::<_, sqlx::Error>(pool)
    })
    .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

async fn retry<F, Fut, T, E>(attempts: u32, delay: Duration, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = attempts.max(1);
    let mut remaining = attempts;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                remaining -= 1;
                if remaining == 0 {
                    tracing::error!("Could not connect to database after {} attempts", attempts);
                    return Err(e);
                }
                tracing::warn!(
                    "Database connection failed: {}. Retrying... ({} attempts left)",
                    e,
                    remaining
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
