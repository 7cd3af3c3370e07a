use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;
use crate::task::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub task_service: TaskService,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub db_pool_size: u32,
    pub db_connect_retries: u32,
    pub db_retry_delay: Duration,
    pub host: String,
    pub port: u16,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port: u16 = parse(&lookup, "PORT", 5000)?;

        Ok(Self {
            db_host: string("DB_HOST", "localhost"),
            db_user: string("DB_USER", "root"),
            db_password: string("DB_PASSWORD", ""),
            db_name: string("DB_NAME", "todo_db"),
            db_port: parse(&lookup, "DB_PORT", 3306)?,
            db_pool_size: parse(&lookup, "DB_POOL_SIZE", 10)?,
            db_connect_retries: parse(&lookup, "DB_CONNECT_RETRIES", 10)?,
            db_retry_delay: Duration::from_secs(parse(&lookup, "DB_RETRY_DELAY_SECS", 3)?),
            host: string("HOST", "0.0.0.0"),
            port,
            api_url: lookup("API_URL").unwrap_or_else(|| format!("http://localhost:{}/api", port)),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
