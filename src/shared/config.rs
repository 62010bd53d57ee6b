use std::env;
use std::time::Duration;

const DEFAULT_DATABASE: &str = "topic";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub database_name: String,
    pub host: String,
    pub port: u16,
    /// Bounds the startup connection and ping.
    pub connect_timeout: Duration,
    /// Bounds every repository call.
    pub operation_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `.env.{RUST_ENV}` is tried first, then `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = lookup("MONGO_URI")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("MONGO_URI"))?;

        let database_name =
            lookup("MONGO_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let connect_secs = parse_or(
            "MONGO_CONNECT_TIMEOUT_SECS",
            lookup("MONGO_CONNECT_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let operation_secs = parse_or(
            "MONGO_OPERATION_TIMEOUT_SECS",
            lookup("MONGO_OPERATION_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;

        if connect_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "MONGO_CONNECT_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        if operation_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "MONGO_OPERATION_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            mongo_uri,
            database_name,
            host,
            port,
            connect_timeout: Duration::from_secs(connect_secs),
            operation_timeout: Duration::from_secs(operation_secs),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
