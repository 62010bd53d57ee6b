use std::future::IntoFuture;
use std::time::Duration;

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::shared::config::AppConfig;

const APP_NAME: &str = "topics_api";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mongodb error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Open a client for `config.mongo_uri` and return the configured database.
///
/// The server is pinged before returning so an unreachable deployment is
/// reported at startup rather than on the first request.
pub async fn connect(config: &AppConfig) -> Result<Database, StoreError> {
    let mut options = ClientOptions::parse(config.mongo_uri.as_str()).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.connect_timeout);

    let client = Client::with_options(options)?;
    let db = client.database(&config.database_name);

    bounded(config.connect_timeout, ping(&db)).await?;
    info!("Connected to MongoDB database '{}'", config.database_name);

    Ok(db)
}

pub async fn ping(db: &Database) -> mongodb::error::Result<Document> {
    db.run_command(doc! { "ping": 1 }).await
}

/// Run a driver operation, failing with [`StoreError::Timeout`] once `limit`
/// has elapsed.
pub async fn bounded<F, T>(limit: Duration, operation: F) -> Result<T, StoreError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(limit, operation.into_future()).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

/// Read a stored field that may be missing or explicitly `null` as
/// `T::default()`. Pair with `#[serde(default)]` for the missing case.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// BSON datetime that reads `null` as the Unix epoch.
pub fn datetime_or_epoch<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BsonDateTime>::deserialize(deserializer)?
        .map(BsonDateTime::to_chrono)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bounded_passes_through_results() {
        let result = bounded(Duration::from_secs(1), async { Ok::<_, mongodb::error::Error>(7) })
            .await
            .unwrap();
        assert_eq!(result, 7);
    }

    #[tokio::test]
    async fn bounded_reports_timeout() {
        let result = bounded(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, mongodb::error::Error>(())
        })
        .await;

        match result {
            Err(StoreError::Timeout(limit)) => assert_eq!(limit, Duration::from_millis(10)),
            other => panic!("Expected timeout, got {:?}", other),
        }
    }

    #[test]
    fn timeout_message_is_readable() {
        let err = StoreError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "operation timed out after 10s");
    }
}
