use mongodb::{
    Client,
    error::ErrorKind,
    options::{ClientOptions, ServerApi, ServerApiVersion},
};
use std::time::Duration;
use tracing::info;

use super::{MongoConfig, ping};
use crate::common::{RetryConfig, retry_with_backoff};

/// Error type for MongoDB connection operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    /// The connection string or client options were rejected
    #[error("Invalid MongoDB configuration: {0}")]
    Config(#[source] mongodb::error::Error),

    /// The deployment did not answer the startup `ping`
    #[error("Connection failed: {0}")]
    ConnectionFailed(#[source] mongodb::error::Error),
}

impl MongoError {
    /// Whether another attempt could succeed: the deployment was unreachable
    /// rather than misconfigured or refusing our credentials.
    pub fn is_transient(&self) -> bool {
        match self {
            MongoError::Config(_) => false,
            MongoError::ConnectionFailed(e) => matches!(
                *e.kind,
                ErrorKind::ServerSelection { .. }
                    | ErrorKind::Io(_)
                    | ErrorKind::DnsResolve { .. }
                    | ErrorKind::ConnectionPoolCleared { .. }
            ),
        }
    }
}

/// Connect using a [`MongoConfig`] and verify the deployment answers a `ping`.
///
/// The driver connects lazily, so the ping is what surfaces a wrong URL or
/// bad credentials at startup instead of on the first request.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(url = %config.redacted_url(), "Attempting to connect to MongoDB");

    let mut options = ClientOptions::parse(&config.url)
        .await
        .map_err(MongoError::Config)?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    if config.stable_api {
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );
    }

    let client = Client::with_options(options).map_err(MongoError::Config)?;

    ping(&client).await.map_err(MongoError::ConnectionFailed)?;

    info!("Pinged your deployment. Successfully connected to MongoDB");
    Ok(client)
}

/// Connect from config, retrying while the deployment is unreachable.
///
/// `None` uses [`RetryConfig::default`]. Configuration and authentication
/// errors are returned after the first attempt.
///
/// ```ignore
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config_with_retry(&config, None).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    retry_with_backoff(
        || connect_from_config(config),
        retry_config.unwrap_or_default(),
        MongoError::is_transient,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_is_not_retried() {
        let config = MongoConfig::new("not-a-mongodb-url");
        let retry = RetryConfig::new().with_initial_delay(Duration::from_secs(10));

        let started = std::time::Instant::now();
        let err = connect_from_config_with_retry(&config, Some(retry))
            .await
            .unwrap_err();

        assert!(matches!(err, MongoError::Config(_)));
        assert!(!err.is_transient());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transient() {
        let mut config = MongoConfig::new("mongodb://127.0.0.1:1");
        config.server_selection_timeout_secs = 1;

        let err = connect_from_config(&config).await.unwrap_err();

        assert!(matches!(err, MongoError::ConnectionFailed(_)));
        assert!(err.is_transient());
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect_from_config() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let config = MongoConfig::with_database(url, "test");
        assert!(connect_from_config(&config).await.is_ok());
    }
}
