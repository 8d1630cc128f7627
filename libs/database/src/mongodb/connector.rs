use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use super::health::ping;
use crate::common::{DatabaseError, DatabaseResult, RetryPolicy, retry, retry_with_policy};

/// Connect to MongoDB with driver defaults and verify the connection with a ping
///
/// # Example
/// ```ignore
/// let client = database::mongodb::connect("mongodb://localhost:27017").await?;
/// let db = client.database("api");
/// ```
pub async fn connect(url: &str) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB");

    let options = ClientOptions::parse(url).await?;
    let client = Client::with_options(options)?;

    verify(&client).await?;
    Ok(client)
}

/// Build a client from a [`MongoConfig`] without contacting the server.
///
/// Timeouts and the application name are taken from the config; pool sizing is left
/// to the driver. The driver connects on first use and keeps reconnecting, so the
/// client stays usable while the server is down. Fails only when the connection
/// string cannot be parsed.
pub async fn client_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    let mut options = ClientOptions::parse(config.url()).await?;
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.app_name = config.app_name.clone();

    Ok(Client::with_options(options)?)
}

/// Connect using a [`MongoConfig`] and verify the connection with a ping
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_url());

    let client = client_from_config(config).await?;
    verify(&client).await?;
    Ok(client)
}

/// Ping `client` until it answers, with exponential backoff
///
/// `None` uses [`RetryPolicy::default`] (3 retries starting at 100ms). The client
/// remains valid when this gives up.
pub async fn wait_until_reachable(
    client: &Client,
    policy: Option<RetryPolicy>,
) -> DatabaseResult<()> {
    match policy {
        Some(policy) => retry_with_policy(|| verify(client), &policy).await,
        None => retry(|| verify(client)).await,
    }
}

async fn verify(client: &Client) -> DatabaseResult<()> {
    ping(client)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(())
}
