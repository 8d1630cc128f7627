use axum_helpers::server::{ShutdownCoordinator, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{error, info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // The client connects lazily and reconnects on its own, so an unreachable server
    // only delays readiness. No client at all means the connection string is invalid.
    let mongo_client = match database::mongodb::client_from_config(&config.mongodb).await {
        Ok(client) => {
            let pinger = client.clone();
            let url = config.mongodb.redacted_url();
            tokio::spawn(async move {
                match database::mongodb::wait_until_reachable(&pinger, None).await {
                    Ok(()) => info!("MongoDB reachable at {}", url),
                    Err(e) => warn!(
                        error = %e,
                        "MongoDB unreachable at {}, requests will fail until it is back",
                        url
                    ),
                }
            });
            Some(client)
        }
        Err(e) => {
            error!(
                error = %e,
                "Invalid MongoDB settings for {}, starting without a database connection",
                config.mongodb.redacted_url()
            );
            None
        }
    };

    let state = AppState::new(config, mongo_client);
    let router = create_router(api::routes(&state), openapi::document());

    let (coordinator, _shutdown_rx) = ShutdownCoordinator::new();
    let server_config = state.config.server.clone();
    let mongo_client = state.mongo_client.clone();

    info!(
        "Starting {} v{} with graceful shutdown ({:?} cleanup timeout)",
        state.config.app.name, state.config.app.version, SHUTDOWN_TIMEOUT
    );

    create_production_app(
        router,
        &server_config,
        coordinator,
        SHUTDOWN_TIMEOUT,
        async move {
            if let Some(client) = mongo_client {
                info!("Shutting down: closing MongoDB connections");
                client.shutdown().await;
                info!("MongoDB connection closed successfully");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
