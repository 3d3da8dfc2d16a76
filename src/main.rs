use anyhow::{Context, Result};
use fleetwatch::api::create_app;
use fleetwatch::config::{load_config, FleetConfig};
use fleetwatch::fleet::{FleetService, FleetStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetwatch=info".into()),
        )
        .init();

    info!("Fleetwatch starting...");

    // Configuration file is optional; defaults cover every field
    let mut config = match std::env::var("FLEET_CONFIG") {
        Ok(path) => {
            let config = load_config(&path)?;
            info!(path = %path, "Configuration file loaded");
            config
        }
        Err(_) => FleetConfig::default(),
    };
    config.apply_env_overrides();
    config
        .validate()
        .context("Invalid configuration after environment overrides")?;

    info!(
        bind_address = %config.api.bind_address,
        tick_interval_ms = config.simulation.tick_interval_ms,
        autostart = config.simulation.autostart,
        seed = ?config.simulation.seed,
        notification_capacity = config.notifications.capacity,
        "Configuration loaded"
    );

    // Fleet task owns assets and notification log
    let store = FleetStore::from_config(&config);
    let fleet = FleetService::spawn(store, config.api.event_buffer);

    let app = create_app(fleet);
    let listener = tokio::net::TcpListener::bind(&config.api.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.api.bind_address))?;
    info!(address = %config.api.bind_address, "Fleet API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Fleet API server error")?;

    info!("Fleetwatch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Keep serving without a shutdown trigger
        tracing::error!(error = %e, "Failed to listen for ctrl_c signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
