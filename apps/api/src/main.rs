//! # Cadastro API Server
//!
//! Binary entry point: loads configuration, opens the database, wires the
//! ViaCEP client and serves HTTP until Ctrl+C or SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cadastro_address::{AddressVerifier, ViaCepClient};
use cadastro_api::{build_router, ApiConfig, AppState};
use cadastro_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cadastro_api=debug")),
        )
        .with_target(true)
        .init();

    info!("Starting Cadastro API server...");

    // Load configuration
    let config = ApiConfig::from_env()?;
    info!(
        port = config.port,
        database = %config.database_path,
        mode = ?config.address_check_mode,
        "Configuration loaded"
    );

    // Open database (runs migrations)
    let db = Database::new(
        DbConfig::new(&config.database_path).max_connections(config.database_max_connections),
    )
    .await?;
    info!("Database ready");

    // Address verification
    let client = ViaCepClient::new(&config.viacep_base_url, config.cep_lookup_timeout)?;
    let verifier = AddressVerifier::new(Arc::new(client)).with_timeout(config.cep_lookup_timeout);
    info!(
        base_url = %config.viacep_base_url,
        timeout_ms = verifier.timeout().as_millis() as u64,
        "Address verifier ready"
    );

    let state = AppState::new(
        Arc::new(db.registrations()),
        verifier,
        config.address_check_mode,
    );
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
