//! # powerctld: control server daemon
//!
//! Composition root that wires the host adapters into the HTTP API and
//! starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the OS power and Wake-on-LAN adapters
//! - Construct the control service and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! Wiring only. No domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use powerctl_adapter_http_axum::state::AppState;
use powerctl_adapter_system::{SystemPowerControl, UdpWakeSender};
use powerctl_app::services::control_service::ControlService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let api_key = config.api_key();
    if api_key.is_default() {
        tracing::warn!("using the default API key, set API_KEY before exposing this server");
    }

    let service = ControlService::new(SystemPowerControl::new(), UdpWakeSender::new());
    let app = powerctl_adapter_http_axum::router::build(AppState::new(service, api_key));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "powerctld listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("powerctld stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
