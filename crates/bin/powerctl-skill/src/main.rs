//! # powerctl-skill: voice skill service
//!
//! Composition root that wires the HTTP control client into the voice
//! dispatcher and serves the skill endpoint.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the control server client and the voice dispatcher
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)

mod config;

use tracing_subscriber::EnvFilter;

use powerctl_adapter_http_axum::state::SkillState;
use powerctl_app::services::voice_dispatcher::VoiceDispatcher;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let mac = config.mac()?;
    let client = config.client_config().build()?;
    tracing::info!(
        server_url = %config.control.server_url,
        %mac,
        "forwarding voice requests to control server"
    );

    let dispatcher = VoiceDispatcher::new(client, mac);
    let app = powerctl_adapter_http_axum::router::build_skill(SkillState::new(dispatcher));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "powerctl-skill listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("powerctl-skill stopped");
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
