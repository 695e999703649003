//! HostelNexus assistant server entry point

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use hostel_nexus_config::Settings;
use hostel_nexus_server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first (observability settings drive tracing init)
    let config_path = std::env::var("HOSTEL_NEXUS_CONFIG")
        .unwrap_or_else(|_| "config/hostel-nexus.toml".to_string());
    let config = Settings::load(Some(Path::new(&config_path)))?;

    init_tracing(&config);

    tracing::info!("Starting HostelNexus assistant server v{}", env!("CARGO_PKG_VERSION"));

    // Storage layer
    let data_dir = config.storage.data_dir.clone().map(PathBuf::from);
    let persistence = hostel_nexus_persistence::init(data_dir)?;
    tracing::info!("Initialized storage layer");

    // Application state
    let state = AppState::new(config.clone(), persistence);
    tracing::info!("Initialized application state");

    // Expire idle sessions in the background
    let cleanup_shutdown = state.sessions.start_cleanup_task();

    // Create router
    let app = create_router(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = cleanup_shutdown.send(true);
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Initialize tracing from the observability settings
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("hostel_nexus={},tower_http=debug", level).into()
    });

    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
