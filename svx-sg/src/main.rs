//! svx-sg (Speech Synthesis Gateway) - Main entry point
//!
//! HTTP gateway in front of a local text-to-speech engine. Accepts text
//! over POST /tts, hands it to the engine, and reports the path of the
//! audio file that was written.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use svx_sg::config::GatewayConfig;
use svx_sg::synth::HttpSynthesizer;
use svx_sg::{build_router, AppState};

/// Command-line arguments for svx-sg
#[derive(Parser, Debug)]
#[command(name = "svx-sg")]
#[command(about = "Speech Synthesis Gateway")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "SVX_SG_PORT")]
    port: Option<u16>,

    /// Path the synthesized audio is written to
    #[arg(long, env = "SVX_SG_TTS_OUTPUT_PATH")]
    tts_output_path: Option<PathBuf>,

    /// Endpoint of the synthesis engine
    #[arg(long, env = "SVX_SG_ENGINE_URL")]
    engine_url: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, env = "SVX_SG_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "svx_sg=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting SVX Speech Gateway (svx-sg) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let config = GatewayConfig::resolve(
        args.port,
        args.tts_output_path,
        args.engine_url,
        args.config.as_deref(),
    )
    .context("Failed to resolve configuration")?;

    info!("Synthesis engine: {}", config.engine_url);
    info!("Audio output path: {}", config.tts_output_path.display());

    let synthesizer = Arc::new(HttpSynthesizer::new(config.engine_url.clone()));
    let state = AppState::new(synthesizer, config.tts_output_path.clone());
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("svx-sg listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
