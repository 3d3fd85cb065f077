//! safeping Server Entry Point

use anyhow::Context;
use clap::Parser;
use safeping::cli::{Cli, Commands};
use safeping::config::{ProbeConfig, ServerConfig};
use safeping::{api, logging, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle subcommands
    let (server_config, probe_config) = match cli.command {
        Some(Commands::Check(args)) => match safeping::cli::check::execute(&args).await {
            Ok(code) => std::process::exit(code),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Serve(args)) => (args.server_config(), args.probe.to_config()),
        None => {
            // No subcommand - default to serve
            (ServerConfig::from_env(), ProbeConfig::from_env())
        }
    };

    if let Err(e) = logging::init() {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run_server(server_config, probe_config).await {
        tracing::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig, probe_config: ProbeConfig) -> anyhow::Result<()> {
    info!("safeping v{}", env!("CARGO_PKG_VERSION"));
    info!(
        program = %probe_config.program,
        count = probe_config.count,
        timeout_secs = probe_config.timeout.as_secs_f32(),
        "Probe configuration"
    );

    let app = api::create_app(AppState::new(probe_config));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;

    info!("safeping server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
