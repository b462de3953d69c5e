//! chatrelay CLI and REST API entry point.
//!
//! Binary name: `chatrelay`
//!
//! Loads `.env` and `config.toml`, builds the explicit [`RelayConfig`], then
//! dispatches to a CLI command or starts the REST API server.

mod cli;

use clap::Parser;

use chatrelay_api::http;
use chatrelay_api::state::AppState;
use chatrelay_infra::config::{load_relay_config, resolve_data_dir};
use chatrelay_infra::secret::env::{EnvSecretProvider, GEMINI_API_KEY};
use chatrelay_infra::sqlite::chat::SqliteChatRepository;
use chatrelay_infra::sqlite::pool::{DatabasePool, database_url};
use chatrelay_observe::tracing_setup::{init_tracing, shutdown_tracing};
use chatrelay_types::config::RelayConfig;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn,chatrelay=info",
        1 => "info,chatrelay=debug,tower_http=debug",
        _ => "trace",
    };
    init_tracing(filter, cli.otel).map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let mut config = load_relay_config(&data_dir).await;
    if let Some(model) = cli.model {
        config.model = model;
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config, &data_dir, cli.quiet).await?;
        }

        Commands::Ask { message } => {
            let api_key = EnvSecretProvider::new().require(GEMINI_API_KEY)?;
            let state = AppState::init(config, &data_dir, api_key).await?;
            cli::chat::ask(&state, message, cli.json, cli.quiet).await?;
        }

        Commands::History => {
            tokio::fs::create_dir_all(&data_dir).await?;
            let pool = DatabasePool::new(&database_url(&data_dir)).await?;
            let repo = SqliteChatRepository::new(pool);
            cli::history::list_history(&repo, cli.json).await?;
        }
    }

    Ok(())
}

async fn serve(config: RelayConfig, data_dir: &std::path::Path, quiet: bool) -> anyhow::Result<()> {
    let api_key = EnvSecretProvider::new().require(GEMINI_API_KEY)?;

    let addr = config.bind_addr();
    let state = AppState::init(config, data_dir, api_key).await?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if !quiet {
        println!(
            "  {} chatrelay listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
