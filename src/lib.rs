pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;
pub mod uploads;
pub mod web;

use anyhow::Context;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;
use db::Store;

/// Installs the global subscriber. `RUST_LOG` overrides `log_level`.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn init_config() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("Wrote config.toml");
    } else {
        println!("config.toml already exists, leaving it untouched");
    }
    Ok(())
}

pub async fn run(cli: Cli, config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    init_tracing(&config.general.log_level);

    match &config_path {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    match cli.command() {
        Commands::Serve => run_server(config).await,
        Commands::InitConfig => init_config(),
        Commands::Migrate => {
            config.validate()?;
            Store::with_pool_options(
                &config.general.database_path,
                config.general.max_db_connections,
                config.general.min_db_connections,
            )
            .await
            .context("Failed to open database")?;
            info!("Database ready at {}", config.general.database_path);
            Ok(())
        }
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    info!(
        "Bus pass renewal v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let addr = config.listen_addr();
    let state = web::create_app_state(config).await?;
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
