//! Payroll document server.
//!
//! Reads `.env` if present, then:
//!
//! - `PAYROLL_DOCS_CONFIG_DIR` (default `./config`)
//! - `PAYROLL_DOCS_ASSET_DIR` (default `./assets`)
//! - `PAYROLL_DOCS_BIND` (default `0.0.0.0:8080`)
//! - `RUST_LOG` (default `info`)

use std::env;
use std::sync::Arc;

use payroll_docs::api::{AppState, create_router};
use payroll_docs::assets::FsAssetStore;
use payroll_docs::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_ASSET_DIR: &str = "./assets";
const DEFAULT_BIND: &str = "0.0.0.0:8080";

fn setting(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside development.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config_dir = setting("PAYROLL_DOCS_CONFIG_DIR", DEFAULT_CONFIG_DIR);
    let asset_dir = setting("PAYROLL_DOCS_ASSET_DIR", DEFAULT_ASSET_DIR);
    let bind = setting("PAYROLL_DOCS_BIND", DEFAULT_BIND);

    let config = ConfigLoader::load(&config_dir).inspect_err(|err| {
        error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
    })?;
    let assets = Arc::new(FsAssetStore::new(&asset_dir));
    let router = create_router(AppState::new(config, assets));

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(
        address = %bind,
        asset_dir = %asset_dir,
        "Payroll document server listening"
    );

    axum::serve(listener, router).await?;
    Ok(())
}
