//! shop-admin server
//!
//! Usage: `shop-admin [config.yaml]`. Without an argument the path is read
//! from `SHOP_ADMIN_CONFIG`; without either, the built-in defaults are used
//! (in-memory stores on 127.0.0.1:3000).

use anyhow::Result;
use shop_admin::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "SHOP_ADMIN_CONFIG";

fn load_config() -> Result<AdminConfig> {
    let path = std::env::args().nth(1).or_else(|| std::env::var(CONFIG_ENV).ok());
    match path {
        Some(path) => AdminConfig::from_yaml_file(&path),
        None => Ok(AdminConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let state = AdminState::from_config(&config)?;

    ServerBuilder::new()
        .with_state(state)
        .with_permissive_cors(config.server.permissive_cors)
        .register_resources()?
        .serve(&config.server.address())
        .await
}
