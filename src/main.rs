//! spool-invoice server
//!
//! Usage: `spool-invoice [CONFIG.yaml]`
//!
//! Without a config file the server listens on 127.0.0.1:3000.

use anyhow::Result;
use spool_invoice::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_yaml_file(path)?,
        None => ServerConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.bind_address()?;
    tracing::info!(
        "Starting {} v{} (cors: {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.cors
    );

    ServerBuilder::from_config(&config)
        .with_store(InMemoryInvoiceStore::new())
        .serve(&addr.to_string())
        .await
}
