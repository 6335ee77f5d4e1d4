use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mapmind::{MapMindConfig, ToolRegistry, tools, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = MapMindConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let port = config.server.port;
    let registry = Arc::new(ToolRegistry::new(config)?);

    let catalog = registry.catalog();
    info!(
        "MapMind {} starting: {} tools, {} locations, {} timelines, {} route pairs, {} stations",
        mapmind::VERSION,
        tools::TOOL_NAMES.len(),
        catalog.locations.len(),
        catalog.histories.len(),
        catalog.routes.len(),
        catalog.stations.len()
    );

    web::run(registry, port).await
}
