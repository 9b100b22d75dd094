//! Hexgrid node binary
//!
//! Serves a hexagonal tile grid over HTTP.

use hexgrid_node::{Node, NodeConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexgrid_node=info,hexgrid_topology=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hexgrid node");

    let config = NodeConfig::from_env()?;

    // Create and run node
    let node = Node::new(config)?;
    node.run().await?;

    Ok(())
}
