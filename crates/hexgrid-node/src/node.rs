//! Hexgrid node - the main application entry point.
//!
//! Architecture:
//! - One grid per process, owned by the node and shared with handlers
//! - Storage chosen at startup (RocksDB or in-memory)
//! - HTTP API for clients

use crate::api;
use crate::config::{NodeConfig, StoreBackend};
use crate::error::Result;
use crate::storage::RocksStore;
use hexgrid_topology::{Grid, GridIndex, HexStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store selected at runtime.
pub type DynStore = Box<dyn HexStore + Send + Sync>;

/// The grid shared with API handlers.
///
/// Mutations take the write guard for the whole add or remove so the
/// safety check and the commit see the same grid.
pub type SharedGrid = Arc<RwLock<Grid<DynStore>>>;

/// A hexgrid node instance.
pub struct Node {
    grid: SharedGrid,
    config: NodeConfig,
}

impl Node {
    /// Create a new node, opening its store.
    pub fn new(config: NodeConfig) -> Result<Self> {
        let store: DynStore = match config.backend {
            StoreBackend::Rocks => {
                // Ensure data directory exists
                std::fs::create_dir_all(&config.data_dir)?;
                Box::new(RocksStore::open(&config.data_dir)?)
            }
            StoreBackend::Memory => Box::new(GridIndex::new()),
        };

        let grid = Grid::with_store(store);
        grid.check_invariants()?;
        tracing::info!(hexes = grid.len()?, backend = ?config.backend, "grid loaded");

        Ok(Self {
            grid: Arc::new(RwLock::new(grid)),
            config,
        })
    }

    /// Get the shared grid (for API handlers).
    pub fn grid(&self) -> SharedGrid {
        Arc::clone(&self.grid)
    }

    /// Run the node (serves the HTTP API until the listener fails).
    pub async fn run(self) -> Result<()> {
        tracing::info!("Hexgrid node starting");
        tracing::info!("  API: http://{}", self.config.api_addr);
        tracing::info!("  Data: {:?}", self.config.data_dir);

        let app = api::build_router(self.grid());

        let listener = tokio::net::TcpListener::bind(self.config.api_addr).await?;
        tracing::info!("HTTP server listening on {}", self.config.api_addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
