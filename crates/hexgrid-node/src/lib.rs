//! Hexgrid Node - HTTP service for a named hexagonal grid
//!
//! Serves one connected grid of hexes over HTTP, persisted in RocksDB or kept
//! in memory.
//!
//! # Architecture
//!
//! - **Config**: environment-driven [`NodeConfig`]
//! - **Storage**: RocksDB-backed [`RocksStore`] implementing the grid store contract
//! - **API**: HTTP endpoints for listing, adding and removing hexes
//! - **Node**: owns the grid and runs the server
//!
//! # Example
//!
//! ```no_run
//! use hexgrid_node::{Node, NodeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NodeConfig::from_env()?;
//!     let node = Node::new(config)?;
//!     node.run().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod node;
pub mod storage;

pub use config::{NodeConfig, StoreBackend};
pub use error::{Error, Result};
pub use node::{DynStore, Node, SharedGrid};
pub use storage::RocksStore;
