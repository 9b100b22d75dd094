//! Node configuration.

use crate::error::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the grid is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// RocksDB under the data directory
    Rocks,
    /// In memory; gone on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rocksdb" | "rocks" => Ok(Self::Rocks),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(Error::Config(format!("unknown store backend: {}", other))),
        }
    }
}

/// Configuration for a hexgrid node.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// HTTP API listen address
    pub api_addr: SocketAddr,

    /// Data directory for storage
    pub data_dir: PathBuf,

    /// Storage backend
    pub backend: StoreBackend,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            data_dir: PathBuf::from("./hexgrid-data"),
            backend: StoreBackend::Rocks,
        }
    }
}

impl NodeConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let api_addr = match lookup("HEXGRID_API_ADDR") {
            Some(addr) => addr
                .parse()
                .map_err(|e| Error::Config(format!("invalid HEXGRID_API_ADDR {:?}: {}", addr, e)))?,
            None => defaults.api_addr,
        };

        let data_dir = lookup("HEXGRID_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let backend = match lookup("HEXGRID_STORE") {
            Some(name) => name.parse()?,
            None => defaults.backend,
        };

        Ok(Self {
            api_addr,
            data_dir,
            backend,
        })
    }
}
