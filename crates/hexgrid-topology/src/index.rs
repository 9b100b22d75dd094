//! In-memory grid index.

use std::collections::HashMap;

use crate::error::Result;
use crate::hex::HexCoord;
use crate::store::{Changeset, HexStore};
use crate::tile::Hex;

/// Two synchronized hash maps: name → hex and coordinates → name.
///
/// Volatile; everything is lost when the index is dropped.
#[derive(Debug, Clone, Default)]
pub struct GridIndex {
    by_name: HashMap<String, Hex>,
    by_coord: HashMap<HexCoord, String>,
}

impl GridIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HexStore for GridIndex {
    fn get(&self, name: &str) -> Result<Option<Hex>> {
        Ok(self.by_name.get(name).cloned())
    }

    fn find_by_coord(&self, coord: HexCoord) -> Result<Option<String>> {
        Ok(self.by_coord.get(&coord).cloned())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.by_name.len())
    }

    fn hexes(&self) -> Result<Vec<Hex>> {
        Ok(self.by_name.values().cloned().collect())
    }

    fn apply(&mut self, changes: Changeset) -> Result<()> {
        for hex in changes.deletions {
            self.by_name.remove(&hex.name);
            self.by_coord.remove(&hex.coord);
        }
        for hex in changes.upserts {
            self.by_coord.insert(hex.coord, hex.name.clone());
            self.by_name.insert(hex.name.clone(), hex);
        }
        Ok(())
    }
}
