//! Persistent hex storage using RocksDB.
//!
//! Keys:
//! - `hex:{name}` → JSON-encoded [`Hex`]
//! - `coord:{q},{r}` → hex name

use hexgrid_topology::{Changeset, Hex, HexCoord, HexStore};
use rocksdb::{Options, WriteBatch, DB};
use std::path::Path;

type GridResult<T> = hexgrid_topology::Result<T>;

const HEX_PREFIX: &[u8] = b"hex:";

/// Durable [`HexStore`] backed by a RocksDB database.
pub struct RocksStore {
    db: DB,
}

impl RocksStore {
    /// Open or create storage at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, path)?;
        Ok(Self { db })
    }

    fn hex_key(name: &str) -> String {
        format!("hex:{}", name)
    }

    fn coord_key(coord: HexCoord) -> String {
        format!("coord:{},{}", coord.q, coord.r)
    }

    /// Visit every stored hex record.
    fn scan_hexes(&self, mut visit: impl FnMut(&[u8]) -> GridResult<()>) -> GridResult<()> {
        let iter = self.db.prefix_iterator(HEX_PREFIX);
        for item in iter {
            let (key, value) = item.map_err(storage_error)?;
            if !key.starts_with(HEX_PREFIX) {
                break;
            }
            visit(&value)?;
        }
        Ok(())
    }
}

fn storage_error(e: impl std::fmt::Display) -> hexgrid_topology::Error {
    hexgrid_topology::Error::Storage(e.to_string())
}

impl HexStore for RocksStore {
    fn get(&self, name: &str) -> GridResult<Option<Hex>> {
        match self.db.get(Self::hex_key(name).as_bytes()).map_err(storage_error)? {
            Some(data) => Ok(Some(serde_json::from_slice(&data).map_err(storage_error)?)),
            None => Ok(None),
        }
    }

    fn find_by_coord(&self, coord: HexCoord) -> GridResult<Option<String>> {
        match self.db.get(Self::coord_key(coord).as_bytes()).map_err(storage_error)? {
            Some(data) => Ok(Some(String::from_utf8(data).map_err(storage_error)?)),
            None => Ok(None),
        }
    }

    fn count(&self) -> GridResult<usize> {
        let mut count = 0;
        self.scan_hexes(|_| {
            count += 1;
            Ok(())
        })?;
        Ok(count)
    }

    fn hexes(&self) -> GridResult<Vec<Hex>> {
        let mut hexes: Vec<Hex> = Vec::new();
        self.scan_hexes(|value| {
            hexes.push(serde_json::from_slice(value).map_err(storage_error)?);
            Ok(())
        })?;
        Ok(hexes)
    }

    fn apply(&mut self, changes: Changeset) -> GridResult<()> {
        let mut batch = WriteBatch::default();
        for hex in &changes.deletions {
            batch.delete(Self::hex_key(&hex.name).as_bytes());
            batch.delete(Self::coord_key(hex.coord).as_bytes());
        }
        for hex in &changes.upserts {
            let value = serde_json::to_vec(hex).map_err(storage_error)?;
            batch.put(Self::hex_key(&hex.name).as_bytes(), value);
            batch.put(Self::coord_key(hex.coord).as_bytes(), hex.name.as_bytes());
        }
        self.db.write(batch).map_err(storage_error)
    }
}
