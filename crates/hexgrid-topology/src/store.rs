//! Storage contract for hex records.
//!
//! The topology engine is written once against [`HexStore`]. A store keeps two
//! lookups in sync: name → hex and coordinates → name. The in-memory
//! implementation is [`GridIndex`](crate::GridIndex); durable stores live with
//! the node that owns them.

use crate::error::{Error, Result};
use crate::hex::HexCoord;
use crate::tile::Hex;

/// A batch of writes that a store applies as one unit.
///
/// Deletions are applied before upserts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changeset {
    /// Hexes to write (insert or overwrite by name)
    pub upserts: Vec<Hex>,
    /// Hexes to drop from both lookups
    pub deletions: Vec<Hex>,
}

impl Changeset {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a write.
    pub fn put(mut self, hex: Hex) -> Self {
        self.upserts.push(hex);
        self
    }

    /// Queue a deletion.
    pub fn delete(mut self, hex: Hex) -> Self {
        self.deletions.push(hex);
        self
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.upserts.is_empty() && self.deletions.is_empty()
    }
}

/// Backing store for a grid.
pub trait HexStore {
    /// Look up a hex by name.
    fn get(&self, name: &str) -> Result<Option<Hex>>;

    /// Name of the hex at `coord`, if any.
    fn find_by_coord(&self, coord: HexCoord) -> Result<Option<String>>;

    /// Number of hexes stored.
    fn count(&self) -> Result<usize>;

    /// Every stored hex, in no particular order.
    fn hexes(&self) -> Result<Vec<Hex>>;

    /// Apply a batch of writes. Durable stores must apply it atomically.
    fn apply(&mut self, changes: Changeset) -> Result<()>;

    /// Write a single hex, overwriting any record with the same name.
    fn put(&mut self, hex: Hex) -> Result<()> {
        self.apply(Changeset::new().put(hex))
    }

    /// Remove a hex by name, returning it if it was present.
    fn delete(&mut self, name: &str) -> Result<Option<Hex>> {
        let Some(hex) = self.get(name)? else {
            return Ok(None);
        };
        self.apply(Changeset::new().delete(hex.clone()))?;
        Ok(Some(hex))
    }

    /// Write a new hex, enforcing name and coordinate uniqueness.
    fn insert(&mut self, hex: Hex) -> Result<()> {
        check_vacant(&*self, &hex)?;
        self.put(hex)
    }
}

/// Fail unless both the name and the coordinates of `hex` are free.
pub(crate) fn check_vacant<S: HexStore + ?Sized>(store: &S, hex: &Hex) -> Result<()> {
    if store.get(&hex.name)?.is_some() {
        return Err(Error::DuplicateName(hex.name.clone()));
    }
    if let Some(occupant) = store.find_by_coord(hex.coord)? {
        return Err(Error::DuplicateCoordinates {
            coord: hex.coord,
            occupant,
        });
    }
    Ok(())
}

impl<S: HexStore + ?Sized> HexStore for Box<S> {
    fn get(&self, name: &str) -> Result<Option<Hex>> {
        (**self).get(name)
    }

    fn find_by_coord(&self, coord: HexCoord) -> Result<Option<String>> {
        (**self).find_by_coord(coord)
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn hexes(&self) -> Result<Vec<Hex>> {
        (**self).hexes()
    }

    fn apply(&mut self, changes: Changeset) -> Result<()> {
        (**self).apply(changes)
    }
}
