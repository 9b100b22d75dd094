//! The grid: safe insertion and removal over a [`HexStore`].
//!
//! A grid is connected whenever it is non-empty. Insertion keeps that true
//! because every new hex is attached to an anchor. Removal keeps it true by
//! running the local [`removal_risk`] check and, when that is inconclusive,
//! a path search between the separated neighbor groups.
//!
//! Mutating methods take `&mut self`; share a grid across tasks behind a lock
//! held for the whole call so the safety check and the commit see the same
//! state.

use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::hex::{Border, HexCoord};
use crate::index::GridIndex;
use crate::risk::removal_risk;
use crate::search;
use crate::store::HexStore;
use crate::tile::Hex;
use crate::topology::{relink, LinkMode};

/// A connected grid of named hexes.
#[derive(Debug, Clone, Default)]
pub struct Grid<S = GridIndex> {
    store: S,
}

impl Grid<GridIndex> {
    /// An empty in-memory grid.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: HexStore> Grid<S> {
    /// Wrap an existing store. The store is trusted to already satisfy the
    /// grid invariants; see [`Grid::check_invariants`].
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give back the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Number of hexes.
    pub fn len(&self) -> Result<usize> {
        self.store.count()
    }

    /// True when no hex has been placed yet.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store.count()? == 0)
    }

    /// Look up a hex by name.
    pub fn get_hex(&self, name: &str) -> Result<Hex> {
        self.store
            .get(name)?
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// All hexes, sorted by name.
    pub fn hexes(&self) -> Result<Vec<Hex>> {
        let mut hexes = self.store.hexes()?;
        hexes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(hexes)
    }

    /// Add a hex next to `anchor` at the given border of the anchor.
    ///
    /// The first hex of an empty grid goes to the origin and `anchor` is
    /// ignored. Otherwise the new hex is linked to the anchor and to every
    /// other hex already touching its position.
    pub fn add_hex(&mut self, name: &str, anchor: Option<(&str, i64)>) -> Result<Hex> {
        if self.is_empty()? {
            let hex = relink(&mut self.store, Hex::new(name, HexCoord::ORIGIN), LinkMode::Insert)?;
            tracing::info!(hex = %name, "placed first hex at origin");
            return Ok(hex);
        }

        if self.store.get(name)?.is_some() {
            return Err(Error::DuplicateName(name.to_string()));
        }
        let (anchor_name, border) = anchor.ok_or_else(|| Error::UnknownAnchor(String::new()))?;
        let anchor = self
            .store
            .get(anchor_name)?
            .ok_or_else(|| Error::UnknownAnchor(anchor_name.to_string()))?;
        let border = Border::new(border)?;

        let coord = anchor.coord.neighbor(border);
        let hex = relink(&mut self.store, Hex::new(name, coord), LinkMode::Insert)?;
        tracing::info!(
            hex = %name,
            anchor = %anchor.name,
            %border,
            %coord,
            links = hex.borders.count(),
            "added hex"
        );
        Ok(hex)
    }

    /// Remove a hex unless doing so would disconnect the grid.
    ///
    /// Returns the removed hex as it was before removal. On
    /// [`Error::UnsafeRemoval`] nothing is changed.
    pub fn remove_hex(&mut self, name: &str) -> Result<Hex> {
        let hex = self.get_hex(name)?;

        if let Some(groups) = removal_risk(&hex.borders) {
            // Every separated neighbor group must still reach the first one.
            let (first, rest) = groups
                .split_first()
                .ok_or_else(|| Error::Inconsistent(format!("empty risk result for {}", name)))?;
            for other in rest {
                if !search::exists_path(&self.store, first, other, name)? {
                    tracing::warn!(hex = %name, from = %first, to = %other, "removal rejected");
                    return Err(Error::UnsafeRemoval(name.to_string()));
                }
            }
            tracing::debug!(hex = %name, groups = groups.len(), "neighbor groups still connected");
        }

        let removed = relink(&mut self.store, hex, LinkMode::Remove)?;
        tracing::info!(hex = %name, coord = %removed.coord, "removed hex");
        Ok(removed)
    }

    /// Is there a path from `start` to `target` avoiding `excluding`?
    pub fn exists_path(&self, start: &str, target: &str, excluding: &str) -> Result<bool> {
        search::exists_path(&self.store, start, target, excluding)
    }

    /// Verify index consistency, border symmetry, link completeness and
    /// connectivity over the whole grid.
    pub fn check_invariants(&self) -> Result<()> {
        let hexes = self.store.hexes()?;
        if hexes.len() != self.store.count()? {
            return Err(Error::Inconsistent("count disagrees with listing".into()));
        }

        for hex in &hexes {
            if self.store.find_by_coord(hex.coord)?.as_deref() != Some(hex.name.as_str()) {
                return Err(Error::Inconsistent(format!(
                    "{} not indexed at {}",
                    hex.name, hex.coord
                )));
            }

            for border in Border::ALL {
                let occupant = self.store.find_by_coord(hex.coord.neighbor(border))?;
                if occupant.as_deref() != hex.borders.get(border) {
                    return Err(Error::Inconsistent(format!(
                        "{} border {} links {:?} but {:?} sits there",
                        hex.name,
                        border,
                        hex.borders.get(border),
                        occupant
                    )));
                }
                let Some(neighbor) = occupant else { continue };
                let back = self.get_hex(&neighbor)?;
                if back.borders.get(border.opposite()) != Some(hex.name.as_str()) {
                    return Err(Error::Inconsistent(format!(
                        "{} -> {} at border {} is not mirrored",
                        hex.name, neighbor, border
                    )));
                }
            }
        }

        let Some(first) = hexes.first() else {
            return Ok(());
        };
        let mut seen = HashSet::from([first.name.clone()]);
        let mut queue = VecDeque::from([first.clone()]);
        while let Some(hex) = queue.pop_front() {
            for (_, neighbor) in hex.borders.neighbors() {
                if seen.insert(neighbor.to_string()) {
                    queue.push_back(self.get_hex(neighbor)?);
                }
            }
        }
        if seen.len() != hexes.len() {
            return Err(Error::Inconsistent(format!(
                "{} of {} hexes reachable",
                seen.len(),
                hexes.len()
            )));
        }
        Ok(())
    }
}
