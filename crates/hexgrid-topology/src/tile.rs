//! Hex records and their border links.

use crate::hex::{Border, HexCoord};

/// Neighbor links of a hex, one optional neighbor name per border.
///
/// An empty slot means nothing is linked there right now, not that nothing
/// could be placed there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Borders([Option<String>; Border::COUNT]);

impl Borders {
    /// No neighbors at any border.
    pub fn new() -> Self {
        Self::default()
    }

    /// Neighbor at `border`, if any.
    pub fn get(&self, border: Border) -> Option<&str> {
        self.0[border.index()].as_deref()
    }

    /// Link `name` at `border`, replacing any previous link.
    pub fn set(&mut self, border: Border, name: impl Into<String>) {
        self.0[border.index()] = Some(name.into());
    }

    /// Unlink whatever sits at `border`.
    pub fn clear(&mut self, border: Border) -> Option<String> {
        self.0[border.index()].take()
    }

    /// Whether a neighbor is linked at `border`.
    pub fn is_occupied(&self, border: Border) -> bool {
        self.0[border.index()].is_some()
    }

    /// Every slot in circular order, occupied or not.
    pub fn slots(&self) -> impl Iterator<Item = (Border, Option<&str>)> + '_ {
        Border::ALL.into_iter().map(move |b| (b, self.get(b)))
    }

    /// Occupied slots in circular order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Border, &str)> + '_ {
        self.slots().filter_map(|(b, n)| n.map(|n| (b, n)))
    }

    /// Number of linked neighbors.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|n| n.is_some()).count()
    }

    /// True when no border is linked.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<S: Into<String>> FromIterator<(Border, S)> for Borders {
    fn from_iter<I: IntoIterator<Item = (Border, S)>>(iter: I) -> Self {
        let mut borders = Self::new();
        for (border, name) in iter {
            borders.set(border, name);
        }
        borders
    }
}

/// A named tile on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    /// Unique, immutable identity
    pub name: String,
    /// Axial position, unique across the grid
    #[cfg_attr(feature = "serde", serde(rename = "coordinates"))]
    pub coord: HexCoord,
    /// Links to neighboring hexes
    pub borders: Borders,
}

impl Hex {
    /// A hex with no links yet.
    pub fn new(name: impl Into<String>, coord: HexCoord) -> Self {
        Self {
            name: name.into(),
            coord,
            borders: Borders::new(),
        }
    }
}
