//! Hexagonal coordinate system using axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. Each hex has six borders numbered clockwise from
//! the top:
//!
//! ```text
//!          0
//!         ___
//!      5 /   \ 1
//!      4 \___/ 2
//!          3
//! ```
//!
//! A neighbor placed at border `b` sees the placing hex at `b.opposite()`.

use crate::error::{Error, Result};
use std::ops::{Add, Sub};

/// A position on the hexagonal plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    /// First axial coordinate
    pub q: i64,
    /// Second axial coordinate
    pub r: i64,
}

/// One of the six borders of a hex, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Border(u8);

impl Border {
    /// Number of borders on a hex.
    pub const COUNT: usize = 6;

    /// All six borders in circular order.
    pub const ALL: [Self; 6] = [Self(0), Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// Validate a raw border index.
    pub fn new(index: i64) -> Result<Self> {
        if (0..Self::COUNT as i64).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(Error::InvalidBorder(index))
        }
    }

    /// Raw index, usable as an array offset.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The border by which the neighbor across `self` sees us.
    pub const fn opposite(self) -> Self {
        if self.0 < 3 {
            Self(self.0 + 3)
        } else {
            Self(self.0 - 3)
        }
    }

    /// Coordinate offset to the neighbor across this border.
    pub const fn offset(self) -> HexCoord {
        HexCoord::BORDER_OFFSETS[self.0 as usize]
    }
}

impl std::fmt::Display for Border {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl HexCoord {
    /// Origin of the coordinate system, where the first hex is placed.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Offsets to the neighbor across each border, indexed by border.
    pub const BORDER_OFFSETS: [Self; 6] = [
        Self { q: 0, r: -1 },  // 0: top
        Self { q: 1, r: -1 },  // 1: upper right
        Self { q: 1, r: 0 },   // 2: lower right
        Self { q: 0, r: 1 },   // 3: bottom
        Self { q: -1, r: 1 },  // 4: lower left
        Self { q: -1, r: 0 },  // 5: upper left
    ];

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Hexagonal distance between two coordinates.
    ///
    /// max(|dq|, |dr|, |ds|) where ds = -dq - dr
    pub fn hex_distance(&self, other: &Self) -> u64 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = ((self.q - other.q) + (self.r - other.r)).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// The coordinate across `border`.
    #[inline]
    pub fn neighbor(&self, border: Border) -> Self {
        *self + border.offset()
    }

    /// All six neighbors, indexed by border.
    pub fn neighbors(&self) -> [Self; 6] {
        Self::BORDER_OFFSETS.map(|d| *self + d)
    }
}

/// Coordinates of the hex touching `(q, r)` at `border`.
///
/// Fails with [`Error::InvalidBorder`] outside `0..=5`.
pub fn neighbor_coordinates(q: i64, r: i64, border: i64) -> Result<HexCoord> {
    Ok(HexCoord::new(q, r).neighbor(Border::new(border)?))
}

/// Border index at which the neighbor across `border` sees the placing hex.
pub fn opposing_border(border: i64) -> Result<u8> {
    Ok(Border::new(border)?.opposite().0)
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
