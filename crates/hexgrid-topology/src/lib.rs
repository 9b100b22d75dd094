//! Hexgrid Topology
//!
//! A planar grid of named hexagonal tiles that stays a single connected
//! component as tiles come and go.
//!
//! # Model
//!
//! Each hex has a unique name, unique axial coordinates `(q, r)` and six
//! borders. Two hexes are neighbors when their coordinates touch; the link is
//! stored on both sides, at border `b` on one and `b.opposite()` on the other.
//!
//! # Operations
//!
//! - [`Grid::add_hex`] places the first hex at the origin and every later hex
//!   next to an anchor, linking it to all hexes already touching it.
//! - [`Grid::remove_hex`] refuses to remove a hex whose neighbors would end
//!   up in different components. A cheap look at the hex's own borders
//!   ([`removal_risk`]) settles most cases; the rest fall back to a
//!   breadth-first search ([`exists_path`]).
//!
//! # Storage
//!
//! The grid is generic over [`HexStore`]. [`GridIndex`] is the in-memory
//! implementation; durable stores implement the same trait.
//!
//! ```
//! use hexgrid_topology::{Grid, Error};
//!
//! let mut grid = Grid::new();
//! grid.add_hex("a", None)?;
//! grid.add_hex("b", Some(("a", 3)))?;
//! grid.add_hex("c", Some(("b", 2)))?;
//!
//! assert_eq!(grid.remove_hex("b"), Err(Error::UnsafeRemoval("b".into())));
//! grid.remove_hex("a")?;
//! # Ok::<(), Error>(())
//! ```

mod error;
mod grid;
mod hex;
mod index;
mod risk;
mod search;
mod store;
mod tile;
mod topology;

pub use error::{Error, Result};
pub use grid::Grid;
pub use hex::{neighbor_coordinates, opposing_border, Border, HexCoord};
pub use index::GridIndex;
pub use risk::removal_risk;
pub use search::exists_path;
pub use store::{Changeset, HexStore};
pub use tile::{Borders, Hex};
pub use topology::{relink, LinkMode};
