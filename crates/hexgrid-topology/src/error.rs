//! Error types for grid operations.

use crate::HexCoord;
use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the topology engine.
///
/// Every variant is a recoverable outcome. When an operation fails the grid
/// is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The named hex is not in the grid.
    #[error("hex not found: {0}")]
    NotFound(String),

    /// A hex with this name already exists.
    #[error("hex already exists: {0}")]
    DuplicateName(String),

    /// The coordinates are already taken by another hex.
    #[error("coordinates {coord} already occupied by {occupant}")]
    DuplicateCoordinates {
        coord: HexCoord,
        occupant: String,
    },

    /// The anchor hex for an insertion does not exist (empty when none was given).
    #[error("unknown anchor hex: '{0}'")]
    UnknownAnchor(String),

    /// Border index outside 0..=5.
    #[error("invalid border: {0}")]
    InvalidBorder(i64),

    /// Removing the hex would split the grid.
    #[error("removing {0} would disconnect the grid")]
    UnsafeRemoval(String),

    /// A stored record contradicts the grid invariants.
    #[error("grid inconsistent: {0}")]
    Inconsistent(String),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),
}
