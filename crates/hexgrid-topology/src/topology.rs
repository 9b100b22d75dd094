//! Border linking on insertion and removal.
//!
//! [`relink`] is the only code path that changes border links or index
//! membership. Everything it writes goes to the store as one [`Changeset`].

use crate::error::{Error, Result};
use crate::hex::Border;
use crate::store::{check_vacant, Changeset, HexStore};
use crate::tile::Hex;

/// Whether a hex is joining or leaving the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Link the hex to every coordinate-adjacent hex and add it.
    Insert,
    /// Unlink the hex from its neighbors and drop it.
    Remove,
}

/// Scan all six borders of `hex`, update mutual links with whatever sits
/// there, and commit the hex's presence or absence.
///
/// On insert the returned hex carries its discovered links. On remove it is
/// returned as it was just before removal.
pub fn relink<S: HexStore + ?Sized>(store: &mut S, mut hex: Hex, mode: LinkMode) -> Result<Hex> {
    if mode == LinkMode::Insert {
        check_vacant(&*store, &hex)?;
    }

    let mut changes = Changeset::new();
    for border in Border::ALL {
        let Some(name) = store.find_by_coord(hex.coord.neighbor(border))? else {
            continue;
        };
        let mut neighbor = store.get(&name)?.ok_or_else(|| {
            Error::Inconsistent(format!("coordinate index points at missing hex {}", name))
        })?;

        match mode {
            LinkMode::Insert => {
                neighbor.borders.set(border.opposite(), hex.name.clone());
                hex.borders.set(border, name);
            }
            LinkMode::Remove => {
                neighbor.borders.clear(border.opposite());
            }
        }
        changes = changes.put(neighbor);
    }

    let linked = changes.upserts.len();
    changes = match mode {
        LinkMode::Insert => changes.put(hex.clone()),
        LinkMode::Remove => changes.delete(hex.clone()),
    };
    store.apply(changes)?;

    tracing::debug!(hex = %hex.name, coord = %hex.coord, ?mode, linked, "relinked");
    Ok(hex)
}
