//! Breadth-first path existence over the border graph.

use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::store::HexStore;

/// Is there a path from `start` to `target` that never passes through
/// `excluding`?
///
/// `excluding` is marked visited before the search begins, so for the
/// duration of the query the grid behaves as if it were already removed.
/// Returns as soon as `target` is discovered. Fails with
/// [`Error::NotFound`] if `start` is not in the store.
pub fn exists_path<S: HexStore + ?Sized>(
    store: &S,
    start: &str,
    target: &str,
    excluding: &str,
) -> Result<bool> {
    if start == excluding || target == excluding {
        return Ok(false);
    }
    if start == target {
        return Ok(store.get(start)?.is_some());
    }

    let mut queue = VecDeque::new();
    let mut seen = HashSet::new();
    seen.insert(excluding.to_string());
    seen.insert(start.to_string());
    queue.push_back(start.to_string());

    while let Some(name) = queue.pop_front() {
        let hex = store
            .get(&name)?
            .ok_or_else(|| Error::NotFound(name.clone()))?;

        for (_, neighbor) in hex.borders.neighbors() {
            if neighbor == target {
                return Ok(true);
            }
            if seen.insert(neighbor.to_string()) {
                queue.push_back(neighbor.to_string());
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{chain, chain_with_bridge};
    use crate::Border;

    #[test]
    fn cut_vertex_blocks_path() {
        let grid = chain();
        for cut in ["b", "c", "d"] {
            assert!(!exists_path(grid.store(), "a", "e", cut).unwrap(), "cut {}", cut);
        }
    }

    #[test]
    fn bridge_restores_path() {
        let grid = chain_with_bridge();
        assert!(exists_path(grid.store(), "a", "e", "c").unwrap());
        assert!(exists_path(grid.store(), "a", "e", "b").unwrap());
        // Either route suffices on its own.
        assert!(exists_path(grid.store(), "a", "e", "f").unwrap());
    }

    #[test]
    fn side_branch_does_not_bypass_cut() {
        // f hangs off a and b; it gives no way around b.
        let mut grid = chain();
        grid.add_hex("f", Some(("b", 5))).unwrap();
        assert!(!exists_path(grid.store(), "a", "e", "b").unwrap());

        // g hangs off b and c below the chain; c is still a cut vertex.
        let mut grid = chain();
        grid.add_hex("g", Some(("b", 3))).unwrap();
        assert_eq!(
            grid.get_hex("g").unwrap().borders.get(Border::new(1).unwrap()),
            Some("c")
        );
        assert!(!exists_path(grid.store(), "a", "e", "c").unwrap());
    }

    #[test]
    fn unknown_start_is_not_found() {
        let grid = chain();
        assert_eq!(
            exists_path(grid.store(), "zz", "e", "c"),
            Err(Error::NotFound("zz".into()))
        );
    }

    #[test]
    fn trivial_queries() {
        let grid = chain();
        assert!(exists_path(grid.store(), "a", "a", "c").unwrap());
        assert!(!exists_path(grid.store(), "a", "c", "c").unwrap());
        assert!(!exists_path(grid.store(), "c", "a", "c").unwrap());
    }
}
