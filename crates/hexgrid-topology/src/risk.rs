//! Local removal risk check.
//!
//! Looking only at the six borders of a hex, decide whether removing it could
//! split the grid. Neighbors on consecutive borders touch each other, so a
//! single contiguous arc of neighbors stays connected without the hex. Two or
//! more arcs separated by empty borders might only be joined through the hex
//! itself; those need a global search to settle.
//!
//! ```text
//!          0
//!         ___
//!      5 /   \ 1 A
//!    C 4 \___/ 2
//!          3
//!          B
//! ```
//!
//! Here A forms one arc and B, C another, separated by the gaps at 2 and 5-0.

use crate::hex::Border;
use crate::tile::Borders;

/// Classify removal of a hex with these borders.
///
/// Returns `None` when removal is provably safe. Otherwise returns one
/// representative neighbor per arc of consecutive occupied borders, ordered
/// by the arc's lowest border index. An arc wrapping from border 5 to border
/// 0 is represented by its border-0 neighbor.
pub fn removal_risk(borders: &Borders) -> Option<Vec<&str>> {
    let arcs = neighbor_arcs(borders);
    if arcs.len() < 2 || gap_count(borders) < 2 {
        return None;
    }

    Some(
        arcs.iter()
            .filter_map(|arc| arc.iter().min().and_then(|&b| borders.get(b)))
            .collect(),
    )
}

/// Maximal runs of consecutive occupied borders, walking circularly.
///
/// Sorted by lowest border index. A fully surrounded hex yields one arc of
/// all six borders; an isolated hex yields none.
fn neighbor_arcs(borders: &Borders) -> Vec<Vec<Border>> {
    // Start right after an empty border so no arc is cut by the wrap.
    let Some(gap) = Border::ALL.iter().position(|&b| !borders.is_occupied(b)) else {
        return vec![Border::ALL.to_vec()];
    };

    let mut arcs = Vec::new();
    let mut current = Vec::new();
    for step in 1..=Border::COUNT {
        let border = Border::ALL[(gap + step) % Border::COUNT];
        if borders.is_occupied(border) {
            current.push(border);
        } else if !current.is_empty() {
            arcs.push(std::mem::take(&mut current));
        }
    }

    arcs.sort_by_key(|arc| arc.iter().min().copied());
    arcs
}

/// Number of maximal runs of empty borders, walking circularly.
fn gap_count(borders: &Borders) -> usize {
    if borders.is_empty() {
        return 1;
    }
    Border::ALL
        .iter()
        .enumerate()
        .filter(|&(i, &b)| {
            let prev = Border::ALL[(i + Border::COUNT - 1) % Border::COUNT];
            !borders.is_occupied(b) && borders.is_occupied(prev)
        })
        .count()
}
