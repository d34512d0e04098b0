use common::{Mark, Snapshot, CELLS};

/// A single cell mutation the view has to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub index: usize,
    pub mark: Mark,
}

/// Diffs an incoming snapshot against the last-rendered mirror and returns
/// one change per differing cell, in ascending index order. Applying the
/// same snapshot twice therefore yields nothing the second time.
pub fn diff(mirror: &Snapshot, next: &Snapshot) -> Vec<CellChange> {
    (0..CELLS)
        .filter(|&index| mirror.0[index] != next.0[index])
        .map(|index| CellChange {
            index,
            mark: next.0[index],
        })
        .collect()
}
