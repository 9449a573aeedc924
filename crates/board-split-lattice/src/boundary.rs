use crate::params::CellSizeEstimate;
use board_split_core::{InternalLines, LineSet};

/// Representative cell size along one axis.
pub fn estimate_cell_size(internal: &InternalLines, policy: CellSizeEstimate) -> usize {
    let mut gaps = internal.gaps();
    match policy {
        CellSizeEstimate::FirstGap => gaps[0],
        CellSizeEstimate::MedianGap => {
            gaps.sort_unstable();
            gaps[(gaps.len() - 1) / 2]
        }
    }
}

/// Add the two outer board edges one cell away from the first and last
/// internal lines, clamped to `[0, dim]`.
pub fn extend_with_boundaries(
    internal: &InternalLines,
    policy: CellSizeEstimate,
    dim: usize,
) -> LineSet {
    let cell = estimate_cell_size(internal, policy);
    let leading = internal.first().saturating_sub(cell);
    let trailing = (internal.last() + cell).min(dim);
    LineSet::new(leading, internal, trailing)
}
