//! Gridline coordinates of an 8x8 board.
//!
//! Coordinates are pixel indices in the original image. A line at `k` means
//! the cell after it starts at pixel `k` (crop boxes are start-inclusive,
//! end-exclusive).

use serde::{Deserialize, Serialize};

/// Lines strictly inside the board (7 for an 8x8 board).
pub const INTERNAL_LINES: usize = 7;
/// Internal lines plus the two board edges.
pub const LINE_COUNT: usize = INTERNAL_LINES + 2;
/// Cells per axis.
pub const BOARD_CELLS: usize = LINE_COUNT - 1;

/// Which projection a line set was recovered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal lines, indexed by image row (y).
    Rows,
    /// Vertical lines, indexed by image column (x).
    Cols,
}

/// The 7 validated internal gridlines of one axis, strictly increasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLines([usize; INTERNAL_LINES]);

impl InternalLines {
    /// Returns `None` unless `lines` has exactly 7 strictly increasing entries.
    pub fn from_slice(lines: &[usize]) -> Option<Self> {
        let arr: [usize; INTERNAL_LINES] = lines.try_into().ok()?;
        if arr.windows(2).any(|w| w[0] >= w[1]) {
            return None;
        }
        Some(Self(arr))
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn first(&self) -> usize {
        self.0[0]
    }

    #[inline]
    pub fn last(&self) -> usize {
        self.0[INTERNAL_LINES - 1]
    }

    /// Consecutive differences (6 values).
    pub fn gaps(&self) -> [usize; INTERNAL_LINES - 1] {
        let mut out = [0usize; INTERNAL_LINES - 1];
        for (g, w) in out.iter_mut().zip(self.0.windows(2)) {
            *g = w[1] - w[0];
        }
        out
    }
}

/// Leading edge, 7 internal lines, trailing edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet([usize; LINE_COUNT]);

impl LineSet {
    /// Surround `internal` with the two board edges.
    pub fn new(leading: usize, internal: &InternalLines, trailing: usize) -> Self {
        let mut arr = [0usize; LINE_COUNT];
        arr[0] = leading;
        arr[1..=INTERNAL_LINES].copy_from_slice(internal.as_slice());
        arr[LINE_COUNT - 1] = trailing;
        Self(arr)
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// `[start, end)` span of cell `idx` in `0..8`.
    #[inline]
    pub fn cell(&self, idx: usize) -> (usize, usize) {
        (self.0[idx], self.0[idx + 1])
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Both axes of a detected board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLines {
    pub rows: LineSet,
    pub cols: LineSet,
}

impl BoardLines {
    /// Pixel box `(x0, y0, x1, y1)` of the cell at board `(row, col)`, end-exclusive.
    pub fn cell_rect(&self, row: usize, col: usize) -> (usize, usize, usize, usize) {
        let (y0, y1) = self.rows.cell(row);
        let (x0, x1) = self.cols.cell(col);
        (x0, y0, x1, y1)
    }
}
