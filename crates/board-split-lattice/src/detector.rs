use crate::boundary::extend_with_boundaries;
use crate::gradient::{compute_gradients, GradientField};
use crate::lattice::select_internal_lines;
use crate::params::LatticeParams;
use crate::peaks::find_peaks;
use crate::projection::{col_signal, row_signal, suppress_below_fraction_of_max, ProjectionSignal};
use board_split_core::{Axis, BoardLines, GrayImageView, InternalLines};
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Gridlines of a detected board, plus the raw peaks they were chosen from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLineDetection {
    pub lines: BoardLines,
    pub row_peaks: Vec<usize>,
    pub col_peaks: Vec<usize>,
}

/// Intermediate state of one axis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AxisDebug {
    /// Thresholded projection.
    pub signal: ProjectionSignal,
    pub peaks: Vec<usize>,
    pub internal: Option<InternalLines>,
}

/// Everything the detector computed, whether or not a board was found.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardLineDebug {
    pub rows: AxisDebug,
    pub cols: AxisDebug,
    pub lines: Option<BoardLines>,
}

/// Finds the 8x8 gridline lattice of an axis-aligned chessboard.
#[derive(Clone, Debug, Default)]
pub struct BoardLineDetector {
    params: LatticeParams,
}

impl BoardLineDetector {
    pub fn new(params: LatticeParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &LatticeParams {
        &self.params
    }

    /// Detect the board gridlines. `None` means no board was found, which is
    /// an ordinary outcome for photos without a clear board.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, img), fields(width = img.width, height = img.height))
    )]
    pub fn detect(&self, img: &GrayImageView<'_>) -> Option<BoardLineDetection> {
        if img.is_empty() {
            debug!("empty image");
            return None;
        }
        let grads = compute_gradients(img);

        let rows = self.analyze_axis(Axis::Rows, &grads.y);
        let rows_internal = rows.internal?;
        let cols = self.analyze_axis(Axis::Cols, &grads.x);
        let cols_internal = cols.internal?;

        Some(BoardLineDetection {
            lines: self.board_lines(&rows_internal, &cols_internal, img),
            row_peaks: rows.peaks,
            col_peaks: cols.peaks,
        })
    }

    /// Run both axes to completion and keep every intermediate result.
    pub fn detect_debug(&self, img: &GrayImageView<'_>) -> BoardLineDebug {
        let grads = compute_gradients(img);
        let rows = self.analyze_axis(Axis::Rows, &grads.y);
        let cols = self.analyze_axis(Axis::Cols, &grads.x);
        let lines = match (&rows.internal, &cols.internal) {
            (Some(r), Some(c)) => Some(self.board_lines(r, c, img)),
            _ => None,
        };
        BoardLineDebug { rows, cols, lines }
    }

    fn analyze_axis(&self, axis: Axis, field: &GradientField) -> AxisDebug {
        let p = &self.params;
        let mut signal = match axis {
            Axis::Rows => row_signal(field, p.gradient_clip),
            Axis::Cols => col_signal(field, p.gradient_clip),
        };
        suppress_below_fraction_of_max(&mut signal, p.threshold_ratio);

        let peaks = find_peaks(&signal.values, p.min_peak_distance);
        let internal = select_internal_lines(&peaks, p.max_gap_spread);
        debug!(
            "{axis:?}: {} peaks {:?}, internal lines {:?}",
            peaks.len(),
            peaks,
            internal.as_ref().map(InternalLines::as_slice)
        );

        AxisDebug {
            signal,
            peaks,
            internal,
        }
    }

    fn board_lines(
        &self,
        rows: &InternalLines,
        cols: &InternalLines,
        img: &GrayImageView<'_>,
    ) -> BoardLines {
        BoardLines {
            rows: extend_with_boundaries(rows, self.params.cell_size, img.height),
            cols: extend_with_boundaries(cols, self.params.cell_size, img.width),
        }
    }
}
