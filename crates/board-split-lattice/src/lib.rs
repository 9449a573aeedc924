//! Chessboard gridline detector built on top of `board-split-core`.
//!
//! ## Quickstart
//!
//! ```
//! use board_split_core::GrayImage;
//! use board_split_lattice::{BoardLineDetector, LatticeParams};
//!
//! let img = GrayImage::from_fn(400, 400, |x, y| if (x / 50 + y / 50) % 2 == 0 { 220 } else { 30 });
//! let detector = BoardLineDetector::new(LatticeParams::default());
//!
//! let result = detector.detect(&img.view());
//! println!("detected: {}", result.is_some());
//! ```
//!
//! Algorithm (template-free, axis-aligned):
//! 1. Convolve the grayscale image with the 3x3 kernels `[-1 0 1]` (replicated
//!    over rows) and its transpose to get horizontal and vertical gradients.
//! 2. Split each gradient field into positive and negative parts, sum each part
//!    across the orthogonal axis and multiply them. A board line crosses both
//!    dark-to-light and light-to-dark transitions, so only it scores high.
//! 3. Zero every projection value below half the maximum.
//! 4. Pick peaks at least `min_peak_distance` samples apart.
//! 5. Keep exactly 7 near-evenly spaced peaks per axis (the internal lines),
//!    dropping at most one stray peak at either end.
//! 6. Add the two outer board edges, one cell away and clamped to the image.

mod boundary;
mod detector;
mod gradient;
mod lattice;
mod params;
mod peaks;
mod projection;

pub use boundary::{estimate_cell_size, extend_with_boundaries};
pub use detector::{AxisDebug, BoardLineDebug, BoardLineDetection, BoardLineDetector};
pub use gradient::{compute_gradients, GradientField, GradientPair};
pub use lattice::{is_near_arithmetic, select_internal_lines};
pub use params::{
    CellSizeEstimate, LatticeParams, DEFAULT_GRADIENT_CLIP, DEFAULT_MAX_GAP_SPREAD,
    DEFAULT_MIN_PEAK_DISTANCE, DEFAULT_THRESHOLD_RATIO,
};
pub use peaks::find_peaks;
pub use projection::{col_signal, row_signal, suppress_below_fraction_of_max, ProjectionSignal};
