//! Reduction of a gradient field to a per-row or per-column line score.

use crate::gradient::GradientField;
use board_split_core::Axis;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// One score per image row (`Axis::Rows`) or column (`Axis::Cols`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSignal {
    pub axis: Axis,
    pub values: Vec<f64>,
}

impl ProjectionSignal {
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sums of the clamped positive part and the negated clamped negative part.
#[inline]
fn split_energy(values: impl Iterator<Item = i32>, clip: u16) -> (i64, i64) {
    let clip = i32::from(clip);
    values.fold((0i64, 0i64), |(pos, neg), v| {
        (pos + v.clamp(0, clip) as i64, neg - v.clamp(-clip, 0) as i64)
    })
}

/// Row score from the vertical-gradient field, normalized by image height.
///
/// A row scores high only if it carries both positive and negative gradient
/// energy, i.e. a horizontal line separating alternating light and dark cells.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(gy), fields(width = gy.width, height = gy.height))
)]
pub fn row_signal(gy: &GradientField, clip: u16) -> ProjectionSignal {
    let norm = gy.height as f64;
    let values = (0..gy.height)
        .map(|y| {
            let row = &gy.data[y * gy.width..(y + 1) * gy.width];
            let (pos, neg) = split_energy(row.iter().copied(), clip);
            (pos as f64 / norm) * (neg as f64 / norm)
        })
        .collect();
    ProjectionSignal {
        axis: Axis::Rows,
        values,
    }
}

/// Column score from the horizontal-gradient field, normalized by image width.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(gx), fields(width = gx.width, height = gx.height))
)]
pub fn col_signal(gx: &GradientField, clip: u16) -> ProjectionSignal {
    let norm = gx.width as f64;
    let values = (0..gx.width)
        .map(|x| {
            let (pos, neg) = split_energy((0..gx.height).map(|y| gx.get(x, y)), clip);
            (pos as f64 / norm) * (neg as f64 / norm)
        })
        .collect();
    ProjectionSignal {
        axis: Axis::Cols,
        values,
    }
}

/// Zero every value strictly below `ratio * max`.
///
/// An all-zero signal is left untouched.
pub fn suppress_below_fraction_of_max(signal: &mut ProjectionSignal, ratio: f32) {
    let cutoff = signal.max() * ratio as f64;
    for v in signal.values.iter_mut() {
        if *v < cutoff {
            *v = 0.0;
        }
    }
}
