use serde::{Deserialize, Serialize};

/// Minimal distance, in samples, between two accepted projection peaks.
pub const DEFAULT_MIN_PEAK_DISTANCE: usize = 10;
/// Internal lines are accepted when `max(gap) - min(gap)` is below this.
pub const DEFAULT_MAX_GAP_SPREAD: usize = 5;
/// Projection values below `ratio * max` are zeroed.
pub const DEFAULT_THRESHOLD_RATIO: f32 = 0.5;
/// Per-pixel gradient magnitudes saturate at this value before projection.
pub const DEFAULT_GRADIENT_CLIP: u16 = 255;

/// How the outer board edges are placed relative to the internal lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellSizeEstimate {
    /// Use the first internal gap (`lines[1] - lines[0]`).
    #[default]
    FirstGap,
    /// Use the median of the 6 internal gaps (lower median).
    MedianGap,
}

/// Parameters of the gridline lattice detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeParams {
    /// Peaks closer than this (in samples) are suppressed in favour of the stronger one.
    pub min_peak_distance: usize,

    /// Tolerance of the near-arithmetic-progression test, in pixels.
    pub max_gap_spread: usize,

    /// Fraction of the projection maximum below which values are zeroed.
    pub threshold_ratio: f32,

    /// Saturation of the positive/negative gradient parts.
    pub gradient_clip: u16,

    pub cell_size: CellSizeEstimate,
}

impl Default for LatticeParams {
    fn default() -> Self {
        Self {
            min_peak_distance: DEFAULT_MIN_PEAK_DISTANCE,
            max_gap_spread: DEFAULT_MAX_GAP_SPREAD,
            threshold_ratio: DEFAULT_THRESHOLD_RATIO,
            gradient_clip: DEFAULT_GRADIENT_CLIP,
            cell_size: CellSizeEstimate::FirstGap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: LatticeParams =
            serde_json::from_str(r#"{ "max_gap_spread": 8, "cell_size": "median_gap" }"#).unwrap();
        assert_eq!(params.max_gap_spread, 8);
        assert_eq!(params.cell_size, CellSizeEstimate::MedianGap);
        assert_eq!(params.min_peak_distance, DEFAULT_MIN_PEAK_DISTANCE);
        assert_eq!(params.gradient_clip, DEFAULT_GRADIENT_CLIP);
    }

    #[test]
    fn negative_gradient_clip_is_rejected() {
        assert!(serde_json::from_str::<LatticeParams>(r#"{ "gradient_clip": -1 }"#).is_err());
        let params: LatticeParams = serde_json::from_str(r#"{ "gradient_clip": 0 }"#).unwrap();
        assert_eq!(params.gradient_clip, 0);
    }
}
