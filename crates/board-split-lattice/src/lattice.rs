//! Validation of peak positions as the 7 internal lines of an 8x8 board.

use board_split_core::{InternalLines, INTERNAL_LINES};
use log::debug;

/// True if the consecutive gaps of `arr` vary by less than `max_spread`.
///
/// Sequences with fewer than two elements have no gaps and are rejected.
pub fn is_near_arithmetic(arr: &[usize], max_spread: usize) -> bool {
    let mut gaps = arr.windows(2).map(|w| w[1] as i64 - w[0] as i64);
    let Some(first) = gaps.next() else {
        return false;
    };
    let (lo, hi) = gaps.fold((first, first), |(lo, hi), g| (lo.min(g), hi.max(g)));
    hi - lo < max_spread as i64
}

/// Pick 7 evenly spaced internal lines out of the detected peaks.
///
/// Tolerates one spurious peak at either end (8 peaks) or at both ends
/// (9 peaks, only the middle 7 are tried). Anything else is rejected.
pub fn select_internal_lines(peaks: &[usize], max_spread: usize) -> Option<InternalLines> {
    let n = INTERNAL_LINES;
    let candidates: Vec<&[usize]> = match peaks.len() {
        7 => vec![peaks],
        8 => vec![&peaks[..n], &peaks[1..]],
        9 => vec![&peaks[1..=n]],
        count => {
            debug!("rejecting {count} peaks (need 7..=9)");
            return None;
        }
    };

    let chosen = candidates
        .into_iter()
        .find(|c| is_near_arithmetic(c, max_spread))?;
    InternalLines::from_slice(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_progression_is_accepted() {
        assert!(is_near_arithmetic(&[50, 100, 150, 200, 250, 300, 350], 5));
        assert!(is_near_arithmetic(&[3, 13, 23, 33, 43, 53, 63], 1));
    }

    #[test]
    fn spread_of_tolerance_is_rejected() {
        // one gap of 55 among gaps of 50
        assert!(!is_near_arithmetic(&[50, 100, 150, 205, 255, 305, 355], 5));
        // spread of 4 still passes
        assert!(is_near_arithmetic(&[50, 100, 150, 204, 254, 304, 354], 5));
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(!is_near_arithmetic(&[], 5));
        assert!(!is_near_arithmetic(&[7], 5));
    }

    #[test]
    fn fewer_than_seven_peaks_is_rejected() {
        assert!(select_internal_lines(&[10, 20, 30, 40, 50, 60], 5).is_none());
        assert!(select_internal_lines(&[], 5).is_none());
    }

    #[test]
    fn seven_peaks_must_be_evenly_spaced() {
        let lines = select_internal_lines(&[10, 20, 30, 40, 50, 60, 70], 5).unwrap();
        assert_eq!(lines.as_slice(), &[10, 20, 30, 40, 50, 60, 70]);
        assert!(select_internal_lines(&[10, 20, 30, 40, 50, 60, 90], 5).is_none());
    }

    #[test]
    fn eight_peaks_prefer_the_leading_seven() {
        let peaks = [40, 80, 120, 160, 200, 240, 280, 300];
        let lines = select_internal_lines(&peaks, 5).unwrap();
        assert_eq!(lines.as_slice(), &peaks[..7]);
    }

    #[test]
    fn eight_peaks_fall_back_to_the_trailing_seven() {
        let peaks = [5, 40, 80, 120, 160, 200, 240, 280];
        let lines = select_internal_lines(&peaks, 5).unwrap();
        assert_eq!(lines.as_slice(), &peaks[1..]);
    }

    #[test]
    fn eight_peaks_with_two_outliers_are_rejected() {
        let peaks = [5, 40, 80, 120, 160, 200, 240, 262];
        assert!(select_internal_lines(&peaks, 5).is_none());
    }

    #[test]
    fn nine_peaks_only_try_the_middle() {
        let peaks = [10, 40, 80, 120, 160, 200, 240, 280, 300];
        let lines = select_internal_lines(&peaks, 5).unwrap();
        assert_eq!(lines.as_slice(), &peaks[1..8]);

        // leading seven are evenly spaced but the middle is not
        let peaks = [40, 80, 120, 160, 200, 240, 280, 330, 400];
        assert!(select_internal_lines(&peaks, 5).is_none());
    }

    #[test]
    fn more_than_nine_peaks_is_rejected() {
        let peaks: Vec<usize> = (1..=10).map(|k| k * 30).collect();
        assert!(select_internal_lines(&peaks, 5).is_none());
    }
}
