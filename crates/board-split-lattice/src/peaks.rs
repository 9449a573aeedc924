//! Greedy 1D peak picking with a minimum separation.

/// Find local maxima of `values`, then drop peaks that sit closer than
/// `min_distance` samples to a stronger one.
///
/// - The first and last samples are never peaks.
/// - A flat top counts as one peak at its midpoint; for an even-length plateau
///   the upper midpoint is used, so a step edge between pixels `k-1` and `k`
///   yields `k`.
/// - Suppression visits peaks by descending value; equal values are visited
///   in ascending position.
///
/// The result is strictly increasing.
pub fn find_peaks(values: &[f64], min_distance: usize) -> Vec<usize> {
    let peaks = local_maxima(values);
    if min_distance <= 1 || peaks.len() < 2 {
        return peaks;
    }

    let mut order: Vec<usize> = (0..peaks.len()).collect();
    order.sort_by(|&a, &b| {
        values[peaks[b]]
            .partial_cmp(&values[peaks[a]])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut keep = vec![true; peaks.len()];
    for &i in &order {
        if !keep[i] {
            continue;
        }
        let p = peaks[i];
        for k in (0..i).rev() {
            if p - peaks[k] >= min_distance {
                break;
            }
            keep[k] = false;
        }
        for k in i + 1..peaks.len() {
            if peaks[k] - p >= min_distance {
                break;
            }
            keep[k] = false;
        }
    }

    peaks
        .into_iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(p))
        .collect()
}

fn local_maxima(values: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if values.len() < 3 {
        return peaks;
    }
    let last = values.len() - 1;
    let mut i = 1;
    while i < last {
        if values[i - 1] < values[i] {
            let mut ahead = i + 1;
            while ahead < last && values[ahead] == values[i] {
                ahead += 1;
            }
            if values[ahead] < values[i] {
                let right = ahead - 1;
                peaks.push((i + right).div_ceil(2));
                i = ahead;
                continue;
            }
        }
        i += 1;
    }
    peaks
}
