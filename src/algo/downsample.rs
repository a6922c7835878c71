//! Uniform-stride downsampling of a traced polyline.
//!
//! Reduces an ordered vertex sequence to a requested number of samples by
//! picking evenly spaced positions along the sequence. Whether the last
//! point of the sequence is among the picks is controlled by a threshold on
//! the residue `len % num_samples` — a *count* of leftover points, not a
//! distance, despite what the request field name
//! (`threshold_to_remove_last_point`) suggests.

/// Evenly spaced integer positions in `[start, end]`.
///
/// With `endpoint` the spacing is `(end - start) / (num - 1)` and the last
/// sample lands on `end`; without it the spacing is `(end - start) / num`
/// and `end` is left out.
fn linspace(start: usize, end: usize, num: usize, endpoint: bool) -> Vec<usize> {
    if num == 0 {
        return Vec::new();
    }
    if num == 1 {
        return vec![start];
    }

    let span = (end - start) as f64;
    let step = span / if endpoint { (num - 1) as f64 } else { num as f64 };
    (0..num)
        .map(|i| (start as f64 + i as f64 * step).round() as usize)
        .collect()
}

/// Downsample an ordered vertex path to `num_samples` entries.
///
/// Returns the vertex indices at evenly spaced positions of `path`. If the
/// path is shorter than `num_samples`, it is returned unchanged. The path
/// endpoint is included only when the residue `path.len() % num_samples`
/// exceeds `tail_trim_threshold`.
///
/// # Example
///
/// ```
/// use marginline::algo::downsample::downsample;
///
/// let path: Vec<usize> = (100..200).collect();
/// let sampled = downsample(&path, 10, 3.0);
/// assert_eq!(sampled.len(), 10);
/// assert_eq!(sampled[0], 100);
/// assert!(*sampled.last().unwrap() < 199);
/// ```
pub fn downsample(path: &[usize], num_samples: usize, tail_trim_threshold: f64) -> Vec<usize> {
    if num_samples == 0 {
        return path.to_vec();
    }

    let stride = (path.len() as f64 / num_samples as f64).floor();
    if stride < 1.0 {
        return path.to_vec();
    }

    let residue = path.len() % num_samples;
    let include_endpoint = residue as f64 > tail_trim_threshold;

    linspace(0, path.len() - 1, num_samples, include_endpoint)
        .into_iter()
        .map(|position| path[position])
        .collect()
}
