//! Dynamic Time Warping on a single axis.
//!
//! Fills the classic cumulative-cost table:
//!
//! ```text
//! cost[0][0]     = 0
//! cost[i][0]     = cost[0][j] = ∞            (i, j ≥ 1)
//! cost[i+1][j+1] = |a[i] - b[j]| + min(cost[i][j+1], cost[i+1][j], cost[i][j])
//! ```
//!
//! and returns the bottom-right cell.

/// DTW alignment cost between two reading sequences of one axis.
///
/// The sequences may differ in length. Two empty sequences align at zero
/// cost; an empty sequence cannot align with a non-empty one, which yields
/// `f64::INFINITY`.
///
/// Runs in O(|a|·|b|) time with one owned `(|a|+1)·(|b|+1)` table.
///
/// # Example
///
/// ```rust
/// use gesture_core::dtw_axis;
///
/// // The second sequence lingers on its first reading but traces the same shape
/// assert_eq!(dtw_axis(&[1.0, 2.0, 3.0], &[1.0, 1.0, 2.0, 3.0]), 0.0);
/// ```
pub fn dtw_axis(a: &[f64], b: &[f64]) -> f64 {
    let width = b.len() + 1;
    let mut cost = vec![f64::INFINITY; (a.len() + 1) * width];
    cost[0] = 0.0;

    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            let insertion = cost[i * width + j + 1];
            let deletion = cost[(i + 1) * width + j];
            let matched = cost[i * width + j];
            cost[(i + 1) * width + j + 1] = (ai - bj).abs() + insertion.min(deletion).min(matched);
        }
    }

    cost[a.len() * width + b.len()]
}
