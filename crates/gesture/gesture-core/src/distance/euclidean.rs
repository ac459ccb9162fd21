//! Euclidean distance on a single axis.

/// Euclidean distance between two reading sequences of one axis.
///
/// Readings are compared index by index over every position, starting at
/// index 0. Sequences are expected to have equal length; extra readings in
/// the longer one are ignored.
pub fn euclidean_axis(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
