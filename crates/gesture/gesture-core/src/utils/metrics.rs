//! Classification accuracy metrics

/// Fraction of predictions equal to the actual labels.
///
/// Returns NaN when the slices are empty or differ in length.
///
/// # Example
///
/// ```rust
/// use gesture_core::utils::metrics::accuracy;
///
/// assert_eq!(accuracy(&[0, 1, 1, 2], &[0, 1, 2, 2]), 0.75);
/// ```
pub fn accuracy(predicted: &[usize], actual: &[usize]) -> f64 {
    if predicted.len() != actual.len() || actual.is_empty() {
        return f64::NAN;
    }

    let correct = predicted
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();

    correct as f64 / actual.len() as f64
}
