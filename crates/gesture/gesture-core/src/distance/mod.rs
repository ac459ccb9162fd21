//! Distance between a query and a training sample
//!
//! Both metrics compare the samples axis by axis and add up the three
//! per-axis results:
//!
//! - **Euclidean**: square root of the summed squared differences at equal
//!   indices. Cheap, but assumes the gestures are aligned in time.
//! - **DTW**: cumulative cost of the cheapest monotonic alignment between
//!   the two reading sequences. Tolerates gestures performed at different
//!   speeds, at O(n²) cost per axis.

mod dtw;
mod euclidean;

pub use dtw::dtw_axis;
pub use euclidean::euclidean_axis;

use gesture_spi::{Axis, ClassifyError, DistanceMetric, Result, Sample, ScoredSample};

/// Score `candidate` against `query` with the chosen metric.
///
/// The returned [`ScoredSample`] carries the candidate's class.
///
/// # Errors
///
/// - [`ClassifyError::InvalidArgument`] if `feature_count` is zero or the
///   candidate has no label
/// - [`ClassifyError::DimensionMismatch`] if either sample does not have
///   exactly `feature_count` readings per axis
///
/// # Example
///
/// ```rust
/// use gesture_core::distance::distance;
/// use gesture_core::{DistanceMetric, Sample};
///
/// let a = Sample::labeled(vec![0.0, 3.0], vec![0.0, 0.0], vec![0.0, 0.0], 1).unwrap();
/// let b = Sample::labeled(vec![0.0, 0.0], vec![0.0, 4.0], vec![0.0, 0.0], 2).unwrap();
///
/// let scored = distance(&a, &b, 2, DistanceMetric::Euclidean).unwrap();
/// assert_eq!(scored.class, 2);
/// assert!((scored.distance - 7.0).abs() < 1e-12);
/// ```
pub fn distance(
    query: &Sample,
    candidate: &Sample,
    feature_count: usize,
    metric: DistanceMetric,
) -> Result<ScoredSample> {
    check_dimensions(query, candidate, feature_count)?;

    let class = candidate.label().ok_or_else(|| {
        ClassifyError::invalid_argument("candidate", "training samples must carry a class label")
    })?;

    let axis_distance: fn(&[f64], &[f64]) -> f64 = match metric {
        DistanceMetric::Euclidean => euclidean_axis,
        DistanceMetric::Dtw => dtw_axis,
    };

    let distance = Axis::ALL
        .iter()
        .map(|&axis| axis_distance(query.axis(axis), candidate.axis(axis)))
        .sum();

    Ok(ScoredSample::new(distance, class))
}

fn check_dimensions(query: &Sample, candidate: &Sample, feature_count: usize) -> Result<()> {
    if feature_count == 0 {
        return Err(ClassifyError::invalid_argument(
            "feature_count",
            "must be at least 1",
        ));
    }

    for sample in [query, candidate] {
        if sample.feature_count() != feature_count {
            return Err(ClassifyError::DimensionMismatch {
                expected: feature_count,
                actual: sample.feature_count(),
            });
        }
    }

    Ok(())
}
