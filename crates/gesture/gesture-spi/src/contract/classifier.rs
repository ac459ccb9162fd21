//! Classifier trait for gesture recognition
//!
//! Defines the interface every gesture classifier implements.

use crate::error::Result;
use crate::model::{DistanceMetric, Sample};

/// Common trait for gesture classifiers
///
/// A classifier labels one query sample against a caller-owned training
/// set. The training set is only borrowed for the duration of the call, so
/// the same classifier can be reused across queries and training sets.
///
/// # Example
///
/// ```rust,ignore
/// use gesture_spi::{GestureClassifier, Sample};
///
/// fn label_all<C: GestureClassifier>(
///     classifier: &C,
///     queries: &[Sample],
///     training: &[Sample],
/// ) -> gesture_spi::Result<Vec<usize>> {
///     queries.iter().map(|q| classifier.classify(q, training)).collect()
/// }
/// ```
pub trait GestureClassifier {
    /// Classify a query sample
    ///
    /// # Arguments
    ///
    /// * `query` - Sample to label; its own label, if any, is ignored
    /// * `training` - Labeled reference samples
    ///
    /// # Returns
    ///
    /// The predicted class id, or the first error raised by the pipeline
    fn classify(&self, query: &Sample, training: &[Sample]) -> Result<usize>;

    /// Distance metric the classifier compares samples with
    fn metric(&self) -> DistanceMetric;
}
