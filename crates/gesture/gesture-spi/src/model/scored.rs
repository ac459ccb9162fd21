//! Distance-scored training labels.

/// A training sample's class together with its distance to the query.
///
/// Produced by the distance step and consumed by ranking and tally; it only
/// lives for the duration of one classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSample {
    /// Dissimilarity to the query (non-negative)
    pub distance: f64,
    /// Class label of the training sample
    pub class: usize,
}

impl ScoredSample {
    /// Create a new ScoredSample.
    pub fn new(distance: f64, class: usize) -> Self {
        Self { distance, class }
    }
}
