//! Frequency tally
//!
//! Counts how many of the selected neighbors belong to each class.

use gesture_spi::{ClassTally, ClassifyError, Result, ScoredSample};

/// Count the classes of the k nearest neighbors.
///
/// The tally covers class ids `0..=num_classes`. `neighbors` is the top-k
/// slice of the ranking, so its length is k.
///
/// # Errors
///
/// - [`ClassifyError::InvalidArgument`] if `neighbors` is empty (k = 0) or
///   the class range `0..=num_classes` cannot be tallied
/// - [`ClassifyError::ClassIndexOutOfRange`] if a neighbor's class exceeds
///   `num_classes`; no tally is returned in that case
pub fn tally(neighbors: &[ScoredSample], num_classes: usize) -> Result<ClassTally> {
    if neighbors.is_empty() {
        return Err(ClassifyError::invalid_argument("k", "must be at least 1"));
    }

    let mut counts = ClassTally::new(num_classes)?;
    for neighbor in neighbors {
        counts.increment(neighbor.class)?;
    }

    Ok(counts)
}
