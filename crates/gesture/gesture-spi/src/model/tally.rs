//! Per-class vote counts.

use crate::error::{ClassifyError, Result};

/// Vote counts for class ids `0..=num_classes`.
///
/// Every count starts at zero. Incrementing a class outside the range fails
/// instead of writing past the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTally {
    counts: Vec<usize>,
}

impl ClassTally {
    /// Create an all-zero tally covering class ids `0..=num_classes`.
    ///
    /// # Errors
    ///
    /// [`ClassifyError::InvalidArgument`] if the range cannot be allocated,
    /// including `num_classes == usize::MAX`.
    pub fn new(num_classes: usize) -> Result<Self> {
        let too_large = || {
            ClassifyError::invalid_argument(
                "num_classes",
                format!("class range 0..={} is too large to tally", num_classes),
            )
        };

        let len = num_classes.checked_add(1).ok_or_else(too_large)?;
        let mut counts = Vec::new();
        counts.try_reserve_exact(len).map_err(|_| too_large())?;
        counts.resize(len, 0);

        Ok(Self { counts })
    }

    /// Build a tally from explicit counts, indexed by class id.
    ///
    /// An empty slice yields a tally covering class 0 only.
    pub fn from_counts(counts: &[usize]) -> Self {
        if counts.is_empty() {
            return Self { counts: vec![0] };
        }
        Self {
            counts: counts.to_vec(),
        }
    }

    /// Highest class id covered by the tally
    pub fn num_classes(&self) -> usize {
        self.counts.len() - 1
    }

    /// Record one vote for `class`.
    ///
    /// # Errors
    ///
    /// [`ClassifyError::ClassIndexOutOfRange`] if `class > num_classes`.
    pub fn increment(&mut self, class: usize) -> Result<()> {
        let num_classes = self.num_classes();
        match self.counts.get_mut(class) {
            Some(count) => {
                *count += 1;
                Ok(())
            }
            None => Err(ClassifyError::ClassIndexOutOfRange { class, num_classes }),
        }
    }

    /// Votes for `class`, or `None` outside the covered range.
    pub fn count(&self, class: usize) -> Option<usize> {
        self.counts.get(class).copied()
    }

    /// Counts indexed by class id.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of votes recorded.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(class id, count)` pairs in ascending class order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}
