//! Majority-vote decision

use gesture_spi::ClassTally;

/// Pick the class with the most votes.
///
/// Classes are scanned in ascending order and the leader only changes on a
/// strictly higher count, so the lowest class id among those tied for the
/// maximum wins.
///
/// An all-zero tally yields class 0. A tally built from at least one
/// neighbor always has a non-zero count, so [`crate::classify`] never hits
/// this case.
///
/// # Example
///
/// ```rust
/// use gesture_core::{decide, ClassTally};
///
/// let tally = ClassTally::from_counts(&[3, 3, 1]);
/// assert_eq!(decide(&tally), 0);
/// ```
pub fn decide(tally: &ClassTally) -> usize {
    let mut best_count = 0;
    let mut best_class = 0;

    for (class, count) in tally.iter() {
        if count > best_count {
            best_count = count;
            best_class = class;
        }
    }

    best_class
}
