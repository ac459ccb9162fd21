//! Domain model for gesture classification

mod metric;
mod sample;
mod scored;
mod tally;

pub use metric::DistanceMetric;
pub use sample::{Axis, Sample};
pub use scored::ScoredSample;
pub use tally::ClassTally;
