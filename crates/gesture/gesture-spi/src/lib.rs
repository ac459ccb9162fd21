//! Gesture Classification Service Provider Interface
//!
//! Defines the domain model, error type and contract traits shared by every
//! gesture classifier implementation:
//!
//! - [`Sample`]: a three-axis gesture recording with an optional class label
//! - [`ScoredSample`]: a training label paired with its distance to a query
//! - [`ClassTally`]: per-class vote counts among the nearest neighbors
//! - [`DistanceMetric`]: Euclidean or Dynamic Time Warping
//! - [`GestureClassifier`]: the primary classification trait
//! - [`ClassifyError`]: standardized error type for all classifier operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::GestureClassifier;
pub use error::{ClassifyError, Result};
pub use model::{Axis, ClassTally, DistanceMetric, Sample, ScoredSample};
