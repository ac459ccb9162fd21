//! Gesture Classification Core
//!
//! k-nearest-neighbors classification of three-axis gesture samples,
//! organized by pipeline stage:
//!
//! - [`distance`]: Euclidean and Dynamic Time Warping dissimilarity
//! - [`ranking`]: ascending sort of scored training samples
//! - [`tally`]: per-class vote counts among the k nearest neighbors
//! - [`decision`]: majority vote with lowest-class-id tie-break
//! - [`knn`]: the orchestrator wiring the stages together
//! - [`utils`]: normalization and accuracy
//!
//! ## Example
//!
//! ```rust
//! use gesture_core::prelude::*;
//!
//! let training = vec![
//!     Sample::labeled(vec![0.0, 0.1, 0.2], vec![0.0; 3], vec![1.0; 3], 0).unwrap(),
//!     Sample::labeled(vec![0.9, 1.0, 1.1], vec![0.5; 3], vec![0.0; 3], 1).unwrap(),
//! ];
//! let query = Sample::unlabeled(vec![0.85, 1.0, 1.05], vec![0.5; 3], vec![0.0; 3]).unwrap();
//!
//! let class = classify(&query, &training, 3, 1, 1, DistanceMetric::Dtw).unwrap();
//! assert_eq!(class, 1);
//! ```

pub mod decision;
pub mod distance;
pub mod knn;
pub mod ranking;
pub mod tally;
pub mod utils;

// Re-export from SPI and API
pub use gesture_api::{ClassifierConfig, ClassifierConfigBuilder, DEFAULT_K};
pub use gesture_spi::{
    Axis, ClassTally, ClassifyError, DistanceMetric, GestureClassifier, Result, Sample,
    ScoredSample,
};

// Re-export the pipeline for convenience
pub use decision::decide;
pub use distance::{distance, dtw_axis, euclidean_axis};
pub use knn::{classify, classify_default, nearest_neighbors, KnnClassifier};
pub use ranking::rank;
pub use tally::tally;

/// Prelude module for convenient imports
pub mod prelude {
    pub use gesture_spi::{GestureClassifier, Sample};
    // Pipeline
    pub use crate::decision::decide;
    pub use crate::distance::distance;
    pub use crate::knn::{classify, classify_default, nearest_neighbors, KnnClassifier};
    pub use crate::ranking::rank;
    pub use crate::tally::tally;
    // Utilities
    pub use crate::utils::{accuracy, normalize, normalized};
    // Configuration and model
    pub use gesture_api::{ClassifierConfig, ClassifierConfigBuilder};
    pub use gesture_spi::{Axis, ClassTally, DistanceMetric, ScoredSample};
    // Error types
    pub use gesture_spi::{ClassifyError, Result};
}
