//! Gesture Classification Consumer API
//!
//! Consumer-facing configuration for the classifier, plus re-exports of the
//! SPI types:
//!
//! - [`ClassifierConfig`]: feature count, class range, k and metric
//! - [`ClassifierConfigBuilder`]: validating builder for [`ClassifierConfig`]

pub mod config;

pub use config::{ClassifierConfig, ClassifierConfigBuilder, DEFAULT_K};

// Re-export all SPI types
pub use gesture_spi::{
    Axis, ClassTally, ClassifyError, DistanceMetric, GestureClassifier, Result, Sample,
    ScoredSample,
};
