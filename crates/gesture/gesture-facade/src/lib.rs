//! Gesture Classification Facade
//!
//! High-level API for gesture classification. Re-exports all public types
//! from the classifier stack:
//!
//! - `gesture_spi` - Model, errors and the [`GestureClassifier`] contract
//! - `gesture_api` - Configuration types and builders
//! - `gesture_core` - Distance metrics and the k-NN pipeline
//!
//! # Example
//!
//! ```rust
//! use gesture_facade::prelude::*;
//!
//! let training = vec![
//!     Sample::labeled(vec![0.0; 4], vec![0.0; 4], vec![0.0; 4], 0).unwrap(),
//!     Sample::labeled(vec![1.0; 4], vec![1.0; 4], vec![1.0; 4], 1).unwrap(),
//! ];
//! let query = Sample::unlabeled(vec![0.9; 4], vec![1.0; 4], vec![1.1; 4]).unwrap();
//!
//! let knn = KnnClassifier::new(ClassifierConfig::dtw(4, 1).with_k(1)).unwrap();
//! assert_eq!(knn.classify(&query, &training).unwrap(), 1);
//! ```

// Re-export everything from core (includes the SPI and API types)
pub use gesture_core::*;

// Explicit re-exports for documentation
pub use gesture_api::config;
pub use gesture_core::prelude;
pub use gesture_core::utils;
pub use gesture_spi::{contract, error, model};
