//! Contract traits for classifier implementations
//!
//! - [`GestureClassifier`]: labels a query sample against a training set

mod classifier;

pub use classifier::GestureClassifier;
