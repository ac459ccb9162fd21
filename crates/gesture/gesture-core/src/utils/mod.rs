//! Utility functions around the classification pipeline
//!
//! - [`preprocessing`]: per-axis normalization of samples
//! - [`metrics`]: classification accuracy

pub mod metrics;
pub mod preprocessing;

pub use metrics::*;
pub use preprocessing::*;
