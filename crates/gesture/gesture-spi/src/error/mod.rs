//! Error types for classifier operations
//!
//! This module provides the [`ClassifyError`] enum and [`Result`] type alias
//! for standardized error handling across the classification pipeline.

mod classify_error;

pub use classify_error::{ClassifyError, Result};
