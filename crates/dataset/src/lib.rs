//! Gesture dataset ingestion
//!
//! Loads three-axis gesture samples from header-less CSV files. Each record
//! holds `3 × feature_count` readings followed, for labeled files, by one
//! integer class label:
//!
//! ```text
//! x0,x1,...,y0,y1,...,z0,z1,...,label
//! ```
//!
//! - [`SampleSource`]: trait for anything that yields samples
//! - [`CsvSampleSource`]: CSV implementation
//! - [`ReadingLayout`]: how readings are ordered within a record
//! - [`DataError`]: ingestion errors

pub mod csv_source;
pub mod error;
pub mod layout;

pub use csv_source::CsvSampleSource;
pub use error::{DataError, Result};
pub use layout::ReadingLayout;

use gesture_spi::Sample;

/// Trait for sources of gesture samples.
///
/// Implementations own the storage format; callers only see the resulting
/// samples, in source order.
pub trait SampleSource: Send + Sync {
    /// Source name, for diagnostics.
    fn name(&self) -> &str;

    /// Load every sample.
    fn load(&self) -> Result<Vec<Sample>>;
}
