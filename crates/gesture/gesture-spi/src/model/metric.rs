//! Distance metric selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Distance metric used to compare a query against training samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Per-axis Euclidean distance, summed over the three axes
    #[default]
    Euclidean,
    /// Per-axis Dynamic Time Warping cost, summed over the three axes
    Dtw,
}

impl DistanceMetric {
    /// Lowercase identifier, as accepted by [`FromStr`] and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Dtw => "dtw",
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DistanceMetric::Euclidean => "Euclidean",
            DistanceMetric::Dtw => "Dynamic Time Warping",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DistanceMetric {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(DistanceMetric::Euclidean),
            "dtw" => Ok(DistanceMetric::Dtw),
            other => Err(ClassifyError::invalid_argument(
                "metric",
                format!("unknown metric '{}', expected 'euclidean' or 'dtw'", other),
            )),
        }
    }
}
