//! Reading layouts within a CSV record.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order of the `3 × feature_count` readings in a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingLayout {
    /// All x readings, then all y readings, then all z readings
    #[default]
    AxisMajor,
    /// One (x, y, z) triple per time step
    Interleaved,
}

impl ReadingLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLayout::AxisMajor => "axis-major",
            ReadingLayout::Interleaved => "interleaved",
        }
    }

    /// Split one record's readings into x, y and z axes.
    ///
    /// `readings` must hold exactly `3 * feature_count` values.
    pub fn split(
        &self,
        readings: &[f64],
        feature_count: usize,
    ) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        debug_assert_eq!(readings.len(), 3 * feature_count);

        match self {
            ReadingLayout::AxisMajor => (
                readings[..feature_count].to_vec(),
                readings[feature_count..2 * feature_count].to_vec(),
                readings[2 * feature_count..].to_vec(),
            ),
            ReadingLayout::Interleaved => {
                let mut x = Vec::with_capacity(feature_count);
                let mut y = Vec::with_capacity(feature_count);
                let mut z = Vec::with_capacity(feature_count);
                for triple in readings.chunks_exact(3) {
                    x.push(triple[0]);
                    y.push(triple[1]);
                    z.push(triple[2]);
                }
                (x, y, z)
            }
        }
    }
}

impl std::fmt::Display for ReadingLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadingLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "axis-major" | "axis_major" => Ok(ReadingLayout::AxisMajor),
            "interleaved" => Ok(ReadingLayout::Interleaved),
            other => Err(format!(
                "unknown layout '{}', expected 'axis-major' or 'interleaved'",
                other
            )),
        }
    }
}
