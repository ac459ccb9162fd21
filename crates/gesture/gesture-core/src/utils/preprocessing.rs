//! Sample preprocessing
//!
//! Scales readings into a comparable range before distance computation.
//! Not part of the classification hot path; apply it to training and query
//! samples alike.

use gesture_spi::{Axis, Sample};
use tracing::debug;

/// Largest absolute value in `values`, or 0.0 for an empty slice.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |max, v| max.max(v.abs()))
}

/// Scale each axis of `sample` into `[-1, 1]` in place.
///
/// Every axis is divided by its own maximum absolute value, computed from
/// that axis alone. An axis whose readings are all zero is left unchanged.
pub fn normalize(sample: &mut Sample) {
    for axis in Axis::ALL {
        let values = sample.axis_mut(axis);
        let max = max_abs(values);

        if max == 0.0 {
            debug!(%axis, "all-zero axis left unscaled");
            continue;
        }

        for value in values.iter_mut() {
            *value /= max;
        }
    }
}

/// Normalized copy of `sample`; see [`normalize`].
pub fn normalized(sample: &Sample) -> Sample {
    let mut copy = sample.clone();
    normalize(&mut copy);
    copy
}
