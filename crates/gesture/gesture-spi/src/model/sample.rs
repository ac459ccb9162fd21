//! Three-axis gesture samples.

use crate::error::{ClassifyError, Result};

/// One of the three spatial channels of a gesture recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        write!(f, "{}", s)
    }
}

/// A gesture recording: equal-length reading sequences for the x, y and z
/// axes, plus the class label for training samples.
///
/// Queries awaiting classification carry no label.
///
/// # Example
///
/// ```rust
/// use gesture_spi::{Axis, Sample};
///
/// let sample = Sample::labeled(
///     vec![0.1, 0.4, 0.9],
///     vec![0.0, 0.2, 0.1],
///     vec![1.0, 0.8, 0.6],
///     2,
/// ).unwrap();
///
/// assert_eq!(sample.feature_count(), 3);
/// assert_eq!(sample.axis(Axis::Y), &[0.0, 0.2, 0.1]);
/// assert_eq!(sample.label(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    label: Option<usize>,
}

impl Sample {
    /// Create a sample, checking that all three axes have the same length.
    ///
    /// # Errors
    ///
    /// [`ClassifyError::DimensionMismatch`] when the y or z axis length
    /// differs from the x axis length.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, label: Option<usize>) -> Result<Self> {
        for other in [&y, &z] {
            if other.len() != x.len() {
                return Err(ClassifyError::DimensionMismatch {
                    expected: x.len(),
                    actual: other.len(),
                });
            }
        }

        Ok(Self { x, y, z, label })
    }

    /// Create a labeled training sample.
    pub fn labeled(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, label: usize) -> Result<Self> {
        Self::new(x, y, z, Some(label))
    }

    /// Create an unlabeled query sample.
    pub fn unlabeled(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        Self::new(x, y, z, None)
    }

    /// Number of readings per axis
    pub fn feature_count(&self) -> usize {
        self.x.len()
    }

    pub fn label(&self) -> Option<usize> {
        self.label
    }

    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }

    /// Replace the label, keeping the readings.
    pub fn with_label(mut self, label: Option<usize>) -> Self {
        self.label = label;
        self
    }

    /// Readings of one axis.
    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Mutable readings of one axis. The slice cannot change length, so the
    /// equal-length invariant holds.
    pub fn axis_mut(&mut self, axis: Axis) -> &mut [f64] {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }
}
