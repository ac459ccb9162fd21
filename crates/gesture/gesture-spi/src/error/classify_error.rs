//! Classification error types
//!
//! Defines the standardized error type for every classifier operation.

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifyError>;

/// Errors that can occur while classifying a gesture
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// An argument is outside its accepted range
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Two samples (or a sample and the configured feature count) disagree
    /// on the number of readings per axis
    #[error("Dimension mismatch: expected {expected} features per axis, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A neighbor carries a class id above the configured class range
    #[error("Class index {class} out of range: tally covers classes 0..={num_classes}")]
    ClassIndexOutOfRange { class: usize, num_classes: usize },
}

impl ClassifyError {
    /// Shorthand for [`ClassifyError::InvalidArgument`]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Display Tests
    // ==========================================================================

    #[test]
    fn test_invalid_argument_display() {
        let error = ClassifyError::invalid_argument("k", "must be at least 1");
        assert_eq!(error.to_string(), "Invalid argument 'k': must be at least 1");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = ClassifyError::DimensionMismatch {
            expected: 32,
            actual: 30,
        };
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: expected 32 features per axis, got 30"
        );
    }

    #[test]
    fn test_class_index_out_of_range_display() {
        let error = ClassifyError::ClassIndexOutOfRange {
            class: 9,
            num_classes: 4,
        };
        assert_eq!(
            error.to_string(),
            "Class index 9 out of range: tally covers classes 0..=4"
        );
    }

    // ==========================================================================
    // Trait Implementation Tests
    // ==========================================================================

    #[test]
    fn test_invalid_argument_helper_matches_variant() {
        let error = ClassifyError::invalid_argument("feature_count", "must be positive");
        match error {
            ClassifyError::InvalidArgument { name, reason } => {
                assert_eq!(name, "feature_count");
                assert_eq!(reason, "must be positive");
            }
            _ => panic!("Expected InvalidArgument variant"),
        }
    }

    #[test]
    fn test_error_is_clone_and_partial_eq() {
        let error = ClassifyError::DimensionMismatch {
            expected: 3,
            actual: 4,
        };
        assert_eq!(error.clone(), error);
        assert_ne!(error, ClassifyError::invalid_argument("k", ""));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ClassifyError::ClassIndexOutOfRange {
            class: 1,
            num_classes: 0,
        });
        assert!(error.to_string().contains("out of range"));
    }

    #[test]
    fn test_result_error_propagation() {
        fn inner() -> Result<usize> {
            Err(ClassifyError::invalid_argument("k", "must be at least 1"))
        }

        fn outer() -> Result<usize> {
            inner()?;
            Ok(7)
        }

        assert!(matches!(
            outer(),
            Err(ClassifyError::InvalidArgument { .. })
        ));
    }
}
