//! Classifier configuration types.

use gesture_spi::{ClassifyError, DistanceMetric, Result};
use serde::{Deserialize, Serialize};

/// Number of neighbors consulted when the caller does not choose one.
pub const DEFAULT_K: usize = 7;

fn default_k() -> usize {
    DEFAULT_K
}

/// Configuration for a k-nearest-neighbors gesture classifier.
///
/// Deserializes from JSON such as
/// `{"feature_count": 32, "num_classes": 4, "k": 5, "metric": "dtw"}`;
/// `k` and `metric` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Readings per axis in every sample
    pub feature_count: usize,
    /// Highest class id; the tally covers `0..=num_classes`
    pub num_classes: usize,
    /// Neighbors consulted per query
    #[serde(default = "default_k")]
    pub k: usize,
    /// Distance metric
    #[serde(default)]
    pub metric: DistanceMetric,
}

impl ClassifierConfig {
    /// Create a configuration with the default k and Euclidean distance.
    pub fn new(feature_count: usize, num_classes: usize) -> Self {
        Self {
            feature_count,
            num_classes,
            k: DEFAULT_K,
            metric: DistanceMetric::Euclidean,
        }
    }

    /// Create a DTW configuration with the default k.
    pub fn dtw(feature_count: usize, num_classes: usize) -> Self {
        Self::new(feature_count, num_classes).with_metric(DistanceMetric::Dtw)
    }

    /// Set the number of neighbors.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Check the parameters that do not depend on the training set.
    ///
    /// The upper bound on `k` is the training set size, which is only known
    /// at classification time.
    pub fn validate(&self) -> Result<()> {
        if self.feature_count == 0 {
            return Err(ClassifyError::invalid_argument(
                "feature_count",
                "must be at least 1",
            ));
        }
        if self.k == 0 {
            return Err(ClassifyError::invalid_argument("k", "must be at least 1"));
        }
        if self.num_classes == usize::MAX {
            return Err(ClassifyError::invalid_argument(
                "num_classes",
                "class ids must fit below usize::MAX",
            ));
        }
        Ok(())
    }
}

/// Builder for ClassifierConfig.
#[derive(Debug, Default)]
pub struct ClassifierConfigBuilder {
    feature_count: Option<usize>,
    num_classes: Option<usize>,
    k: Option<usize>,
    metric: Option<DistanceMetric>,
}

impl ClassifierConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the readings per axis.
    pub fn feature_count(mut self, feature_count: usize) -> Self {
        self.feature_count = Some(feature_count);
        self
    }

    /// Set the highest class id.
    pub fn num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = Some(num_classes);
        self
    }

    /// Set the number of neighbors.
    pub fn k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    /// Set the distance metric.
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = Some(metric);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ClassifierConfig> {
        let config = ClassifierConfig {
            feature_count: self.feature_count.ok_or_else(|| {
                ClassifyError::invalid_argument("feature_count", "is required")
            })?,
            num_classes: self
                .num_classes
                .ok_or_else(|| ClassifyError::invalid_argument("num_classes", "is required"))?,
            k: self.k.unwrap_or(DEFAULT_K),
            metric: self.metric.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
