//! K-Nearest Neighbors gesture classification
//!
//! Labels a query sample with the majority class among its k closest
//! training samples.
//!
//! ## How It Works
//!
//! 1. Score every training sample against the query ([`distance`])
//! 2. Sort the scores ascending ([`rank`])
//! 3. Keep the first k
//! 4. Count their classes ([`tally`]) and take the majority ([`decide`])
//!
//! Every stage fails fast: the first error is returned unchanged and no
//! partial result is produced.

use gesture_api::{ClassifierConfig, DEFAULT_K};
use gesture_spi::{ClassifyError, DistanceMetric, GestureClassifier, Result, Sample, ScoredSample};
use tracing::{debug, trace};

use crate::decision::decide;
use crate::distance::distance;
use crate::ranking::rank;
use crate::tally::tally;

/// The k nearest training samples to `query`, nearest first.
///
/// # Errors
///
/// - [`ClassifyError::InvalidArgument`] if `feature_count` is zero, if `k`
///   is outside `1..=training.len()`, or if a training sample is unlabeled
/// - [`ClassifyError::DimensionMismatch`] if any sample does not have
///   `feature_count` readings per axis
pub fn nearest_neighbors(
    query: &Sample,
    training: &[Sample],
    feature_count: usize,
    k: usize,
    metric: DistanceMetric,
) -> Result<Vec<ScoredSample>> {
    if feature_count == 0 {
        return Err(ClassifyError::invalid_argument(
            "feature_count",
            "must be at least 1",
        ));
    }
    if k == 0 || k > training.len() {
        return Err(ClassifyError::invalid_argument(
            "k",
            format!(
                "must be between 1 and the training set size ({}), got {}",
                training.len(),
                k
            ),
        ));
    }

    let scored = training
        .iter()
        .map(|candidate| distance(query, candidate, feature_count, metric))
        .collect::<Result<Vec<_>>>()?;

    let mut ranked = rank(scored);
    ranked.truncate(k);

    trace!(?ranked, "nearest neighbors");
    Ok(ranked)
}

/// Classify `query` by majority vote among its `k` nearest training samples.
///
/// Ties in the vote go to the lowest class id.
///
/// # Arguments
///
/// * `query` - Sample to label
/// * `training` - Labeled reference samples
/// * `feature_count` - Readings per axis in every sample
/// * `num_classes` - Highest valid class id
/// * `k` - Number of neighbors consulted; `1..=training.len()`
/// * `metric` - Distance metric
///
/// # Errors
///
/// Everything [`nearest_neighbors`] reports, plus
/// [`ClassifyError::ClassIndexOutOfRange`] when a neighbor's class exceeds
/// `num_classes`.
pub fn classify(
    query: &Sample,
    training: &[Sample],
    feature_count: usize,
    num_classes: usize,
    k: usize,
    metric: DistanceMetric,
) -> Result<usize> {
    let neighbors = nearest_neighbors(query, training, feature_count, k, metric)?;
    let votes = tally(&neighbors, num_classes)?;
    let class = decide(&votes);

    debug!(
        training = training.len(),
        k,
        %metric,
        votes = ?votes.counts(),
        class,
        "classified gesture"
    );
    Ok(class)
}

/// [`classify`] with seven neighbors and Euclidean distance.
pub fn classify_default(
    query: &Sample,
    training: &[Sample],
    feature_count: usize,
    num_classes: usize,
) -> Result<usize> {
    classify(
        query,
        training,
        feature_count,
        num_classes,
        DEFAULT_K,
        DistanceMetric::Euclidean,
    )
}

/// K-Nearest Neighbors gesture classifier
///
/// Holds a validated [`ClassifierConfig`]; the training set is supplied per
/// call and only borrowed.
///
/// # Example
///
/// ```rust
/// use gesture_core::{ClassifierConfig, GestureClassifier, KnnClassifier, Sample};
///
/// let training = vec![
///     Sample::labeled(vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0], 0).unwrap(),
///     Sample::labeled(vec![0.1, 0.0], vec![0.0, 0.1], vec![0.0, 0.0], 0).unwrap(),
///     Sample::labeled(vec![5.0, 5.0], vec![5.0, 5.0], vec![5.0, 5.0], 1).unwrap(),
/// ];
/// let query = Sample::unlabeled(vec![0.05, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]).unwrap();
///
/// let knn = KnnClassifier::new(ClassifierConfig::new(2, 1).with_k(3)).unwrap();
/// assert_eq!(knn.classify(&query, &training).unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    config: ClassifierConfig,
}

impl KnnClassifier {
    /// Create a classifier from a configuration
    ///
    /// # Errors
    ///
    /// [`ClassifyError::InvalidArgument`] if the configuration has a zero
    /// feature count or zero k.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The configured number of nearest training samples, nearest first.
    pub fn nearest(&self, query: &Sample, training: &[Sample]) -> Result<Vec<ScoredSample>> {
        nearest_neighbors(
            query,
            training,
            self.config.feature_count,
            self.config.k,
            self.config.metric,
        )
    }

    /// Classify queries one after another, stopping at the first error.
    pub fn classify_all(&self, queries: &[Sample], training: &[Sample]) -> Result<Vec<usize>> {
        queries
            .iter()
            .map(|query| self.classify(query, training))
            .collect()
    }
}

impl GestureClassifier for KnnClassifier {
    fn classify(&self, query: &Sample, training: &[Sample]) -> Result<usize> {
        classify(
            query,
            training,
            self.config.feature_count,
            self.config.num_classes,
            self.config.k,
            self.config.metric,
        )
    }

    fn metric(&self) -> DistanceMetric {
        self.config.metric
    }
}
