//! End-to-end tests for the gesture classifier
//!
//! Runs complete classification workflows using only this crate's API.

use gesture_core::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FEATURES: usize = 24;

/// A gesture family: sine on x, ramp on y, constant on z, with a
/// class-specific frequency and amplitude.
fn labeled(class: usize, phase: f64, noise: f64, rng: &mut StdRng) -> Sample {
    let freq = 0.2 + 0.25 * class as f64;
    let amp = 1.0 + class as f64;
    let mut jitter = || rng.gen_range(-noise..=noise);

    let x: Vec<f64> = (0..FEATURES)
        .map(|i| amp * (freq * i as f64 + phase).sin() + jitter())
        .collect();
    let y: Vec<f64> = (0..FEATURES)
        .map(|i| class as f64 * 0.1 * i as f64 + jitter())
        .collect();
    let z: Vec<f64> = (0..FEATURES).map(|_| 0.5 * class as f64 + jitter()).collect();

    Sample::labeled(x, y, z, class).unwrap()
}

fn training_set(rng: &mut StdRng) -> Vec<Sample> {
    let mut training = Vec::new();
    for class in 0..3 {
        for _ in 0..8 {
            training.push(labeled(class, 0.0, 0.05, rng));
        }
    }
    training
}

fn pulse(at: usize, n: usize) -> Vec<f64> {
    (0..n).map(|i| if i == at || i == at + 1 { 1.0 } else { 0.0 }).collect()
}

#[test]
fn e2e_separable_gestures_both_metrics() {
    let mut rng = StdRng::seed_from_u64(7);
    let training = training_set(&mut rng);

    for metric in [DistanceMetric::Euclidean, DistanceMetric::Dtw] {
        for class in 0..3 {
            let query = labeled(class, 0.0, 0.05, &mut rng).with_label(None);
            let predicted = classify(&query, &training, FEATURES, 2, 5, metric).unwrap();
            assert_eq!(predicted, class, "{} misclassified class {}", metric, class);
        }
    }
}

#[test]
fn e2e_classifier_batch_accuracy() {
    let mut rng = StdRng::seed_from_u64(11);
    let training = training_set(&mut rng);

    let queries: Vec<Sample> = (0..3)
        .flat_map(|class| (0..4).map(move |_| class))
        .map(|class| labeled(class, 0.0, 0.05, &mut rng))
        .collect();
    let actual: Vec<usize> = queries.iter().map(|q| q.label().unwrap()).collect();

    let knn = KnnClassifier::new(ClassifierConfig::new(FEATURES, 2)).unwrap();
    let predicted = knn.classify_all(&queries, &training).unwrap();

    assert_eq!(predicted.len(), queries.len());
    assert_eq!(accuracy(&predicted, &actual), 1.0);
}

#[test]
fn e2e_dtw_tolerates_time_shift() {
    // Class 0 is a pulse early in the recording, class 1 a flat line. The
    // query is the class 0 pulse performed later.
    let n = 8;
    let zeros = vec![0.0; n];
    let training = vec![
        Sample::labeled(pulse(2, n), zeros.clone(), zeros.clone(), 0).unwrap(),
        Sample::labeled(zeros.clone(), zeros.clone(), zeros.clone(), 1).unwrap(),
    ];
    let query = Sample::unlabeled(pulse(5, n), zeros.clone(), zeros).unwrap();

    let euclidean = classify(&query, &training, n, 1, 1, DistanceMetric::Euclidean).unwrap();
    let dtw = classify(&query, &training, n, 1, 1, DistanceMetric::Dtw).unwrap();

    assert_eq!(euclidean, 1, "Euclidean compares readings in lockstep");
    assert_eq!(dtw, 0, "DTW aligns the shifted pulse");
}

#[test]
fn e2e_exact_match_with_k_one() {
    let mut rng = StdRng::seed_from_u64(3);
    let training = training_set(&mut rng);
    let target = &training[13];
    let query = target.clone().with_label(None);

    for metric in [DistanceMetric::Euclidean, DistanceMetric::Dtw] {
        let neighbors = nearest_neighbors(&query, &training, FEATURES, 1, metric).unwrap();
        assert_eq!(neighbors[0].distance, 0.0);

        let class = classify(&query, &training, FEATURES, 2, 1, metric).unwrap();
        assert_eq!(Some(class), target.label());
    }
}

#[test]
fn e2e_k_equal_to_training_size() {
    let mut rng = StdRng::seed_from_u64(5);
    let training = training_set(&mut rng);
    let query = labeled(1, 0.0, 0.05, &mut rng);

    for metric in [DistanceMetric::Euclidean, DistanceMetric::Dtw] {
        let class = classify(&query, &training, FEATURES, 2, training.len(), metric).unwrap();
        // Eight votes per class: the tie goes to class 0
        assert_eq!(class, 0);
    }
}

#[test]
fn e2e_invalid_k() {
    let mut rng = StdRng::seed_from_u64(5);
    let training = training_set(&mut rng);
    let query = labeled(0, 0.0, 0.05, &mut rng);

    for k in [0, training.len() + 1] {
        let err = classify(&query, &training, FEATURES, 2, k, DistanceMetric::Dtw).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidArgument { ref name, .. } if name == "k"));
    }
}

#[test]
fn e2e_default_entry_point_uses_seven_neighbors() {
    // Seven samples: four of class 1 far away, three of class 0 close by.
    // With k = 7 every sample votes, so class 1 wins despite being farther.
    let near = |v: f64, label| Sample::labeled(vec![v; 2], vec![v; 2], vec![v; 2], label).unwrap();
    let training = vec![
        near(0.0, 0),
        near(0.1, 0),
        near(0.2, 0),
        near(9.0, 1),
        near(9.1, 1),
        near(9.2, 1),
        near(9.3, 1),
    ];
    let query = Sample::unlabeled(vec![0.0; 2], vec![0.0; 2], vec![0.0; 2]).unwrap();

    assert_eq!(classify_default(&query, &training, 2, 1).unwrap(), 1);
    assert_eq!(
        classify(&query, &training, 2, 1, 3, DistanceMetric::Euclidean).unwrap(),
        0
    );
    assert!(classify_default(&query, &training[..6], 2, 1).is_err());
}

#[test]
fn e2e_out_of_range_class_propagates() {
    let training = vec![
        Sample::labeled(vec![0.0], vec![0.0], vec![0.0], 5).unwrap(),
        Sample::labeled(vec![1.0], vec![1.0], vec![1.0], 0).unwrap(),
    ];
    let query = Sample::unlabeled(vec![0.0], vec![0.0], vec![0.0]).unwrap();

    let err = classify(&query, &training, 1, 2, 1, DistanceMetric::Euclidean).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::ClassIndexOutOfRange {
            class: 5,
            num_classes: 2
        }
    );
}

#[test]
fn e2e_unbounded_class_range_is_rejected() {
    let training = vec![Sample::labeled(vec![0.0], vec![0.0], vec![0.0], 0).unwrap()];
    let query = Sample::unlabeled(vec![0.0], vec![0.0], vec![0.0]).unwrap();

    let result = classify(&query, &training, 1, usize::MAX, 1, DistanceMetric::Euclidean);
    assert!(matches!(
        result,
        Err(ClassifyError::InvalidArgument { ref name, .. }) if name == "num_classes"
    ));
}

#[test]
fn e2e_dimension_mismatch_in_training_set() {
    let training = vec![
        Sample::labeled(vec![0.0; 4], vec![0.0; 4], vec![0.0; 4], 0).unwrap(),
        Sample::labeled(vec![0.0; 3], vec![0.0; 3], vec![0.0; 3], 1).unwrap(),
    ];
    let query = Sample::unlabeled(vec![0.0; 4], vec![0.0; 4], vec![0.0; 4]).unwrap();

    let err = classify(&query, &training, 4, 1, 1, DistanceMetric::Dtw).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::DimensionMismatch {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn e2e_tally_and_decide_pipeline() {
    let ranked = rank(vec![
        ScoredSample::new(0.3, 0),
        ScoredSample::new(0.1, 2),
        ScoredSample::new(0.2, 2),
        ScoredSample::new(0.9, 1),
    ]);

    let votes = tally(&ranked[..3], 2).unwrap();
    assert_eq!(votes.counts(), &[1, 0, 2]);
    assert_eq!(decide(&votes), 2);
}

#[test]
fn e2e_normalization_removes_amplitude() {
    // Same shape, very different amplitude: after normalization the loud
    // query matches the quiet class 0 template.
    let shape: Vec<f64> = (0..FEATURES).map(|i| (i as f64 * 0.4).sin()).collect();
    let other: Vec<f64> = (0..FEATURES).map(|i| (i as f64 * 0.4).cos()).collect();
    let loud: Vec<f64> = shape.iter().map(|v| v * 50.0).collect();

    let training: Vec<Sample> = vec![
        Sample::labeled(shape.clone(), shape.clone(), shape.clone(), 0).unwrap(),
        Sample::labeled(other.clone(), other.clone(), other.clone(), 1).unwrap(),
    ]
    .iter()
    .map(normalized)
    .collect();

    let mut query = Sample::unlabeled(loud.clone(), loud.clone(), loud).unwrap();
    normalize(&mut query);

    let class = classify(&query, &training, FEATURES, 1, 1, DistanceMetric::Euclidean).unwrap();
    assert_eq!(class, 0);
}
