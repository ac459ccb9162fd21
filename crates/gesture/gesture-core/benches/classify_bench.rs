//! Benchmark suite for the gesture classifier.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gesture_core::{classify, distance, DistanceMetric, Sample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sample(rng: &mut StdRng, features: usize, label: usize) -> Sample {
    let mut axis = || (0..features).map(|_| rng.gen_range(-1.0..1.0)).collect::<Vec<f64>>();
    let (x, y, z) = (axis(), axis(), axis());
    Sample::labeled(x, y, z, label).expect("axes share one length")
}

fn create_training_set(rng: &mut StdRng, size: usize, features: usize) -> Vec<Sample> {
    (0..size)
        .map(|i| random_sample(rng, features, i % 5))
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("Distance");

    for features in [16, 64, 256].iter() {
        let a = random_sample(&mut rng, *features, 0);
        let b = random_sample(&mut rng, *features, 1);

        for metric in [DistanceMetric::Euclidean, DistanceMetric::Dtw] {
            group.bench_with_input(
                BenchmarkId::new(metric.as_str(), features),
                features,
                |bench, &features| {
                    bench.iter(|| distance(black_box(&a), black_box(&b), features, metric))
                },
            );
        }
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let features = 32;
    let mut group = c.benchmark_group("Classify");

    for size in [50, 200, 1000].iter() {
        let training = create_training_set(&mut rng, *size, features);
        let query = random_sample(&mut rng, features, 0).with_label(None);

        for metric in [DistanceMetric::Euclidean, DistanceMetric::Dtw] {
            group.bench_with_input(
                BenchmarkId::new(metric.as_str(), size),
                &training,
                |bench, training| {
                    bench.iter(|| classify(black_box(&query), training, features, 4, 7, metric))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_distance, bench_classify);
criterion_main!(benches);
