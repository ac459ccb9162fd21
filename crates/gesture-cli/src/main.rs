//! # gesture-cli
//!
//! Command-line interface for the k-NN gesture classifier.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use dataset::{CsvSampleSource, ReadingLayout, SampleSource};
use gesture_facade::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "gesture")]
#[command(about = "k-nearest-neighbors gesture classification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every row of an unlabeled query file
    Classify {
        #[command(flatten)]
        model: ModelArgs,

        /// Query file (CSV, one gesture per row, no label column)
        #[arg(short, long)]
        query: PathBuf,

        /// Include the nearest neighbors of each query in the output
        #[arg(long)]
        explain: bool,

        /// Output file (optional, JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a labeled query file and report accuracy
    Evaluate {
        #[command(flatten)]
        model: ModelArgs,

        /// Labeled query file (CSV, trailing label column)
        #[arg(short, long)]
        query: PathBuf,

        /// Output file (optional, JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a training file
    Inspect {
        /// Training file (CSV, trailing label column)
        #[arg(short, long)]
        training: PathBuf,

        /// Readings per axis
        #[arg(short, long)]
        features: usize,

        /// Reading layout (axis-major, interleaved)
        #[arg(long, default_value = "axis-major")]
        layout: ReadingLayout,
    },
}

/// Options shared by the classifying subcommands
#[derive(Args)]
struct ModelArgs {
    /// Training file (CSV, trailing label column)
    #[arg(short, long)]
    training: PathBuf,

    /// Classifier configuration (JSON); flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Readings per axis
    #[arg(short, long)]
    features: Option<usize>,

    /// Highest class id
    #[arg(short, long)]
    classes: Option<usize>,

    /// Number of neighbors
    #[arg(short, long)]
    k: Option<usize>,

    /// Distance metric (euclidean, dtw)
    #[arg(short, long)]
    metric: Option<DistanceMetric>,

    /// Reading layout (axis-major, interleaved)
    #[arg(long, default_value = "axis-major")]
    layout: ReadingLayout,

    /// Scale every axis of every sample by its maximum absolute reading
    #[arg(long)]
    normalize: bool,
}

impl ModelArgs {
    /// Merge the optional config file with command-line overrides.
    fn resolve_config(&self) -> CliResult<ClassifierConfig> {
        let base = match &self.config {
            Some(path) => Some(load_config(path)?),
            None => None,
        };

        let mut builder = ClassifierConfigBuilder::new();
        if let Some(features) = self.features.or(base.as_ref().map(|c| c.feature_count)) {
            builder = builder.feature_count(features);
        }
        if let Some(classes) = self.classes.or(base.as_ref().map(|c| c.num_classes)) {
            builder = builder.num_classes(classes);
        }
        if let Some(k) = self.k.or(base.as_ref().map(|c| c.k)) {
            builder = builder.k(k);
        }
        if let Some(metric) = self.metric.or(base.as_ref().map(|c| c.metric)) {
            builder = builder.metric(metric);
        }

        builder.build().map_err(|e| e.to_string())
    }

    fn load_training(&self, config: &ClassifierConfig) -> CliResult<Vec<Sample>> {
        let source =
            CsvSampleSource::new(&self.training, config.feature_count).with_layout(self.layout);
        self.load(&source)
    }

    fn load_queries(
        &self,
        path: &Path,
        config: &ClassifierConfig,
        labeled: bool,
    ) -> CliResult<Vec<Sample>> {
        let mut source =
            CsvSampleSource::new(path, config.feature_count).with_layout(self.layout);
        if !labeled {
            source = source.unlabeled();
        }
        self.load(&source)
    }

    fn load(&self, source: &CsvSampleSource) -> CliResult<Vec<Sample>> {
        let mut samples = source
            .load()
            .map_err(|e| format!("Failed to load {}: {}", source.name(), e))?;
        if self.normalize {
            samples.iter_mut().for_each(normalize);
        }
        info!(
            source = source.name(),
            samples = samples.len(),
            layout = %source.layout(),
            normalized = self.normalize,
            "loaded"
        );
        Ok(samples)
    }
}

/// Load a classifier configuration from a JSON file
fn load_config(path: &Path) -> CliResult<ClassifierConfig> {
    let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
    serde_json::from_reader(file).map_err(|e| format!("Failed to parse config: {}", e))
}

fn write_results(json: &serde_json::Value, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file =
            File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Results written to {:?}", path);
    } else {
        let text = serde_json::to_string_pretty(json)
            .map_err(|e| format!("Failed to format JSON: {}", e))?;
        println!("{}", text);
    }

    Ok(())
}

/// Run classify command
fn run_classify(
    model: ModelArgs,
    query: PathBuf,
    explain: bool,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let config = model.resolve_config()?;
    let training = model.load_training(&config)?;
    let queries = model.load_queries(&query, &config, false)?;
    let knn = KnnClassifier::new(config).map_err(|e| e.to_string())?;

    let mut results = Vec::with_capacity(queries.len());
    for (row, sample) in queries.iter().enumerate() {
        let class = knn
            .classify(sample, &training)
            .map_err(|e| format!("Query {}: {}", row + 1, e))?;
        debug!(row = row + 1, class, "classified");

        let mut entry = serde_json::json!({ "row": row + 1, "class": class });
        if explain {
            let neighbors = knn.nearest(sample, &training).map_err(|e| e.to_string())?;
            entry["neighbors"] = neighbors
                .iter()
                .map(|n| serde_json::json!({ "class": n.class, "distance": n.distance }))
                .collect();
        }
        results.push(entry);
    }

    let json = serde_json::json!({
        "metric": knn.metric().as_str(),
        "k": knn.config().k,
        "layout": model.layout,
        "normalized": model.normalize,
        "predictions": results,
    });
    write_results(&json, output.as_ref())
}

/// Run evaluate command
fn run_evaluate(model: ModelArgs, query: PathBuf, output: Option<PathBuf>) -> CliResult<()> {
    let config = model.resolve_config()?;
    let training = model.load_training(&config)?;
    let queries = model.load_queries(&query, &config, true)?;
    let knn = KnnClassifier::new(config).map_err(|e| e.to_string())?;

    let predicted = knn.classify_all(&queries, &training).map_err(|e| e.to_string())?;
    let actual: Vec<usize> = queries.iter().filter_map(Sample::label).collect();
    let score = accuracy(&predicted, &actual);

    info!(queries = queries.len(), accuracy = score, "evaluated");

    let json = serde_json::json!({
        "metric": knn.metric().as_str(),
        "k": knn.config().k,
        "layout": model.layout,
        "normalized": model.normalize,
        "queries": queries.len(),
        "correct": predicted.iter().zip(&actual).filter(|(p, a)| p == a).count(),
        "accuracy": score,
    });
    write_results(&json, output.as_ref())
}

/// Number of labeled samples per class id
fn class_counts(samples: &[Sample]) -> BTreeMap<usize, usize> {
    let mut per_class = BTreeMap::new();
    for label in samples.iter().filter_map(Sample::label) {
        *per_class.entry(label).or_insert(0) += 1;
    }
    per_class
}

/// Run inspect command
fn run_inspect(training: PathBuf, features: usize, layout: ReadingLayout) -> CliResult<()> {
    let source = CsvSampleSource::new(&training, features).with_layout(layout);
    let samples = source
        .load()
        .map_err(|e| format!("Failed to load {}: {}", source.name(), e))?;

    let per_class = class_counts(&samples);

    println!("Source: {}", source.path().display());
    println!("Samples: {}", samples.len());
    println!("Readings per axis: {}", source.feature_count());
    println!("Layout: {}", source.layout());
    if let Some(max_class) = per_class.keys().next_back() {
        println!("Highest class id: {}", max_class);
    }
    println!("Samples per class:");
    for (class, count) in &per_class {
        println!("  {:>4}: {}", class, count);
    }

    Ok(())
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture=info,dataset=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            model,
            query,
            explain,
            output,
        } => run_classify(model, query, explain, output),

        Commands::Evaluate {
            model,
            query,
            output,
        } => run_evaluate(model, query, output),

        Commands::Inspect {
            training,
            features,
            layout,
        } => run_inspect(training, features, layout),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
