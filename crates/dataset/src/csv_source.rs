//! CSV sample source.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use gesture_spi::{ClassifyError, Sample};
use tracing::debug;

use crate::error::{DataError, Result};
use crate::layout::ReadingLayout;
use crate::SampleSource;

/// Loads gesture samples from a header-less CSV file.
///
/// Every non-blank record must hold `3 × feature_count` readings, plus a
/// trailing class label unless the source is [`unlabeled`](Self::unlabeled).
/// Fields are trimmed and a trailing empty field (from a line ending in a
/// comma) is ignored.
///
/// # Example
///
/// ```rust,no_run
/// use dataset::{CsvSampleSource, ReadingLayout, SampleSource};
///
/// let training = CsvSampleSource::new("data/trainingData.csv", 32)
///     .with_layout(ReadingLayout::Interleaved)
///     .load()
///     .unwrap();
/// println!("Loaded {} samples", training.len());
/// ```
#[derive(Debug, Clone)]
pub struct CsvSampleSource {
    path: PathBuf,
    name: String,
    feature_count: usize,
    layout: ReadingLayout,
    labeled: bool,
    limit: Option<usize>,
}

impl CsvSampleSource {
    /// Create a source for labeled, axis-major records.
    pub fn new(path: impl Into<PathBuf>, feature_count: usize) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self {
            path,
            name,
            feature_count,
            layout: ReadingLayout::AxisMajor,
            labeled: true,
            limit: None,
        }
    }

    /// Set the reading layout.
    pub fn with_layout(mut self, layout: ReadingLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Read at most `limit` records.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Expect records without a trailing class label (query files).
    pub fn unlabeled(mut self) -> Self {
        self.labeled = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    pub fn layout(&self) -> ReadingLayout {
        self.layout
    }

    /// Parse samples from any reader using this source's settings.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Sample>> {
        let shape = self.record_shape()?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut samples = Vec::new();
        for result in reader.records() {
            if matches!(self.limit, Some(limit) if samples.len() >= limit) {
                break;
            }

            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            samples.push(self.parse_record(&record, shape)?);
        }

        if samples.is_empty() {
            return Err(DataError::NoData);
        }
        Ok(samples)
    }

    fn record_shape(&self) -> Result<RecordShape> {
        if self.feature_count == 0 {
            let err = ClassifyError::invalid_argument("feature_count", "must be at least 1");
            return Err(err.into());
        }

        let too_wide = || -> DataError {
            let reason = format!("{} readings per axis overflow a record", self.feature_count);
            ClassifyError::invalid_argument("feature_count", reason).into()
        };

        let readings = self.feature_count.checked_mul(3).ok_or_else(too_wide)?;
        let fields = readings
            .checked_add(usize::from(self.labeled))
            .ok_or_else(too_wide)?;
        Ok(RecordShape { readings, fields })
    }

    fn parse_record(&self, record: &csv::StringRecord, shape: RecordShape) -> Result<Sample> {
        let line = record.position().map_or(0, |pos| pos.line());

        let mut fields: Vec<&str> = record.iter().collect();
        if fields.last() == Some(&"") {
            fields.pop();
        }

        if fields.len() != shape.fields {
            return Err(DataError::RecordWidth {
                line,
                expected: shape.fields,
                actual: fields.len(),
            });
        }

        let readings = fields[..shape.readings]
            .iter()
            .enumerate()
            .map(|(i, value)| {
                value.parse::<f64>().map_err(|_| DataError::InvalidReading {
                    line,
                    column: i + 1,
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let label = if self.labeled {
            let value = fields[shape.readings];
            let label = value.parse::<usize>().map_err(|_| DataError::InvalidLabel {
                line,
                value: value.to_string(),
            })?;
            Some(label)
        } else {
            None
        };

        let (x, y, z) = self.layout.split(&readings, self.feature_count);
        Ok(Sample::new(x, y, z, label)?)
    }
}

/// Field counts of one record.
#[derive(Debug, Clone, Copy)]
struct RecordShape {
    readings: usize,
    fields: usize,
}

impl SampleSource for CsvSampleSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Sample>> {
        let file = File::open(&self.path)?;
        let samples = self.read_from(BufReader::new(file))?;

        debug!(
            source = %self.name,
            samples = samples.len(),
            layout = %self.layout,
            labeled = self.labeled,
            "loaded gesture samples"
        );
        Ok(samples)
    }
}
