//! Dataset loading for delimited (label, x, y) files
//!
//! Rows are comma-separated with three fields: a label (date or instance
//! number, ignored), the independent value, and the dependent value. Line
//! endings may be `\n` or `\r\n`. An optional header row is discarded when
//! any of its fields is non-numeric.
//!
//! Observations stay paired as loaded; the x-range comes from a linear
//! min/max scan, never from sorting a single column.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegressionError, Result};

/// Minimum number of observations needed to fit a line
const MIN_OBSERVATIONS: usize = 2;

/// One paired (x, y) data point, in source-row order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Independent (predictor) value
    pub x: f64,
    /// Dependent (response) value
    pub y: f64,
}

impl Observation {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of paired observations
///
/// # Example
///
/// ```rust
/// use linfit::dataset::Dataset;
///
/// let csv = "date,effort,harvest\n2020-01-01,1.0,5.0\n2020-01-02,2.0,7.0\n";
/// let data = Dataset::from_reader(csv.as_bytes()).unwrap();
/// assert_eq!(data.xs(), vec![1.0, 2.0]);
/// assert_eq!(data.ys(), vec![5.0, 7.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Create a dataset from pre-built observations
    ///
    /// Fails with `InsufficientData` when fewer than two observations are
    /// supplied.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if observations.len() < MIN_OBSERVATIONS {
            return Err(RegressionError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: observations.len(),
            });
        }
        Ok(Self { observations })
    }

    /// Load a dataset from a comma-delimited file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| RegressionError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dataset from any reader of comma-delimited rows
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut observations = Vec::new();
        let mut first_row = true;

        for result in csv_reader.records() {
            let record = result.map_err(|e| RegressionError::Format {
                line: e.position().map(|p| p.line() as usize).unwrap_or(0),
                reason: e.to_string(),
            })?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(observations.len() + 1);

            // Header row: any non-numeric field in the first row means
            // column titles, not data.
            if first_row {
                first_row = false;
                if record.iter().any(|f| f.trim().parse::<f64>().is_err()) {
                    continue;
                }
            }

            if record.len() < 3 {
                return Err(RegressionError::Format {
                    line,
                    reason: format!("expected 3 fields, got {}", record.len()),
                });
            }

            let x = parse_field(&record, 1, line)?;
            let y = parse_field(&record, 2, line)?;
            observations.push(Observation::new(x, y));
        }

        Self::new(observations)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Independent values, in row order
    pub fn xs(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.x).collect()
    }

    /// Dependent values, in row order
    pub fn ys(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.y).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Minimum and maximum of the independent values, by linear scan
    pub fn x_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for o in &self.observations {
            min = min.min(o.x);
            max = max.max(o.x);
        }
        (min, max)
    }
}

fn parse_field(record: &csv::StringRecord, index: usize, line: usize) -> Result<f64> {
    let field = record.get(index).unwrap_or("");
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| RegressionError::Format {
            line,
            reason: format!("field {} is not a number: '{}'", index + 1, field),
        })
}
