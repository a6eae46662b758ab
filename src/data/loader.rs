//! Delimited-file loading for the trainer.
//!
//! Supported format:
//! - any single ASCII delimiter (`DELIMITER`, default `,`)
//! - optional header row (`CSVHEADER`), discarded
//! - optional identifier in column 0 (`IDCOL`), discarded
//! - one label column (`LABELCOL`) holding a key of the `LABEL` map; its
//!   encoded vector becomes the label suffix of the sample
//! - every other column is a numeric feature, kept in file order
//!
//! After parsing, every feature column is min-max normalized using statistics
//! from the whole file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::config::{FieldPolicy, RunConfig};
use crate::data::sample::{Dataset, Sample};
use crate::data::stats::{column_stats, normalize_features, ColumnStats};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Normalized samples together with the raw column statistics used to scale
/// them.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub samples: Dataset,
    pub stats: Vec<ColumnStats>,
}

pub struct DatasetLoader<'a> {
    config: &'a RunConfig,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl<'a> DatasetLoader<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        DatasetLoader { config }
    }

    /// Loads the file named by `FNAME`.
    pub fn load(&self) -> Result<LoadedDataset> {
        self.load_path(&self.config.file_name)
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<LoadedDataset> {
        let file = File::open(path.as_ref())?;
        self.load_from_reader(file)
    }

    /// Parses and normalizes every record readable from `reader`.
    ///
    /// # Errors
    /// - a non-ASCII delimiter
    /// - a record that the CSV reader cannot split into fields
    /// - a label value with no entry in `LABEL`
    /// - under `FieldPolicy::Reject`, any unparseable feature or badly sized row
    /// - no usable rows at all
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<LoadedDataset> {
        let delimiter = u8::try_from(self.config.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                Error::Config(format!(
                    "DELIMITER '{}' is not an ASCII character",
                    self.config.delimiter
                ))
            })?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(self.config.csv_header)
            .delimiter(delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut samples: Dataset = Vec::new();
        let mut dropped = 0usize;

        for (idx, result) in rdr.byte_records().enumerate() {
            let record = result?;
            let row = idx + 1;
            match self.parse_record(&record, row)? {
                Some(sample) => samples.push(sample),
                None => dropped += 1,
            }
        }

        if samples.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if dropped > 0 {
            tracing::warn!("Dropped {} malformed row(s)", dropped);
        }

        let stats = column_stats(&samples);
        normalize_features(&mut samples, &stats, self.config.inputs);

        tracing::debug!(
            "Loaded {} samples of width {} from '{}'",
            samples.len(),
            self.config.sample_width(),
            self.config.dataset_name
        );

        Ok(LoadedDataset { samples, stats })
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Turns one record into a raw (unnormalized) sample.
    ///
    /// Fields are decoded one at a time, so invalid UTF-8 only matters in a
    /// column that is actually used. Returns `Ok(None)` when the row is dropped
    /// under `FieldPolicy::Skip`.
    fn parse_record(&self, record: &ByteRecord, row: usize) -> Result<Option<Sample>> {
        let cfg = self.config;
        let mut features: Vec<f64> = Vec::with_capacity(cfg.inputs);
        let mut label: Option<&[f64]> = None;

        for (col, field) in record.iter().enumerate() {
            if cfg.id_column && col == 0 {
                continue;
            }

            if col == cfg.label_column {
                let encoding = std::str::from_utf8(field)
                    .ok()
                    .and_then(|name| cfg.label.get(name))
                    .ok_or_else(|| Error::UnknownLabel {
                        row,
                        label: String::from_utf8_lossy(field).into_owned(),
                    })?;
                label = Some(encoding.as_slice());
                continue;
            }

            // Infinities and NaN would poison the column's min/max.
            match parse_feature(field) {
                Some(v) => features.push(v),
                None => {
                    let value = String::from_utf8_lossy(field).into_owned();
                    match cfg.field_policy {
                        FieldPolicy::Reject => {
                            return Err(Error::BadField { row, column: col, value })
                        }
                        FieldPolicy::Skip => {
                            tracing::warn!(
                                "Row {}: cannot convert '{}' in column {} to a number; field skipped",
                                row, value, col
                            );
                        }
                    }
                }
            }
        }

        let found = features.len() + label.map_or(0, |l| l.len());
        let label = match label {
            Some(l) if features.len() == cfg.inputs => l,
            _ => {
                return match cfg.field_policy {
                    FieldPolicy::Reject => Err(Error::RowWidth {
                        row,
                        expected: cfg.sample_width(),
                        found,
                    }),
                    FieldPolicy::Skip => {
                        tracing::warn!(
                            "Row {}: expected {} values after encoding, got {}; row skipped",
                            row,
                            cfg.sample_width(),
                            found
                        );
                        Ok(None)
                    }
                };
            }
        };

        features.extend_from_slice(label);
        Ok(Some(features))
    }
}

/// A finite number, or `None` for anything else.
fn parse_feature(field: &[u8]) -> Option<f64> {
    std::str::from_utf8(field)
        .ok()?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
