use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What the loader does with a feature field that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPolicy {
    /// Log a warning and drop the field. A row left with the wrong width is
    /// then dropped as a whole.
    #[default]
    Skip,
    /// Fail the whole load on the first bad field.
    Reject,
}

/// Resolved configuration for one training run.
///
/// Mirrors the JSON config file layout (upper-case keys). Built once, then
/// passed by reference to the loader, splitter, trainer and pipeline.
///
/// # Fields
/// - `dataset_name`  - informational only
/// - `file_name`     - path to the delimited data file
/// - `csv_header`    - first row is a header and is discarded
/// - `id_column`     - column 0 is an identifier and is discarded
/// - `label_column`  - raw column index holding the categorical label
/// - `inputs`        - network input size (feature count)
/// - `hidden`        - hidden-layer size
/// - `outputs`       - network output size; every `label` vector has this length
/// - `learning_rate` - step size for every training iteration
/// - `epochs`        - number of random single-sample training iterations,
///                     not full passes over the training set
/// - `label`         - label string → encoded float vector
/// - `split`         - percentage of samples used for training
/// - `delimiter`     - field separator, a single ASCII character
/// - `field_policy`  - handling of unparseable feature fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(rename = "DATASETNAME", default)]
    pub dataset_name: String,
    #[serde(rename = "FNAME")]
    pub file_name: String,
    #[serde(rename = "CSVHEADER", default)]
    pub csv_header: bool,
    #[serde(rename = "IDCOL", default)]
    pub id_column: bool,
    #[serde(rename = "LABELCOL")]
    pub label_column: usize,
    #[serde(rename = "INPUTS")]
    pub inputs: usize,
    #[serde(rename = "HIDDEN")]
    pub hidden: usize,
    #[serde(rename = "OUTPUTS")]
    pub outputs: usize,
    #[serde(rename = "LEARNINGRATE")]
    pub learning_rate: f64,
    #[serde(rename = "EPOCHS")]
    pub epochs: usize,
    #[serde(rename = "LABEL")]
    pub label: BTreeMap<String, Vec<f64>>,
    #[serde(rename = "SPLIT", default = "default_split")]
    pub split: f64,
    #[serde(rename = "DELIMITER", default = "default_delimiter")]
    pub delimiter: char,
    #[serde(rename = "FIELDPOLICY", default)]
    pub field_policy: FieldPolicy,
}

fn default_split() -> f64 {
    80.0
}

fn default_delimiter() -> char {
    ','
}

impl RunConfig {
    /// Reads and validates a config from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a config from a JSON string.
    pub fn from_json_str(text: &str) -> Result<RunConfig> {
        let config: RunConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of values in every sample: feature prefix plus label suffix.
    pub fn sample_width(&self) -> usize {
        self.inputs + self.outputs
    }

    pub fn validate(&self) -> Result<()> {
        if self.inputs == 0 || self.hidden == 0 || self.outputs == 0 {
            return Err(Error::Config(format!(
                "layer sizes must be positive (INPUTS={}, HIDDEN={}, OUTPUTS={})",
                self.inputs, self.hidden, self.outputs
            )));
        }
        if !self.learning_rate.is_finite() {
            return Err(Error::Config("LEARNINGRATE must be finite".into()));
        }
        if !(0.0..=100.0).contains(&self.split) {
            return Err(Error::SplitPercent(self.split));
        }
        if self.label.is_empty() {
            return Err(Error::Config("LABEL must map at least one label".into()));
        }
        for (name, encoding) in &self.label {
            if encoding.len() != self.outputs {
                return Err(Error::Config(format!(
                    "LABEL '{}' has {} values but OUTPUTS is {}",
                    name,
                    encoding.len(),
                    self.outputs
                )));
            }
        }
        if self.id_column && self.label_column == 0 {
            return Err(Error::Config(
                "LABELCOL cannot be column 0 when IDCOL is set".into(),
            ));
        }
        if !self.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "DELIMITER '{}' is not an ASCII character",
                self.delimiter
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IRIS: &str = r#"{
        "DATASETNAME": "iris",
        "FNAME": "data/iris.csv",
        "CSVHEADER": true,
        "IDCOL": false,
        "LABELCOL": 4,
        "INPUTS": 4,
        "HIDDEN": 5,
        "OUTPUTS": 3,
        "LEARNINGRATE": 0.3,
        "EPOCHS": 5000,
        "LABEL": {
            "setosa": [1, 0, 0],
            "versicolor": [0, 1, 0],
            "virginica": [0, 0, 1]
        }
    }"#;

    #[test]
    fn parses_reference_layout_with_defaults() {
        let cfg = RunConfig::from_json_str(IRIS).unwrap();
        assert_eq!(cfg.dataset_name, "iris");
        assert_eq!(cfg.label_column, 4);
        assert_eq!(cfg.sample_width(), 7);
        assert_eq!(cfg.label["virginica"], vec![0.0, 0.0, 1.0]);
        assert_eq!(cfg.split, 80.0);
        assert_eq!(cfg.delimiter, ',');
        assert_eq!(cfg.field_policy, FieldPolicy::Skip);
    }

    #[test]
    fn parses_optional_keys() {
        let text = IRIS.replace(
            "\"EPOCHS\": 5000,",
            "\"EPOCHS\": 5000, \"SPLIT\": 70, \"DELIMITER\": \";\", \"FIELDPOLICY\": \"reject\",",
        );
        let cfg = RunConfig::from_json_str(&text).unwrap();
        assert_eq!(cfg.split, 70.0);
        assert_eq!(cfg.delimiter, ';');
        assert_eq!(cfg.field_policy, FieldPolicy::Reject);
    }

    #[test]
    fn rejects_label_of_wrong_length() {
        let text = IRIS.replace("\"virginica\": [0, 0, 1]", "\"virginica\": [0, 1]");
        match RunConfig::from_json_str(&text) {
            Err(Error::Config(msg)) => assert!(msg.contains("virginica")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_split_out_of_range() {
        let text = IRIS.replace("\"EPOCHS\": 5000,", "\"EPOCHS\": 5000, \"SPLIT\": 120,");
        assert!(matches!(
            RunConfig::from_json_str(&text),
            Err(Error::SplitPercent(p)) if p == 120.0
        ));
    }

    #[test]
    fn rejects_zero_hidden_layer() {
        let text = IRIS.replace("\"HIDDEN\": 5", "\"HIDDEN\": 0");
        assert!(matches!(RunConfig::from_json_str(&text), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_label_on_id_column() {
        let text = IRIS
            .replace("\"IDCOL\": false", "\"IDCOL\": true")
            .replace("\"LABELCOL\": 4", "\"LABELCOL\": 0");
        assert!(matches!(RunConfig::from_json_str(&text), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            RunConfig::load_json("definitely/not/here.json"),
            Err(Error::Io(_))
        ));
    }
}
