use std::fmt;

/// Every failure the library can report.
///
/// Row numbers are 1-based data rows (the header, when present, is not
/// counted). Column numbers are 0-based indices into the raw record.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    /// The run configuration is inconsistent.
    Config(String),
    /// The label column held a value with no entry in the label encoding.
    UnknownLabel { row: usize, label: String },
    /// A feature field is not a finite number and the field policy is `Reject`.
    BadField { row: usize, column: usize, value: String },
    /// A parsed row does not have `INPUTS + OUTPUTS` values and the field
    /// policy is `Reject`.
    RowWidth { row: usize, expected: usize, found: usize },
    /// No usable data rows were read.
    EmptyDataset,
    /// Split percentage outside 0..=100.
    SplitPercent(f64),
    /// Training was requested with no training samples.
    EmptyTrainingSet,
    /// Weight matrices handed to `Network::from_weights` do not chain.
    Shape(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Config(msg) => write!(f, "invalid configuration: {}", msg),
            Error::UnknownLabel { row, label } => {
                write!(f, "Row {}: label '{}' has no encoding", row, label)
            }
            Error::BadField { row, column, value } => write!(
                f,
                "Row {}: column {} value '{}' is not a valid number",
                row, column, value
            ),
            Error::RowWidth { row, expected, found } => write!(
                f,
                "Row {}: expected {} values after encoding, got {}",
                row, expected, found
            ),
            Error::EmptyDataset => write!(f, "dataset contains no data rows"),
            Error::SplitPercent(p) => {
                write!(f, "split percentage {} is outside 0..=100", p)
            }
            Error::EmptyTrainingSet => write!(f, "training set is empty"),
            Error::Shape(msg) => write!(f, "weight shape mismatch: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
