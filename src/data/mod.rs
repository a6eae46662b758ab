pub mod sample;
pub mod stats;
pub mod loader;
pub mod splitter;

pub use sample::{split_sample, Dataset, Sample};
pub use stats::{column_stats, normalize_features, ColumnStats};
pub use loader::{DatasetLoader, LoadedDataset};
pub use splitter::DatasetSplitter;
