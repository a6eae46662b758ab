pub mod math;
pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod loss;
pub mod network;
pub mod pipeline;
pub mod rng;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use config::{FieldPolicy, RunConfig};
pub use data::{split_sample, Dataset, DatasetLoader, DatasetSplitter, Sample};
pub use error::{Error, Result};
pub use eval::{evaluate, EvalReport};
pub use network::network::Network;
pub use pipeline::{run, RunOutcome};
pub use rng::Seeds;
pub use train::{train_network, TrainConfig, TrainProgress};
