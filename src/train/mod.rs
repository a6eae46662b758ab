pub mod trainer;
pub mod progress;
pub mod train_config;

pub use trainer::train_network;
pub use progress::TrainProgress;
pub use train_config::TrainConfig;
