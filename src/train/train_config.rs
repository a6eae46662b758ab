use crate::config::RunConfig;

/// Configuration for a `train_network` run.
///
/// # Fields
/// - `iterations` - number of single-sample training steps. Each step draws
///                  one training sample uniformly at random, with
///                  replacement; this is the `EPOCHS` value of the run config
///                  and is not a count of full passes over the training set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub iterations: usize,
}

impl TrainConfig {
    pub fn new(iterations: usize) -> Self {
        TrainConfig { iterations }
    }

    pub fn from_run_config(config: &RunConfig) -> Self {
        TrainConfig::new(config.epochs)
    }
}
