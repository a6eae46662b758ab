use rand::Rng;

use crate::data::sample::{split_sample, Sample};
use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::train::progress::TrainProgress;
use crate::train::train_config::TrainConfig;

/// Runs `config.iterations` single-sample training steps on `network`.
///
/// Every iteration picks one sample of `training` uniformly at random (with
/// replacement) using `rng`, splits it at the network's input size and calls
/// `Network::train`. `progress` is called at each 10% boundary.
///
/// # Errors
/// `Error::EmptyTrainingSet` if iterations are requested with no samples.
/// Zero iterations is a no-op.
pub fn train_network<R: Rng + ?Sized>(
    network: &mut Network,
    training: &[Sample],
    config: &TrainConfig,
    rng: &mut R,
    progress: &mut dyn FnMut(TrainProgress),
) -> Result<()> {
    let total = config.iterations;
    if total == 0 {
        return Ok(());
    }
    if training.is_empty() {
        return Err(Error::EmptyTrainingSet);
    }

    let inputs = network.input_size();
    let mut decile = 0usize;

    for iteration in 0..total {
        let sample = &training[rng.gen_range(0..training.len())];
        let (features, label) = split_sample(sample, inputs);
        network.train(features, label);

        let completed = iteration + 1;
        while decile < completed * 10 / total {
            decile += 1;
            progress(TrainProgress {
                completed,
                total,
                percent: (decile * 10) as u8,
            });
        }
    }

    Ok(())
}
