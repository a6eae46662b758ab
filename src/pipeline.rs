use crate::config::RunConfig;
use crate::data::loader::DatasetLoader;
use crate::data::splitter::DatasetSplitter;
use crate::error::Result;
use crate::eval::evaluator::{evaluate, EvalReport};
use crate::network::network::Network;
use crate::rng::Seeds;
use crate::train::progress::TrainProgress;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

/// Everything a finished run reports.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub train_set_size: usize,
    pub report: EvalReport,
}

/// Load → split → build → train → evaluate, for one config.
///
/// Each random stream is seeded from `seeds`, so a fixed `Seeds` value makes
/// the whole run reproducible.
pub fn run(
    config: &RunConfig,
    seeds: Seeds,
    progress: &mut dyn FnMut(TrainProgress),
) -> Result<RunOutcome> {
    config.validate()?;

    let loaded = DatasetLoader::new(config).load()?;
    tracing::info!(
        "Loaded {} samples from '{}'",
        loaded.samples.len(),
        config.file_name
    );

    let splitter = DatasetSplitter::from_config(config)?;
    let (training, test) = splitter.split(loaded.samples, &mut seeds.split_rng());
    tracing::info!("Split: {} training, {} test", training.len(), test.len());

    let mut network = Network::new(
        config.inputs,
        config.hidden,
        config.outputs,
        config.learning_rate,
        &mut seeds.weights_rng(),
    );

    let train_config = TrainConfig::from_run_config(config);
    tracing::info!("Training for {} iterations", train_config.iterations);
    train_network(
        &mut network,
        &training,
        &train_config,
        &mut seeds.sampling_rng(),
        progress,
    )?;

    let report = evaluate(&network, &test);
    tracing::info!(
        correct = report.correct,
        test = report.test_set_size,
        "Evaluation finished"
    );

    Ok(RunOutcome {
        train_set_size: training.len(),
        report,
    })
}
