use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tabular_nn::{RunConfig, Seeds};

/// Train a single-hidden-layer perceptron on a delimited data file and report
/// test-set accuracy.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON run configuration
    #[arg(value_name = "PATH")]
    config: PathBuf,
    /// Base seed for reproducible runs; fresh seeds are drawn when omitted
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Training percentage, overrides SPLIT from the config
    #[arg(long, value_name = "PERCENT")]
    split: Option<f64>,
    /// Log every forward/backward pass
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default = if debug { "trace" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = RunConfig::load_json(&cli.config)
        .with_context(|| format!("Cannot load config '{}'", cli.config.display()))?;
    if let Some(split) = cli.split {
        config.split = split;
    }
    tracing::info!("Loaded sample config: {:?}", config);

    let seeds = match cli.seed {
        Some(base) => Seeds::from_base(base),
        None => Seeds::from_entropy(),
    };
    tracing::debug!(?seeds, "random streams");

    println!("Training Epochs : {}", config.epochs);
    println!("0 - - - - - - - - 100");

    let outcome = tabular_nn::run(&config, seeds, &mut |_| {
        print!("* ");
        let _ = std::io::stdout().flush();
    })
    .with_context(|| format!("Run on dataset '{}' failed", config.dataset_name))?;

    println!();
    println!("{}", outcome.report);
    if let Some(mse) = outcome.report.mean_squared_error {
        tracing::info!("Test-set mean squared error: {:.6}", mse);
    }

    Ok(())
}
