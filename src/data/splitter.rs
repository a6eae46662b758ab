use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::RunConfig;
use crate::data::sample::Dataset;
use crate::error::{Error, Result};

/// Randomly partitions a dataset into a training set and a test set.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSplitter {
    percent: f64,
}

impl DatasetSplitter {
    /// `percent` is the share of samples, 0 to 100, placed in the training set.
    pub fn new(percent: f64) -> Result<DatasetSplitter> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(Error::SplitPercent(percent));
        }
        Ok(DatasetSplitter { percent })
    }

    pub fn from_config(config: &RunConfig) -> Result<DatasetSplitter> {
        DatasetSplitter::new(config.split)
    }

    /// Training-set size for a dataset of `len` samples, rounded half to even.
    pub fn train_count(&self, len: usize) -> usize {
        let n = (len as f64 * self.percent / 100.0).round_ties_even() as usize;
        n.min(len)
    }

    /// Splits `dataset` into `(training, test)`.
    ///
    /// One uniform permutation of the sample indices is drawn; the first
    /// `train_count` permuted samples form the training set in permutation
    /// order and the rest form the test set. Every sample lands in exactly
    /// one of the two.
    pub fn split<R: Rng + ?Sized>(&self, dataset: Dataset, rng: &mut R) -> (Dataset, Dataset) {
        let total = dataset.len();
        let n_train = self.train_count(total);

        let mut order: Vec<usize> = (0..total).collect();
        order.shuffle(rng);

        let mut slots: Vec<Option<_>> = dataset.into_iter().map(Some).collect();
        let mut take = |idx: &usize| slots[*idx].take();

        let train: Dataset = order[..n_train].iter().filter_map(&mut take).collect();
        let test: Dataset = order[n_train..].iter().filter_map(&mut take).collect();

        tracing::debug!(
            "Dataset split: {} training, {} test ({}%)",
            train.len(),
            test.len(),
            self.percent
        );

        (train, test)
    }
}
