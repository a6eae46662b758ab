use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeds for the three independent random streams of a run.
///
/// Weight initialisation, the train/test permutation and training-sample
/// selection each get their own generator so that fixing one stream in a test
/// does not shift the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeds {
    pub weights: u64,
    pub split: u64,
    pub sampling: u64,
}

impl Seeds {
    /// Derives all three stream seeds from one base seed.
    pub fn from_base(base: u64) -> Seeds {
        let mut root = StdRng::seed_from_u64(base);
        Seeds {
            weights: root.gen(),
            split: root.gen(),
            sampling: root.gen(),
        }
    }

    /// Fresh seeds for every process run.
    pub fn from_entropy() -> Seeds {
        let mut rng = rand::thread_rng();
        Seeds {
            weights: rng.gen(),
            split: rng.gen(),
            sampling: rng.gen(),
        }
    }

    pub fn weights_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.weights)
    }

    pub fn split_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.split)
    }

    pub fn sampling_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.sampling)
    }
}
