use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by every subcommand, resolved from flags and environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Fixed RNG seed (`--seed` / `SURVEY_SEED`); entropy when unset.
    pub seed: Option<u64>,
}

impl RunOptions {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
