//! Configuration for a round of Chain Reaction.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default round length in seconds.
pub const DEFAULT_ROUND_SECONDS: u32 = 60;

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Seconds on the clock at the start of each round.
    pub round_seconds: u32,
    /// RNG seed for reproducible seed word picks. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the round length (at least one second).
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds.max(1);
        self
    }

    /// Build the random source used to pick seed words.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
