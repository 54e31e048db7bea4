//! Match configuration.
//!
//! The card catalog, hand size and starter deck are fixed. A match only
//! chooses its RNG seed and the turn cap that bounds a runaway game.

use serde::Serialize;

/// Hard turn cap used when none is configured.
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchConfig {
    /// Seed for every shuffle and the starting-player coin flip.
    pub seed: u64,

    /// Maximum number of turns (both players combined) before the match
    /// is stopped regardless of the supply.
    pub max_turns: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl MatchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}
