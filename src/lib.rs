//! # automation-game
//!
//! A two-player deck-building simulation. Each player starts with ten cards,
//! spends currency cards to buy from a shared finite supply, and the match
//! ends when the last Framework is bought.
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: One seeded `GameRng` per match is threaded
//!    through every shuffle. Same seed, same match.
//!
//! 2. **Total operations**: Unknown kinds, sold-out kinds and empty piles
//!    degrade to `None` or a short hand. Nothing in the engine fails.
//!
//! 3. **Fixed rules**: The catalog and the purchase policy are constant
//!    tables. Only the seed and the turn cap are configurable.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration
//! - `cards`: Catalog, card values, the supply
//! - `zones`: A player's draw pile, hand and discard pile
//! - `rules`: Purchase policy, the turn loop, match results
//!
//! ```
//! use automation_game::Game;
//!
//! let mut game = Game::new(7);
//! let result = game.play_game();
//!
//! let loser = result.winner.other();
//! assert!(result.scores[result.winner] >= result.scores[loser]);
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchConfig, PlayerId, PlayerPair};

pub use crate::cards::{Card, CardDefinition, Supply, CATALOG, TERMINAL_KIND};

pub use crate::zones::{Player, HAND_SIZE};

pub use crate::rules::{
    best_affordable, EndReason, Game, MatchResult, TurnRecord, PURCHASE_PRIORITY,
};
