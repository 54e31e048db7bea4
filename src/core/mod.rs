//! Core types: seats, RNG, configuration.
//!
//! These are the building blocks every other module threads through;
//! none of them know about cards.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{MatchConfig, DEFAULT_MAX_TURNS};
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
