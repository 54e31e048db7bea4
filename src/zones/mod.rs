//! Player zones: draw pile, hand and discard pile.
//!
//! ## Key Types
//!
//! - `Player`: The draw/reshuffle/cleanup state machine for one seat
//! - `Hand`: Inline storage for at most `HAND_SIZE` cards

pub mod player;

pub use player::{Hand, Player, HAND_SIZE};
