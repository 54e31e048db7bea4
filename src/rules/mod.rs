//! Rules of the match.
//!
//! - `policy`: The fixed purchase priority both seats follow
//! - `game`: Turn sequencing, termination and winner determination
//! - `result`: `MatchResult` and the per-turn history

pub mod game;
pub mod policy;
pub mod result;

pub use game::Game;
pub use policy::{best_affordable, PURCHASE_PRIORITY};
pub use result::{EndReason, MatchResult, TurnRecord};
