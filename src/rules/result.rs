//! Match outcome and per-turn history.

use serde::Serialize;

use crate::core::{PlayerId, PlayerPair};

/// Why the turn loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// The terminal kind ran out in the supply.
    FrameworksExhausted,
    /// The turn cap was reached first.
    TurnLimit,
}

/// One completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// Seat that took the turn.
    pub player: PlayerId,
    /// Money produced by the currency cards in hand.
    pub money: u32,
    /// Kind bought, if anything was affordable.
    pub purchased: Option<&'static str>,
}

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Higher score snapshot wins; an exact tie goes to player 1.
    pub winner: PlayerId,
    /// Score snapshot of each seat's hand when the loop ended.
    pub scores: PlayerPair<u32>,
    /// Turns played, both seats combined.
    pub turns: u32,
    pub end_reason: EndReason,
    pub history: Vec<TurnRecord>,
}

impl MatchResult {
    /// Number of cards each seat bought during the match.
    #[must_use]
    pub fn purchases(&self) -> PlayerPair<usize> {
        PlayerPair::new(|player| {
            self.history
                .iter()
                .filter(|record| record.player == player && record.purchased.is_some())
                .count()
        })
    }
}
