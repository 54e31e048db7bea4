//! Seat identification and per-seat storage.
//!
//! ## PlayerId
//!
//! A match always has exactly two seats. `PlayerId::FIRST` is "player 1",
//! the seat that wins an exact score tie.
//!
//! ## PlayerPair
//!
//! Fixed two-element storage indexed by `PlayerId`. The game keeps its
//! players here and toggles an index instead of swapping references.

use serde::Serialize;
use std::ops::{Index, IndexMut};

/// Seat identifier, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Player 2.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Both seats in order.
    pub const ALL: [PlayerId; 2] = [Self::FIRST, Self::SECOND];

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> PlayerId {
        PlayerId(self.0 ^ 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One value per seat.
///
/// ```
/// use automation_game::core::{PlayerId, PlayerPair};
///
/// let mut scores = PlayerPair::new(|_| 0u32);
/// scores[PlayerId::SECOND] = 6;
///
/// assert_eq!(scores[PlayerId::FIRST], 0);
/// assert_eq!(scores[PlayerId::SECOND], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Build both entries from a factory, player 1 first.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        let first = factory(PlayerId::FIRST);
        let second = factory(PlayerId::SECOND);
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Apply `f` to both entries.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerPair<U> {
        PlayerPair::new(|player| f(self.get(player)))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
