//! One player's private zones: draw pile, hand and discard pile.
//!
//! Every card a player owns sits in exactly one of the three zones. Cards
//! move draw -> hand -> discard, and the discard pile is shuffled back into
//! the draw pile only when a draw finds the draw pile empty.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::GameRng;

/// Cards drawn at construction and at the end of every turn.
pub const HAND_SIZE: usize = 5;

/// Hand storage; a hand never exceeds `HAND_SIZE` cards.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// A player's card state machine.
///
/// ## Turn cycle
///
/// ```
/// use automation_game::cards::starter_deck;
/// use automation_game::core::GameRng;
/// use automation_game::zones::Player;
///
/// let mut rng = GameRng::new(7);
/// let mut player = Player::new(&starter_deck(), &mut rng);
/// assert_eq!(player.hand_size(), 5);
///
/// let money = player.play_currency();
/// assert!(player.hand().iter().all(|c| !c.is_currency()));
///
/// player.cleanup();
/// player.draw_hand(&mut rng);
/// assert_eq!(player.deck_size(), 10);
/// # let _ = money;
/// ```
#[derive(Clone, Debug)]
pub struct Player {
    draw_pile: VecDeque<Card>,
    hand: Hand,
    discard_pile: Vec<Card>,
    reshuffles: u32,
}

impl Player {
    /// Shuffle `starter` into a new draw pile and draw the opening hand.
    ///
    /// The composition of `starter` is not checked.
    pub fn new(starter: &[Card], rng: &mut GameRng) -> Self {
        let mut draw_pile: VecDeque<Card> = starter.iter().copied().collect();
        rng.shuffle(draw_pile.make_contiguous());

        let mut player = Self {
            draw_pile,
            hand: Hand::new(),
            discard_pile: Vec::new(),
            reshuffles: 0,
        };
        player.draw(HAND_SIZE, rng);
        player
    }

    /// Draw a fresh hand of `HAND_SIZE` cards.
    pub fn draw_hand(&mut self, rng: &mut GameRng) {
        self.draw(HAND_SIZE, rng);
    }

    /// Move up to `count` cards from the front of the draw pile into hand.
    ///
    /// An empty draw pile is refilled from the discard pile (all of it,
    /// reshuffled) before the next card is dealt. Stops early when both
    /// piles are empty.
    fn draw(&mut self, count: usize, rng: &mut GameRng) {
        for _ in 0..count {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.reshuffle(rng);
            }

            if let Some(card) = self.draw_pile.pop_front() {
                self.hand.push(card);
            }
        }
    }

    fn reshuffle(&mut self, rng: &mut GameRng) {
        log::trace!("reshuffling {} discarded cards", self.discard_pile.len());

        self.draw_pile.extend(self.discard_pile.drain(..));
        rng.shuffle(self.draw_pile.make_contiguous());
        self.reshuffles += 1;
    }

    /// Play every currency card from hand and return their total value.
    ///
    /// Played cards go to the discard pile. Score cards keep their relative
    /// order in hand.
    pub fn play_currency(&mut self) -> u32 {
        let mut money = 0;
        let discard_pile = &mut self.discard_pile;
        self.hand.retain(|card| {
            if card.is_currency() {
                money += card.value();
                discard_pile.push(*card);
                false
            } else {
                true
            }
        });
        money
    }

    /// Put a purchased card straight onto the discard pile.
    pub fn gain(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Discard the whole hand. Does not draw.
    pub fn cleanup(&mut self) {
        self.discard_pile.extend(self.hand.drain(..));
    }

    /// Sum of score-card values currently in hand.
    ///
    /// Only the hand counts; this is a snapshot taken at call time.
    #[must_use]
    pub fn total_score_points(&self) -> u32 {
        self.hand
            .iter()
            .filter(|card| !card.is_currency())
            .map(Card::value)
            .sum()
    }

    /// Cards currently in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_size(&self) -> usize {
        self.discard_pile.len()
    }

    /// Total cards owned across all three zones.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard_pile.len()
    }

    /// Number of times the discard pile has been shuffled back in.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}
