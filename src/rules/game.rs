//! Match orchestration.
//!
//! A `Game` owns the supply, both players and the RNG. Each turn the active
//! seat plays its currency, buys by the shared policy, cleans up and draws,
//! then play passes to the other seat. The loop stops when the terminal kind
//! is exhausted or the turn cap is hit.

use crate::cards::{starter_deck, Supply};
use crate::core::{GameRng, MatchConfig, PlayerId, PlayerPair};
use crate::zones::Player;

use super::policy::best_affordable;
use super::result::{EndReason, MatchResult, TurnRecord};

/// One two-player match.
///
/// ## Example
///
/// ```
/// use automation_game::rules::Game;
///
/// let mut game = Game::new(42);
/// let result = game.play_game();
///
/// assert!(result.turns <= 1000);
/// assert!(game.supply().is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: MatchConfig,
    rng: GameRng,
    supply: Supply,
    players: PlayerPair<Player>,
    current: PlayerId,
    turns: u32,
    history: Vec<TurnRecord>,
}

impl Game {
    /// Create a match with the default turn cap.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(MatchConfig::new().with_seed(seed))
    }

    /// Create a match from a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy().seed())
    }

    /// Create a match from a config.
    ///
    /// Both players are dealt their starter decks (player 1 first) before
    /// a coin flip picks who moves first.
    #[must_use]
    pub fn with_config(config: MatchConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let starter = starter_deck();
        let players = PlayerPair::new(|_| Player::new(&starter, &mut rng));

        let current = if rng.gen_bool(0.5) {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        };

        Self {
            config,
            rng,
            supply: Supply::new(),
            players,
            current,
            turns: 0,
            history: Vec::new(),
        }
    }

    /// Play a single turn for the current seat and pass play on.
    pub fn play_turn(&mut self) -> TurnRecord {
        let player_id = self.current;
        let player = &mut self.players[player_id];

        let money = player.play_currency();

        let bought =
            best_affordable(&self.supply, money).and_then(|kind| self.supply.buy_card(kind));
        if let Some(card) = bought {
            player.gain(card);
        }

        player.cleanup();
        player.draw_hand(&mut self.rng);

        self.turns += 1;
        self.current = player_id.other();

        let record = TurnRecord {
            turn: self.turns,
            player: player_id,
            money,
            purchased: bought.map(|card| card.kind()),
        };
        log::debug!(
            "turn {}: {} has {} money, buys {}",
            record.turn,
            player_id,
            money,
            record.purchased.unwrap_or("nothing")
        );

        self.history.push(record.clone());
        record
    }

    /// Play turns until the match ends and report the outcome.
    pub fn play_game(&mut self) -> MatchResult {
        while !self.is_over() {
            self.play_turn();
        }

        let scores = self.players.map(Player::total_score_points);
        let winner = if scores[PlayerId::FIRST] >= scores[PlayerId::SECOND] {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        };
        let end_reason = if self.supply.is_game_over() {
            EndReason::FrameworksExhausted
        } else {
            EndReason::TurnLimit
        };

        log::info!(
            "match over after {} turns ({:?}): {} wins {} to {}",
            self.turns,
            end_reason,
            winner,
            scores[winner],
            scores[winner.other()]
        );

        MatchResult {
            winner,
            scores,
            turns: self.turns,
            end_reason,
            history: self.history.clone(),
        }
    }

    /// True once the supply's terminal kind is gone or the turn cap is reached.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.supply.is_game_over() || self.turns >= self.config.max_turns
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    /// Seat that will take the next turn.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns
    }

    /// Seed the match was created from; replaying it gives the same match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Turns played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }
}
