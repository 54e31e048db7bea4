//! Player and supply scenario tests.
//!
//! Scripted scenarios built only from public operations:
//! - Supply purchases and the terminal kind
//! - Starter hands, cleanup and the reshuffle boundary

use automation_game::cards::{definition, kinds, starter_deck, Card, Supply, CATALOG};
use automation_game::{GameRng, Player};
use proptest::prelude::*;

/// Test buying every Framework one by one.
#[test]
fn test_buy_framework_eight_times() {
    let mut supply = Supply::new();

    for i in 0..8 {
        assert!(!supply.is_game_over(), "game over before purchase {i}");
        let card = supply.buy_card("Framework").expect("Framework should be available");
        assert_eq!(card.kind(), "Framework");
    }

    assert!(!supply.is_available("Framework"));
    assert!(supply.is_game_over());
}

/// Test catalog costs and the unknown-kind result.
#[test]
fn test_card_costs() {
    let supply = Supply::new();

    assert_eq!(supply.card_cost("Bitcoin"), Some(0));
    assert_eq!(supply.card_cost("Framework"), Some(8));
    assert_eq!(supply.card_cost("Nonexistent"), None);
}

/// Test the fresh starter hand.
#[test]
fn test_starter_hand() {
    let mut rng = GameRng::new(42);
    let player = Player::new(&starter_deck(), &mut rng);

    assert_eq!(player.hand_size(), 5);
    assert_eq!(player.draw_pile_size() + player.hand_size(), 10);
}

/// Test that cleanup discards exactly the hand.
#[test]
fn test_cleanup() {
    let mut rng = GameRng::new(42);
    let mut player = Player::new(&starter_deck(), &mut rng);
    let hand = player.hand_size();
    let discard = player.discard_pile_size();

    player.cleanup();

    assert_eq!(player.hand_size(), 0);
    assert_eq!(player.discard_pile_size(), discard + hand);
}

/// Test that bought cards are playable only after a reshuffle brings them up.
#[test]
fn test_bought_card_cycles_through_reshuffle() {
    let mut rng = GameRng::new(3);
    let mut player = Player::new(&starter_deck(), &mut rng);
    let framework = definition(kinds::FRAMEWORK).unwrap().card();

    player.gain(framework);
    player.cleanup();
    player.draw_hand(&mut rng);
    assert!(player.hand().iter().all(|c| c.kind() != kinds::FRAMEWORK));

    // Two more hands exhaust the first pass and reshuffle all 11 cards.
    player.cleanup();
    player.draw_hand(&mut rng);
    assert_eq!(player.reshuffles(), 1);
    assert_eq!(player.deck_size(), 11);
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..CATALOG.len()).prop_map(|i| CATALOG[i].card())
}

proptest! {
    /// Playing currency leaves only score cards and returns their exact sum.
    #[test]
    fn prop_currency_partition(deck in prop::collection::vec(any_card(), 0..20), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut player = Player::new(&deck, &mut rng);

        let expected: u32 = player.hand().iter().filter(|c| c.is_currency()).map(|c| c.value()).sum();
        let score_cards = player.hand().iter().filter(|c| !c.is_currency()).count();

        prop_assert_eq!(player.play_currency(), expected);
        prop_assert!(player.hand().iter().all(|c| !c.is_currency()));
        prop_assert_eq!(player.hand_size(), score_cards);
        prop_assert_eq!(player.deck_size(), deck.len());
    }

    /// A draw that finds the draw pile empty reshuffles the whole discard pile once.
    #[test]
    fn prop_reshuffle_moves_whole_discard(deck in prop::collection::vec(any_card(), 1..5), seed in any::<u64>()) {
        // Fewer than five cards: the opening hand empties the draw pile.
        let mut rng = GameRng::new(seed);
        let mut player = Player::new(&deck, &mut rng);
        prop_assert_eq!(player.draw_pile_size(), 0);

        player.cleanup();
        prop_assert_eq!(player.discard_pile_size(), deck.len());

        player.draw_hand(&mut rng);
        prop_assert_eq!(player.reshuffles(), 1);
        prop_assert_eq!(player.discard_pile_size(), 0);
        prop_assert_eq!(player.hand_size(), deck.len());
        prop_assert_eq!(player.draw_pile_size(), 0);
    }

    /// Buying strictly decrements one kind and leaves the rest alone.
    #[test]
    fn prop_purchase_monotonicity(picks in prop::collection::vec(0..CATALOG.len(), 0..50)) {
        let mut supply = Supply::new();

        for i in picks {
            let kind = CATALOG[i].kind;
            let before: Vec<_> = supply.kinds().map(|(_, n)| n).collect();
            let bought = supply.buy_card(kind);
            let after: Vec<_> = supply.kinds().map(|(_, n)| n).collect();

            for (j, (b, a)) in before.iter().zip(&after).enumerate() {
                if j == i && bought.is_some() {
                    prop_assert_eq!(*a, b - 1);
                } else {
                    prop_assert_eq!(a, b);
                }
            }
            prop_assert_eq!(bought.is_some(), before[i] > 0);
        }
    }
}
