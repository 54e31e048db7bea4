//! Card definitions - the fixed catalog.
//!
//! `CardDefinition` holds the canonical `(cost, value, is_currency)` triple
//! for a kind, plus how many copies the supply starts with. The catalog is a
//! compile-time table; nothing at runtime adds or edits kinds.

use serde::Serialize;

use super::instance::Card;

/// Kind names.
pub mod kinds {
    /// Cheapest score card.
    pub const METHOD: &str = "Method";
    /// Mid-price score card.
    pub const MODULE: &str = "Module";
    /// Most valuable score card; its exhaustion ends the match.
    pub const FRAMEWORK: &str = "Framework";
    /// Free currency card worth 1.
    pub const BITCOIN: &str = "Bitcoin";
    /// Currency card worth 2.
    pub const ETHEREUM: &str = "Ethereum";
    /// Currency card worth 3.
    pub const DOGECOIN: &str = "Dogecoin";
}

/// The kind whose supply running out ends the match.
pub const TERMINAL_KIND: &str = kinds::FRAMEWORK;

/// Static data for one card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardDefinition {
    /// Kind name.
    pub kind: &'static str,

    /// Price in the shared currency.
    pub cost: u32,

    /// Spending power for currency cards, score otherwise.
    pub value: u32,

    /// Whether the card is spent for money rather than counted for score.
    pub is_currency: bool,

    /// Copies available in a fresh supply.
    pub initial_count: u32,
}

impl CardDefinition {
    /// Build a fresh card of this kind.
    #[must_use]
    pub const fn card(&self) -> Card {
        Card::new(self.kind, self.cost, self.value, self.is_currency)
    }
}

/// Every purchasable kind, score cards first.
pub static CATALOG: [CardDefinition; 6] = [
    CardDefinition {
        kind: kinds::METHOD,
        cost: 2,
        value: 1,
        is_currency: false,
        initial_count: 14,
    },
    CardDefinition {
        kind: kinds::MODULE,
        cost: 5,
        value: 3,
        is_currency: false,
        initial_count: 8,
    },
    CardDefinition {
        kind: kinds::FRAMEWORK,
        cost: 8,
        value: 6,
        is_currency: false,
        initial_count: 8,
    },
    CardDefinition {
        kind: kinds::BITCOIN,
        cost: 0,
        value: 1,
        is_currency: true,
        initial_count: 60,
    },
    CardDefinition {
        kind: kinds::ETHEREUM,
        cost: 3,
        value: 2,
        is_currency: true,
        initial_count: 40,
    },
    CardDefinition {
        kind: kinds::DOGECOIN,
        cost: 6,
        value: 3,
        is_currency: true,
        initial_count: 30,
    },
];

/// Look a kind up in the catalog.
#[must_use]
pub fn definition(kind: &str) -> Option<&'static CardDefinition> {
    CATALOG.iter().find(|def| def.kind == kind)
}

/// Number of Bitcoin in a starter deck.
pub const STARTER_BITCOIN: usize = 7;

/// Number of Method in a starter deck.
pub const STARTER_METHOD: usize = 3;

/// A fresh starter deck: 7 Bitcoin followed by 3 Method, unshuffled.
///
/// Starter cards are not drawn from the supply.
#[must_use]
pub fn starter_deck() -> Vec<Card> {
    let bitcoin = definition(kinds::BITCOIN).map(CardDefinition::card);
    let method = definition(kinds::METHOD).map(CardDefinition::card);

    std::iter::repeat(bitcoin)
        .take(STARTER_BITCOIN)
        .chain(std::iter::repeat(method).take(STARTER_METHOD))
        .flatten()
        .collect()
}
