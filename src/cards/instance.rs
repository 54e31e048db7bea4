//! Card instances.
//!
//! A `Card` has no identity beyond its attributes: two cards of the same
//! kind are interchangeable, so instances are plain `Copy` values.

use serde::Serialize;

/// One card in a pile, hand, or freshly bought from the supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    kind: &'static str,
    cost: u32,
    value: u32,
    is_currency: bool,
}

impl Card {
    /// Create a card. Normally obtained through the catalog or the supply.
    #[must_use]
    pub const fn new(kind: &'static str, cost: u32, value: u32, is_currency: bool) -> Self {
        Self {
            kind,
            cost,
            value,
            is_currency,
        }
    }

    /// Kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Price in the shared currency.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Spending power if currency, score contribution otherwise.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Whether this card converts to money when played.
    #[must_use]
    pub const fn is_currency(&self) -> bool {
        self.is_currency
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind)
    }
}
