//! The shared supply of purchasable cards.
//!
//! `Supply` owns the catalog and the remaining count of every kind. Counts
//! start at the catalog's initial values, drop by one per purchase and are
//! never replenished.

use rustc_hash::FxHashMap;

use super::definition::{self, CardDefinition, CATALOG, TERMINAL_KIND};
use super::instance::Card;

/// Remaining stock for one match.
///
/// Lookups take a kind name. Unknown names behave like an exhausted kind:
/// they are never available, have no cost and cannot be bought.
///
/// ## Example
///
/// ```
/// use automation_game::cards::Supply;
///
/// let mut supply = Supply::new();
///
/// assert_eq!(supply.card_cost("Framework"), Some(8));
/// assert_eq!(supply.card_cost("Nonexistent"), None);
///
/// let card = supply.buy_card("Framework").unwrap();
/// assert_eq!(card.kind(), "Framework");
/// assert_eq!(supply.remaining("Framework"), Some(7));
/// ```
#[derive(Clone, Debug)]
pub struct Supply {
    remaining: FxHashMap<&'static str, u32>,
}

impl Default for Supply {
    fn default() -> Self {
        Self {
            remaining: CATALOG
                .iter()
                .map(|def| (def.kind, def.initial_count))
                .collect(),
        }
    }
}

impl Supply {
    /// Create a full supply from the catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `kind` is in the catalog and at least one copy remains.
    #[must_use]
    pub fn is_available(&self, kind: &str) -> bool {
        self.remaining(kind).is_some_and(|count| count > 0)
    }

    /// Catalog cost of `kind`, `None` for an unknown kind.
    #[must_use]
    pub fn card_cost(&self, kind: &str) -> Option<u32> {
        self.definition(kind).map(|def| def.cost)
    }

    /// Remaining copies of `kind`, `None` for an unknown kind.
    #[must_use]
    pub fn remaining(&self, kind: &str) -> Option<u32> {
        self.remaining.get(kind).copied()
    }

    /// Catalog entry for `kind`.
    #[must_use]
    pub fn definition(&self, kind: &str) -> Option<&'static CardDefinition> {
        definition::definition(kind)
    }

    /// Take one copy of `kind` out of the supply.
    ///
    /// Returns `None` without touching any count when the kind is unknown
    /// or exhausted.
    pub fn buy_card(&mut self, kind: &str) -> Option<Card> {
        let def = self.definition(kind)?;
        let count = self.remaining.get_mut(kind)?;
        if *count == 0 {
            return None;
        }
        *count -= 1;
        Some(def.card())
    }

    /// True once the terminal kind is exhausted.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.remaining(TERMINAL_KIND).unwrap_or(0) == 0
    }

    /// Iterate over (definition, remaining) in catalog order.
    pub fn kinds(&self) -> impl Iterator<Item = (&'static CardDefinition, u32)> + '_ {
        CATALOG
            .iter()
            .map(move |def| (def, self.remaining(def.kind).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::definition::kinds;

    #[test]
    fn test_fresh_supply_counts() {
        let supply = Supply::new();

        let counts: Vec<_> = supply.kinds().map(|(d, n)| (d.kind, n)).collect();
        assert_eq!(
            counts,
            vec![
                ("Method", 14),
                ("Module", 8),
                ("Framework", 8),
                ("Bitcoin", 60),
                ("Ethereum", 40),
                ("Dogecoin", 30),
            ]
        );
        assert!(!supply.is_game_over());
    }

    #[test]
    fn test_card_cost() {
        let supply = Supply::new();
        assert_eq!(supply.card_cost("Bitcoin"), Some(0));
        assert_eq!(supply.card_cost("Framework"), Some(8));
        assert_eq!(supply.card_cost("Nonexistent"), None);
    }

    #[test]
    fn test_definition_matches_catalog() {
        let mut supply = Supply::new();

        for def in &CATALOG {
            assert_eq!(supply.definition(def.kind), Some(def));
        }
        assert_eq!(supply.definition("Nonexistent"), None);

        // Exhausting a kind does not hide its catalog entry.
        while supply.buy_card(kinds::FRAMEWORK).is_some() {}
        assert_eq!(supply.card_cost(kinds::FRAMEWORK), Some(8));
    }

    #[test]
    fn test_unknown_kind_is_unavailable() {
        let mut supply = Supply::new();
        assert!(!supply.is_available("Nonexistent"));
        assert!(!supply.is_available(""));
        assert!(supply.buy_card("Nonexistent").is_none());
        assert_eq!(supply.remaining("Nonexistent"), None);
    }

    #[test]
    fn test_buy_all_frameworks() {
        let mut supply = Supply::new();

        for _ in 0..8 {
            let card = supply.buy_card(kinds::FRAMEWORK);
            assert_eq!(card.map(|c| c.kind()), Some("Framework"));
        }

        assert!(!supply.is_available(kinds::FRAMEWORK));
        assert!(supply.is_game_over());
        assert!(supply.buy_card(kinds::FRAMEWORK).is_none());
        assert_eq!(supply.remaining(kinds::FRAMEWORK), Some(0));
    }

    #[test]
    fn test_buy_only_touches_one_kind() {
        let mut supply = Supply::new();
        let before: Vec<_> = supply.kinds().map(|(d, n)| (d.kind, n)).collect();

        let card = supply.buy_card(kinds::ETHEREUM).unwrap();
        assert_eq!(card.cost(), 3);
        assert_eq!(card.value(), 2);
        assert!(card.is_currency());

        for (kind, count) in before {
            let expected = if kind == kinds::ETHEREUM { count - 1 } else { count };
            assert_eq!(supply.remaining(kind), Some(expected));
        }
    }

    #[test]
    fn test_exhausting_other_kind_does_not_end_game() {
        let mut supply = Supply::new();
        while supply.buy_card(kinds::MODULE).is_some() {}

        assert_eq!(supply.remaining(kinds::MODULE), Some(0));
        assert!(!supply.is_available(kinds::MODULE));
        assert!(!supply.is_game_over());
    }
}
