//! Purchase policy shared by both players.
//!
//! Each turn the active player buys the first kind in `PURCHASE_PRIORITY`
//! that is still in the supply and costs no more than the money in play.

use crate::cards::{kinds, Supply};

/// Kinds in buying preference: catalog price descending, with the order of
/// this list as the tie-break.
pub const PURCHASE_PRIORITY: [&str; 6] = [
    kinds::FRAMEWORK,
    kinds::DOGECOIN,
    kinds::MODULE,
    kinds::ETHEREUM,
    kinds::METHOD,
    kinds::BITCOIN,
];

/// The kind the policy would buy with `money`, if any.
///
/// ```
/// use automation_game::cards::Supply;
/// use automation_game::rules::best_affordable;
///
/// let supply = Supply::new();
/// assert_eq!(best_affordable(&supply, 8), Some("Framework"));
/// assert_eq!(best_affordable(&supply, 5), Some("Module"));
/// assert_eq!(best_affordable(&supply, 0), Some("Bitcoin"));
/// ```
#[must_use]
pub fn best_affordable(supply: &Supply, money: u32) -> Option<&'static str> {
    PURCHASE_PRIORITY.into_iter().find(|&kind| {
        supply.is_available(kind) && supply.card_cost(kind).is_some_and(|cost| cost <= money)
    })
}
