//! Card system: catalog, instances, and the shared supply.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Canonical data for one kind, listed in `CATALOG`
//! - `Card`: An immutable card value
//! - `Supply`: Remaining stock, availability, purchases and game-over detection

pub mod definition;
pub mod instance;
pub mod supply;

pub use definition::{
    definition, kinds, starter_deck, CardDefinition, CATALOG, STARTER_BITCOIN, STARTER_METHOD,
    TERMINAL_KIND,
};
pub use instance::Card;
pub use supply::Supply;
