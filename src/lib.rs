//! # ccg-deckcode
//!
//! Compact, human-readable deck codes for a collectible card game engine,
//! plus conversion to and from the external deck string format.
//!
//! ```text
//! Death Knight [3B] /1:8,2/ 5o,66,5f,3b,3c,3e,5x,70,52,55,56,6y,6z,59,5a,2,5v,5g,3o
//! ```
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: The card catalogue, the ruleset and the external
//!    catalogue are passed in. Nothing reads global state.
//!
//! 2. **Classified Errors**: Every failure is a `ValidationError` with a kind
//!    and a fatal/recoverable flag. Recoverable errors travel alongside a
//!    result instead of replacing it.
//!
//! 3. **Deterministic**: The same inputs always produce the same code.
//!    Ambiguous external names are settled by an injected policy.
//!
//! ## Modules
//!
//! - `core`: Card classes and deck rules configuration
//! - `cards`: Card definitions and the catalogue
//! - `runes`: Rune multisets and the rune block codec
//! - `deck`: Decks, validation and errors
//! - `deckcode`: The deck code format (export/import)
//! - `vanilla`: External deck strings

pub mod cards;
pub mod core;
pub mod deck;
pub mod deckcode;
pub mod runes;
pub mod vanilla;

// Re-export commonly used types
pub use crate::core::{CardClass, DeckRules, RulesOverride};

pub use crate::cards::{CardDefinition, CardId, CardRegistry, CatalogueError, Rarity};

pub use crate::runes::{Rune, Runes};

pub use crate::deck::{Deck, ErrorKind, ValidationError};

pub use crate::deckcode::{DeckCodec, Export, Import, ImportWarning};

pub use crate::vanilla::{
    AmbiguityPolicy, FirstMatch, RejectAmbiguous,
    VanillaBridge, VanillaCard, VanillaCatalogue,
};
