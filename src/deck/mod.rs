//! Decks and deck validation.
//!
//! ## Key Types
//!
//! - `Deck`: hero class, runes and cards
//! - `ValidationError`: classified, recoverable-or-fatal failure
//! - `validator`: the individual deck rules and `validate`

pub mod deck;
pub mod error;
pub mod validator;

pub use deck::Deck;
pub use error::{ErrorContext, ErrorKind, ValidationError};
pub use validator::validate;
