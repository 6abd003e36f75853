//! Core types shared by every codec: card classes and the deck ruleset.
//!
//! Callers configure validation via `DeckRules` rather than global state.

pub mod class;
pub mod config;

pub use class::CardClass;
pub use config::{DeckRules, RulesOverride, STANDARD_HERO_CLASSES};
