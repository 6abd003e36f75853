//! Runes: resource-requirement letters that gate cards for rune classes.
//!
//! ## Key Types
//!
//! - `Rune`: Blood, Frost or Unholy
//! - `Runes`: ordered rune multiset with per-letter satisfiability
//!
//! The rune block codec (`encode_block` / `decode_block`) handles the
//! `[XYZ]` / `[3X]` notation used in deck codes.

pub mod block;
pub mod rune;

pub use block::{decode_block, encode_block};
pub use rune::{InvalidRune, Rune, Runes};
