//! Rune block codec.
//!
//! A rune block is `[XYZ]` (three literal rune letters) or `[3X]` (three
//! copies of one rune). Encoding keeps the order the caller supplies.

use super::rune::{Rune, Runes};

/// Encode runes as a rune block.
///
/// Returns `None` for an empty multiset, which is written as no block at all.
///
/// ```
/// use ccg_deckcode::runes::{encode_block, Runes};
///
/// assert_eq!(encode_block(&Runes::parse("BBB").unwrap()).as_deref(), Some("[3B]"));
/// assert_eq!(encode_block(&Runes::parse("UFB").unwrap()).as_deref(), Some("[UFB]"));
/// assert_eq!(encode_block(&Runes::new()), None);
/// ```
#[must_use]
pub fn encode_block(runes: &Runes) -> Option<String> {
    let first = runes.as_slice().first()?;

    if runes.len() == 3 && runes.is_uniform() {
        Some(format!("[3{}]", first.letter()))
    } else {
        Some(format!("[{runes}]"))
    }
}

/// Decode a rune block at the start of `input`.
///
/// Returns the runes and the number of bytes consumed, or `None` when
/// neither block form matches at that position.
#[must_use]
pub fn decode_block(input: &str) -> Option<(Runes, usize)> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'[') {
        return None;
    }

    let letter = |i: usize| bytes.get(i).and_then(|&b| Rune::from_letter(b as char));

    // [3X]
    if bytes.get(1) == Some(&b'3') && bytes.get(3) == Some(&b']') {
        if let Some(rune) = letter(2) {
            return Some((Runes::repeat(rune, 3), 4));
        }
    }

    // [XYZ]
    if bytes.get(4) == Some(&b']') {
        if let (Some(a), Some(b), Some(c)) = (letter(1), letter(2), letter(3)) {
            return Some(([a, b, c].into_iter().collect(), 5));
        }
    }

    None
}
