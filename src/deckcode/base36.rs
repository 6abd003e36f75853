//! Lowercase base-36 card IDs.

use crate::cards::CardId;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encode a card ID in lowercase base 36.
///
/// ```
/// use ccg_deckcode::cards::CardId;
/// use ccg_deckcode::deckcode::base36;
///
/// assert_eq!(base36::encode(CardId::new(204)), "5o");
/// assert_eq!(base36::encode(CardId::new(0)), "0");
/// ```
#[must_use]
pub fn encode(id: CardId) -> String {
    let mut n = id.raw();
    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Check if `c` may appear in an encoded ID.
#[must_use]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase()
}

/// Decode a lowercase base-36 token.
///
/// Returns `None` for empty tokens, uppercase or other characters, and
/// values that overflow a card ID.
#[must_use]
pub fn decode(token: &str) -> Option<CardId> {
    if token.is_empty() || !token.chars().all(is_digit) {
        return None;
    }
    u32::from_str_radix(token, 36).ok().map(CardId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(encode(CardId::new(2)), "2");
        assert_eq!(encode(CardId::new(35)), "z");
        assert_eq!(encode(CardId::new(36)), "10");
        assert_eq!(encode(CardId::new(252)), "70");
        assert_eq!(decode("5o"), Some(CardId::new(204)));
        assert_eq!(decode("3o"), Some(CardId::new(132)));
    }

    #[test]
    fn test_decode_rejects() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("5O"), None);
        assert_eq!(decode("-1"), None);
        assert_eq!(decode("5 o"), None);
        assert_eq!(decode("zzzzzzzzzz"), None);
    }

    #[test]
    fn test_max_id() {
        let max = CardId::new(u32::MAX);
        assert_eq!(decode(&encode(max)), Some(max));
    }
}
