//! Runes and rune multisets.
//!
//! A rune requirement is a short multiset over Blood, Frost and Unholy,
//! written as letters: `"BBF"` means two Blood and one Frost.
//! Satisfiability compares per-letter counts, not set membership.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// A single rune.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rune {
    Blood,
    Frost,
    Unholy,
}

impl Rune {
    /// All runes in canonical order.
    pub const ALL: [Rune; 3] = [Rune::Blood, Rune::Frost, Rune::Unholy];

    /// The letter used in deck codes.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Rune::Blood => 'B',
            Rune::Frost => 'F',
            Rune::Unholy => 'U',
        }
    }

    /// Parse a rune letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'B' => Some(Rune::Blood),
            'F' => Some(Rune::Frost),
            'U' => Some(Rune::Unholy),
            _ => None,
        }
    }
}

/// Error returned when a rune string contains a letter other than B, F or U.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid rune letter '{0}'")]
pub struct InvalidRune(pub char);

/// An ordered multiset of runes.
///
/// Order is preserved as given; use [`Runes::canonical`] for the order used
/// by the deck code encoder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Runes(SmallVec<[Rune; 3]>);

impl Runes {
    /// Create an empty rune multiset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a letter string such as `"BFU"`.
    pub fn parse(letters: &str) -> Result<Self, InvalidRune> {
        letters
            .chars()
            .map(|c| Rune::from_letter(c).ok_or(InvalidRune(c)))
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }

    /// `count` copies of one rune.
    #[must_use]
    pub fn repeat(rune: Rune, count: usize) -> Self {
        Self(std::iter::repeat(rune).take(count).collect())
    }

    /// Append a rune.
    pub fn push(&mut self, rune: Rune) {
        self.0.push(rune);
    }

    /// Append every rune of `other`.
    pub fn extend_from(&mut self, other: &Runes) {
        self.0.extend_from_slice(&other.0);
    }

    /// Number of runes (with multiplicity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no runes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The runes in their stored order.
    #[must_use]
    pub fn as_slice(&self) -> &[Rune] {
        &self.0
    }

    /// How many times `rune` occurs.
    #[must_use]
    pub fn count(&self, rune: Rune) -> usize {
        self.0.iter().filter(|&&r| r == rune).count()
    }

    /// Check if every letter of `required` is covered by this multiset.
    ///
    /// ```
    /// use ccg_deckcode::runes::Runes;
    ///
    /// let player = Runes::parse("BBF").unwrap();
    /// assert!(player.satisfies(&Runes::parse("BB").unwrap()));
    /// assert!(!player.satisfies(&Runes::parse("FF").unwrap()));
    /// ```
    #[must_use]
    pub fn satisfies(&self, required: &Runes) -> bool {
        Rune::ALL
            .iter()
            .all(|&rune| required.count(rune) <= self.count(rune))
    }

    /// Check if all runes are the same letter.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.0.windows(2).all(|w| w[0] == w[1])
    }

    /// Canonical order: one Blood, one Frost, one Unholy (each only if
    /// present), then the remaining runes in their original order.
    ///
    /// `"UBB"` becomes `"BUB"`, `"FUB"` becomes `"BFU"`.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let mut rest: SmallVec<[Rune; 3]> = self.0.clone();
        let mut out = SmallVec::new();

        for rune in Rune::ALL {
            if let Some(pos) = rest.iter().position(|&r| r == rune) {
                rest.remove(pos);
                out.push(rune);
            }
        }

        out.extend(rest);
        Self(out)
    }

    /// Keep only the first `len` runes.
    #[must_use]
    pub fn truncated(&self, len: usize) -> Self {
        Self(self.0.iter().copied().take(len).collect())
    }

    /// Pad to `len` runes by repeating the first rune.
    ///
    /// Empty multisets stay empty.
    #[must_use]
    pub fn padded(&self, len: usize) -> Self {
        let mut out = self.0.clone();
        if let Some(&first) = self.0.first() {
            while out.len() < len {
                out.push(first);
            }
        }
        Self(out)
    }
}

impl std::fmt::Display for Runes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rune in &self.0 {
            write!(f, "{}", rune.letter())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Runes {
    type Err = InvalidRune;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Runes {
    type Error = InvalidRune;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Runes> for String {
    fn from(runes: Runes) -> Self {
        runes.to_string()
    }
}

impl FromIterator<Rune> for Runes {
    fn from_iter<I: IntoIterator<Item = Rune>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runes(s: &str) -> Runes {
        Runes::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(runes("BFU").to_string(), "BFU");
        assert_eq!(runes("").len(), 0);
        assert_eq!(Runes::parse("BXU"), Err(InvalidRune('X')));
        assert_eq!(Runes::parse("b"), Err(InvalidRune('b')));
    }

    #[test]
    fn test_count_and_satisfies() {
        let player = runes("BBU");
        assert_eq!(player.count(Rune::Blood), 2);
        assert_eq!(player.count(Rune::Frost), 0);

        assert!(player.satisfies(&runes("B")));
        assert!(player.satisfies(&runes("BBU")));
        assert!(player.satisfies(&runes("")));
        assert!(!player.satisfies(&runes("BBB")));
        assert!(!player.satisfies(&runes("F")));
    }

    #[test]
    fn test_satisfies_is_per_letter() {
        // Set containment would accept this; counts do not.
        assert!(!runes("BFU").satisfies(&runes("BB")));
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(runes("UFB").canonical().to_string(), "BFU");
        assert_eq!(runes("UBB").canonical().to_string(), "BUB");
        assert_eq!(runes("FFF").canonical().to_string(), "FFF");
        assert_eq!(runes("BUBBF").canonical().to_string(), "BFUBB");
        assert_eq!(runes("").canonical(), Runes::new());
    }

    #[test]
    fn test_truncate_and_pad() {
        assert_eq!(runes("BFUBB").truncated(3).to_string(), "BFU");
        assert_eq!(runes("BF").padded(3).to_string(), "BFB");
        assert_eq!(runes("U").padded(3).to_string(), "UUU");
        assert!(runes("").padded(3).is_empty());
    }

    #[test]
    fn test_uniform() {
        assert!(runes("BBB").is_uniform());
        assert!(!runes("BBF").is_uniform());
        assert!(runes("").is_uniform());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&runes("BFU")).unwrap();
        assert_eq!(json, "\"BFU\"");

        let back: Runes = serde_json::from_str("\"UUB\"").unwrap();
        assert_eq!(back, runes("UUB"));
        assert!(serde_json::from_str::<Runes>("\"BQ\"").is_err());
    }
}
