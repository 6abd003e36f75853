//! Card classes.
//!
//! Classes are plain display strings ("Mage", "Death Knight"). The set of
//! playable hero classes is configured in `DeckRules`, not hardcoded here.

use serde::{Deserialize, Serialize};

/// A card or hero class, identified by its display name.
///
/// `Neutral` is a pseudo-class: neutral cards are valid for every hero.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardClass(String);

impl CardClass {
    /// Name of the neutral pseudo-class.
    pub const NEUTRAL: &'static str = "Neutral";

    /// Create a class from its display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The neutral pseudo-class.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new(Self::NEUTRAL)
    }

    /// Get the display name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the neutral pseudo-class.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.0 == Self::NEUTRAL
    }
}

impl std::fmt::Display for CardClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardClass {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardClass {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for CardClass {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardClass {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral() {
        assert!(CardClass::neutral().is_neutral());
        assert!(!CardClass::new("Mage").is_neutral());
    }

    #[test]
    fn test_display_and_compare() {
        let class: CardClass = "Death Knight".into();
        assert_eq!(class.to_string(), "Death Knight");
        assert_eq!(class, "Death Knight");
        assert_eq!(class.as_str(), "Death Knight");
    }

    #[test]
    fn test_serde_transparent() {
        let class = CardClass::new("Priest");
        let json = serde_json::to_string(&class).unwrap();
        assert_eq!(json, "\"Priest\"");

        let back: CardClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, class);
    }
}
