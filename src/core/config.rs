//! Deck rules configuration.
//!
//! Callers configure deck validation by providing:
//! - `DeckRules`: size and copy limits, the known hero classes, rune classes
//! - `RulesOverride`: per-card overrides applied while that card is in a deck
//!
//! The codec never reads ambient global state; every operation receives
//! its `DeckRules` explicitly.

use serde::{Deserialize, Serialize};

use super::class::CardClass;
use crate::runes::{Rune, Runes};

/// The standard playable hero classes.
pub const STANDARD_HERO_CLASSES: [&str; 11] = [
    "Death Knight",
    "Demon Hunter",
    "Druid",
    "Hunter",
    "Mage",
    "Paladin",
    "Priest",
    "Rogue",
    "Shaman",
    "Warlock",
    "Warrior",
];

/// Deck validation ruleset.
///
/// ## Example
///
/// ```
/// use ccg_deckcode::core::DeckRules;
///
/// let rules = DeckRules::default()
///     .with_deck_size(20, 40)
///     .with_max_copies(3);
///
/// assert_eq!(rules.min_deck_size, 20);
/// assert_eq!(rules.max_copies_of_one_card, 3);
/// assert!(rules.supports_runes(&"Death Knight".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRules {
    /// If false, size, copy-count and per-card rules are skipped.
    ///
    /// Hero and empty-deck checks always apply.
    pub validate: bool,

    /// Minimum number of cards in a deck.
    pub min_deck_size: usize,

    /// Maximum number of cards in a deck.
    pub max_deck_size: usize,

    /// Maximum copies of any one card.
    pub max_copies_of_one_card: usize,

    /// Maximum copies of any one legendary card.
    pub max_copies_of_one_legendary: usize,

    /// Classes a deck may be built for.
    pub hero_classes: Vec<CardClass>,

    /// Classes that use runes.
    pub rune_classes: Vec<CardClass>,

    /// Runes assigned by external-format conversion when no card in the
    /// deck requires any.
    pub fallback_runes: Runes,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            validate: true,
            min_deck_size: 30,
            max_deck_size: 30,
            max_copies_of_one_card: 2,
            max_copies_of_one_legendary: 1,
            hero_classes: STANDARD_HERO_CLASSES.iter().map(|&c| c.into()).collect(),
            rune_classes: vec!["Death Knight".into()],
            fallback_runes: Runes::repeat(Rune::Blood, 3),
        }
    }
}

impl DeckRules {
    /// Create the default ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ruleset from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the allowed deck size range.
    #[must_use]
    pub fn with_deck_size(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "Minimum deck size must not exceed maximum");
        self.min_deck_size = min;
        self.max_deck_size = max;
        self
    }

    /// Set the per-card copy limit.
    #[must_use]
    pub fn with_max_copies(mut self, max: usize) -> Self {
        self.max_copies_of_one_card = max;
        self
    }

    /// Set the per-legendary copy limit.
    #[must_use]
    pub fn with_max_legendary_copies(mut self, max: usize) -> Self {
        self.max_copies_of_one_legendary = max;
        self
    }

    /// Replace the known hero classes.
    #[must_use]
    pub fn with_hero_classes<I, C>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CardClass>,
    {
        self.hero_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the rune classes.
    #[must_use]
    pub fn with_rune_classes<I, C>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CardClass>,
    {
        self.rune_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback runes used by external-format conversion.
    #[must_use]
    pub fn with_fallback_runes(mut self, runes: Runes) -> Self {
        self.fallback_runes = runes;
        self
    }

    /// Turn validation of size, copies and individual cards off.
    #[must_use]
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Check if `class` is a known hero class.
    #[must_use]
    pub fn is_hero_class(&self, class: &str) -> bool {
        self.hero_classes.iter().any(|c| c == class)
    }

    /// Check if `class` uses runes.
    #[must_use]
    pub fn supports_runes(&self, class: &CardClass) -> bool {
        self.rune_classes.contains(class)
    }

    /// Apply a card's override on top of these rules.
    #[must_use]
    pub fn overridden(&self, over: &RulesOverride) -> Self {
        let mut rules = self.clone();
        if let Some(v) = over.validate {
            rules.validate = v;
        }
        if let Some(v) = over.min_deck_size {
            rules.min_deck_size = v;
        }
        if let Some(v) = over.max_deck_size {
            rules.max_deck_size = v;
        }
        if let Some(v) = over.max_copies_of_one_card {
            rules.max_copies_of_one_card = v;
        }
        if let Some(v) = over.max_copies_of_one_legendary {
            rules.max_copies_of_one_legendary = v;
        }
        rules
    }
}

/// Rule changes a card imposes on the deck that contains it.
///
/// For example, a card that allows 40-card decks sets both deck sizes to 40.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesOverride {
    pub validate: Option<bool>,
    pub min_deck_size: Option<usize>,
    pub max_deck_size: Option<usize>,
    pub max_copies_of_one_card: Option<usize>,
    pub max_copies_of_one_legendary: Option<usize>,
}

impl RulesOverride {
    /// Create an empty override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the deck size range.
    #[must_use]
    pub fn with_deck_size(mut self, min: usize, max: usize) -> Self {
        self.min_deck_size = Some(min);
        self.max_deck_size = Some(max);
        self
    }

    /// Override the per-card copy limit.
    #[must_use]
    pub fn with_max_copies(mut self, max: usize) -> Self {
        self.max_copies_of_one_card = Some(max);
        self
    }

    /// Override the per-legendary copy limit.
    #[must_use]
    pub fn with_max_legendary_copies(mut self, max: usize) -> Self {
        self.max_copies_of_one_legendary = Some(max);
        self
    }
}
