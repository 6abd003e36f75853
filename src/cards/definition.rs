//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card that deck
//! codes care about: identity, classes, rarity, collectibility and rune
//! requirement. Only the `id` is ever persisted in a deck code.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardClass, RulesOverride};
use crate::runes::Runes;

/// Unique identifier for a card definition.
///
/// Stable across catalogue reloads; deck codes store it in base 36.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Free,
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Check if this is `Legendary`.
    #[must_use]
    pub const fn is_legendary(self) -> bool {
        matches!(self, Rarity::Legendary)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_deckcode::cards::{CardDefinition, CardId, Rarity};
/// use ccg_deckcode::runes::Runes;
///
/// let card = CardDefinition::new(CardId::new(7), "Plague Strike")
///     .with_class("Death Knight")
///     .with_rarity(Rarity::Common)
///     .with_runes(Runes::parse("U").unwrap());
///
/// assert!(card.belongs_to(&"Death Knight".into()));
/// assert!(!card.belongs_to(&"Mage".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name. Unique within a catalogue.
    pub name: String,

    /// Name shown to players when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Classes this card belongs to. Empty means neutral.
    #[serde(default)]
    pub classes: SmallVec<[CardClass; 2]>,

    #[serde(default)]
    pub rarity: Rarity,

    #[serde(default)]
    pub cost: u32,

    #[serde(default = "default_collectible")]
    pub collectible: bool,

    /// Runes the player needs to put this card in a deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runes: Option<Runes>,

    /// Rule changes applied to any deck containing this card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_rules: Option<RulesOverride>,
}

fn default_collectible() -> bool {
    true
}

impl CardDefinition {
    /// Create a new collectible, neutral, free card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            display_name: None,
            classes: SmallVec::new(),
            rarity: Rarity::Free,
            cost: 0,
            collectible: true,
            runes: None,
            deck_rules: None,
        }
    }

    /// Add a class (builder pattern).
    #[must_use]
    pub fn with_class(mut self, class: impl Into<CardClass>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the rarity.
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the mana cost.
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the rune requirement.
    #[must_use]
    pub fn with_runes(mut self, runes: Runes) -> Self {
        self.runes = Some(runes).filter(|r| !r.is_empty());
        self
    }

    /// Attach deck rule overrides.
    #[must_use]
    pub fn with_deck_rules(mut self, rules: RulesOverride) -> Self {
        self.deck_rules = Some(rules);
        self
    }

    /// Mark as uncollectible (tokens, generated cards).
    #[must_use]
    pub fn uncollectible(mut self) -> Self {
        self.collectible = false;
        self
    }

    /// The name shown to players.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Check if this card is neutral.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.classes.is_empty() || self.classes.iter().any(CardClass::is_neutral)
    }

    /// Check if this card can go in a deck for `hero`.
    #[must_use]
    pub fn belongs_to(&self, hero: &CardClass) -> bool {
        self.is_neutral() || self.classes.contains(hero)
    }
}
