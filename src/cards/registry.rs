//! Card registry for definition lookup.
//!
//! The `CardRegistry` is the read-only card catalogue every codec call
//! consults. It provides lookup by `CardId` and by name.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{CardDefinition, CardId};

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card with ID {0} already registered")]
    DuplicateId(CardId),
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use ccg_deckcode::cards::{CardRegistry, CardDefinition, CardId};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Sheep"));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Sheep");
/// assert!(registry.get_by_name("Sheep").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a JSON array of card definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for card in cards {
            registry.try_register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition, rejecting duplicate IDs.
    pub fn try_register(&mut self, card: CardDefinition) -> Result<(), CatalogueError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogueError::DuplicateId(card.id));
        }
        self.by_name.entry(card.name.clone()).or_insert(card.id);
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if let Err(err) = self.try_register(card) {
            panic!("{err}");
        }
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card by its name, falling back to display names.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&CardDefinition> {
        if let Some(card) = self.by_name.get(name).and_then(|id| self.cards.get(id)) {
            return Some(card);
        }

        // Lowest ID wins so the result does not depend on map order.
        self.cards
            .values()
            .filter(|c| c.display_name.as_deref() == Some(name))
            .min_by_key(|c| c.id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
