//! Deck value object.
//!
//! A `Deck` is built fresh by every import and export; the codecs never
//! mutate one in place.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cards::{CardDefinition, CardId};
use crate::core::{CardClass, DeckRules};
use crate::runes::Runes;

/// A hero class, its runes and an ordered list of cards.
///
/// Card order does not matter for validation. The encoder groups cards by
/// copy count and uses first-encounter order to break ties.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    pub hero: CardClass,
    pub runes: Runes,
    cards: Vec<CardDefinition>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(hero: impl Into<CardClass>, runes: Runes) -> Self {
        Self {
            hero: hero.into(),
            runes,
            cards: Vec::new(),
        }
    }

    /// Add one card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardDefinition) -> Self {
        self.cards.push(card);
        self
    }

    /// Add `copies` copies of a card (builder pattern).
    #[must_use]
    pub fn with_copies(mut self, card: &CardDefinition, copies: usize) -> Self {
        self.push_copies(card, copies);
        self
    }

    /// Add one card.
    pub fn push(&mut self, card: CardDefinition) {
        self.cards.push(card);
    }

    /// Add `copies` copies of a card.
    pub fn push_copies(&mut self, card: &CardDefinition, copies: usize) {
        self.cards
            .extend(std::iter::repeat(card).take(copies).cloned());
    }

    /// All cards, one entry per copy.
    #[must_use]
    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Number of cards (with copies).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Distinct cards with their copy counts, in first-encounter order.
    #[must_use]
    pub fn groups(&self) -> Vec<(&CardDefinition, usize)> {
        let mut groups: Vec<(&CardDefinition, usize)> = Vec::new();
        for card in &self.cards {
            match groups.iter_mut().find(|(c, _)| c.id == card.id) {
                Some((_, count)) => *count += 1,
                None => groups.push((card, 1)),
            }
        }
        groups
    }

    /// `groups()` sorted by copy count ascending, ties in encounter order.
    #[must_use]
    pub fn sorted_groups(&self) -> Vec<(&CardDefinition, usize)> {
        let mut groups = self.groups();
        groups.sort_by_key(|&(_, count)| count);
        groups
    }

    /// Copy count per card ID. Two decks with equal maps hold the same cards.
    #[must_use]
    pub fn id_counts(&self) -> BTreeMap<CardId, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.id).or_insert(0) += 1;
        }
        counts
    }

    /// The rules in force for this deck: `base` with every distinct card's
    /// override applied in encounter order.
    #[must_use]
    pub fn effective_rules(&self, base: &DeckRules) -> DeckRules {
        rules_for(base, self.cards.iter())
    }

    /// Shuffle the cards deterministically from a seed.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }
}

/// `base` with the override of each distinct card applied in encounter
/// order. Repeats of a card already seen are skipped.
pub(crate) fn rules_for<'c, I>(base: &DeckRules, cards: I) -> DeckRules
where
    I: IntoIterator<Item = &'c CardDefinition>,
{
    let mut seen = Vec::new();
    let mut rules = base.clone();
    for card in cards {
        if seen.contains(&card.id) {
            continue;
        }
        seen.push(card.id);
        if let Some(over) = &card.deck_rules {
            rules = rules.overridden(over);
        }
    }
    rules
}
