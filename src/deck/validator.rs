//! Deck validation rules.
//!
//! Rules, in order:
//! 1. The hero class must be known (fatal).
//! 2. The deck must not be empty (fatal).
//! 3. The deck size must be within the configured bounds (recoverable).
//! 4. Copies per card must respect the card and legendary limits
//!    (recoverable, every offender reported).
//! 5. Each card must match the hero's class, be collectible and have its
//!    rune requirement met (fatal for that card).
//!
//! The individual rules are exposed so the codecs can apply them at the
//! points the deck code format requires.

use crate::cards::CardDefinition;
use crate::core::{CardClass, DeckRules};
use crate::runes::Runes;

use super::deck::Deck;
use super::error::{ErrorKind, ValidationError};

/// Rule 1: the hero class must be one of `rules.hero_classes`.
pub fn check_hero(hero: &str, rules: &DeckRules) -> Result<(), ValidationError> {
    if rules.is_hero_class(hero) {
        Ok(())
    } else {
        Err(ValidationError::invalid_hero(hero))
    }
}

/// Rules 2 and 3: the deck must be non-empty and within the size bounds.
///
/// Returns `Err` only for an empty deck; size violations are recoverable
/// and come back as `Ok(Some(..))`.
pub fn check_size(len: usize, rules: &DeckRules) -> Result<Option<ValidationError>, ValidationError> {
    if len == 0 {
        return Err(ValidationError::empty_deck());
    }
    if len < rules.min_deck_size {
        return Ok(Some(ValidationError::too_few_cards(len, rules.min_deck_size)));
    }
    if len > rules.max_deck_size {
        return Ok(Some(ValidationError::too_many_cards(len, rules.max_deck_size)));
    }
    Ok(None)
}

/// Rule 4: copy limits. Returns one error per offending card.
pub fn check_copies<'a, I>(groups: I, rules: &DeckRules) -> Vec<ValidationError>
where
    I: IntoIterator<Item = (&'a CardDefinition, usize)>,
{
    groups
        .into_iter()
        .filter_map(|(card, count)| {
            if card.rarity.is_legendary() && count > rules.max_copies_of_one_legendary {
                Some(ValidationError::too_many_legendary_copies(
                    card,
                    count,
                    rules.max_copies_of_one_legendary,
                ))
            } else if count > rules.max_copies_of_one_card {
                Some(ValidationError::too_many_copies(
                    card,
                    count,
                    rules.max_copies_of_one_card,
                ))
            } else {
                None
            }
        })
        .collect()
}

/// Rule 5: a single card against the hero class and the player's runes.
pub fn check_card(card: &CardDefinition, hero: &CardClass, runes: &Runes) -> Result<(), ValidationError> {
    if !card.belongs_to(hero) {
        return Err(ValidationError::card(ErrorKind::ClassMismatch, card, hero.as_str()));
    }
    if !card.collectible {
        return Err(ValidationError::card(ErrorKind::Uncollectible, card, hero.as_str()));
    }
    if let Some(required) = &card.runes {
        if !runes.satisfies(required) {
            return Err(ValidationError::card(ErrorKind::RuneMismatch, card, hero.as_str())
                .with_detail(format!("requires {required}, deck has {runes}")));
        }
    }
    Ok(())
}

/// Validate a whole deck against `rules`.
///
/// Card overrides are applied first. Fatal failures return `Err`; the
/// recoverable ones are collected into the `Ok` vector.
pub fn validate(deck: &Deck, rules: &DeckRules) -> Result<Vec<ValidationError>, ValidationError> {
    check_hero(deck.hero.as_str(), rules)?;

    let rules = deck.effective_rules(rules);
    let size = check_size(deck.len(), &rules)?;
    if !rules.validate {
        return Ok(Vec::new());
    }

    for (card, _) in deck.groups() {
        check_card(card, &deck.hero, &deck.runes)?;
    }

    let mut errors: Vec<ValidationError> = size.into_iter().collect();
    errors.extend(check_copies(deck.groups(), &rules));
    Ok(errors)
}
