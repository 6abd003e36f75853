//! Deck code export and import.
//!
//! `DeckCodec` ties the catalogue, the ruleset and (optionally) an external
//! format bridge together. Every call is a pure function of its inputs and
//! that injected context.
//!
//! ## Example
//!
//! ```
//! use ccg_deckcode::cards::{CardDefinition, CardId, CardRegistry};
//! use ccg_deckcode::core::DeckRules;
//! use ccg_deckcode::deck::Deck;
//! use ccg_deckcode::deckcode::DeckCodec;
//! use ccg_deckcode::runes::Runes;
//!
//! let mut registry = CardRegistry::new();
//! registry.register(CardDefinition::new(CardId::new(10), "Sheep"));
//! registry.register(CardDefinition::new(CardId::new(11), "Wolf"));
//!
//! let rules = DeckRules::default().with_deck_size(1, 30);
//! let codec = DeckCodec::new(&registry, &rules);
//!
//! let deck = Deck::new("Mage", Runes::new())
//!     .with_copies(registry.get(CardId::new(10)).unwrap(), 2)
//!     .with_copies(registry.get(CardId::new(11)).unwrap(), 1);
//!
//! let export = codec.export(&deck).unwrap();
//! assert_eq!(export.code, "Mage /1:1,2/ b,a");
//!
//! let import = codec.import(&export.code).unwrap();
//! assert_eq!(import.deck.id_counts(), deck.id_counts());
//! ```

use tracing::{debug, warn};

use crate::cards::{CardDefinition, CardId, CardRegistry};
use crate::core::{CardClass, DeckRules};
use crate::deck::validator::{check_card, check_copies, check_hero, check_size};
use crate::deck::deck::rules_for;
use crate::deck::{Deck, ValidationError};
use crate::runes::{encode_block, Runes};
use crate::vanilla::VanillaBridge;

use super::base36;
use super::copies::CopyDefinition;
use super::parser::DeckCodeParser;

/// Result of a successful export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    /// The deck code. Produced even when `errors` is non-empty.
    pub code: String,
    /// Recoverable rule violations (size and copy limits).
    pub errors: Vec<ValidationError>,
}

impl Export {
    /// Check if the deck broke no rules.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Non-fatal rune notices raised while importing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportWarning {
    /// The code has a rune block but the class does not use runes.
    RunesIgnored { hero: CardClass, runes: Runes },
    /// The class uses runes but the code has no rune block.
    MissingRunes { hero: CardClass },
}

/// Result of a successful import.
#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    /// The decoded deck, including the player's rune state.
    pub deck: Deck,
    /// Recoverable rule violations (copy limits).
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ImportWarning>,
}

/// Converts decks to deck codes and back.
#[derive(Clone, Copy)]
pub struct DeckCodec<'a> {
    registry: &'a CardRegistry,
    rules: &'a DeckRules,
    vanilla: Option<&'a VanillaBridge<'a>>,
}

impl std::fmt::Debug for DeckCodec<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckCodec")
            .field("cards", &self.registry.len())
            .field("rules", self.rules)
            .field("vanilla", &self.vanilla.is_some())
            .finish()
    }
}

impl<'a> DeckCodec<'a> {
    /// Create a codec over a catalogue and ruleset.
    #[must_use]
    pub fn new(registry: &'a CardRegistry, rules: &'a DeckRules) -> Self {
        Self {
            registry,
            rules,
            vanilla: None,
        }
    }

    /// Let `import` accept external deck strings through `bridge`.
    #[must_use]
    pub fn with_vanilla(mut self, bridge: &'a VanillaBridge<'a>) -> Self {
        self.vanilla = Some(bridge);
        self
    }

    #[must_use]
    pub fn registry(&self) -> &'a CardRegistry {
        self.registry
    }

    #[must_use]
    pub fn rules(&self) -> &'a DeckRules {
        self.rules
    }

    /// Encode a deck.
    ///
    /// An empty deck is fatal. Size and copy violations are reported in
    /// `Export::errors` alongside a code that still round-trips.
    pub fn export(&self, deck: &Deck) -> Result<Export, ValidationError> {
        if deck.is_empty() {
            return Err(ValidationError::empty_deck());
        }

        let rules = deck.effective_rules(self.rules);
        let mut errors = Vec::new();
        if rules.validate {
            errors.extend(check_size(deck.len(), &rules)?);
            errors.extend(check_copies(deck.groups(), &rules));
        }

        let runes = self.export_runes(&deck.hero, &deck.runes)?;
        let groups: Vec<(CardId, u32)> = deck
            .sorted_groups()
            .iter()
            .map(|&(card, count)| (card.id, count as u32))
            .collect();

        let code = compose(deck.hero.as_str(), runes.as_ref(), &groups);
        debug!(%code, errors = errors.len(), "exported deck");
        Ok(Export { code, errors })
    }

    /// Encode a deck given as card IDs, a hero class and a rune string.
    pub fn export_ids(&self, ids: &[CardId], hero: &str, runes: &str) -> Result<Export, ValidationError> {
        let runes = Runes::parse(runes).map_err(|err| ValidationError::malformed(err.to_string()))?;

        let mut deck = Deck::new(hero, runes);
        for &id in ids {
            deck.push(self.lookup(id)?.clone());
        }
        self.export(&deck)
    }

    /// Decode a deck code, or an external deck string when a bridge is set.
    ///
    /// Unknown heroes, malformed sections, unknown cards, per-card rule
    /// violations and out-of-bounds deck sizes are fatal. Copy limit
    /// violations are reported in `Import::errors`.
    pub fn import(&self, code: &str) -> Result<Import, ValidationError> {
        if let Some(bridge) = self.vanilla {
            if bridge.is_vanilla(code) {
                debug!("importing external deck string");
                let converted = bridge.from_vanilla(self, code)?;
                return self.import_code(&converted);
            }
        }
        self.import_code(code)
    }

    fn import_code(&self, code: &str) -> Result<Import, ValidationError> {
        let mut parser = DeckCodeParser::new(code);

        let hero_name = parser.hero();
        check_hero(hero_name, self.rules)?;
        let hero = CardClass::new(hero_name);

        let mut warnings = Vec::new();
        let rune_class = self.rules.supports_runes(&hero);
        let runes = match parser.runes() {
            Some(runes) if rune_class => runes,
            Some(runes) => {
                warn!(%hero, %runes, "deck has runes but its class does not use them");
                warnings.push(ImportWarning::RunesIgnored {
                    hero: hero.clone(),
                    runes,
                });
                Runes::new()
            }
            None if rune_class => {
                warn!(%hero, "class uses runes but the deck has none");
                warnings.push(ImportWarning::MissingRunes { hero: hero.clone() });
                Runes::new()
            }
            None => Runes::new(),
        };

        let copies = parser.copy_definition()?;
        let ids = parser.card_ids()?;

        let cards = ids
            .iter()
            .map(|&id| self.lookup(id))
            .collect::<Result<Vec<_>, _>>()?;
        let assigned = copies
            .assign(&cards)
            .map_err(|err| ValidationError::copy_definition_malformed(err.to_string()))?;

        // Size is checked on the counts, before any copies are made.
        let rules = rules_for(self.rules, assigned.iter().map(|&(card, _)| card));
        if rules.validate {
            for &(card, _) in &assigned {
                check_card(card, &hero, &runes)?;
            }
            let total = assigned
                .iter()
                .try_fold(0usize, |sum, &(_, copies)| sum.checked_add(copies as usize))
                .unwrap_or(usize::MAX);
            if let Some(size) = check_size(total, &rules)? {
                return Err(size.into_fatal());
            }
        }

        let mut deck = Deck::new(hero, runes);
        for (card, copies) in assigned {
            deck.push_copies(card, copies as usize);
        }

        let mut errors = Vec::new();
        if rules.validate {
            errors = check_copies(deck.groups(), &rules);
        }

        debug!(hero = %deck.hero, cards = deck.len(), errors = errors.len(), "imported deck");
        Ok(Import {
            deck,
            errors,
            warnings,
        })
    }

    fn lookup(&self, id: CardId) -> Result<&'a CardDefinition, ValidationError> {
        self.registry
            .get(id)
            .ok_or_else(|| ValidationError::unknown_card(id).with_detail(base36::encode(id)))
    }

    /// Runes to write for `hero`, in canonical order.
    fn export_runes(&self, hero: &CardClass, runes: &Runes) -> Result<Option<Runes>, ValidationError> {
        if !self.rules.supports_runes(hero) {
            if !runes.is_empty() {
                warn!(%hero, %runes, "dropping runes for a class that does not use them");
            }
            return Ok(None);
        }
        if runes.is_empty() {
            warn!(%hero, "exporting a rune class without runes");
            return Ok(None);
        }
        if runes.len() != 3 {
            return Err(ValidationError::malformed(format!(
                "rune block needs exactly 3 runes, got '{runes}'"
            ))
            .with_hero(hero.as_str()));
        }
        Ok(Some(runes.canonical()))
    }
}

/// Assemble a deck code from its parts.
///
/// `groups` holds each distinct card once with its copy count; they are
/// written sorted by copy count, ties kept in the given order.
pub(crate) fn compose(hero: &str, runes: Option<&Runes>, groups: &[(CardId, u32)]) -> String {
    let mut groups = groups.to_vec();
    groups.sort_by_key(|&(_, copies)| copies);

    let copies = CopyDefinition::from_sorted_counts(groups.iter().map(|&(_, copies)| copies));
    let ids: Vec<String> = groups.iter().map(|&(id, _)| base36::encode(id)).collect();

    let mut code = format!("{hero} ");
    if let Some(block) = runes.and_then(encode_block) {
        code.push_str(&block);
        code.push(' ');
    }
    code.push('/');
    code.push_str(&copies.to_string());
    code.push_str("/ ");
    code.push_str(&ids.join(","));
    code
}
