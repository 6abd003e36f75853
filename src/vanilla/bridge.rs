//! Conversion between deck codes and external deck strings.
//!
//! Cards are matched across catalogues by name: an internal card's display
//! name is looked up in the external catalogue, an external card's name is
//! looked up in the internal registry.

use tracing::{debug, warn};

use crate::cards::{CardDefinition, CardId};
use crate::core::DeckRules;
use crate::deck::{ErrorKind, ValidationError};
use crate::deckcode::{compose, parse, DeckCodec};
use crate::runes::Runes;

use super::card::VanillaCard;
use super::catalogue::{filter, FilterOptions, VanillaCatalogue};
use super::deckstring::{Deckstring, DeckstringCodec, VanillaDeck, VanillaFormat};
use super::heroes::{class_for_hero_id, hero_dbf_id, normalize_class_name};
use super::resolve::AmbiguityPolicy;

/// Converts deck codes to and from the external deck string format.
pub struct VanillaBridge<'a> {
    catalogue: &'a VanillaCatalogue,
    deckstring: Box<dyn DeckstringCodec + 'a>,
}

impl std::fmt::Debug for VanillaBridge<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VanillaBridge")
            .field("cards", &self.catalogue.len())
            .finish_non_exhaustive()
    }
}

impl<'a> VanillaBridge<'a> {
    /// Create a bridge using the standard deck string codec.
    #[must_use]
    pub fn new(catalogue: &'a VanillaCatalogue) -> Self {
        Self::with_codec(catalogue, Deckstring)
    }

    /// Create a bridge with a custom deck string codec.
    #[must_use]
    pub fn with_codec(catalogue: &'a VanillaCatalogue, codec: impl DeckstringCodec + 'a) -> Self {
        Self {
            catalogue,
            deckstring: Box::new(codec),
        }
    }

    #[must_use]
    pub fn catalogue(&self) -> &'a VanillaCatalogue {
        self.catalogue
    }

    /// Check if `code` decodes as an external deck string.
    #[must_use]
    pub fn is_vanilla(&self, code: &str) -> bool {
        self.deckstring.decode(code).is_ok()
    }

    /// Convert a deck code into an external deck string.
    ///
    /// Each card is matched by display name against the filtered external
    /// catalogue. With `extra_filtering`, entries lacking a `howToEarn`
    /// field are dropped when any entry has one. Several remaining matches
    /// go to `policy`; the output is always in the Wild format.
    pub fn to_vanilla<P>(
        &self,
        codec: &DeckCodec<'_>,
        code: &str,
        extra_filtering: bool,
        policy: &P,
    ) -> Result<String, ValidationError>
    where
        P: AmbiguityPolicy + ?Sized,
    {
        let parsed = parse(code)?;
        let hero_id = hero_dbf_id(&parsed.hero).ok_or_else(|| {
            ValidationError::invalid_hero(parsed.hero.as_str())
                .with_detail("no external hero card for this class")
        })?;

        let options = FilterOptions {
            dangerous: extra_filtering,
            ..FilterOptions::default()
        };

        let mut cards = Vec::new();
        for (id, copies) in parsed.entries()? {
            let card = codec
                .registry()
                .get(id)
                .ok_or_else(|| ValidationError::unknown_card(id))?;
            let vanilla = self.match_card(card, &options, policy)?;
            cards.push((vanilla.dbf_id, copies));
        }

        let deck = VanillaDeck {
            format: VanillaFormat::Wild,
            heroes: vec![hero_id],
            cards,
        };
        let encoded = self
            .deckstring
            .encode(&deck)
            .map_err(|err| ValidationError::malformed(err.to_string()))?;

        debug!(hero = %parsed.hero, cards = deck.cards.len(), "converted to external deck string");
        Ok(encoded)
    }

    fn match_card<P>(
        &self,
        card: &CardDefinition,
        options: &FilterOptions,
        policy: &P,
    ) -> Result<&'a VanillaCard, ValidationError>
    where
        P: AmbiguityPolicy + ?Sized,
    {
        let name = card.display_name();
        let mut matches = filter(self.catalogue.find_by_name(name), options);
        matches.sort_by_key(|c| c.dbf_id);

        match matches.as_slice() {
            [] => Err(ValidationError::unknown_card(card.id)
                .with_card_name(name)
                .with_detail("no matching external card")),
            [only] => Ok(*only),
            many => {
                let chosen = policy
                    .choose(name, many)
                    .filter(|&i| i < many.len())
                    .ok_or_else(|| {
                        ValidationError::fatal(ErrorKind::AmbiguousCard)
                            .with_card(card)
                            .with_count(many.len(), 1)
                    })?;
                debug!(card = name, candidates = many.len(), dbf_id = many[chosen].dbf_id, "resolved ambiguous card");
                Ok(many[chosen])
            }
        }
    }

    /// Convert an external deck string into a deck code.
    ///
    /// A deck without cards is fatal. Every missing card is logged; the
    /// first one is returned as the error. External cards sharing a name
    /// are merged into one entry. Rune classes get runes derived from the
    /// cards' requirements, or the ruleset's fallback runes when no card
    /// requires any.
    pub fn from_vanilla(&self, codec: &DeckCodec<'_>, code: &str) -> Result<String, ValidationError> {
        let deck = self
            .deckstring
            .decode(code)
            .map_err(|err| ValidationError::malformed(err.to_string()))?;

        let hero_id = *deck
            .heroes
            .first()
            .ok_or_else(|| ValidationError::invalid_hero("").with_detail("deck string has no hero"))?;
        let rules = codec.rules();
        let hero = self
            .hero_class(hero_id, rules)
            .ok_or_else(|| ValidationError::invalid_hero(hero_id.to_string()))?;
        if deck.cards.is_empty() {
            return Err(ValidationError::empty_deck().with_hero(hero.as_str()));
        }

        let mut missing = Vec::new();
        let mut groups: Vec<(&CardDefinition, u32)> = Vec::new();
        for &(dbf_id, copies) in &deck.cards {
            let name = self.catalogue.get(dbf_id).map(|c| c.name.as_str());
            match name.and_then(|n| codec.registry().get_by_name(n)) {
                Some(card) => match groups.iter_mut().find(|(c, _)| c.id == card.id) {
                    Some((_, total)) => *total = total.saturating_add(copies),
                    None => groups.push((card, copies)),
                },
                None => {
                    warn!(dbf_id, name = name.unwrap_or("?"), "external card has no internal counterpart");
                    let mut err = ValidationError::fatal(ErrorKind::UnknownCardId).with_card_id(dbf_id);
                    if let Some(name) = name {
                        err = err.with_card_name(name);
                    }
                    missing.push(err);
                }
            }
        }
        if let Some(first) = missing.into_iter().next() {
            return Err(first);
        }

        let runes = if rules.supports_runes(&hero.as_str().into()) {
            Some(derive_runes(groups.iter().map(|(card, _)| *card), &rules.fallback_runes))
        } else {
            None
        };

        let ids: Vec<(CardId, u32)> = groups.iter().map(|(card, copies)| (card.id, *copies)).collect();
        let converted = compose(&hero, runes.as_ref(), &ids);
        debug!(%hero, cards = ids.len(), "converted external deck string");
        Ok(converted)
    }

    /// Class for an external hero card: its catalogue class when the
    /// ruleset knows it, then the default hero table.
    fn hero_class(&self, dbf_id: u32, rules: &DeckRules) -> Option<String> {
        self.catalogue
            .get(dbf_id)
            .and_then(|hero| hero.card_class.as_deref())
            .map(normalize_class_name)
            .filter(|class| rules.is_hero_class(class))
            .or_else(|| class_for_hero_id(dbf_id).map(str::to_string))
    }
}

/// Runes a deck of `cards` needs: every card's requirement concatenated,
/// put in canonical order, cut to three and padded with the first rune.
fn derive_runes<'c>(cards: impl Iterator<Item = &'c CardDefinition>, fallback: &Runes) -> Runes {
    let mut required = Runes::new();
    for card in cards {
        if let Some(runes) = &card.runes {
            required.extend_from(runes);
        }
    }

    if required.is_empty() {
        warn!(%fallback, "no card requires runes, using fallback");
        return fallback.canonical();
    }
    required.canonical().truncated(3).padded(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardRegistry;
    use crate::vanilla::resolve::{FirstMatch, RejectAmbiguous};

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "Sheep"));
        registry.register(CardDefinition::new(CardId::new(2), "Wolf"));
        registry.register(
            CardDefinition::new(CardId::new(3), "Chill Strike")
                .with_class("Death Knight")
                .with_runes(Runes::parse("F").unwrap()),
        );
        registry.register(
            CardDefinition::new(CardId::new(4), "Bone Spike")
                .with_class("Death Knight")
                .with_runes(Runes::parse("UU").unwrap()),
        );
        registry
    }

    fn catalogue() -> VanillaCatalogue {
        VanillaCatalogue::new(vec![
            VanillaCard::new(637, "HERO_08", "Jaina Proudmoore").with_class("MAGE").with_set("HERO_SKINS"),
            VanillaCard::new(100, "CORE_1", "Sheep"),
            VanillaCard::new(101, "CORE_2", "Wolf"),
            VanillaCard::new(102, "LEGACY_2", "Wolf"),
            VanillaCard::new(103, "RLK_3", "Chill Strike").with_class("DEATHKNIGHT"),
            VanillaCard::new(104, "RLK_4", "Bone Spike").with_class("DEATHKNIGHT"),
            VanillaCard::new(105, "CORE_5", "Yeti"),
        ])
    }

    #[test]
    fn test_round_trip() {
        let (registry, catalogue) = (registry(), catalogue());
        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let bridge = VanillaBridge::new(&catalogue);

        let external = bridge.to_vanilla(&codec, "Mage /1:1,2/ 2,1", false, &FirstMatch).unwrap();
        assert!(bridge.is_vanilla(&external));

        let deck = Deckstring.decode(&external).unwrap();
        assert_eq!(deck.heroes, vec![637]);
        assert_eq!(deck.cards, vec![(101, 1), (100, 2)]);

        let code = bridge.from_vanilla(&codec, &external).unwrap();
        assert_eq!(code, "Mage /1:1,2/ 2,1");
    }

    #[test]
    fn test_ambiguity() {
        let (registry, catalogue) = (registry(), catalogue());
        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let bridge = VanillaBridge::new(&catalogue);

        let err = bridge
            .to_vanilla(&codec, "Mage /1/ 2", false, &RejectAmbiguous)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AmbiguousCard);
        assert_eq!(err.context.card_name.as_deref(), Some("Wolf"));

        let out_of_range = |_: &str, _: &[&VanillaCard]| Some(7usize);
        let err = bridge.to_vanilla(&codec, "Mage /1/ 2", false, &out_of_range).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AmbiguousCard);

        let last = |_: &str, cards: &[&VanillaCard]| Some(cards.len() - 1);
        let external = bridge.to_vanilla(&codec, "Mage /1/ 2", false, &last).unwrap();
        assert_eq!(Deckstring.decode(&external).unwrap().cards, vec![(102, 1)]);
    }

    #[test]
    fn test_to_vanilla_errors() {
        let (registry, catalogue) = (registry(), catalogue());
        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let bridge = VanillaBridge::new(&catalogue);

        let err = bridge.to_vanilla(&codec, "Bard /1/ 1", false, &FirstMatch).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHero);

        let err = bridge.to_vanilla(&codec, "Mage /1/ z", false, &FirstMatch).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCardId);
    }

    #[test]
    fn test_from_vanilla_derives_runes() {
        let (registry, catalogue) = (registry(), catalogue());
        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let bridge = VanillaBridge::new(&catalogue);

        let deck = VanillaDeck {
            heroes: vec![78065],
            cards: vec![(103, 1), (104, 2)],
            ..VanillaDeck::default()
        };
        let external = Deckstring.encode(&deck).unwrap();
        let code = bridge.from_vanilla(&codec, &external).unwrap();
        assert_eq!(code, "Death Knight [FUU] /1:1,2/ 3,4");

        let deck = VanillaDeck {
            heroes: vec![78065],
            cards: vec![(100, 2)],
            ..VanillaDeck::default()
        };
        let external = Deckstring.encode(&deck).unwrap();
        let code = bridge.from_vanilla(&codec, &external).unwrap();
        assert_eq!(code, "Death Knight [3B] /2/ 1");
    }

    #[test]
    fn test_from_vanilla_missing_card() {
        let (registry, catalogue) = (registry(), catalogue());
        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let bridge = VanillaBridge::new(&catalogue);

        let deck = VanillaDeck {
            heroes: vec![637],
            cards: vec![(105, 1), (999, 1), (100, 1)],
            ..VanillaDeck::default()
        };
        let err = bridge
            .from_vanilla(&codec, &Deckstring.encode(&deck).unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCardId);
        assert_eq!(err.context.card_name.as_deref(), Some("Yeti"));
        assert_eq!(err.context.card_id, Some(105));
    }

    #[test]
    fn test_from_vanilla_hero() {
        let (registry, catalogue) = (registry(), catalogue());
        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let bridge = VanillaBridge::new(&catalogue);

        // Not in the catalogue, resolved through the default hero table.
        let deck = VanillaDeck {
            heroes: vec![7],
            cards: vec![(100, 1)],
            ..VanillaDeck::default()
        };
        let code = bridge.from_vanilla(&codec, &Deckstring.encode(&deck).unwrap()).unwrap();
        assert_eq!(code, "Warrior /1/ 1");

        let deck = VanillaDeck {
            heroes: vec![5],
            cards: vec![(100, 1)],
            ..VanillaDeck::default()
        };
        let err = bridge
            .from_vanilla(&codec, &Deckstring.encode(&deck).unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHero);
        assert_eq!(err.context.hero_class.as_deref(), Some("5"));

        let err = bridge.from_vanilla(&codec, "Mage /1/ 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedCode);
    }

    #[test]
    fn test_from_vanilla_empty_deck() {
        let (registry, catalogue) = (registry(), catalogue());
        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let bridge = VanillaBridge::new(&catalogue);

        let deck = VanillaDeck {
            heroes: vec![637],
            ..VanillaDeck::default()
        };
        let err = bridge
            .from_vanilla(&codec, &Deckstring.encode(&deck).unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyDeck);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_vanilla_merges_shared_names() {
        let (registry, catalogue) = (registry(), catalogue());
        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let bridge = VanillaBridge::new(&catalogue);

        // 101 and 102 are both "Wolf".
        let deck = VanillaDeck {
            heroes: vec![637],
            cards: vec![(101, 1), (100, 1), (102, 1)],
            ..VanillaDeck::default()
        };
        let code = bridge.from_vanilla(&codec, &Deckstring.encode(&deck).unwrap()).unwrap();
        assert_eq!(code, "Mage /1:1,2/ 1,2");
    }

    #[test]
    fn test_from_vanilla_configured_hero_class() {
        let registry = registry();
        let catalogue = VanillaCatalogue::new(vec![
            VanillaCard::new(900, "HERO_BARD", "Bard Hero").with_class("BARD"),
            VanillaCard::new(100, "CORE_1", "Sheep"),
        ]);
        let bridge = VanillaBridge::new(&catalogue);
        let deck = VanillaDeck {
            heroes: vec![900],
            cards: vec![(100, 2)],
            ..VanillaDeck::default()
        };
        let external = Deckstring.encode(&deck).unwrap();

        let rules = DeckRules::default();
        let codec = DeckCodec::new(&registry, &rules);
        let err = bridge.from_vanilla(&codec, &external).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHero);

        let mut classes = DeckRules::default().hero_classes;
        classes.push("Bard".into());
        let rules = DeckRules::default().with_hero_classes(classes);
        let codec = DeckCodec::new(&registry, &rules);
        assert_eq!(bridge.from_vanilla(&codec, &external).unwrap(), "Bard /2/ 1");
    }

    #[test]
    fn test_derive_runes() {
        let card = |runes: &str| {
            CardDefinition::new(CardId::new(1), "X").with_runes(Runes::parse(runes).unwrap())
        };
        let fallback = Runes::parse("BBB").unwrap();

        let cards = [card("U"), card("BB")];
        assert_eq!(derive_runes(cards.iter(), &fallback).to_string(), "BUB");

        let cards = [card("F")];
        assert_eq!(derive_runes(cards.iter(), &fallback).to_string(), "FFF");

        let cards = [card("UUU"), card("FF"), card("B")];
        assert_eq!(derive_runes(cards.iter(), &fallback).to_string(), "BFU");

        let none: [CardDefinition; 0] = [];
        assert_eq!(derive_runes(none.iter(), &fallback).to_string(), "BBB");
    }
}
