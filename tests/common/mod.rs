//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ccg_deckcode::cards::{CardDefinition, CardId, CardRegistry, Rarity};
use ccg_deckcode::runes::Runes;
use ccg_deckcode::vanilla::{VanillaCard, VanillaCatalogue};

/// The sample Death Knight deck: 8 single copies then 11 doubles.
pub const SAMPLE_CODE: &str =
    "Death Knight [3B] /1:8,2/ 5o,66,5f,3b,3c,3e,5x,70,52,55,56,6y,6z,59,5a,2,5v,5g,3o";

/// Card ids of `SAMPLE_CODE`, in code order.
pub const SAMPLE_IDS: [u32; 19] = [
    204, 222, 195, 119, 120, 122, 213, 252, 182, 185, 186, 250, 251, 189, 190, 2, 211, 196, 132,
];

pub const SAMPLE_SINGLES: usize = 8;

/// Offset between internal ids and the external `dbf_id` of the same card.
pub const EXTERNAL_OFFSET: u32 = 100_000;

pub fn card_name(id: u32) -> String {
    format!("Card {id}")
}

/// One definition per sample id.
///
/// Even ids are Death Knight cards needing a Blood rune, odd ids are
/// neutral. The first two singles are legendary.
pub fn sample_card(index: usize, id: u32) -> CardDefinition {
    let mut card = CardDefinition::new(CardId::new(id), card_name(id)).with_cost(id % 10);
    if id % 2 == 0 {
        card = card
            .with_class("Death Knight")
            .with_runes(Runes::parse("B").unwrap());
    }
    if index < 2 {
        card = card.with_rarity(Rarity::Legendary);
    } else {
        card = card.with_rarity(Rarity::Common);
    }
    card
}

pub fn sample_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for (index, &id) in SAMPLE_IDS.iter().enumerate() {
        registry.register(sample_card(index, id));
    }

    registry.register(CardDefinition::new(CardId::new(500), "Blood Boil").with_class("Mage"));
    registry.register(CardDefinition::new(CardId::new(501), "Token").uncollectible());
    registry.register(
        CardDefinition::new(CardId::new(502), "Frost Strike")
            .with_class("Death Knight")
            .with_runes(Runes::parse("FF").unwrap()),
    );
    registry
}

/// External catalogue holding a counterpart for every sample card.
pub fn sample_catalogue() -> VanillaCatalogue {
    let mut cards: Vec<VanillaCard> = SAMPLE_IDS
        .iter()
        .map(|&id| {
            VanillaCard::new(id + EXTERNAL_OFFSET, format!("CORE_{id}"), card_name(id))
                .with_class(if id % 2 == 0 { "DEATHKNIGHT" } else { "NEUTRAL" })
        })
        .collect();

    cards.push(VanillaCard::new(78065, "HERO_11", "The Lich King").with_class("DEATHKNIGHT").with_set("HERO_SKINS"));
    cards.push(VanillaCard::new(56550, "HERO_10", "Illidan Stormrage").with_class("DEMONHUNTER").with_set("HERO_SKINS"));
    cards.push(VanillaCard::new(
        EXTERNAL_OFFSET + 502,
        "RLK_502",
        "Frost Strike",
    ));
    cards.push(VanillaCard::new(EXTERNAL_OFFSET + 503, "LEGACY_502", "Frost Strike"));
    cards.push(
        VanillaCard::new(EXTERNAL_OFFSET + 504, "BG_502", "Frost Strike"),
    );

    VanillaCatalogue::new(cards)
}

/// Install a test subscriber once so `RUST_LOG` shows codec logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
