//! External card catalogue and its noise filter.
//!
//! The external database holds many entries that share a display name
//! with a real collectible card: adventure bosses, battlegrounds copies,
//! placeholders. `filter` strips those before name matching.

use rustc_hash::FxHashMap;

use super::card::VanillaCard;

/// Id prefixes of entries that never belong in a constructed deck.
const EXCLUDED_ID_PREFIXES: [&str; 14] = [
    "Prologue",
    "PVPDR",
    "DRGA_BOSS",
    "BG",
    "TB",
    "LOOTA_",
    "DALA_",
    "GILA_",
    "BOTA_",
    "TRLA_",
    "ULDA_",
    "BTA_BOSS_",
    "Story_",
    "BOM_",
];

/// Sets (compared lower-case) that never hold constructed cards.
const EXCLUDED_SETS: [&str; 4] = ["battlegrounds", "placeholder", "vanilla", "credits"];

/// Read-only external card catalogue.
#[derive(Clone, Debug, Default)]
pub struct VanillaCatalogue {
    cards: Vec<VanillaCard>,
    by_dbf: FxHashMap<u32, usize>,
}

impl VanillaCatalogue {
    /// Build a catalogue. Later duplicates of a `dbf_id` are ignored.
    #[must_use]
    pub fn new(cards: Vec<VanillaCard>) -> Self {
        let mut by_dbf = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            by_dbf.entry(card.dbf_id).or_insert(i);
        }
        Self { cards, by_dbf }
    }

    /// Build a catalogue from the external database's JSON array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Get a card by its numeric id.
    #[must_use]
    pub fn get(&self, dbf_id: u32) -> Option<&VanillaCard> {
        self.by_dbf.get(&dbf_id).map(|&i| &self.cards[i])
    }

    /// All entries whose name matches `name`, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<&VanillaCard> {
        self.cards
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(name))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VanillaCard> {
        self.cards.iter()
    }
}

/// Options for [`filter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    /// Drop uncollectible entries.
    pub uncollectible: bool,
    /// If any entry has a `how_to_earn` field, keep only those. This can
    /// pick the wrong card, so it is opt-in.
    pub dangerous: bool,
    /// Keep `HERO_SKINS` entries whose id looks like `HERO_01`.
    pub keep_hero_skins: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            uncollectible: true,
            dangerous: false,
            keep_hero_skins: false,
        }
    }
}

/// Drop entries that cannot be the card a deck means.
pub fn filter<'c, I>(cards: I, options: &FilterOptions) -> Vec<&'c VanillaCard>
where
    I: IntoIterator<Item = &'c VanillaCard>,
{
    let kept: Vec<&VanillaCard> = cards
        .into_iter()
        .filter(|c| !options.uncollectible || c.collectible)
        .filter(|c| !EXCLUDED_ID_PREFIXES.iter().any(|p| c.id.starts_with(p)))
        .filter(|c| !c.mechanics.iter().any(|m| m == "DUNGEON_PASSIVE_BUFF"))
        .filter(|c| match &c.set {
            Some(set) => {
                !EXCLUDED_SETS.contains(&set.to_lowercase().as_str()) && !set.contains("PLACEHOLDER_")
            }
            None => false,
        })
        .filter(|c| c.mercenaries_role.is_none())
        .filter(|c| !is_battlegrounds(c))
        .filter(|c| match &c.set {
            Some(set) if set.contains("HERO_SKINS") => {
                options.keep_hero_skins && has_hero_tag(&c.id)
            }
            _ => true,
        })
        .collect();

    if options.dangerous {
        let earnable: Vec<&VanillaCard> = kept
            .iter()
            .copied()
            .filter(|c| c.how_to_earn.is_some())
            .collect();
        if !earnable.is_empty() {
            return earnable;
        }
    }

    kept
}

fn is_battlegrounds(card: &VanillaCard) -> bool {
    card.battlegrounds_buddy_dbf_id.is_some()
        || card.battlegrounds_darkmoon_prize_turn.is_some()
        || card.battlegrounds_hero
        || card.battlegrounds_normal_dbf_id.is_some()
        || card.battlegrounds_premium_dbf_id.is_some()
        || card.battlegrounds_skin_parent_id.is_some()
        || card.is_battlegrounds_buddy
}

/// Check for `HERO_` followed by two digits anywhere in `id`.
fn has_hero_tag(id: &str) -> bool {
    id.match_indices("HERO_").any(|(i, tag)| {
        let digits = id.as_bytes().get(i + tag.len()..i + tag.len() + 2);
        matches!(digits, Some(d) if d.iter().all(u8::is_ascii_digit))
    })
}
