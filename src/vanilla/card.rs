//! External catalogue entries.
//!
//! Field names follow the external card database's JSON (`dbfId`,
//! `cardClass`, `howToEarn`, ...). Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// One card from the external card database.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VanillaCard {
    /// String identifier, e.g. `"CORE_EX1_012"`.
    pub id: String,
    /// Numeric identifier used by deck strings.
    pub dbf_id: u32,
    pub name: String,
    /// Upper-case class, e.g. `"DEATHKNIGHT"`.
    pub card_class: Option<String>,
    pub collectible: bool,
    pub set: Option<String>,
    pub rarity: Option<String>,
    pub mechanics: Vec<String>,
    pub how_to_earn: Option<String>,
    pub mercenaries_role: Option<String>,
    pub battlegrounds_buddy_dbf_id: Option<u32>,
    pub battlegrounds_darkmoon_prize_turn: Option<u32>,
    pub battlegrounds_hero: bool,
    pub battlegrounds_normal_dbf_id: Option<u32>,
    pub battlegrounds_premium_dbf_id: Option<u32>,
    pub battlegrounds_skin_parent_id: Option<u32>,
    pub is_battlegrounds_buddy: bool,
}

impl VanillaCard {
    /// Create a collectible card in the `CORE` set.
    pub fn new(dbf_id: u32, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dbf_id,
            name: name.into(),
            collectible: true,
            set: Some("CORE".to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.card_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }

    #[must_use]
    pub fn with_how_to_earn(mut self, how: impl Into<String>) -> Self {
        self.how_to_earn = Some(how.into());
        self
    }

    #[must_use]
    pub fn uncollectible(mut self) -> Self {
        self.collectible = false;
        self
    }
}
