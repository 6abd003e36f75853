//! Hero class to external hero card mapping.

/// Default hero card for each class.
pub const HERO_IDS: [(&str, u32); 11] = [
    ("Warrior", 7),
    ("Hunter", 31),
    ("Druid", 274),
    ("Mage", 637),
    ("Paladin", 671),
    ("Priest", 813),
    ("Warlock", 893),
    ("Rogue", 930),
    ("Shaman", 1066),
    ("Demon Hunter", 56550),
    ("Death Knight", 78065),
];

/// Hero card id for a class name.
#[must_use]
pub fn hero_dbf_id(class: &str) -> Option<u32> {
    HERO_IDS
        .iter()
        .find(|(name, _)| *name == class)
        .map(|&(_, id)| id)
}

/// Class name for one of the default hero cards.
#[must_use]
pub fn class_for_hero_id(dbf_id: u32) -> Option<&'static str> {
    HERO_IDS
        .iter()
        .find(|&&(_, id)| id == dbf_id)
        .map(|&(name, _)| name)
}

/// Turn an external class tag (`"DEATHKNIGHT"`) into a hero class name
/// (`"Death Knight"`).
#[must_use]
pub fn normalize_class_name(raw: &str) -> String {
    let mut chars = raw.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    };

    match capitalized.as_str() {
        "Deathknight" => "Death Knight".to_string(),
        "Demonhunter" => "Demon Hunter".to_string(),
        _ => capitalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_ways() {
        assert_eq!(hero_dbf_id("Mage"), Some(637));
        assert_eq!(hero_dbf_id("Death Knight"), Some(78065));
        assert_eq!(hero_dbf_id("mage"), None);
        assert_eq!(hero_dbf_id("Bard"), None);

        assert_eq!(class_for_hero_id(56550), Some("Demon Hunter"));
        assert_eq!(class_for_hero_id(1), None);

        for (name, id) in HERO_IDS {
            assert_eq!(class_for_hero_id(hero_dbf_id(name).unwrap()), Some(name));
            assert_eq!(hero_dbf_id(class_for_hero_id(id).unwrap()), Some(id));
        }
    }

    #[test]
    fn test_normalize_class_name() {
        assert_eq!(normalize_class_name("MAGE"), "Mage");
        assert_eq!(normalize_class_name("DEATHKNIGHT"), "Death Knight");
        assert_eq!(normalize_class_name("DEMONHUNTER"), "Demon Hunter");
        assert_eq!(normalize_class_name("neutral"), "Neutral");
        assert_eq!(normalize_class_name(""), "");
    }
}
