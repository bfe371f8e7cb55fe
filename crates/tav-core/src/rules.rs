//! The fixed rule set every character is checked against.
//!
//! All tables are `const` slices. Lookups are case-insensitive and hand
//! back the canonical spelling so stored records stay consistent.

use crate::ability::Ability;

/// Origins a character can start from.
pub const ORIGINS: &[&str] = &[
    "Custom",
    "Astarion",
    "Gale",
    "Karlach",
    "Lae'zel",
    "Shadowheart",
    "Wyll",
    "The Dark Urge",
];

/// Playable races.
pub const RACES: &[&str] = &[
    "Human",
    "Elf",
    "Drow",
    "Half-Elf",
    "Half-Orc",
    "Halfling",
    "Dwarf",
    "Gnome",
    "Tiefling",
    "Githyanki",
    "Dragonborn",
];

/// Playable classes.
pub const CLASSES: &[&str] = &[
    "Barbarian",
    "Bard",
    "Cleric",
    "Druid",
    "Fighter",
    "Monk",
    "Paladin",
    "Ranger",
    "Rogue",
    "Sorcerer",
    "Warlock",
    "Wizard",
];

/// Subclasses, keyed by class.
pub const SUBCLASSES: &[(&str, &[&str])] = &[
    ("Barbarian", &["Berserker", "Wildheart", "Wild Magic", "Path of Giants"]),
    (
        "Bard",
        &["College of Lore", "College of Valour", "College of Swords", "College of Glamour"],
    ),
    (
        "Cleric",
        &[
            "Life Domain",
            "Light Domain",
            "Trickery Domain",
            "War Domain",
            "Nature Domain",
            "Tempest Domain",
        ],
    ),
    ("Druid", &["Circle of the Land", "Circle of the Moon", "Circle of Spores"]),
    ("Fighter", &["Battle Master", "Champion", "Eldritch Knight"]),
    (
        "Monk",
        &["Way of the Open Hand", "Way of Shadow", "Way of the Four Elements", "Drunken Master"],
    ),
    (
        "Paladin",
        &["Oath of Devotion", "Oath of the Ancients", "Oath of Vengeance", "Oathbreaker"],
    ),
    ("Ranger", &["Hunter", "Beast Master", "Gloom Stalker"]),
    ("Rogue", &["Thief", "Assassin", "Arcane Trickster"]),
    ("Sorcerer", &["Draconic Bloodline", "Wild Magic", "Storm Sorcery"]),
    ("Warlock", &["The Fiend", "The Great Old One", "The Archfey"]),
    (
        "Wizard",
        &[
            "Abjuration",
            "Conjuration",
            "Divination",
            "Enchantment",
            "Evocation",
            "Illusion",
            "Necromancy",
            "Transmutation",
        ],
    ),
];

/// Character backgrounds.
pub const BACKGROUNDS: &[&str] = &[
    "Acolyte",
    "Charlatan",
    "Criminal",
    "Entertainer",
    "Folk Hero",
    "Guild Artisan",
    "Haunted One",
    "Noble",
    "Outlander",
    "Sage",
    "Soldier",
    "Urchin",
];

/// Skills with the ability each one is rolled against.
pub const SKILLS: &[(&str, Ability)] = &[
    ("Athletics", Ability::Str),
    ("Acrobatics", Ability::Dex),
    ("Sleight of Hand", Ability::Dex),
    ("Stealth", Ability::Dex),
    ("Arcana", Ability::Int),
    ("History", Ability::Int),
    ("Investigation", Ability::Int),
    ("Nature", Ability::Int),
    ("Religion", Ability::Int),
    ("Animal Handling", Ability::Wis),
    ("Insight", Ability::Wis),
    ("Medicine", Ability::Wis),
    ("Perception", Ability::Wis),
    ("Survival", Ability::Wis),
    ("Deception", Ability::Cha),
    ("Intimidation", Ability::Cha),
    ("Performance", Ability::Cha),
    ("Persuasion", Ability::Cha),
];

/// Feats.
pub const FEATS: &[&str] = &[
    "Ability Improvement",
    "Actor",
    "Alert",
    "Athlete",
    "Charger",
    "Crossbow Expert",
    "Defensive Duelist",
    "Dual Wielder",
    "Dungeon Delver",
    "Durable",
    "Elemental Adept",
    "Great Weapon Master",
    "Heavily Armored",
    "Heavy Armor Master",
    "Inspiring Leader",
    "Keen Mind",
    "Lightly Armored",
    "Linguist",
    "Lucky",
    "Mage Slayer",
    "Magic Initiate",
    "Martial Adept",
    "Medium Armor Master",
    "Mobile",
    "Moderately Armored",
    "Mounted Combatant",
    "Observant",
    "Polearm Master",
    "Resilient",
    "Ritual Caster",
    "Savage Attacker",
    "Sentinel",
    "Sharpshooter",
    "Shield Master",
    "Skilled",
    "Spell Sniper",
    "Tavern Brawler",
    "Tough",
    "War Caster",
    "Weapon Master",
];

fn canonical(table: &[&'static str], name: &str) -> Option<&'static str> {
    let needle = name.trim();
    table.iter().copied().find(|entry| entry.eq_ignore_ascii_case(needle))
}

/// Canonical spelling of an origin.
pub fn canonical_origin(name: &str) -> Option<&'static str> {
    canonical(ORIGINS, name)
}

/// Canonical spelling of a race.
pub fn canonical_race(name: &str) -> Option<&'static str> {
    canonical(RACES, name)
}

/// Canonical spelling of a class.
pub fn canonical_class(name: &str) -> Option<&'static str> {
    canonical(CLASSES, name)
}

/// Canonical spelling of a subclass of `class`.
pub fn canonical_subclass(class: &str, name: &str) -> Option<&'static str> {
    canonical(subclasses_of(class), name)
}

/// Canonical spelling of a background.
pub fn canonical_background(name: &str) -> Option<&'static str> {
    canonical(BACKGROUNDS, name)
}

/// Canonical spelling of a skill.
pub fn canonical_skill(name: &str) -> Option<&'static str> {
    let needle = name.trim();
    SKILLS
        .iter()
        .map(|(skill, _)| *skill)
        .find(|skill| skill.eq_ignore_ascii_case(needle))
}

/// Canonical spelling of a feat.
pub fn canonical_feat(name: &str) -> Option<&'static str> {
    canonical(FEATS, name)
}

/// Subclasses available to `class`. Empty for unknown classes.
pub fn subclasses_of(class: &str) -> &'static [&'static str] {
    SUBCLASSES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(class.trim()))
        .map(|(_, subs)| *subs)
        .unwrap_or(&[])
}

/// Skill names in table order.
pub fn skill_names() -> Vec<&'static str> {
    SKILLS.iter().map(|(skill, _)| *skill).collect()
}

/// Skills governed by `ability`. Constitution has none.
pub fn skills_for(ability: Ability) -> Vec<&'static str> {
    SKILLS
        .iter()
        .filter(|(_, a)| *a == ability)
        .map(|(skill, _)| *skill)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(ORIGINS.len(), 8);
        assert_eq!(RACES.len(), 11);
        assert_eq!(CLASSES.len(), 12);
        assert_eq!(BACKGROUNDS.len(), 12);
        assert_eq!(SKILLS.len(), 18);
        assert_eq!(FEATS.len(), 40);
    }

    #[test]
    fn every_class_has_subclasses() {
        for class in CLASSES {
            assert!(!subclasses_of(class).is_empty(), "{class} has no subclasses");
        }
        assert_eq!(SUBCLASSES.len(), CLASSES.len());
    }

    #[test]
    fn lookups_are_case_insensitive() {
        assert_eq!(canonical_race("half-elf"), Some("Half-Elf"));
        assert_eq!(canonical_class(" WIZARD "), Some("Wizard"));
        assert_eq!(canonical_origin("lae'zel"), Some("Lae'zel"));
        assert_eq!(canonical_skill("sleight of hand"), Some("Sleight of Hand"));
        assert_eq!(canonical_feat("war caster"), Some("War Caster"));
        assert_eq!(canonical_background("folk hero"), Some("Folk Hero"));
        assert_eq!(canonical_race("Orc"), None);
    }

    #[test]
    fn subclass_must_belong_to_class() {
        assert_eq!(canonical_subclass("wizard", "evocation"), Some("Evocation"));
        assert_eq!(canonical_subclass("Fighter", "Evocation"), None);
        assert_eq!(canonical_subclass("Sorcerer", "Wild Magic"), Some("Wild Magic"));
        assert_eq!(canonical_subclass("Barbarian", "Wild Magic"), Some("Wild Magic"));
        assert!(subclasses_of("Artificer").is_empty());
    }

    #[test]
    fn skills_by_ability() {
        assert_eq!(skills_for(Ability::Str), vec!["Athletics"]);
        assert!(skills_for(Ability::Con).is_empty());
        assert_eq!(skills_for(Ability::Int).len(), 5);
        assert_eq!(skill_names().len(), SKILLS.len());
    }
}
