//! Character classes and the class groups that drive progression tables.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character class, matched case-insensitively from the sheet's free-text
/// class field.
///
/// Anything that is not a recognised class name becomes `Unknown`, which
/// gets flat, non-progressing combat values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Fighter,
    Paladin,
    Ranger,
    Cleric,
    Druid,
    Monk,
    Thief,
    Bard,
    Assassin,
    Mage,
    Illusionist,
    /// Unrecognised class name (for forward compatibility)
    #[default]
    #[serde(other)]
    Unknown,
}

/// Progression bucket a class belongs to.
///
/// THAC0 and saving throw tables are keyed on the group, not the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassGroup {
    Warrior,
    Priest,
    Rogue,
    Wizard,
    /// No progression; flat fallback values
    Unrecognized,
}

impl CharacterClass {
    /// Get all recognised classes for UI dropdowns (excludes Unknown)
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Fighter,
            CharacterClass::Paladin,
            CharacterClass::Ranger,
            CharacterClass::Cleric,
            CharacterClass::Druid,
            CharacterClass::Monk,
            CharacterClass::Thief,
            CharacterClass::Bard,
            CharacterClass::Assassin,
            CharacterClass::Mage,
            CharacterClass::Illusionist,
        ]
    }

    pub fn group(&self) -> ClassGroup {
        match self {
            CharacterClass::Fighter | CharacterClass::Paladin | CharacterClass::Ranger => {
                ClassGroup::Warrior
            }
            CharacterClass::Cleric | CharacterClass::Druid | CharacterClass::Monk => {
                ClassGroup::Priest
            }
            CharacterClass::Thief | CharacterClass::Bard | CharacterClass::Assassin => {
                ClassGroup::Rogue
            }
            CharacterClass::Mage | CharacterClass::Illusionist => ClassGroup::Wizard,
            CharacterClass::Unknown => ClassGroup::Unrecognized,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterClass::Fighter => "Fighter",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Ranger => "Ranger",
            CharacterClass::Cleric => "Cleric",
            CharacterClass::Druid => "Druid",
            CharacterClass::Monk => "Monk",
            CharacterClass::Thief => "Thief",
            CharacterClass::Bard => "Bard",
            CharacterClass::Assassin => "Assassin",
            CharacterClass::Mage => "Mage",
            CharacterClass::Illusionist => "Illusionist",
            CharacterClass::Unknown => "Unknown",
        }
    }

    /// Parse a free-text class name. Never fails; unrecognised names map to
    /// `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "fighter" => CharacterClass::Fighter,
            "paladin" => CharacterClass::Paladin,
            "ranger" => CharacterClass::Ranger,
            "cleric" => CharacterClass::Cleric,
            "druid" => CharacterClass::Druid,
            "monk" => CharacterClass::Monk,
            "thief" => CharacterClass::Thief,
            "bard" => CharacterClass::Bard,
            "assassin" => CharacterClass::Assassin,
            "mage" => CharacterClass::Mage,
            "illusionist" => CharacterClass::Illusionist,
            _ => CharacterClass::Unknown,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_are_case_insensitive() {
        assert_eq!(CharacterClass::from_name("Fighter"), CharacterClass::Fighter);
        assert_eq!(CharacterClass::from_name("  MAGE "), CharacterClass::Mage);
        assert_eq!(CharacterClass::from_name("tHiEf"), CharacterClass::Thief);
    }

    #[test]
    fn unrecognised_names_become_unknown() {
        assert_eq!(CharacterClass::from_name("barbarian"), CharacterClass::Unknown);
        assert_eq!(CharacterClass::from_name(""), CharacterClass::Unknown);
        assert_eq!(CharacterClass::Unknown.group(), ClassGroup::Unrecognized);
    }

    #[test]
    fn every_recognised_class_has_a_progression_group() {
        for class in CharacterClass::all() {
            assert_ne!(class.group(), ClassGroup::Unrecognized, "{class}");
        }
    }

    #[test]
    fn groups_follow_the_class_lists() {
        assert_eq!(CharacterClass::Ranger.group(), ClassGroup::Warrior);
        assert_eq!(CharacterClass::Monk.group(), ClassGroup::Priest);
        assert_eq!(CharacterClass::Assassin.group(), ClassGroup::Rogue);
        assert_eq!(CharacterClass::Illusionist.group(), ClassGroup::Wizard);
    }

    #[test]
    fn unknown_serialized_class_deserializes_to_unknown() {
        let class: CharacterClass =
            serde_json::from_str("\"psionicist\"").expect("deserialize class");
        assert_eq!(class, CharacterClass::Unknown);
    }
}
