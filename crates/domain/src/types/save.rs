//! Saving throw categories.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Saving throw category. A save succeeds when the d20 roll is less than
/// or equal to the category's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveCategory {
    /// Paralyzation, poison or death magic
    Paralyze,
    Poison,
    /// Breath weapon
    Breath,
    /// Rod, staff or wand
    Magical,
    Spell,
}

impl SaveCategory {
    /// All categories, in the column order of the progression tables.
    pub const ALL: [SaveCategory; 5] = [
        SaveCategory::Paralyze,
        SaveCategory::Poison,
        SaveCategory::Breath,
        SaveCategory::Magical,
        SaveCategory::Spell,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SaveCategory::Paralyze => "paralyze",
            SaveCategory::Poison => "poison",
            SaveCategory::Breath => "breath",
            SaveCategory::Magical => "magical",
            SaveCategory::Spell => "spell",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SaveCategory::Paralyze => "Paralyze",
            SaveCategory::Poison => "Poison",
            SaveCategory::Breath => "Breath",
            SaveCategory::Magical => "Magical",
            SaveCategory::Spell => "Spell",
        }
    }

    /// Position of this category in a progression table row.
    pub(crate) fn index(&self) -> usize {
        match self {
            SaveCategory::Paralyze => 0,
            SaveCategory::Poison => 1,
            SaveCategory::Breath => 2,
            SaveCategory::Magical => 3,
            SaveCategory::Spell => 4,
        }
    }
}

impl fmt::Display for SaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for SaveCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paralyze" | "paralyzation" => Ok(SaveCategory::Paralyze),
            "poison" => Ok(SaveCategory::Poison),
            "breath" => Ok(SaveCategory::Breath),
            "magical" | "rod" | "staff" | "wand" => Ok(SaveCategory::Magical),
            "spell" => Ok(SaveCategory::Spell),
            other => Err(DomainError::parse(format!("unknown save category '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_order() {
        for (i, category) in SaveCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn parses_keys_and_rejects_unknown() {
        assert_eq!("Breath".parse::<SaveCategory>(), Ok(SaveCategory::Breath));
        assert_eq!("wand".parse::<SaveCategory>(), Ok(SaveCategory::Magical));
        assert!("petrify".parse::<SaveCategory>().is_err());
    }
}
