//! CharacterAttributes - the raw, player-edited input to derivation
//!
//! Every field carries a default so that a partially filled record is
//! always usable. Defaults are applied here, once, instead of being
//! re-checked inside each calculator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Ability, CharacterClass};

/// Score assumed for an ability the host did not supply.
pub const DEFAULT_ABILITY_VALUE: i32 = 10;

/// A single ability score, with the percentile refinement used for
/// strength 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScore {
    #[serde(default = "default_ability_value")]
    pub value: i32,
    /// Exceptional strength percentile (only meaningful for strength 18)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceptional: Option<i32>,
}

fn default_ability_value() -> i32 {
    DEFAULT_ABILITY_VALUE
}

impl Default for AbilityScore {
    fn default() -> Self {
        Self::new(DEFAULT_ABILITY_VALUE)
    }
}

impl AbilityScore {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            exceptional: None,
        }
    }

    pub fn with_exceptional(self, exceptional: i32) -> Self {
        Self {
            exceptional: Some(exceptional),
            ..self
        }
    }
}

/// The six ability scores, keyed by ability.
///
/// Missing entries read back as a score of 10.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores {
    scores: BTreeMap<Ability, AbilityScore>,
}

impl AbilityScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the score for an ability, defaulting to 10.
    pub fn get(&self, ability: Ability) -> AbilityScore {
        self.scores.get(&ability).copied().unwrap_or_default()
    }

    pub fn set(&mut self, ability: Ability, score: AbilityScore) {
        self.scores.insert(ability, score);
    }

    pub fn with(mut self, ability: Ability, score: AbilityScore) -> Self {
        self.set(ability, score);
        self
    }
}

impl FromIterator<(Ability, AbilityScore)> for AbilityScores {
    fn from_iter<T: IntoIterator<Item = (Ability, AbilityScore)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Character level. Always at least 1.
///
/// Out-of-range input (zero, negative) is clamped on construction, so the
/// progression tables never see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Level(i32);

impl Level {
    pub const MIN: Level = Level(1);

    pub fn new(level: i32) -> Self {
        Self(level.max(1))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i32> for Level {
    fn from(level: i32) -> Self {
        Self::new(level)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// Class and level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetails {
    #[serde(default)]
    pub class: CharacterClass,
    #[serde(default)]
    pub level: Level,
}

impl CharacterDetails {
    pub fn new(class: CharacterClass, level: impl Into<Level>) -> Self {
        Self {
            class,
            level: level.into(),
        }
    }
}

/// One armor entry as seen by the armor class calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorPiece {
    pub armor_class: i32,
    #[serde(default)]
    pub equipped: bool,
}

impl ArmorPiece {
    pub fn equipped(armor_class: i32) -> Self {
        Self {
            armor_class,
            equipped: true,
        }
    }

    pub fn carried(armor_class: i32) -> Self {
        Self {
            armor_class,
            equipped: false,
        }
    }
}

/// Raw character attributes supplied by the host on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAttributes {
    #[serde(default)]
    pub abilities: AbilityScores,
    #[serde(default)]
    pub details: CharacterDetails,
    #[serde(default)]
    pub equipped_armor: Vec<ArmorPiece>,
    /// Hit points carried over from the previous recalculation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_hit_points: Option<i32>,
    /// Maximum hit points from the previous recalculation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hit_points: Option<i32>,
}

impl CharacterAttributes {
    pub fn new(details: CharacterDetails) -> Self {
        Self {
            details,
            ..Self::default()
        }
    }

    pub fn with_ability(mut self, ability: Ability, score: AbilityScore) -> Self {
        self.abilities.set(ability, score);
        self
    }

    pub fn with_armor(mut self, armor: ArmorPiece) -> Self {
        self.equipped_armor.push(armor);
        self
    }

    pub fn with_hit_points(mut self, current: Option<i32>, max: Option<i32>) -> Self {
        self.current_hit_points = current;
        self.max_hit_points = max;
        self
    }
}
