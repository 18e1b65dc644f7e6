//! DerivedAttributes - everything the calculators write back to the host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Ability, SaveCategory};

/// Maximum and current hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    /// Always at least 1
    pub max: i32,
    /// Never above `max`
    pub current: i32,
}

/// Statistics derived from a [`CharacterAttributes`](super::CharacterAttributes).
///
/// Every field is always present. Recomputing from the same input yields
/// an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAttributes {
    pub ability_modifiers: BTreeMap<Ability, i32>,
    pub thac0: i32,
    pub saving_throws: BTreeMap<SaveCategory, i32>,
    pub armor_class: i32,
    pub hit_points: HitPoints,
}

impl DerivedAttributes {
    /// Modifier for an ability (0 if somehow absent).
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.ability_modifiers.get(&ability).copied().unwrap_or(0)
    }

    /// Target number for a saving throw category.
    pub fn saving_throw(&self, category: SaveCategory) -> Option<i32> {
        self.saving_throws.get(&category).copied()
    }
}
