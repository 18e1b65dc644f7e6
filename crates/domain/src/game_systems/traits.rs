//! Core traits for game system implementations.

use std::collections::BTreeMap;

use crate::entities::{AbilityScores, ArmorPiece, CharacterAttributes, DerivedAttributes, HitPoints, Level};
use crate::types::{Ability, CharacterClass, SaveCategory};

/// A tabletop ruleset the host can select.
pub trait GameSystem: Send + Sync {
    /// Unique identifier (e.g., "add2e").
    fn system_id(&self) -> &str;

    /// Human-readable name.
    fn display_name(&self) -> &str;

    /// The calculation engine deriving statistics for this system.
    fn calculation_engine(&self) -> &dyn CalculationEngine;

    /// Ability names in sheet order.
    fn stat_names(&self) -> &[&str];
}

/// Derives statistics from raw attributes.
///
/// Every method is total: unrecognised or missing input falls back to a
/// documented default and no method returns an error.
pub trait CalculationEngine: Send + Sync {
    /// Modifier for every ability; missing abilities count as 10.
    fn ability_modifiers(&self, abilities: &AbilityScores) -> BTreeMap<Ability, i32>;

    /// Number needed on a d20 to hit armor class 0.
    fn thac0(&self, class: CharacterClass, level: Level, str_modifier: i32) -> i32;

    /// Roll-under target for every save category.
    fn saving_throws(&self, class: CharacterClass, level: Level) -> BTreeMap<SaveCategory, i32>;

    /// Armor class from the best equipped armor and the dexterity modifier.
    fn armor_class(&self, equipped_armor: &[ArmorPiece], dex_modifier: i32) -> i32;

    /// Maximum hit points, carrying over current hit points where possible.
    fn hit_points(
        &self,
        con_modifier: i32,
        level: Level,
        prior_current: Option<i32>,
        prior_max: Option<i32>,
    ) -> HitPoints;

    /// Run every calculation for a character record.
    fn recompute(&self, attributes: &CharacterAttributes) -> DerivedAttributes {
        let ability_modifiers = self.ability_modifiers(&attributes.abilities);
        let modifier = |ability: Ability| ability_modifiers.get(&ability).copied().unwrap_or(0);

        let details = attributes.details;
        let thac0 = self.thac0(details.class, details.level, modifier(Ability::Str));
        let saving_throws = self.saving_throws(details.class, details.level);
        let armor_class = self.armor_class(&attributes.equipped_armor, modifier(Ability::Dex));
        let hit_points = self.hit_points(
            modifier(Ability::Con),
            details.level,
            attributes.current_hit_points,
            attributes.max_hit_points,
        );

        DerivedAttributes {
            ability_modifiers,
            thac0,
            saving_throws,
            armor_class,
            hit_points,
        }
    }
}
