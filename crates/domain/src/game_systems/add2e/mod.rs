//! AD&D 2nd Edition game system implementation.
//!
//! Implements the derived-statistic rules: ability modifiers, THAC0,
//! saving throws, armor class and hit points. Each rule lives in its own
//! module as plain functions; `Add2eSystem` wires them to the
//! [`CalculationEngine`] trait together with the active [`RulesConfig`].

pub mod abilities;
pub mod armor;
pub mod hit_points;
mod rolls;
pub mod saves;
pub mod thac0;

pub use rolls::{AbilityCheck, AttackRoll, SavingThrowRoll, WeaponAttack};

use std::collections::BTreeMap;

use super::traits::{CalculationEngine, GameSystem};
use crate::entities::{AbilityScores, ArmorPiece, HitPoints, Level};
use crate::types::{Ability, CharacterClass, SaveCategory};
use crate::value_objects::RulesConfig;

/// AD&D 2nd Edition game system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Add2eSystem {
    config: RulesConfig,
}

impl Add2eSystem {
    /// Create a system with the default rules configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl GameSystem for Add2eSystem {
    fn system_id(&self) -> &str {
        "add2e"
    }

    fn display_name(&self) -> &str {
        "AD&D 2nd Edition"
    }

    fn calculation_engine(&self) -> &dyn CalculationEngine {
        self
    }

    fn stat_names(&self) -> &[&str] {
        &["STR", "DEX", "CON", "INT", "WIS", "CHA"]
    }
}

impl CalculationEngine for Add2eSystem {
    fn ability_modifiers(&self, abilities: &AbilityScores) -> BTreeMap<Ability, i32> {
        abilities::compute_modifiers(abilities, self.config.use_exceptional_strength)
    }

    fn thac0(&self, class: CharacterClass, level: Level, str_modifier: i32) -> i32 {
        thac0::compute_thac0(class, level, str_modifier)
    }

    fn saving_throws(&self, class: CharacterClass, level: Level) -> BTreeMap<SaveCategory, i32> {
        saves::compute_saving_throws(class, level)
    }

    fn armor_class(&self, equipped_armor: &[ArmorPiece], dex_modifier: i32) -> i32 {
        armor::compute_armor_class(equipped_armor, dex_modifier)
    }

    fn hit_points(
        &self,
        con_modifier: i32,
        level: Level,
        prior_current: Option<i32>,
        prior_max: Option<i32>,
    ) -> HitPoints {
        hit_points::compute_hit_points(
            self.config.base_hit_points,
            con_modifier,
            level,
            prior_current,
            prior_max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AbilityScore, CharacterAttributes, CharacterDetails};

    fn fighter() -> CharacterAttributes {
        CharacterAttributes::new(CharacterDetails::new(CharacterClass::Fighter, 5))
            .with_ability(Ability::Str, AbilityScore::new(18).with_exceptional(63))
            .with_ability(Ability::Dex, AbilityScore::new(16))
            .with_ability(Ability::Con, AbilityScore::new(15))
            .with_armor(ArmorPiece::equipped(4))
            .with_armor(ArmorPiece::carried(2))
    }

    #[test]
    fn system_identity() {
        let system = Add2eSystem::new();
        assert_eq!(system.system_id(), "add2e");
        assert_eq!(system.display_name(), "AD&D 2nd Edition");
        assert_eq!(system.stat_names().len(), 6);
    }

    #[test]
    fn recompute_fighter() {
        let derived = Add2eSystem::new().recompute(&fighter());

        assert_eq!(derived.modifier(Ability::Str), 4);
        assert_eq!(derived.modifier(Ability::Dex), 2);
        assert_eq!(derived.modifier(Ability::Con), 1);
        assert_eq!(derived.modifier(Ability::Int), 0);
        // 21 - 5 = 16, minus strength 4
        assert_eq!(derived.thac0, 12);
        assert_eq!(derived.saving_throw(SaveCategory::Paralyze), Some(15));
        assert_eq!(derived.saving_throw(SaveCategory::Spell), Some(17));
        // best equipped 4, minus dex 2
        assert_eq!(derived.armor_class, 2);
        assert_eq!(derived.hit_points, HitPoints { max: 15, current: 15 });
    }

    #[test]
    fn recompute_is_idempotent() {
        let system = Add2eSystem::new();
        let attributes = fighter().with_hit_points(Some(9), Some(15));
        assert_eq!(system.recompute(&attributes), system.recompute(&attributes));
    }

    #[test]
    fn empty_record_gets_every_field() {
        let derived = Add2eSystem::new().recompute(&CharacterAttributes::default());
        assert_eq!(derived.ability_modifiers.len(), 6);
        assert_eq!(derived.thac0, 20);
        assert_eq!(derived.saving_throws.len(), 5);
        assert_eq!(derived.armor_class, 10);
        assert_eq!(derived.hit_points, HitPoints { max: 10, current: 10 });
    }

    #[test]
    fn config_changes_strength_and_hit_points() {
        let config = RulesConfig::default()
            .with_exceptional_strength(false)
            .with_base_hit_points(8);
        let derived = Add2eSystem::with_config(config).recompute(&fighter());
        assert_eq!(derived.modifier(Ability::Str), 3);
        assert_eq!(derived.thac0, 13);
        assert_eq!(derived.hit_points.max, 13);
    }

    #[test]
    fn usable_through_trait_objects() {
        let system: &dyn GameSystem = &Add2eSystem::new();
        let derived = system.calculation_engine().recompute(&fighter());
        assert_eq!(derived.armor_class, 2);
    }
}
