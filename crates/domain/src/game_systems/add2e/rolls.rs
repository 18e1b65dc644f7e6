//! Resolution of the sheet's roll actions.
//!
//! The d20 and damage dice come from the caller's [`RandomPort`]; this
//! module only interprets the faces against derived statistics.

use serde::{Deserialize, Serialize};

use crate::entities::{DerivedAttributes, Weapon};
use crate::types::{Ability, SaveCategory};
use crate::value_objects::{DiceFormula, DiceRollResult, RandomPort};

/// Save target assumed when the category has no value.
pub const DEFAULT_SAVE_TARGET: i32 = 20;

/// A d20 ability check: roll plus the ability modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityCheck {
    pub ability: Ability,
    pub roll: i32,
    pub modifier: i32,
    pub total: i32,
}

impl AbilityCheck {
    pub fn resolve(ability: Ability, modifier: i32, roll: i32) -> Self {
        Self {
            ability,
            roll,
            modifier,
            total: roll + modifier,
        }
    }

    pub fn roll(derived: &DerivedAttributes, ability: Ability, rng: &dyn RandomPort) -> Self {
        let roll = DiceFormula::d20().roll(rng).total;
        Self::resolve(ability, derived.modifier(ability), roll)
    }
}

/// A saving throw: succeeds when the d20 is at or under the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingThrowRoll {
    pub category: SaveCategory,
    pub roll: i32,
    pub target: i32,
    pub success: bool,
}

impl SavingThrowRoll {
    pub fn resolve(category: SaveCategory, target: Option<i32>, roll: i32) -> Self {
        let target = target.unwrap_or(DEFAULT_SAVE_TARGET);
        Self {
            category,
            roll,
            target,
            success: roll <= target,
        }
    }

    pub fn roll(derived: &DerivedAttributes, category: SaveCategory, rng: &dyn RandomPort) -> Self {
        let roll = DiceFormula::d20().roll(rng).total;
        Self::resolve(category, derived.saving_throw(category), roll)
    }
}

/// An attack roll: the lowest armor class the roll hits is THAC0 minus the
/// d20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackRoll {
    pub thac0: i32,
    pub roll: i32,
    pub hits_ac: i32,
}

impl AttackRoll {
    pub fn resolve(thac0: i32, roll: i32) -> Self {
        Self {
            thac0,
            roll,
            hits_ac: thac0 - roll,
        }
    }

    pub fn roll(derived: &DerivedAttributes, rng: &dyn RandomPort) -> Self {
        let roll = DiceFormula::d20().roll(rng).total;
        Self::resolve(derived.thac0, roll)
    }

    /// Whether the attack hits a target with the given armor class.
    pub fn hits(&self, armor_class: i32) -> bool {
        self.hits_ac <= armor_class
    }
}

/// An attack with a weapon, followed by its damage roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponAttack {
    pub attack: AttackRoll,
    pub damage: DiceRollResult,
}

impl WeaponAttack {
    pub fn roll(derived: &DerivedAttributes, weapon: &Weapon, rng: &dyn RandomPort) -> Self {
        let attack = AttackRoll::roll(derived, rng);
        let damage = weapon.damage_formula().roll(rng);
        Self { attack, damage }
    }
}
