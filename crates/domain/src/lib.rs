//! AD&D 2nd Edition rules domain.
//!
//! Pure, synchronous derivation of a character's statistics from its raw
//! attributes. Nothing in this crate performs I/O or rolls dice on its own;
//! randomness arrives through [`RandomPort`].

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod types;
pub mod value_objects;

pub use entities::{
    AbilityScore, AbilityScores, Armor, ArmorPiece, CharacterAttributes, CharacterDetails,
    DerivedAttributes, HitPoints, Item, ItemKind, Level, Spell, Weapon,
};

pub use error::DomainError;

pub use game_systems::{
    Add2eSystem, AbilityCheck, AttackRoll, CalculationEngine, GameSystem, SavingThrowRoll,
    WeaponAttack,
};

pub use types::{Ability, ActorKind, CharacterClass, ClassGroup, SaveCategory};

pub use value_objects::{
    DiceFormula, DiceParseError, DiceRollResult, RandomPort, RulesConfig,
};

#[cfg(test)]
pub use value_objects::MockRandomPort;
