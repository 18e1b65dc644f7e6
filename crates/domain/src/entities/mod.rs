//! Attribute records: what the host supplies and what the calculators produce.

mod character;
mod derived;
mod item;

pub use character::{
    AbilityScore, AbilityScores, ArmorPiece, CharacterAttributes, CharacterDetails, Level,
};
pub use derived::{DerivedAttributes, HitPoints};
pub use item::{Armor, Item, ItemKind, Spell, Weapon};
