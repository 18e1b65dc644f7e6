//! Item entities - weapons, armor and spells carried by an actor
//!
//! Constructors apply the item defaults, so an `Item` is always prepared:
//! a weapon always has a damage string, armor always has an armor class,
//! a spell always has a level and a casting time.

use serde::{Deserialize, Serialize};

use super::character::ArmorPiece;
use crate::value_objects::DiceFormula;

/// Damage of a weapon with no damage entered.
pub const DEFAULT_WEAPON_DAMAGE: &str = "1d6";
/// Armor class of armor with no (or a zero) armor class entered.
pub const DEFAULT_ARMOR_CLASS: i32 = 10;
pub const DEFAULT_SPELL_LEVEL: i32 = 1;
pub const DEFAULT_CASTING_TIME: &str = "1 round";

/// A weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    /// Damage dice as entered on the sheet (e.g. "1d8+1")
    pub damage: String,
    /// Melee, ranged or thrown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<String>,
}

impl Weapon {
    /// Prepare a weapon, filling in the default damage when blank.
    pub fn new(damage: Option<&str>) -> Self {
        let damage = damage
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_WEAPON_DAMAGE);
        Self {
            damage: damage.to_string(),
            weapon_type: None,
        }
    }

    pub fn with_weapon_type(self, weapon_type: impl Into<String>) -> Self {
        Self {
            weapon_type: Some(weapon_type.into()),
            ..self
        }
    }

    /// Parsed damage dice; unparsable damage rolls as 1d6.
    pub fn damage_formula(&self) -> DiceFormula {
        DiceFormula::parse(&self.damage).unwrap_or(DiceFormula::default_weapon_damage())
    }

    /// Whether the entered damage string parses as a dice formula.
    pub fn has_valid_damage(&self) -> bool {
        DiceFormula::parse(&self.damage).is_ok()
    }
}

/// A suit of armor, shield or other protective item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    pub armor_class: i32,
    #[serde(default)]
    pub equipped: bool,
}

impl Armor {
    /// Prepare armor. A missing or zero armor class becomes 10.
    pub fn new(armor_class: Option<i32>, equipped: bool) -> Self {
        let armor_class = armor_class
            .filter(|ac| *ac != 0)
            .unwrap_or(DEFAULT_ARMOR_CLASS);
        Self {
            armor_class,
            equipped,
        }
    }

    pub fn as_armor_piece(&self) -> ArmorPiece {
        ArmorPiece {
            armor_class: self.armor_class,
            equipped: self.equipped,
        }
    }
}

/// A spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub level: i32,
    pub casting_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving_throw: Option<String>,
}

impl Spell {
    /// Prepare a spell, defaulting to level 1 and a casting time of one round.
    pub fn new(level: Option<i32>, casting_time: Option<&str>) -> Self {
        let level = level.filter(|l| *l != 0).unwrap_or(DEFAULT_SPELL_LEVEL);
        let casting_time = casting_time
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CASTING_TIME);
        Self {
            level,
            casting_time: casting_time.to_string(),
            school: None,
            saving_throw: None,
        }
    }

    pub fn with_school(self, school: impl Into<String>) -> Self {
        Self {
            school: Some(school.into()),
            ..self
        }
    }

    pub fn with_saving_throw(self, saving_throw: impl Into<String>) -> Self {
        Self {
            saving_throw: Some(saving_throw.into()),
            ..self
        }
    }
}

/// What kind of item this is, with its prepared data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Weapon(Weapon),
    Armor(Armor),
    Spell(Spell),
    /// Any other item type; carried but not interpreted
    #[serde(other)]
    Other,
}

/// A named item carried by an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&Armor> {
        match &self.kind {
            ItemKind::Armor(armor) => Some(armor),
            _ => None,
        }
    }

    pub fn as_spell(&self) -> Option<&Spell> {
        match &self.kind {
            ItemKind::Spell(spell) => Some(spell),
            _ => None,
        }
    }

    /// Armor entries, in order, for the armor class calculation.
    pub fn armor_pieces<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<ArmorPiece> {
        items
            .into_iter()
            .filter_map(Item::as_armor)
            .map(Armor::as_armor_piece)
            .collect()
    }
}
