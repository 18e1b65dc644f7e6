//! Item documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use add2e_domain::{Armor, Item, ItemKind, Spell, Weapon};

use super::lenient;

/// The `system` block of an item. Which fields matter depends on the
/// item's type; the rest pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSystemData {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub damage: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub weapon_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub ac: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipped: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub casting_time: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub school: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub saving_throw: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An item owned by an actor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    /// Item type as stored ("weapon", "armor", "spell", anything else)
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub system: ItemSystemData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemDocument {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_system(self, system: ItemSystemData) -> Self {
        Self { system, ..self }
    }

    /// The typed, defaulted item.
    pub fn to_item(&self) -> Item {
        let system = &self.system;
        let kind_name = self.kind.as_deref().unwrap_or_default().trim().to_ascii_lowercase();
        let kind = match kind_name.as_str() {
            "weapon" => {
                let weapon = Weapon::new(system.damage.as_deref());
                let weapon = match &system.weapon_type {
                    Some(weapon_type) => weapon.with_weapon_type(weapon_type.clone()),
                    None => weapon,
                };
                if !weapon.has_valid_damage() {
                    tracing::warn!(
                        item = %self.display_name(),
                        damage = %weapon.damage,
                        "Weapon damage is not a dice formula, will roll 1d6"
                    );
                }
                ItemKind::Weapon(weapon)
            }
            "armor" => ItemKind::Armor(Armor::new(system.ac, system.equipped.unwrap_or(false))),
            "spell" => {
                let mut spell = Spell::new(system.level, system.casting_time.as_deref());
                if let Some(school) = &system.school {
                    spell = spell.with_school(school.clone());
                }
                if let Some(saving_throw) = &system.saving_throw {
                    spell = spell.with_saving_throw(saving_throw.clone());
                }
                ItemKind::Spell(spell)
            }
            _ => ItemKind::Other,
        };
        Item::new(self.display_name(), kind)
    }

    /// Write the item defaults back into the document and return the
    /// typed item.
    pub fn prepare(&mut self) -> Item {
        let item = self.to_item();
        let system = &mut self.system;
        match &item.kind {
            ItemKind::Weapon(weapon) => system.damage = Some(weapon.damage.clone()),
            ItemKind::Armor(armor) => system.ac = Some(armor.armor_class),
            ItemKind::Spell(spell) => {
                system.level = Some(spell.level);
                system.casting_time = Some(spell.casting_time.clone());
            }
            ItemKind::Other => {}
        }
        item
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed item")
    }
}
