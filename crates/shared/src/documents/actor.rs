//! Actor documents in the host's nested layout.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use add2e_domain::{
    Ability, AbilityScore, AbilityScores, ActorKind, CharacterAttributes, CharacterClass,
    CharacterDetails, DerivedAttributes, Item, Level,
};

use super::item::ItemDocument;
use super::lenient;

/// `{ "value": n }` wrapper the sheet uses for single derived numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueField {
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `system.abilities`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityDocument {
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub exceptional: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AbilityDocument {
    /// The typed score. A blank or zero value counts as 10, and a zero
    /// percentile counts as no percentile.
    pub fn score(&self) -> AbilityScore {
        let score = self
            .value
            .filter(|v| *v != 0)
            .map(AbilityScore::new)
            .unwrap_or_default();
        match self.exceptional.filter(|e| *e != 0) {
            Some(exceptional) => score.with_exceptional(exceptional),
            None => score,
        }
    }
}

/// `system.details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailsDocument {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub class: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `system.combat.hp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitPointsDocument {
    /// Current hit points
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `system.combat`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatDocument {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub hp: HitPointsDocument,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub thac0: ValueField,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ac: ValueField,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `system` block of an actor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSystemData {
    #[serde(default, deserialize_with = "ability_entries")]
    pub abilities: BTreeMap<String, AbilityDocument>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub details: DetailsDocument,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub combat: CombatDocument,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub saves: BTreeMap<String, ValueField>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub ability_mods: BTreeMap<String, i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Abilities keyed by short name. A bare number (`"str": 15`) is accepted
/// as the score; anything else unreadable becomes an empty entry.
fn ability_entries<'de, D>(deserializer: D) -> Result<BTreeMap<String, AbilityDocument>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Object(entries)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(entries
        .into_iter()
        .map(|(key, entry)| {
            let document = match entry {
                Value::Object(_) => AbilityDocument::deserialize(entry).unwrap_or_default(),
                other => AbilityDocument {
                    value: lenient::as_int(&other),
                    ..AbilityDocument::default()
                },
            };
            (key, document)
        })
        .collect())
}

/// A complete actor document as stored by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorDocument {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "actor_kind")]
    pub kind: ActorKind,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub system: ActorSystemData,
    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<ItemDocument>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Percentile strength outside 0-100 on strength; the calculators clamp it.
/// Other abilities never read the percentile.
fn out_of_range_exceptional(ability: Ability, score: &AbilityScore) -> Option<i32> {
    match ability {
        Ability::Str => score.exceptional.filter(|e| !(0..=100).contains(e)),
        _ => None,
    }
}

fn actor_kind<'de, D>(deserializer: D) -> Result<ActorKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::string(deserializer)?
        .and_then(|kind| kind.parse().ok())
        .unwrap_or_default())
}

impl ActorDocument {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }

    /// Typed ability scores. Keys that are not one of the six abilities
    /// are ignored.
    pub fn ability_scores(&self) -> AbilityScores {
        self.system
            .abilities
            .iter()
            .filter_map(|(key, document)| match key.parse::<Ability>() {
                Ok(ability) => {
                    let score = document.score();
                    if let Some(exceptional) = out_of_range_exceptional(ability, &score) {
                        tracing::warn!(
                            exceptional,
                            actor = %self.display_name(),
                            "Exceptional strength outside 0-100, clamping"
                        );
                    }
                    Some((ability, score))
                }
                Err(_) => {
                    tracing::warn!(key = %key, actor = %self.display_name(), "Ignoring unknown ability");
                    None
                }
            })
            .collect()
    }

    /// Typed class and level. A blank or zero level counts as 1.
    pub fn details(&self) -> CharacterDetails {
        let details = &self.system.details;
        let class = details
            .class
            .as_deref()
            .map(CharacterClass::from_name)
            .unwrap_or_default();
        let level = match details.level {
            None | Some(0) => Level::MIN,
            Some(level) if level < 0 => {
                tracing::warn!(level, actor = %self.display_name(), "Negative level, using 1");
                Level::MIN
            }
            Some(level) => Level::new(level),
        };
        CharacterDetails { class, level }
    }

    /// Fold the document into the typed record the calculators consume.
    ///
    /// `items` must be the prepared items of this document.
    pub fn to_attributes(&self, items: &[Item]) -> CharacterAttributes {
        let hp = &self.system.combat.hp;
        CharacterAttributes {
            abilities: self.ability_scores(),
            details: self.details(),
            equipped_armor: Item::armor_pieces(items),
            current_hit_points: hp.value,
            max_hit_points: hp.max,
        }
    }

    /// Write default values for any of the six abilities that are missing
    /// or blank.
    pub fn fill_ability_defaults(&mut self) {
        for ability in Ability::ALL {
            let entry = self
                .system
                .abilities
                .entry(ability.key().to_string())
                .or_default();
            if entry.value.filter(|v| *v != 0).is_none() {
                entry.value = Some(AbilityScore::default().value);
            }
        }
    }

    /// Write derived statistics into the document's sheet fields.
    pub fn apply_derived(&mut self, derived: &DerivedAttributes) {
        let system = &mut self.system;

        system.ability_mods = derived
            .ability_modifiers
            .iter()
            .map(|(ability, modifier)| (ability.key().to_string(), *modifier))
            .collect();

        system.combat.thac0.value = Some(derived.thac0);
        system.combat.ac.value = Some(derived.armor_class);
        system.combat.hp.max = Some(derived.hit_points.max);
        system.combat.hp.value = Some(derived.hit_points.current);

        for (category, target) in &derived.saving_throws {
            system
                .saves
                .entry(category.key().to_string())
                .or_default()
                .value = Some(*target);
        }
    }
}
