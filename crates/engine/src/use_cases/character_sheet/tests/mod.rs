//! Character sheet use case tests.
//!
//! Tests cover:
//! - Full documents recompute into the sheet fields
//! - Monsters are prepared but never derived
//! - Rules configuration flows into the pipeline

use super::*;
use add2e_domain::{Ability, AbilityScore, CharacterClass, CharacterDetails, HitPoints};
use add2e_shared::DocumentError;
use serde_json::json;

fn paladin() -> String {
    json!({
        "name": "Aldric",
        "type": "character",
        "system": {
            "abilities": {
                "str": {"value": "17"},
                "dex": {"value": 13},
                "con": {"value": 16}
            },
            "details": {"class": "Paladin", "level": 3},
            "combat": {"hp": {"value": 12, "max": 16}}
        },
        "items": [
            {"name": "Banded mail", "type": "armor", "system": {"ac": 4, "equipped": true}},
            {"name": "Long sword", "type": "weapon", "system": {"damage": "1d8"}}
        ]
    })
    .to_string()
}

#[test]
fn recompute_writes_derived_fields() {
    let result = CharacterSheetUseCases::default()
        .recompute(&paladin())
        .expect("recompute succeeds");

    let system = &result.document["system"];
    assert_eq!(system["abilityMods"]["str"], 2);
    assert_eq!(system["abilityMods"]["con"], 2);
    assert_eq!(system["combat"]["thac0"]["value"], 16);
    assert_eq!(system["combat"]["ac"]["value"], 3);
    assert_eq!(system["combat"]["hp"]["max"], 16);
    assert_eq!(system["combat"]["hp"]["value"], 12);
    assert_eq!(system["saves"]["paralyze"]["value"], 15);
    assert_eq!(system["saves"]["spell"]["value"], 18);
    assert_eq!(system["abilities"]["wis"]["value"], 10);
    assert_eq!(result.actor.items.len(), 2);
}

#[test]
fn monsters_are_not_derived() {
    let sheets = CharacterSheetUseCases::default();
    let json = json!({"name": "Owlbear", "type": "monster"}).to_string();

    let result = sheets.recompute(&json).expect("recompute succeeds");
    assert!(result.actor.derived.is_none());
    assert!(result.document["system"].get("abilityMods").is_none());

    match sheets.derived_sheet(&json) {
        Err(CharacterSheetError::NotDerived { name, .. }) => assert_eq!(name, "Owlbear"),
        other => panic!("Expected NotDerived, got {other:?}"),
    }
}

#[test]
fn broken_documents_error() {
    let sheets = CharacterSheetUseCases::default();
    assert!(matches!(
        sheets.recompute("{"),
        Err(CharacterSheetError::Document(DocumentError::Json(_)))
    ));
    assert!(matches!(
        sheets.recompute("\"hello\""),
        Err(CharacterSheetError::Document(DocumentError::NotAnObject))
    ));
}

#[test]
fn config_reaches_the_calculation() {
    let sheets = CharacterSheetUseCases::new(RulesConfig::default().with_base_hit_points(4));
    assert_eq!(sheets.config().base_hit_points, 4);

    let attributes = CharacterAttributes::new(CharacterDetails::new(CharacterClass::Mage, 2))
        .with_ability(Ability::Con, AbilityScore::new(5));
    let derived = sheets.recompute_attributes(&attributes);
    assert_eq!(derived.hit_points, HitPoints { max: 1, current: 1 });
}

#[test]
fn derived_sheet_returns_statistics() {
    let sheet = CharacterSheetUseCases::default()
        .derived_sheet(&paladin())
        .expect("paladin is derived");
    assert_eq!(sheet.derived.thac0, 16);
    assert_eq!(sheet.actor.derived.as_ref(), Some(&sheet.derived));
}
