//! Roll use case tests.
//!
//! Tests cover:
//! - Each roll reads the freshly derived statistics
//! - Weapon lookup failures surface as errors
//! - Monsters cannot roll against derived statistics

use super::*;
use crate::infrastructure::random::FixedRandom;
use crate::use_cases::character_sheet::CharacterSheetError;
use mockall::{mock, Sequence};
use serde_json::json;

mock! {
    pub Dice {}

    impl RandomPort for Dice {
        fn gen_range(&self, min: i32, max: i32) -> i32;
    }
}

fn ranger() -> String {
    json!({
        "name": "Sera",
        "system": {
            "abilities": {"str": {"value": 16}, "wis": {"value": 5}},
            "details": {"class": "ranger", "level": 4}
        },
        "items": [
            {"name": "Long bow", "type": "weapon", "system": {"damage": "1d8+1"}},
            {"name": "Hunting knife", "type": "weapon", "system": {"damage": "sharp"}},
            {"name": "Cloak", "type": "equipment"}
        ]
    })
    .to_string()
}

fn rolls_with(random: impl RandomPort + 'static) -> RollUseCases {
    RollUseCases::new(CharacterSheetUseCases::default(), Arc::new(random))
}

#[test]
fn attack_uses_thac0() {
    // Warrior level 4 is 17; strength 16 brings it to 15.
    let attack = rolls_with(FixedRandom(12)).attack(&ranger()).expect("attack rolls");
    assert_eq!(attack.thac0, 15);
    assert_eq!(attack.roll, 12);
    assert_eq!(attack.hits_ac, 3);
    assert!(attack.hits(5));
    assert!(!attack.hits(2));
}

#[test]
fn saving_throw_compares_against_target() {
    let rolls = rolls_with(FixedRandom(14));
    let save = rolls
        .saving_throw(&ranger(), SaveCategory::Poison)
        .expect("save rolls");
    assert_eq!(save.target, 14);
    assert!(save.success);

    let save = rolls
        .saving_throw(&ranger(), SaveCategory::Spell)
        .expect("save rolls");
    assert_eq!(save.target, 17);
    assert!(save.success);

    let save = rolls_with(FixedRandom(19))
        .saving_throw(&ranger(), SaveCategory::Breath)
        .expect("save rolls");
    assert_eq!(save.target, 16);
    assert!(!save.success);
}

#[test]
fn ability_check_adds_modifier() {
    let check = rolls_with(FixedRandom(10))
        .ability_check(&ranger(), Ability::Wis)
        .expect("check rolls");
    assert_eq!(check.modifier, -2);
    assert_eq!(check.total, 8);
}

#[test]
fn weapon_attack_rolls_damage_after_attack() {
    let mut dice = MockDice::new();
    let mut seq = Sequence::new();
    dice.expect_gen_range()
        .withf(|min, max| *min == 1 && *max == 20)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(20);
    dice.expect_gen_range()
        .withf(|min, max| *min == 1 && *max == 8)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(6);

    let attack = rolls_with(dice)
        .weapon_attack(&ranger(), "long bow")
        .expect("weapon attack rolls");
    assert_eq!(attack.attack.hits_ac, -5);
    assert_eq!(attack.damage.total, 7);
}

#[test]
fn unparsable_damage_rolls_d6() {
    let mut dice = MockDice::new();
    dice.expect_gen_range()
        .withf(|min, max| *min == 1 && *max == 20)
        .return_const(3);
    dice.expect_gen_range()
        .withf(|min, max| *min == 1 && *max == 6)
        .times(1)
        .return_const(4);

    let attack = rolls_with(dice)
        .weapon_attack(&ranger(), "Hunting knife")
        .expect("weapon attack rolls");
    assert_eq!(attack.damage.total, 4);
}

#[test]
fn weapon_lookup_errors() {
    let rolls = rolls_with(FixedRandom(10));
    assert!(matches!(
        rolls.weapon_attack(&ranger(), "Halberd"),
        Err(RollError::ItemNotFound(name)) if name == "Halberd"
    ));
    assert!(matches!(
        rolls.weapon_attack(&ranger(), "Cloak"),
        Err(RollError::NotAWeapon(name)) if name == "Cloak"
    ));
}

#[test]
fn monsters_cannot_roll() {
    let owlbear = json!({"name": "Owlbear", "type": "monster"}).to_string();
    assert!(matches!(
        rolls_with(FixedRandom(10)).attack(&owlbear),
        Err(RollError::Sheet(CharacterSheetError::NotDerived { .. }))
    ));
}
