//! THAC0 progression.

use crate::entities::Level;
use crate::types::{CharacterClass, ClassGroup};

/// THAC0 of a class with no progression table.
pub const DEFAULT_THAC0: i32 = 20;

const PROGRESSION_START: i32 = 21;

/// THAC0 before the strength adjustment, never below 1.
pub fn base_thac0(group: ClassGroup, level: Level) -> i32 {
    let level = level.value();
    let base = match group {
        ClassGroup::Warrior => PROGRESSION_START - level,
        ClassGroup::Priest | ClassGroup::Rogue => {
            PROGRESSION_START - level.saturating_mul(2).div_euclid(3)
        }
        ClassGroup::Wizard => PROGRESSION_START - level.div_euclid(2),
        ClassGroup::Unrecognized => DEFAULT_THAC0,
    };
    base.max(1)
}

/// THAC0 after subtracting the strength modifier.
///
/// Only the base is floored at 1; a large strength bonus can take the
/// result below 1.
pub fn compute_thac0(class: CharacterClass, level: Level, str_modifier: i32) -> i32 {
    base_thac0(class.group(), level) - str_modifier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighter_level_five_with_strength_bonus() {
        assert_eq!(compute_thac0(CharacterClass::Fighter, Level::new(5), 1), 15);
    }

    #[test]
    fn mage_level_six() {
        assert_eq!(compute_thac0(CharacterClass::Mage, Level::new(6), 0), 18);
    }

    #[test]
    fn priests_and_rogues_advance_two_thirds() {
        assert_eq!(compute_thac0(CharacterClass::Cleric, Level::new(3), 0), 19);
        assert_eq!(compute_thac0(CharacterClass::Thief, Level::new(4), 0), 19);
        assert_eq!(compute_thac0(CharacterClass::Bard, Level::new(9), 0), 15);
    }

    #[test]
    fn unknown_class_is_flat_twenty() {
        assert_eq!(compute_thac0(CharacterClass::Unknown, Level::new(1), 0), 20);
        assert_eq!(compute_thac0(CharacterClass::Unknown, Level::new(15), 0), 20);
        assert_eq!(compute_thac0(CharacterClass::Unknown, Level::new(15), 2), 18);
    }

    #[test]
    fn base_is_floored_but_strength_can_go_below_one() {
        assert_eq!(base_thac0(ClassGroup::Warrior, Level::new(40)), 1);
        assert_eq!(compute_thac0(CharacterClass::Fighter, Level::new(40), 3), -2);
    }

    #[test]
    fn warrior_thac0_never_worsens_with_level() {
        let mut level = Level::MIN;
        for _ in 0..30 {
            let next = level.next();
            assert!(
                compute_thac0(CharacterClass::Fighter, next, 0)
                    <= compute_thac0(CharacterClass::Fighter, level, 0)
            );
            level = next;
        }
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let a = compute_thac0(CharacterClass::Ranger, Level::new(7), 2);
        let b = compute_thac0(CharacterClass::Ranger, Level::new(7), 2);
        assert_eq!(a, b);
    }
}
