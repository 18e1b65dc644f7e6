//! Armor class.

use crate::entities::ArmorPiece;

/// Armor class with nothing equipped.
pub const UNARMORED_AC: i32 = 10;

/// Best (lowest) armor class among equipped entries, or 10.
///
/// Only one armor slot is modelled: pieces do not stack.
pub fn base_armor_class(armor: &[ArmorPiece]) -> i32 {
    armor
        .iter()
        .filter(|piece| piece.equipped)
        .map(|piece| piece.armor_class)
        .min()
        .unwrap_or(UNARMORED_AC)
}

/// Armor class after the dexterity adjustment. Not clamped; negative
/// armor class is valid.
pub fn compute_armor_class(armor: &[ArmorPiece], dex_modifier: i32) -> i32 {
    base_armor_class(armor) - dex_modifier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmored_is_ten() {
        assert_eq!(compute_armor_class(&[], 0), 10);
    }

    #[test]
    fn best_equipped_piece_wins() {
        let armor = [
            ArmorPiece::carried(8),
            ArmorPiece::equipped(5),
            ArmorPiece::carried(2),
        ];
        assert_eq!(base_armor_class(&armor), 5);

        let armor = [ArmorPiece::equipped(7), ArmorPiece::equipped(4)];
        assert_eq!(base_armor_class(&armor), 4);
    }

    #[test]
    fn only_unequipped_armor_counts_as_unarmored() {
        assert_eq!(base_armor_class(&[ArmorPiece::carried(3)]), UNARMORED_AC);
    }

    #[test]
    fn dexterity_lowers_armor_class_without_a_floor() {
        assert_eq!(compute_armor_class(&[ArmorPiece::equipped(2)], 3), -1);
        assert_eq!(compute_armor_class(&[], -2), 12);
    }
}
