//! Ability score modifiers.

use std::collections::BTreeMap;

use crate::entities::AbilityScores;
use crate::types::Ability;

/// Strength value at which exceptional strength applies.
pub const EXCEPTIONAL_STRENGTH_SCORE: i32 = 18;

/// Modifier for a raw ability score.
///
/// Scores below 3 count as 3 and scores above 18 count as 18.
pub fn ability_modifier(value: i32) -> i32 {
    match value {
        i32::MIN..=3 => -3,
        4..=5 => -2,
        6..=8 => -1,
        9..=12 => 0,
        13..=15 => 1,
        16..=17 => 2,
        _ => 3,
    }
}

/// Modifier for strength 18 with a percentile score.
///
/// The table stops at 100 (18/00); percentiles outside 0..=100 are clamped
/// into that range first.
pub fn exceptional_strength_modifier(exceptional: i32) -> i32 {
    match exceptional.clamp(0, 100) {
        0..=50 => 3,
        51..=75 => 4,
        76..=90 => 5,
        91..=99 => 6,
        _ => 7,
    }
}

/// Modifier for every ability, with missing scores treated as 10.
pub fn compute_modifiers(
    abilities: &AbilityScores,
    use_exceptional_strength: bool,
) -> BTreeMap<Ability, i32> {
    Ability::ALL
        .iter()
        .map(|&ability| {
            let score = abilities.get(ability);
            let modifier = match score.exceptional {
                Some(exceptional)
                    if use_exceptional_strength
                        && ability == Ability::Str
                        && score.value == EXCEPTIONAL_STRENGTH_SCORE =>
                {
                    exceptional_strength_modifier(exceptional)
                }
                _ => ability_modifier(score.value),
            };
            (ability, modifier)
        })
        .collect()
}
