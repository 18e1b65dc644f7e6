//! Hit points.

use crate::entities::{HitPoints, Level};

/// Maximum hit points: `base + con_modifier * level`, at least 1.
///
/// `base` stands in for the hit-die roll history, which is not modelled.
pub fn max_hit_points(base: i32, con_modifier: i32, level: Level) -> i32 {
    base.saturating_add(con_modifier.saturating_mul(level.value()))
        .max(1)
}

/// Recompute hit points.
///
/// Current hit points carry over unchanged unless they were never set or
/// now exceed the new maximum, in which case they become the maximum. A
/// wounded character is never healed by a recalculation.
///
/// The previous maximum does not influence the result: the maximum is
/// always derived from scratch.
pub fn compute_hit_points(
    base: i32,
    con_modifier: i32,
    level: Level,
    prior_current: Option<i32>,
    _prior_max: Option<i32>,
) -> HitPoints {
    let max = max_hit_points(base, con_modifier, level);
    let current = match prior_current {
        Some(current) if current <= max => current,
        _ => max,
    };
    HitPoints { max, current }
}
