//! Rules configuration value object
//!
//! World-level switches that change how statistics are derived. Stored and
//! transmitted as JSON; every field has a default so partial documents
//! deserialize.

use serde::{Deserialize, Serialize};

/// Placeholder base hit points used until hit-die history is modelled.
pub const DEFAULT_BASE_HIT_POINTS: i32 = 10;

/// Configurable rule options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// Apply the exceptional strength (18/xx) table to strength 18
    #[serde(default = "default_use_exceptional_strength")]
    pub use_exceptional_strength: bool,

    /// Base of the maximum hit point formula, before constitution
    #[serde(default = "default_base_hit_points")]
    pub base_hit_points: i32,
}

fn default_use_exceptional_strength() -> bool {
    true
}

fn default_base_hit_points() -> i32 {
    DEFAULT_BASE_HIT_POINTS
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            use_exceptional_strength: default_use_exceptional_strength(),
            base_hit_points: default_base_hit_points(),
        }
    }
}

impl RulesConfig {
    pub fn with_exceptional_strength(self, enabled: bool) -> Self {
        Self {
            use_exceptional_strength: enabled,
            ..self
        }
    }

    pub fn with_base_hit_points(self, base_hit_points: i32) -> Self {
        Self {
            base_hit_points,
            ..self
        }
    }
}
