//! Value objects shared by the calculators and roll resolution.

mod dice;
mod rules_config;

pub use dice::{DiceFormula, DiceParseError, DiceRollResult, RandomPort};
pub use rules_config::RulesConfig;

#[cfg(test)]
pub use dice::MockRandomPort;
