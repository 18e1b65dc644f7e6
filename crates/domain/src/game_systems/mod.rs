//! Game system implementation for AD&D 2nd Edition.
//!
//! The calculation engine lives in `add2e`; the traits in `traits.rs`
//! describe the seam the host-facing layer talks to.

mod add2e;
mod traits;

pub use add2e::{
    abilities, armor, hit_points, saves, thac0, AbilityCheck, Add2eSystem, AttackRoll,
    SavingThrowRoll, WeaponAttack,
};

pub use traits::{CalculationEngine, GameSystem};
