//! Host document shapes.
//!
//! Field names follow the host's templates and must not change.

mod actor;
mod item;
mod lenient;

pub use actor::{
    AbilityDocument, ActorDocument, ActorSystemData, CombatDocument, DetailsDocument,
    HitPointsDocument, ValueField,
};
pub use item::{ItemDocument, ItemSystemData};
