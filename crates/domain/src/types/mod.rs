//! Closed vocabularies of the ruleset.
//!
//! Free-form host strings (class names, ability keys, save categories, actor
//! types) are folded into these enums once, at the boundary.

mod ability;
mod actor_kind;
mod character_class;
mod save;

pub use ability::Ability;
pub use actor_kind::ActorKind;
pub use character_class::{CharacterClass, ClassGroup};
pub use save::SaveCategory;
