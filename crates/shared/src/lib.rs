//! AD&D 2e Shared - host document format and the recompute pipeline
//!
//! The host hands over actor documents in its own nested layout
//! (`system.abilities`, `system.combat.hp`, ...), with whatever fields the
//! player has filled in so far. This crate:
//!
//! - decodes those documents leniently (missing or mistyped fields become
//!   defaults instead of errors),
//! - folds them once into the typed `add2e-domain` records,
//! - runs the derivation and writes the results back into the document.
//!
//! # Design Principles
//!
//! 1. **Never fail on content** - only text that is not JSON at all errors
//! 2. **Preserve what we don't own** - unknown fields round-trip untouched
//! 3. **One place for defaults** - the calculators see fully typed input

pub mod documents;
pub mod error;
pub mod pipeline;

pub use documents::{
    AbilityDocument, ActorDocument, ActorSystemData, CombatDocument, DetailsDocument,
    HitPointsDocument, ItemDocument, ItemSystemData, ValueField,
};
pub use error::DocumentError;
pub use pipeline::{recompute, PreparedActor, SheetPipeline};
