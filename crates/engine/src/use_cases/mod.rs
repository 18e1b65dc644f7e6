//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the sheet.

pub mod character_sheet;
pub mod rolls;

// Re-export main types
pub use character_sheet::{CharacterSheetError, CharacterSheetUseCases};
pub use rolls::{RollError, RollUseCases};
