//! Roll errors.

use crate::use_cases::character_sheet::CharacterSheetError;

#[derive(Debug, thiserror::Error)]
pub enum RollError {
    #[error(transparent)]
    Sheet(#[from] CharacterSheetError),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("{0} is not a weapon")]
    NotAWeapon(String),
}
