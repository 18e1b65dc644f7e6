//! Character sheet operation errors.

use add2e_domain::ActorKind;
use add2e_shared::DocumentError;

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("{name} is a {kind}; its statistics are not derived")]
    NotDerived { name: String, kind: ActorKind },
}
