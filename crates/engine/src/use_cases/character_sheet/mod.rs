//! Character sheet use cases.
//!
//! Handles actor document preparation: item defaults, ability defaults,
//! and derived value calculation.

mod error;

#[cfg(test)]
mod tests;

pub use error::CharacterSheetError;

use add2e_domain::{CharacterAttributes, DerivedAttributes, RulesConfig};
use add2e_shared::{DocumentError, PreparedActor, SheetPipeline};

// =============================================================================
// Result Types
// =============================================================================

/// Result of recomputing a sheet.
#[derive(Debug, Clone)]
pub struct RecomputeResult {
    /// The prepared actor.
    pub actor: PreparedActor,
    /// The document with derived values written back, as JSON.
    pub document: serde_json::Value,
}

/// An actor whose statistics were derived.
#[derive(Debug, Clone)]
pub struct DerivedSheet {
    pub actor: PreparedActor,
    pub derived: DerivedAttributes,
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for character sheet use cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterSheetUseCases {
    pipeline: SheetPipeline,
}

impl CharacterSheetUseCases {
    pub fn new(config: RulesConfig) -> Self {
        Self {
            pipeline: SheetPipeline::new(config),
        }
    }

    pub fn config(&self) -> &RulesConfig {
        self.pipeline.config()
    }

    /// Recompute an actor document given as JSON text.
    pub fn recompute(&self, json: &str) -> Result<RecomputeResult, CharacterSheetError> {
        let actor = self.pipeline.prepare_actor_json(json)?;
        let document = serde_json::to_value(&actor.document).map_err(DocumentError::from)?;

        tracing::info!(
            actor = %actor.document.display_name(),
            kind = %actor.document.kind,
            items = actor.items.len(),
            derived = actor.derived.is_some(),
            "Recomputed character sheet"
        );

        Ok(RecomputeResult { actor, document })
    }

    /// Recompute typed attributes directly.
    pub fn recompute_attributes(&self, attributes: &CharacterAttributes) -> DerivedAttributes {
        self.pipeline.recompute(attributes)
    }

    /// Prepare an actor and require that its statistics were derived.
    pub fn derived_sheet(&self, json: &str) -> Result<DerivedSheet, CharacterSheetError> {
        let actor = self.pipeline.prepare_actor_json(json)?;
        match actor.derived.clone() {
            Some(derived) => Ok(DerivedSheet { actor, derived }),
            None => Err(CharacterSheetError::NotDerived {
                name: actor.document.display_name().to_string(),
                kind: actor.document.kind,
            }),
        }
    }
}
