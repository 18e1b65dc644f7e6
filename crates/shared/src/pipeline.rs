//! The recompute pipeline: document in, derived statistics out.

use serde_json::Value;

use add2e_domain::{
    Add2eSystem, CalculationEngine, CharacterAttributes, DerivedAttributes, Item, RulesConfig,
};

use crate::documents::ActorDocument;
use crate::error::DocumentError;

/// Derive every statistic from raw attributes with the default rules.
///
/// Pure and idempotent: the same attributes always give the same result.
pub fn recompute(attributes: &CharacterAttributes) -> DerivedAttributes {
    Add2eSystem::new().recompute(attributes)
}

/// An actor document after preparation.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedActor {
    /// The document with defaults and derived values written back
    pub document: ActorDocument,
    /// Typed input the derivation ran on
    pub attributes: CharacterAttributes,
    /// Prepared items, in document order
    pub items: Vec<Item>,
    /// `None` for actor kinds that are not derived (monsters)
    pub derived: Option<DerivedAttributes>,
}

impl PreparedActor {
    /// Find a prepared item by name, ignoring case.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// Runs host documents through item preparation and derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetPipeline {
    system: Add2eSystem,
}

impl SheetPipeline {
    pub fn new(config: RulesConfig) -> Self {
        Self {
            system: Add2eSystem::with_config(config),
        }
    }

    pub fn config(&self) -> &RulesConfig {
        self.system.config()
    }

    pub fn recompute(&self, attributes: &CharacterAttributes) -> DerivedAttributes {
        let derived = self.system.recompute(attributes);
        tracing::debug!(
            class = %attributes.details.class,
            level = attributes.details.level.value(),
            thac0 = derived.thac0,
            armor_class = derived.armor_class,
            hp_max = derived.hit_points.max,
            "Recomputed derived attributes"
        );
        derived
    }

    /// Prepare items, fill ability defaults, and (for characters and NPCs)
    /// derive statistics into the document.
    pub fn prepare_actor(&self, mut document: ActorDocument) -> PreparedActor {
        let items: Vec<Item> = document.items.iter_mut().map(|item| item.prepare()).collect();
        document.fill_ability_defaults();

        let attributes = document.to_attributes(&items);
        let derived = if document.kind.derives_statistics() {
            let derived = self.recompute(&attributes);
            document.apply_derived(&derived);
            Some(derived)
        } else {
            tracing::debug!(
                actor = %document.display_name(),
                kind = %document.kind,
                "Skipping derivation for actor kind"
            );
            None
        };

        PreparedActor {
            document,
            attributes,
            items,
            derived,
        }
    }

    /// Decode a JSON actor document and prepare it.
    pub fn prepare_actor_json(&self, json: &str) -> Result<PreparedActor, DocumentError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(DocumentError::NotAnObject);
        }
        let document: ActorDocument = serde_json::from_value(value)?;
        Ok(self.prepare_actor(document))
    }
}
