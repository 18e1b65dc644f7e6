//! Application state and composition.

use std::sync::Arc;

use add2e_domain::{RandomPort, RulesConfig};

use crate::use_cases;

/// Main application state.
///
/// Holds all use cases, wired to one rules configuration and one source
/// of randomness.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: use_cases::CharacterSheetUseCases,
    pub rolls: use_cases::RollUseCases,
}

impl App {
    pub fn new(config: RulesConfig, random: Arc<dyn RandomPort>) -> Self {
        let character_sheet = use_cases::CharacterSheetUseCases::new(config);
        let rolls = use_cases::RollUseCases::new(character_sheet, random);
        Self {
            use_cases: UseCases {
                character_sheet,
                rolls,
            },
        }
    }
}
