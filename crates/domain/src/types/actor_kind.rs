//! Kinds of actor document the host can hand over.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The host document type of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// Player character
    #[default]
    Character,
    /// Non-player character, derived exactly like a player character
    Npc,
    /// Monster; statistics come from hit dice, not class and level
    Monster,
    /// Unknown actor type (for forward compatibility)
    #[serde(other)]
    Unknown,
}

impl ActorKind {
    /// Whether class/level derivation applies to this kind of actor.
    ///
    /// Unknown kinds are treated like characters.
    pub fn derives_statistics(&self) -> bool {
        !matches!(self, ActorKind::Monster)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActorKind::Character => "Character",
            ActorKind::Npc => "NPC",
            ActorKind::Monster => "Monster",
            ActorKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ActorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "character" => ActorKind::Character,
            "npc" => ActorKind::Npc,
            "monster" => ActorKind::Monster,
            _ => ActorKind::Unknown,
        })
    }
}
