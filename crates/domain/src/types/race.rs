//! Race archetypes assigned by plurality vote.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The six race archetypes.
///
/// Declaration order is the canonical tie-break order for the race vote;
/// see [`Race::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Halfling,
    Orc,
    Dragonborn,
}

impl Race {
    /// Canonical race ordering. Vote ties resolve to the earlier entry.
    pub const ALL: [Race; 6] = [
        Self::Human,
        Self::Elf,
        Self::Dwarf,
        Self::Halfling,
        Self::Orc,
        Self::Dragonborn,
    ];

    /// Position in [`Race::ALL`].
    pub fn canonical_index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Elf => "elf",
            Self::Dwarf => "dwarf",
            Self::Halfling => "halfling",
            Self::Orc => "orc",
            Self::Dragonborn => "dragonborn",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
            Self::Dwarf => "Dwarf",
            Self::Halfling => "Halfling",
            Self::Orc => "Orc",
            Self::Dragonborn => "Dragonborn",
        }
    }

    /// Get an emoji representation for UI
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Human => "🧑",
            Self::Elf => "🧝",
            Self::Dwarf => "⛏️",
            Self::Halfling => "🍀",
            Self::Orc => "👹",
            Self::Dragonborn => "🐉",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|race| race.as_str() == lowered)
            .ok_or_else(|| DomainError::parse(format!("Unknown race: {}", s)))
    }
}
