//! Class branches: the class families reached through the primary attribute.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{AttributeName, Race};
use crate::error::DomainError;
use crate::ids::ClassId;

/// A class family. Each attribute leads to exactly one branch
/// (see [`AttributeName::branch`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Warrior,
    Guardian,
    Skirmisher,
    Arcanist,
    Mystic,
    Envoy,
}

impl Branch {
    pub const ALL: [Branch; 6] = [
        Self::Warrior,
        Self::Guardian,
        Self::Skirmisher,
        Self::Arcanist,
        Self::Mystic,
        Self::Envoy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Guardian => "guardian",
            Self::Skirmisher => "skirmisher",
            Self::Arcanist => "arcanist",
            Self::Mystic => "mystic",
            Self::Envoy => "envoy",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Guardian => "Guardian",
            Self::Skirmisher => "Skirmisher",
            Self::Arcanist => "Arcanist",
            Self::Mystic => "Mystic",
            Self::Envoy => "Envoy",
        }
    }

    /// The attribute whose dominance selects this branch.
    pub fn attribute(&self) -> AttributeName {
        match self {
            Self::Warrior => AttributeName::Strength,
            Self::Guardian => AttributeName::Constitution,
            Self::Skirmisher => AttributeName::Dexterity,
            Self::Arcanist => AttributeName::Intelligence,
            Self::Mystic => AttributeName::Wisdom,
            Self::Envoy => AttributeName::Charisma,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Branch {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|branch| branch.as_str() == lowered)
            .ok_or_else(|| DomainError::parse(format!("Unknown branch: {}", s)))
    }
}

/// Title shown on a result card, e.g. "Elf Wild Mage".
pub fn display_title(race: Race, class: &ClassId) -> String {
    format!("{} {}", race.display_name(), class.display_name())
}
