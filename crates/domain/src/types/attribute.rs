//! The six character attributes and their display tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Branch;
use crate::error::DomainError;

/// Character attributes scored by the assessment.
///
/// Declaration order is the canonical ordering used to break ties when
/// ranking attributes; see [`AttributeName::ALL`].
///
/// Serializes as the snake_case name (`"strength"`), which is also the key form
/// in scored attribute maps. Question data uses the short code instead, via
/// the [`attribute_code`] serde adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeName {
    /// Confrontation tolerance, assertiveness, bias toward action
    Strength,
    /// Endurance, resilience, recovery
    Constitution,
    /// Adaptability, comfort with ambiguity
    Dexterity,
    /// Curiosity, pattern recognition, systems thinking
    Intelligence,
    /// Self-awareness, reading situations
    Wisdom,
    /// Social gravity, genuine connection
    Charisma,
}

impl AttributeName {
    /// Canonical attribute ordering. Ranking ties resolve to the earlier entry.
    pub const ALL: [AttributeName; 6] = [
        Self::Strength,
        Self::Constitution,
        Self::Dexterity,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Position in [`AttributeName::ALL`].
    pub fn canonical_index(self) -> usize {
        self as usize
    }

    /// Short uppercase code ("STR", "CON", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Constitution => "CON",
            Self::Dexterity => "DEX",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// snake_case name, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Constitution => "constitution",
            Self::Dexterity => "dexterity",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Constitution => "Constitution",
            Self::Dexterity => "Dexterity",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Class family this attribute leads to when it is the primary attribute.
    ///
    /// One branch per attribute; the mapping is a bijection.
    pub fn branch(self) -> Branch {
        match self {
            Self::Strength => Branch::Warrior,
            Self::Constitution => Branch::Guardian,
            Self::Dexterity => Branch::Skirmisher,
            Self::Intelligence => Branch::Arcanist,
            Self::Wisdom => Branch::Mystic,
            Self::Charisma => Branch::Envoy,
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Strength),
            "CON" | "CONSTITUTION" => Ok(Self::Constitution),
            "DEX" | "DEXTERITY" => Ok(Self::Dexterity),
            "INT" | "INTELLIGENCE" => Ok(Self::Intelligence),
            "WIS" | "WISDOM" => Ok(Self::Wisdom),
            "CHA" | "CHARISMA" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}

/// Serde adapter for the short attribute code used in question data ("STR").
pub mod attribute_code {
    use super::AttributeName;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<AttributeName>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(attr) => serializer.serialize_some(attr.code()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<AttributeName>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|code| code.parse().map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Display tier for a normalized (0-100) attribute score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeTier {
    Minimal,
    Developing,
    Moderate,
    Strong,
    Exceptional,
    Legendary,
}

impl AttributeTier {
    pub fn from_normalized(normalized: u8) -> Self {
        match normalized {
            n if n >= 90 => Self::Legendary,
            n if n >= 75 => Self::Exceptional,
            n if n >= 60 => Self::Strong,
            n if n >= 40 => Self::Moderate,
            n if n >= 25 => Self::Developing,
            _ => Self::Minimal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Developing => "Developing",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::Exceptional => "Exceptional",
            Self::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for AttributeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
