//! Nine-point alignment grid
//!
//! An alignment crosses an order axis (Lawful / Neutral / Chaotic) with a moral
//! axis (Good / Neutral / Evil). The Neutral/Neutral cell is named
//! "True Neutral" rather than repeating the generic label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Position on the order axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPosition {
    Lawful,
    Neutral,
    Chaotic,
}

impl OrderPosition {
    /// Classify a net order score (`lawful - chaotic`) against a symmetric threshold.
    pub fn from_axis(axis: i32, threshold: i32) -> Self {
        if axis >= threshold {
            Self::Lawful
        } else if axis <= -threshold {
            Self::Chaotic
        } else {
            Self::Neutral
        }
    }
}

/// Position on the moral axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoralPosition {
    Good,
    Neutral,
    Evil,
}

impl MoralPosition {
    /// Classify a net moral score (`good - evil`) against a symmetric threshold.
    pub fn from_axis(axis: i32, threshold: i32) -> Self {
        if axis >= threshold {
            Self::Good
        } else if axis <= -threshold {
            Self::Evil
        } else {
            Self::Neutral
        }
    }
}

/// One of the nine named alignments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    LawfulGood,
    NeutralGood,
    ChaoticGood,
    LawfulNeutral,
    /// Neither axis crossed its threshold; also the result for no answers
    #[default]
    TrueNeutral,
    ChaoticNeutral,
    LawfulEvil,
    NeutralEvil,
    ChaoticEvil,
}

impl Alignment {
    /// All nine alignments, row by row (Good, Neutral, Evil).
    pub const ALL: [Alignment; 9] = [
        Self::LawfulGood,
        Self::NeutralGood,
        Self::ChaoticGood,
        Self::LawfulNeutral,
        Self::TrueNeutral,
        Self::ChaoticNeutral,
        Self::LawfulEvil,
        Self::NeutralEvil,
        Self::ChaoticEvil,
    ];

    pub fn from_positions(order: OrderPosition, moral: MoralPosition) -> Self {
        use MoralPosition as M;
        use OrderPosition as O;
        match (order, moral) {
            (O::Lawful, M::Good) => Self::LawfulGood,
            (O::Neutral, M::Good) => Self::NeutralGood,
            (O::Chaotic, M::Good) => Self::ChaoticGood,
            (O::Lawful, M::Neutral) => Self::LawfulNeutral,
            (O::Neutral, M::Neutral) => Self::TrueNeutral,
            (O::Chaotic, M::Neutral) => Self::ChaoticNeutral,
            (O::Lawful, M::Evil) => Self::LawfulEvil,
            (O::Neutral, M::Evil) => Self::NeutralEvil,
            (O::Chaotic, M::Evil) => Self::ChaoticEvil,
        }
    }

    pub fn order(&self) -> OrderPosition {
        match self {
            Self::LawfulGood | Self::LawfulNeutral | Self::LawfulEvil => OrderPosition::Lawful,
            Self::NeutralGood | Self::TrueNeutral | Self::NeutralEvil => OrderPosition::Neutral,
            Self::ChaoticGood | Self::ChaoticNeutral | Self::ChaoticEvil => OrderPosition::Chaotic,
        }
    }

    pub fn moral(&self) -> MoralPosition {
        match self {
            Self::LawfulGood | Self::NeutralGood | Self::ChaoticGood => MoralPosition::Good,
            Self::LawfulNeutral | Self::TrueNeutral | Self::ChaoticNeutral => {
                MoralPosition::Neutral
            }
            Self::LawfulEvil | Self::NeutralEvil | Self::ChaoticEvil => MoralPosition::Evil,
        }
    }

    /// Two-letter abbreviation ("LG", "TN", "CE", ...).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::LawfulGood => "LG",
            Self::NeutralGood => "NG",
            Self::ChaoticGood => "CG",
            Self::LawfulNeutral => "LN",
            Self::TrueNeutral => "TN",
            Self::ChaoticNeutral => "CN",
            Self::LawfulEvil => "LE",
            Self::NeutralEvil => "NE",
            Self::ChaoticEvil => "CE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LawfulGood => "Lawful Good",
            Self::NeutralGood => "Neutral Good",
            Self::ChaoticGood => "Chaotic Good",
            Self::LawfulNeutral => "Lawful Neutral",
            Self::TrueNeutral => "True Neutral",
            Self::ChaoticNeutral => "Chaotic Neutral",
            Self::LawfulEvil => "Lawful Evil",
            Self::NeutralEvil => "Neutral Evil",
            Self::ChaoticEvil => "Chaotic Evil",
        }
    }

    /// Get an emoji representation for UI
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::LawfulGood => "⚖️",
            Self::NeutralGood => "💚",
            Self::ChaoticGood => "🦋",
            Self::LawfulNeutral => "📜",
            Self::TrueNeutral => "☯️",
            Self::ChaoticNeutral => "🎲",
            Self::LawfulEvil => "🎭",
            Self::NeutralEvil => "🐍",
            Self::ChaoticEvil => "🔥",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Alignment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|a| {
                a.abbreviation().eq_ignore_ascii_case(s.trim())
                    || a.display_name().to_lowercase().replace(' ', "_") == normalized
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown alignment: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_thresholds_are_inclusive() {
        assert_eq!(OrderPosition::from_axis(3, 3), OrderPosition::Lawful);
        assert_eq!(OrderPosition::from_axis(2, 3), OrderPosition::Neutral);
        assert_eq!(OrderPosition::from_axis(-2, 3), OrderPosition::Neutral);
        assert_eq!(OrderPosition::from_axis(-3, 3), OrderPosition::Chaotic);
        assert_eq!(MoralPosition::from_axis(7, 3), MoralPosition::Good);
        assert_eq!(MoralPosition::from_axis(-9, 3), MoralPosition::Evil);
    }

    #[test]
    fn neutral_neutral_is_true_neutral() {
        let a = Alignment::from_positions(OrderPosition::Neutral, MoralPosition::Neutral);
        assert_eq!(a, Alignment::TrueNeutral);
        assert_eq!(a.display_name(), "True Neutral");
        assert_eq!(Alignment::default(), Alignment::TrueNeutral);
    }

    #[test]
    fn positions_round_trip_through_alignment() {
        for alignment in Alignment::ALL {
            assert_eq!(
                Alignment::from_positions(alignment.order(), alignment.moral()),
                alignment
            );
        }
    }

    #[test]
    fn alignment_from_str() {
        assert_eq!("LG".parse::<Alignment>(), Ok(Alignment::LawfulGood));
        assert_eq!("tn".parse::<Alignment>(), Ok(Alignment::TrueNeutral));
        assert_eq!(
            "Chaotic Evil".parse::<Alignment>(),
            Ok(Alignment::ChaoticEvil)
        );
        assert_eq!(
            "lawful_neutral".parse::<Alignment>(),
            Ok(Alignment::LawfulNeutral)
        );
        assert!("sideways".parse::<Alignment>().is_err());
    }

    #[test]
    fn alignment_serializes_snake_case() {
        let json = serde_json::to_string(&Alignment::ChaoticGood).unwrap();
        assert_eq!(json, "\"chaotic_good\"");
    }
}
