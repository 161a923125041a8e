//! Question and option records of the assessment battery.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{OptionId, QuestionId};
use crate::types::{attribute_code, AttributeName, Race};

/// Maximum score an attribute option may carry.
pub const MAX_OPTION_SCORE: u8 = 4;

/// Minimum options per question.
pub const MIN_OPTIONS: usize = 2;

/// Maximum options per question.
pub const MAX_OPTIONS: usize = 6;

/// Which scorer consumes a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Attribute,
    Alignment,
    Race,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attribute => "attribute",
            Self::Alignment => "alignment",
            Self::Race => "race",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A selectable answer and the weights it carries.
///
/// Only the weights relevant to the owning question's category are meaningful:
/// `score` for attribute questions, the four axis weights for alignment
/// questions, `race` for race questions. Absent axis weights count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: OptionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default)]
    pub lawful: u8,
    #[serde(default)]
    pub chaotic: u8,
    #[serde(default)]
    pub good: u8,
    #[serde(default)]
    pub evil: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
}

impl QuestionOption {
    /// Attribute option with the given score.
    pub fn scored(id: impl Into<OptionId>, score: u8) -> Self {
        Self {
            score: Some(score),
            ..Self::blank(id)
        }
    }

    /// Alignment option carrying `(lawful, chaotic, good, evil)` weights.
    pub fn weighted(id: impl Into<OptionId>, lawful: u8, chaotic: u8, good: u8, evil: u8) -> Self {
        Self {
            lawful,
            chaotic,
            good,
            evil,
            ..Self::blank(id)
        }
    }

    /// Race option voting for `race`.
    pub fn voting(id: impl Into<OptionId>, race: Race) -> Self {
        Self {
            race: Some(race),
            ..Self::blank(id)
        }
    }

    fn blank(id: impl Into<OptionId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            score: None,
            lawful: 0,
            chaotic: 0,
            good: 0,
            evil: 0,
            race: None,
        }
    }

    /// True when any of the four alignment axis weights is non-zero.
    pub fn has_axis_weights(&self) -> bool {
        self.lawful > 0 || self.chaotic > 0 || self.good > 0 || self.evil > 0
    }
}

/// One question of the battery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub category: QuestionCategory,
    #[serde(
        default,
        with = "attribute_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub attribute: Option<AttributeName>,
    #[serde(default)]
    pub title: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        category: QuestionCategory,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            attribute: None,
            title: String::new(),
            options,
        }
    }

    /// Attribute question tagged with `attribute`.
    pub fn attribute(
        id: impl Into<QuestionId>,
        attribute: AttributeName,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            attribute: Some(attribute),
            ..Self::new(id, QuestionCategory::Attribute, options)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Look up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id.as_str() == option_id)
    }
}
