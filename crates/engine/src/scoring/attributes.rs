//! Attribute scorer
//!
//! Each attribute is scored independently from its own question set. Unanswered
//! questions shrink the denominator instead of counting as zero, so attributes
//! with different completion levels stay comparable.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use charforge_domain::{
    AnswerSheet, AttributeName, AttributeTier, DomainError, QuestionBank, MAX_OPTION_SCORE,
};

/// Score for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeResult {
    /// Sum of selected option scores (0-20 with all five answered)
    pub raw: u32,
    /// `raw / max_possible` as a rounded percentage; 0 with nothing answered
    pub normalized: u8,
    pub questions_answered: u32,
    /// `questions_answered * MAX_OPTION_SCORE`
    pub max_possible: u32,
}

impl AttributeResult {
    pub fn new(raw: u32, questions_answered: u32) -> Self {
        let max_possible = questions_answered * u32::from(MAX_OPTION_SCORE);
        Self {
            raw,
            normalized: normalize(raw, max_possible),
            questions_answered,
            max_possible,
        }
    }

    pub fn tier(&self) -> AttributeTier {
        AttributeTier::from_normalized(self.normalized)
    }
}

fn normalize(raw: u32, max_possible: u32) -> u8 {
    if max_possible == 0 {
        return 0;
    }
    let ratio = f64::from(raw.min(max_possible)) / f64::from(max_possible);
    (ratio * 100.0).round() as u8
}

const UNSCORED: AttributeResult = AttributeResult {
    raw: 0,
    normalized: 0,
    questions_answered: 0,
    max_possible: 0,
};

/// All six attribute results, keyed by attribute.
///
/// Deserializing rejects a map that lacks any of the six attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<AttributeName, AttributeResult>",
    into = "BTreeMap<AttributeName, AttributeResult>"
)]
pub struct AttributeScores(BTreeMap<AttributeName, AttributeResult>);

impl TryFrom<BTreeMap<AttributeName, AttributeResult>> for AttributeScores {
    type Error = DomainError;

    fn try_from(scores: BTreeMap<AttributeName, AttributeResult>) -> Result<Self, Self::Error> {
        let missing: Vec<&str> = AttributeName::ALL
            .iter()
            .filter(|attr| !scores.contains_key(*attr))
            .map(|attr| attr.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::validation(format!(
                "attribute scores missing {}",
                missing.join(", ")
            )));
        }
        Ok(Self(scores))
    }
}

impl From<AttributeScores> for BTreeMap<AttributeName, AttributeResult> {
    fn from(scores: AttributeScores) -> Self {
        scores.0
    }
}

impl Default for AttributeScores {
    fn default() -> Self {
        Self(
            AttributeName::ALL
                .iter()
                .map(|&attr| (attr, AttributeResult::default()))
                .collect(),
        )
    }
}

impl AttributeScores {
    pub fn get(&self, attribute: AttributeName) -> AttributeResult {
        self.0.get(&attribute).copied().unwrap_or_default()
    }

    /// Results in canonical attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, &AttributeResult)> {
        self.0.iter().map(|(&attr, result)| (attr, result))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attributes by raw score, highest first. Equal scores keep canonical order.
    pub fn ranked(&self) -> [AttributeName; 6] {
        let mut ranked = AttributeName::ALL;
        // Stable sort over the canonical order is the tie-break.
        ranked.sort_by_key(|attr| Reverse(self.get(*attr).raw));
        ranked
    }

    pub fn primary(&self) -> AttributeName {
        self.ranked()[0]
    }

    pub fn secondary(&self) -> AttributeName {
        self.ranked()[1]
    }

    /// Raw scores only, for callers that do not need the breakdown.
    pub fn to_raw_scores(&self) -> BTreeMap<AttributeName, u32> {
        self.iter().map(|(attr, result)| (attr, result.raw)).collect()
    }
}

impl std::ops::Index<AttributeName> for AttributeScores {
    type Output = AttributeResult;

    fn index(&self, attribute: AttributeName) -> &Self::Output {
        self.0.get(&attribute).unwrap_or(&UNSCORED)
    }
}

/// Score every attribute from the answer sheet.
pub fn score_attributes(bank: &QuestionBank, sheet: &AnswerSheet) -> AttributeScores {
    AttributeScores(
        AttributeName::ALL
            .iter()
            .map(|&attr| (attr, score_attribute(bank, sheet, attr)))
            .collect(),
    )
}

fn score_attribute(
    bank: &QuestionBank,
    sheet: &AnswerSheet,
    attribute: AttributeName,
) -> AttributeResult {
    let mut raw = 0u32;
    let mut answered = 0u32;

    for question in bank.attribute_questions(attribute) {
        let Some(selected) = sheet.selection(question.id.as_str()) else {
            continue;
        };
        let Some(option) = question.option(selected.as_str()) else {
            tracing::trace!(question = %question.id, option = %selected, "Ignoring unknown option");
            continue;
        };
        raw += u32::from(option.score.unwrap_or(0));
        answered += 1;
    }

    AttributeResult::new(raw, answered)
}
