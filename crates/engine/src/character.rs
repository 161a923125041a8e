//! Character result composer
//!
//! Runs the scorers in dependency order: attributes, alignment, and race are
//! independent; class resolution needs the attribute ranking and the alignment.

use serde::{Deserialize, Serialize};

use charforge_domain::{
    display_title, AnswerSheet, AttributeName, Branch, ClassId, ClassTable, QuestionBank,
    QuestionCategory,
};

use crate::config::ScoringConfig;
use crate::scoring::{
    classify_alignment, resolve_class, score_attributes, vote_race, AlignmentResult,
    AttributeScores, ClassResolution, RaceResult,
};

/// Complete character profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResult {
    pub attributes: AttributeScores,
    pub alignment: AlignmentResult,
    pub race: RaceResult,
    #[serde(rename = "characterClass")]
    pub class: ClassId,
    pub branch: Branch,
    pub primary_attribute: AttributeName,
    pub secondary_attribute: AttributeName,
}

impl CharacterResult {
    /// "Race Class" title, e.g. "Dwarf Paladin".
    pub fn display_title(&self) -> String {
        display_title(self.race.race, &self.class)
    }
}

/// In-progress read of the pipeline.
///
/// Sections with no relevant answers are absent rather than defaulted, and the
/// class is withheld until the primary attribute has enough answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCharacterResult {
    pub attributes: AttributeScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<RaceResult>,
    #[serde(flatten)]
    pub class: Option<ClassResolution>,
}

pub fn resolve_character(
    bank: &QuestionBank,
    table: &ClassTable,
    config: &ScoringConfig,
    sheet: &AnswerSheet,
) -> CharacterResult {
    let attributes = score_attributes(bank, sheet);
    let alignment = classify_alignment(bank, sheet, config);
    let race = vote_race(bank, sheet);

    let ClassResolution {
        class,
        branch,
        primary_attribute,
        secondary_attribute,
    } = resolve_class(table, &attributes, alignment.alignment);

    tracing::debug!(
        class = %class,
        branch = %branch,
        alignment = %alignment.alignment,
        race = %race.race,
        answers = sheet.len(),
        "Resolved character"
    );

    CharacterResult {
        attributes,
        alignment,
        race,
        class,
        branch,
        primary_attribute,
        secondary_attribute,
    }
}

pub fn partial_character(
    bank: &QuestionBank,
    table: &ClassTable,
    config: &ScoringConfig,
    sheet: &AnswerSheet,
) -> PartialCharacterResult {
    let attributes = score_attributes(bank, sheet);
    let alignment = has_answer_in(bank, sheet, QuestionCategory::Alignment)
        .then(|| classify_alignment(bank, sheet, config));
    let race =
        has_answer_in(bank, sheet, QuestionCategory::Race).then(|| vote_race(bank, sheet));

    let primary = attributes.primary();
    let primary_answered = attributes.get(primary).questions_answered;
    let class = match alignment {
        Some(alignment) if primary_answered >= config.partial_class_min_answers => {
            Some(resolve_class(table, &attributes, alignment.alignment))
        }
        _ => {
            tracing::debug!(
                primary = %primary,
                primary_answered,
                has_alignment = alignment.is_some(),
                "Withholding class from partial result"
            );
            None
        }
    };

    PartialCharacterResult {
        attributes,
        alignment,
        race,
        class,
    }
}

/// True when some question of `category` has a selection naming one of its options.
fn has_answer_in(bank: &QuestionBank, sheet: &AnswerSheet, category: QuestionCategory) -> bool {
    bank.questions_in(category).any(|question| {
        sheet
            .selection(question.id.as_str())
            .is_some_and(|selected| question.option(selected.as_str()).is_some())
    })
}
