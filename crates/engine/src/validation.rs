//! Answer-set validation
//!
//! Advisory only. Scoring never refuses an answer set; this tells the caller
//! what is missing or malformed before they decide to submit.

use serde::{Deserialize, Serialize};

use charforge_domain::{AnswerSheet, QuestionBank, QuestionId};

/// What an answer set lacks relative to the bank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerValidation {
    /// True when nothing is missing and nothing is invalid
    pub valid: bool,
    /// Bank questions with no selection, in bank order
    pub missing_questions: Vec<QuestionId>,
    /// Bank questions whose selection names an option the question lacks, in bank order
    pub invalid_answers: Vec<QuestionId>,
    /// Answered ids the bank does not contain, in first-seen order
    #[serde(default)]
    pub unknown_questions: Vec<QuestionId>,
}

pub fn validate_answers(bank: &QuestionBank, sheet: &AnswerSheet) -> AnswerValidation {
    let mut missing_questions = Vec::new();
    let mut invalid_answers = Vec::new();

    for question in bank.questions() {
        match sheet.selection(question.id.as_str()) {
            None => missing_questions.push(question.id.clone()),
            Some(selected) if question.option(selected.as_str()).is_none() => {
                invalid_answers.push(question.id.clone());
            }
            Some(_) => {}
        }
    }

    let unknown_questions: Vec<QuestionId> = sheet
        .question_ids()
        .filter(|id| bank.question(id.as_str()).is_none())
        .cloned()
        .collect();

    let valid = missing_questions.is_empty() && invalid_answers.is_empty();
    tracing::debug!(
        valid,
        missing = missing_questions.len(),
        invalid = invalid_answers.len(),
        unknown = unknown_questions.len(),
        "Validated answer set"
    );

    AnswerValidation {
        valid,
        missing_questions,
        invalid_answers,
        unknown_questions,
    }
}
