//! Caller-supplied answers and their last-write-wins view.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ids::{OptionId, QuestionId};

/// A single selection: which option was picked for which question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected_option_id: OptionId,
}

impl Answer {
    pub fn new(
        question_id: impl Into<QuestionId>,
        selected_option_id: impl Into<OptionId>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            selected_option_id: selected_option_id.into(),
        }
    }
}

/// Answers folded into a question-id keyed map.
///
/// Built by folding the input in order, so a later answer for the same question
/// replaces an earlier one. Answers to ids the bank does not know are kept here
/// and simply never looked up by the scorers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selections: HashMap<QuestionId, OptionId>,
    /// Question ids in first-seen order, for stable reporting
    order: Vec<QuestionId>,
}

impl AnswerSheet {
    pub fn from_answers(answers: &[Answer]) -> Self {
        answers
            .iter()
            .fold(Self::default(), |mut sheet, answer| {
                sheet.record(answer.question_id.clone(), answer.selected_option_id.clone());
                sheet
            })
    }

    fn record(&mut self, question_id: QuestionId, option_id: OptionId) {
        if self
            .selections
            .insert(question_id.clone(), option_id)
            .is_none()
        {
            self.order.push(question_id);
        }
    }

    /// The authoritative selection for a question, if any.
    pub fn selection(&self, question_id: &str) -> Option<&OptionId> {
        self.selections.get(question_id)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.selections.contains_key(question_id)
    }

    /// Distinct question ids, in the order they first appeared.
    pub fn question_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl From<&[Answer]> for AnswerSheet {
    fn from(answers: &[Answer]) -> Self {
        Self::from_answers(answers)
    }
}
