//! Assessment progress
//!
//! Counts distinct known questions that have a selection, per section and
//! overall. A selection counts even when it names an unknown option; that is
//! for [`validate_answers`](crate::validation::validate_answers) to report.

use serde::{Deserialize, Serialize};

use charforge_domain::{AnswerSheet, Question, QuestionBank, QuestionCategory, QuestionId};

/// Answered versus total for one slice of the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgress {
    pub answered: u32,
    pub total: u32,
    /// Rounded percentage; 0 for an empty section
    pub percent: u8,
}

impl SectionProgress {
    pub fn new(answered: u32, total: u32) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (f64::from(answered.min(total)) / f64::from(total) * 100.0).round() as u8
        };
        Self {
            answered,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }

    fn count<'a>(questions: impl Iterator<Item = &'a Question>, sheet: &AnswerSheet) -> Self {
        let (answered, total) = questions.fold((0, 0), |(answered, total), question| {
            let hit = u32::from(sheet.is_answered(question.id.as_str()));
            (answered + hit, total + 1)
        });
        Self::new(answered, total)
    }
}

/// Progress through the whole assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentProgress {
    pub attributes: SectionProgress,
    pub alignment: SectionProgress,
    pub race: SectionProgress,
    pub overall: SectionProgress,
    /// First question in bank order with no selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_unanswered: Option<QuestionId>,
}

impl AssessmentProgress {
    pub fn is_complete(&self) -> bool {
        self.overall.is_complete()
    }
}

pub fn progress(bank: &QuestionBank, sheet: &AnswerSheet) -> AssessmentProgress {
    let section = |category| SectionProgress::count(bank.questions_in(category), sheet);

    AssessmentProgress {
        attributes: section(QuestionCategory::Attribute),
        alignment: section(QuestionCategory::Alignment),
        race: section(QuestionCategory::Race),
        overall: SectionProgress::count(bank.questions().iter(), sheet),
        next_unanswered: bank
            .questions()
            .iter()
            .find(|question| !sheet.is_answered(question.id.as_str()))
            .map(|question| question.id.clone()),
    }
}
