//! Alignment classifier
//!
//! Sums the four axis weights over the answered alignment questions, nets them
//! into an order axis and a moral axis, and places each axis with a symmetric
//! threshold. A single option may feed both axes.

use serde::{Deserialize, Serialize};

use charforge_domain::{Alignment, AnswerSheet, MoralPosition, OrderPosition, QuestionBank};

use crate::config::ScoringConfig;

/// Raw axis totals and the resulting alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResult {
    pub lawful_score: u32,
    pub chaotic_score: u32,
    pub good_score: u32,
    pub evil_score: u32,
    pub alignment: Alignment,
}

impl AlignmentResult {
    /// `lawful - chaotic`; positive leans Lawful.
    pub fn order_axis(&self) -> i32 {
        self.lawful_score as i32 - self.chaotic_score as i32
    }

    /// `good - evil`; positive leans Good.
    pub fn moral_axis(&self) -> i32 {
        self.good_score as i32 - self.evil_score as i32
    }
}

/// Place both axes on the 3x3 grid.
pub fn alignment_from_axes(order_axis: i32, moral_axis: i32, config: &ScoringConfig) -> Alignment {
    Alignment::from_positions(
        OrderPosition::from_axis(order_axis, config.order_threshold),
        MoralPosition::from_axis(moral_axis, config.moral_threshold),
    )
}

pub fn classify_alignment(
    bank: &QuestionBank,
    sheet: &AnswerSheet,
    config: &ScoringConfig,
) -> AlignmentResult {
    let mut result = AlignmentResult::default();

    for question in bank.alignment_questions() {
        let Some(selected) = sheet.selection(question.id.as_str()) else {
            continue;
        };
        let Some(option) = question.option(selected.as_str()) else {
            tracing::trace!(question = %question.id, option = %selected, "Ignoring unknown option");
            continue;
        };
        result.lawful_score += u32::from(option.lawful);
        result.chaotic_score += u32::from(option.chaotic);
        result.good_score += u32::from(option.good);
        result.evil_score += u32::from(option.evil);
    }

    result.alignment = alignment_from_axes(result.order_axis(), result.moral_axis(), config);
    result
}
