//! CharForge Engine library.
//!
//! Turns a set of questionnaire answers into a character: six attribute
//! scores, an alignment, a race, and a class.
//!
//! ## Structure
//!
//! - `scoring/` - The four scorers (attributes, alignment, race, class)
//! - `character` - Full and partial result composition
//! - `validation` - Missing/invalid answer reporting
//! - `progress` - Answered/total counts per section
//! - `engine` - [`CharacterEngine`], binding a bank, table, and config
//! - `config` - [`ScoringConfig`] and its environment overrides
//!
//! The free functions at the crate root run against the bundled question bank
//! and class table with the default configuration.

use std::sync::LazyLock;

use charforge_domain::Answer;

pub mod character;
pub mod config;
pub mod engine;
pub mod progress;
pub mod scoring;
pub mod validation;

/// Shared test fixtures.
#[cfg(test)]
pub mod test_fixtures;

/// Cross-module property tests.
#[cfg(test)]
mod tests;

pub use character::{CharacterResult, PartialCharacterResult};
pub use config::{
    ConfigError, ScoringConfig, DEFAULT_AXIS_THRESHOLD, DEFAULT_PARTIAL_CLASS_MIN_ANSWERS,
};
pub use engine::CharacterEngine;
pub use progress::{AssessmentProgress, SectionProgress};
pub use scoring::{
    alignment_from_axes, AlignmentResult, AttributeResult, AttributeScores, ClassResolution,
    RaceResult,
};
pub use validation::AnswerValidation;

static STANDARD_ENGINE: LazyLock<CharacterEngine> = LazyLock::new(CharacterEngine::standard);

/// The process-wide engine behind the free functions.
pub fn standard_engine() -> &'static CharacterEngine {
    &STANDARD_ENGINE
}

/// Raw and normalized score for each of the six attributes.
pub fn score_attributes(answers: &[Answer]) -> AttributeScores {
    STANDARD_ENGINE.score_attributes(answers)
}

/// Axis totals and the resulting place on the 3x3 alignment grid.
pub fn classify_alignment(answers: &[Answer]) -> AlignmentResult {
    STANDARD_ENGINE.classify_alignment(answers)
}

/// Plurality race vote with its confidence.
pub fn vote_race(answers: &[Answer]) -> RaceResult {
    STANDARD_ENGINE.vote_race(answers)
}

/// Full pipeline. Always yields a class, degrading gracefully on fewer answers.
pub fn resolve_character(answers: &[Answer]) -> CharacterResult {
    STANDARD_ENGINE.resolve_character(answers)
}

/// Pipeline for an unfinished questionnaire; sections appear as they are answered.
pub fn partial_character(answers: &[Answer]) -> PartialCharacterResult {
    STANDARD_ENGINE.partial_character(answers)
}

/// Missing, invalid, and unknown answers; advisory only.
pub fn validate_answers(answers: &[Answer]) -> AnswerValidation {
    STANDARD_ENGINE.validate_answers(answers)
}

/// Answered/total counts per section and the next unanswered question.
pub fn progress(answers: &[Answer]) -> AssessmentProgress {
    STANDARD_ENGINE.progress(answers)
}
