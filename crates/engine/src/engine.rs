//! Scoring engine over one bank, one class table, and one configuration.

use std::sync::Arc;

use charforge_domain::{Answer, AnswerSheet, ClassTable, QuestionBank};

use crate::character::{self, CharacterResult, PartialCharacterResult};
use crate::config::{ConfigError, ScoringConfig};
use crate::progress::{self, AssessmentProgress};
use crate::scoring::{self, AlignmentResult, AttributeScores, RaceResult};
use crate::validation::{self, AnswerValidation};

/// Classification pipeline entry point.
///
/// Holds only immutable data, so it is cheap to clone and safe to share across
/// threads. Every method folds the answers into an [`AnswerSheet`] first, so a
/// later answer for the same question replaces an earlier one.
#[derive(Debug, Clone)]
pub struct CharacterEngine {
    bank: Arc<QuestionBank>,
    table: Arc<ClassTable>,
    config: ScoringConfig,
}

impl CharacterEngine {
    /// Build from already-validated parts. See [`CharacterEngine::try_new`].
    pub fn new(bank: Arc<QuestionBank>, table: Arc<ClassTable>, config: ScoringConfig) -> Self {
        Self {
            bank,
            table,
            config,
        }
    }

    pub fn try_new(
        bank: Arc<QuestionBank>,
        table: Arc<ClassTable>,
        config: ScoringConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(bank, table, config))
    }

    /// Bundled bank and table with the default configuration.
    pub fn standard() -> Self {
        Self::new(
            QuestionBank::standard(),
            ClassTable::standard(),
            ScoringConfig::default(),
        )
    }

    /// Same data, different configuration.
    pub fn with_config(&self, config: ScoringConfig) -> Result<Self, ConfigError> {
        Self::try_new(Arc::clone(&self.bank), Arc::clone(&self.table), config)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn table(&self) -> &ClassTable {
        &self.table
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score_attributes(&self, answers: &[Answer]) -> AttributeScores {
        scoring::score_attributes(&self.bank, &AnswerSheet::from_answers(answers))
    }

    pub fn classify_alignment(&self, answers: &[Answer]) -> AlignmentResult {
        scoring::classify_alignment(
            &self.bank,
            &AnswerSheet::from_answers(answers),
            &self.config,
        )
    }

    pub fn vote_race(&self, answers: &[Answer]) -> RaceResult {
        scoring::vote_race(&self.bank, &AnswerSheet::from_answers(answers))
    }

    pub fn resolve_character(&self, answers: &[Answer]) -> CharacterResult {
        character::resolve_character(
            &self.bank,
            &self.table,
            &self.config,
            &AnswerSheet::from_answers(answers),
        )
    }

    pub fn partial_character(&self, answers: &[Answer]) -> PartialCharacterResult {
        character::partial_character(
            &self.bank,
            &self.table,
            &self.config,
            &AnswerSheet::from_answers(answers),
        )
    }

    pub fn validate_answers(&self, answers: &[Answer]) -> AnswerValidation {
        validation::validate_answers(&self.bank, &AnswerSheet::from_answers(answers))
    }

    pub fn progress(&self, answers: &[Answer]) -> AssessmentProgress {
        progress::progress(&self.bank, &AnswerSheet::from_answers(answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{answer_every_question, uniform_bank};
    use charforge_domain::{Alignment, AttributeName, Race};

    fn uniform_engine() -> CharacterEngine {
        CharacterEngine::new(
            uniform_bank(),
            ClassTable::standard(),
            ScoringConfig::default(),
        )
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_shareable() {
        assert_send_sync::<CharacterEngine>();
    }

    #[test]
    fn try_new_rejects_invalid_config() {
        let config = ScoringConfig {
            order_threshold: -1,
            ..ScoringConfig::default()
        };
        let result =
            CharacterEngine::try_new(uniform_bank(), ClassTable::standard(), config);
        assert!(matches!(
            result,
            Err(ConfigError::NonPositiveThreshold {
                field_name: "order_threshold",
                value: -1
            })
        ));
    }

    #[test]
    fn with_config_keeps_data() {
        let engine = uniform_engine();
        let config = ScoringConfig {
            order_threshold: 1,
            ..ScoringConfig::default()
        };
        let tuned = engine.with_config(config).unwrap();
        assert_eq!(tuned.bank().version(), "uniform-test");
        assert_eq!(tuned.config().order_threshold, 1);

        let answers = vec![Answer::new("ALIGN-1", "A")];
        assert_eq!(
            engine.classify_alignment(&answers).alignment,
            Alignment::TrueNeutral
        );
        assert_eq!(
            tuned.classify_alignment(&answers).alignment,
            Alignment::LawfulNeutral
        );
    }

    #[test]
    fn methods_agree_with_each_other() {
        let engine = uniform_engine();
        // choice 3: attribute D (3), alignment D (evil), race D (halfling)
        let answers = answer_every_question(engine.bank(), 3);
        let full = engine.resolve_character(&answers);

        assert_eq!(full.attributes, engine.score_attributes(&answers));
        assert_eq!(full.alignment, engine.classify_alignment(&answers));
        assert_eq!(full.race, engine.vote_race(&answers));
        assert_eq!(full.alignment.alignment, Alignment::NeutralEvil);
        assert_eq!(full.race.race, Race::Halfling);
        assert_eq!(full.primary_attribute, AttributeName::Strength);
        assert_eq!(full.class.as_str(), "mercenary");
        assert!(engine.validate_answers(&answers).valid);
        assert!(engine.progress(&answers).is_complete());

        let partial = engine.partial_character(&answers);
        assert_eq!(partial.class.map(|c| c.class), Some(full.class));
    }

    #[test]
    fn standard_engine_scores_standard_bank() {
        let engine = CharacterEngine::standard();
        let answers = answer_every_question(engine.bank(), 0);
        let result = engine.resolve_character(&answers);
        assert!(engine.table().contains(&result.class));
        assert_eq!(engine.progress(&answers).overall.answered, 42);
    }
}
