//! Validated, immutable question bank
//!
//! The bank is authored data (versioned JSON). It is checked once on
//! construction and never mutated afterwards; scorers hold it behind an `Arc`
//! and read it from any thread.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use crate::entities::{
    Question, QuestionCategory, QuestionOption, MAX_OPTIONS, MAX_OPTION_SCORE, MIN_OPTIONS,
};
use crate::error::DomainError;
use crate::ids::QuestionId;
use crate::types::AttributeName;

/// Questions per attribute in a complete bank.
pub const QUESTIONS_PER_ATTRIBUTE: usize = 5;

/// Alignment questions in a complete bank.
pub const ALIGNMENT_QUESTION_COUNT: usize = 6;

/// Race questions in a complete bank.
pub const RACE_QUESTION_COUNT: usize = 6;

/// Total questions in a complete bank (6 x 5 + 6 + 6).
pub const CORE_QUESTION_COUNT: usize = AttributeName::ALL.len() * QUESTIONS_PER_ATTRIBUTE
    + ALIGNMENT_QUESTION_COUNT
    + RACE_QUESTION_COUNT;

const STANDARD_BANK_JSON: &str = include_str!("../data/question_bank.json");

static STANDARD_BANK: LazyLock<Arc<QuestionBank>> = LazyLock::new(|| {
    let bank = QuestionBank::from_json(STANDARD_BANK_JSON)
        .expect("bundled question bank is valid");
    tracing::info!(
        version = %bank.version(),
        questions = bank.len(),
        "Loaded standard question bank"
    );
    Arc::new(bank)
});

/// On-disk shape of a question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBankData {
    pub version: String,
    pub questions: Vec<Question>,
}

/// The full battery, partitioned by category.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    version: String,
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
    by_attribute: [Vec<usize>; 6],
    alignment: Vec<usize>,
    race: Vec<usize>,
}

impl QuestionBank {
    /// Validate and index a set of questions.
    ///
    /// Fails on duplicate ids, malformed options, or a partition that does not
    /// match the 6 x 5 / 6 / 6 layout.
    pub fn new(version: impl Into<String>, questions: Vec<Question>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(questions.len());
        let mut by_attribute: [Vec<usize>; 6] = Default::default();
        let mut alignment = Vec::new();
        let mut race = Vec::new();

        for (position, question) in questions.iter().enumerate() {
            validate_question(question)?;
            if index.insert(question.id.clone(), position).is_some() {
                return Err(DomainError::duplicate_id("question", question.id.as_str()));
            }
            match question.category {
                QuestionCategory::Attribute => {
                    // validate_question guarantees the tag
                    if let Some(attr) = question.attribute {
                        by_attribute[attr.canonical_index()].push(position);
                    }
                }
                QuestionCategory::Alignment => alignment.push(position),
                QuestionCategory::Race => race.push(position),
            }
        }

        for attr in AttributeName::ALL {
            let count = by_attribute[attr.canonical_index()].len();
            if count != QUESTIONS_PER_ATTRIBUTE {
                return Err(DomainError::unexpected_count(
                    attr.as_str(),
                    QUESTIONS_PER_ATTRIBUTE,
                    count,
                ));
            }
        }
        if alignment.len() != ALIGNMENT_QUESTION_COUNT {
            return Err(DomainError::unexpected_count(
                "alignment",
                ALIGNMENT_QUESTION_COUNT,
                alignment.len(),
            ));
        }
        if race.len() != RACE_QUESTION_COUNT {
            return Err(DomainError::unexpected_count(
                "race",
                RACE_QUESTION_COUNT,
                race.len(),
            ));
        }

        Ok(Self {
            version: version.into(),
            questions,
            index,
            by_attribute,
            alignment,
            race,
        })
    }

    /// Parse and validate a bank from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let data: QuestionBankData = serde_json::from_str(json)?;
        Self::new(data.version, data.questions)
    }

    /// The bundled default bank, parsed on first use.
    pub fn standard() -> Arc<QuestionBank> {
        Arc::clone(&STANDARD_BANK)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All questions in bank order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.index.get(question_id).map(|&i| &self.questions[i])
    }

    pub fn option(&self, question_id: &str, option_id: &str) -> Option<&QuestionOption> {
        self.question(question_id)
            .and_then(|question| question.option(option_id))
    }

    pub fn attribute_questions(&self, attribute: AttributeName) -> impl Iterator<Item = &Question> {
        self.by_attribute[attribute.canonical_index()]
            .iter()
            .map(|&i| &self.questions[i])
    }

    pub fn alignment_questions(&self) -> impl Iterator<Item = &Question> {
        self.alignment.iter().map(|&i| &self.questions[i])
    }

    pub fn race_questions(&self) -> impl Iterator<Item = &Question> {
        self.race.iter().map(|&i| &self.questions[i])
    }

    /// Questions of one category, in bank order.
    pub fn questions_in(&self, category: QuestionCategory) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.category == category)
    }

    /// Export back to the on-disk shape.
    pub fn to_data(&self) -> QuestionBankData {
        QuestionBankData {
            version: self.version.clone(),
            questions: self.questions.clone(),
        }
    }
}

fn validate_question(question: &Question) -> Result<(), DomainError> {
    let id = question.id.as_str();
    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&question.options.len()) {
        return Err(DomainError::validation(format!(
            "{} has {} options, expected {}-{}",
            id,
            question.options.len(),
            MIN_OPTIONS,
            MAX_OPTIONS
        )));
    }

    let mut seen = HashSet::with_capacity(question.options.len());
    for option in &question.options {
        if !seen.insert(option.id.as_str()) {
            return Err(DomainError::duplicate_id(
                "option",
                format!("{}/{}", id, option.id),
            ));
        }
        validate_option(question, option)?;
    }

    if question.category == QuestionCategory::Attribute && question.attribute.is_none() {
        return Err(DomainError::validation(format!(
            "{} is an attribute question without an attribute tag",
            id
        )));
    }
    if question.category != QuestionCategory::Attribute && question.attribute.is_some() {
        return Err(DomainError::validation(format!(
            "{} is a {} question but carries an attribute tag",
            id, question.category
        )));
    }
    Ok(())
}

fn validate_option(question: &Question, option: &QuestionOption) -> Result<(), DomainError> {
    let at = || format!("{}/{}", question.id, option.id);
    match question.category {
        QuestionCategory::Attribute => match option.score {
            Some(score) if score <= MAX_OPTION_SCORE => {}
            Some(score) => {
                return Err(DomainError::validation(format!(
                    "{} score {} exceeds {}",
                    at(),
                    score,
                    MAX_OPTION_SCORE
                )))
            }
            None => {
                return Err(DomainError::validation(format!("{} has no score", at())));
            }
        },
        QuestionCategory::Alignment => {
            if option.score.is_some() || option.race.is_some() {
                return Err(DomainError::validation(format!(
                    "{} may only carry alignment weights",
                    at()
                )));
            }
        }
        QuestionCategory::Race => {
            if option.race.is_none() {
                return Err(DomainError::validation(format!("{} has no race tag", at())));
            }
            if option.score.is_some() || option.has_axis_weights() {
                return Err(DomainError::validation(format!(
                    "{} may only carry a race tag",
                    at()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Race;

    fn attribute_set(attr: AttributeName) -> Vec<Question> {
        (1..=QUESTIONS_PER_ATTRIBUTE)
            .map(|n| {
                Question::attribute(
                    format!("{}-{}", attr.code(), n),
                    attr,
                    vec![QuestionOption::scored("A", 0), QuestionOption::scored("B", 4)],
                )
            })
            .collect()
    }

    fn minimal_questions() -> Vec<Question> {
        let mut questions: Vec<Question> = AttributeName::ALL
            .iter()
            .flat_map(|&attr| attribute_set(attr))
            .collect();
        for n in 1..=ALIGNMENT_QUESTION_COUNT {
            questions.push(Question::new(
                format!("ALIGN-{}", n),
                QuestionCategory::Alignment,
                vec![
                    QuestionOption::weighted("A", 3, 0, 0, 0),
                    QuestionOption::weighted("B", 0, 3, 0, 0),
                ],
            ));
        }
        for n in 1..=RACE_QUESTION_COUNT {
            questions.push(Question::new(
                format!("RACE-{}", n),
                QuestionCategory::Race,
                Race::ALL
                    .iter()
                    .zip(["A", "B", "C", "D", "E", "F"])
                    .map(|(&race, id)| QuestionOption::voting(id, race))
                    .collect(),
            ));
        }
        questions
    }

    #[test]
    fn standard_bank_has_the_core_layout() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), CORE_QUESTION_COUNT);
        assert_eq!(CORE_QUESTION_COUNT, 42);
        for attr in AttributeName::ALL {
            let questions: Vec<_> = bank.attribute_questions(attr).collect();
            assert_eq!(questions.len(), 5);
            assert!(questions.iter().all(|q| q.attribute == Some(attr)));
        }
        assert_eq!(bank.alignment_questions().count(), 6);
        assert_eq!(bank.race_questions().count(), 6);
        assert!(!bank.version().is_empty());
    }

    #[test]
    fn standard_bank_lookups() {
        let bank = QuestionBank::standard();
        let q = bank.question("STR-3").unwrap();
        assert_eq!(q.category, QuestionCategory::Attribute);
        assert_eq!(bank.option("STR-3", "D").and_then(|o| o.score), Some(4));
        assert_eq!(
            bank.option("RACE-1", "F").and_then(|o| o.race),
            Some(Race::Dragonborn)
        );
        assert!(bank.question("STR-9").is_none());
        assert!(bank.option("STR-3", "Z").is_none());
    }

    #[test]
    fn minimal_bank_is_valid() {
        let bank = QuestionBank::new("test", minimal_questions()).unwrap();
        assert_eq!(bank.len(), CORE_QUESTION_COUNT);
        assert_eq!(bank.questions_in(QuestionCategory::Race).count(), 6);
    }

    #[test]
    fn duplicate_question_id_is_rejected() {
        let mut questions = minimal_questions();
        questions[1].id = QuestionId::new("STR-1");
        let err = QuestionBank::new("test", questions).unwrap_err();
        assert_eq!(err, DomainError::duplicate_id("question", "STR-1"));
    }

    #[test]
    fn duplicate_option_id_is_rejected() {
        let mut questions = minimal_questions();
        questions[0].options[1].id = "A".into();
        let err = QuestionBank::new("test", questions).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateId { kind: "option", .. }));
    }

    #[test]
    fn option_count_bounds_are_enforced() {
        let mut questions = minimal_questions();
        questions[0].options.truncate(1);
        assert!(matches!(
            QuestionBank::new("test", questions),
            Err(DomainError::Validation(_))
        ));

        let mut questions = minimal_questions();
        questions[0].options = (0..7)
            .map(|n| QuestionOption::scored(format!("O{}", n), 1))
            .collect();
        assert!(matches!(
            QuestionBank::new("test", questions),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn attribute_score_above_max_is_rejected() {
        let mut questions = minimal_questions();
        questions[0].options[1].score = Some(MAX_OPTION_SCORE + 1);
        assert!(matches!(
            QuestionBank::new("test", questions),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn race_option_without_tag_is_rejected() {
        let mut questions = minimal_questions();
        let last = questions.len() - 1;
        questions[last].options[0].race = None;
        let err = QuestionBank::new("test", questions).unwrap_err();
        assert!(err.to_string().contains("RACE-6/A"));
    }

    #[test]
    fn missing_attribute_question_is_rejected() {
        let mut questions = minimal_questions();
        questions.remove(0);
        let err = QuestionBank::new("test", questions).unwrap_err();
        assert_eq!(err, DomainError::unexpected_count("strength", 5, 4));
    }

    #[test]
    fn bank_round_trips_through_json() {
        let bank = QuestionBank::standard();
        let json = serde_json::to_string(&bank.to_data()).unwrap();
        let reparsed = QuestionBank::from_json(&json).unwrap();
        assert_eq!(reparsed.questions(), bank.questions());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            QuestionBank::from_json("{ not json"),
            Err(DomainError::Parse(_))
        ));
    }
}
