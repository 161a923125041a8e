//! Answer list builders.

use charforge_domain::{Answer, AttributeName, QuestionBank};

/// Builds an answer list by section, numbering questions the way the banks do.
///
/// `attribute(Strength, &["E", "C"])` answers `STR-1` with E and `STR-2` with C.
#[derive(Debug, Default, Clone)]
pub struct AnswerBuilder {
    answers: Vec<Answer>,
}

impl AnswerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(self, attribute: AttributeName, options: &[&str]) -> Self {
        self.numbered(attribute.code(), options)
    }

    pub fn alignment(self, options: &[&str]) -> Self {
        self.numbered("ALIGN", options)
    }

    pub fn race(self, options: &[&str]) -> Self {
        self.numbered("RACE", options)
    }

    /// Explicit `(question_id, option_id)` pairs, appended as given.
    pub fn pairs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.answers
            .extend(pairs.iter().map(|&(q, o)| Answer::new(q, o)));
        self
    }

    pub fn build(self) -> Vec<Answer> {
        self.answers
    }

    fn numbered(mut self, prefix: &str, options: &[&str]) -> Self {
        self.answers.extend(
            options
                .iter()
                .enumerate()
                .map(|(i, &option)| Answer::new(format!("{}-{}", prefix, i + 1), option)),
        );
        self
    }
}

/// One answer per bank question, picking `options[choice % len]` each time.
pub fn answer_every_question(bank: &QuestionBank, choice: usize) -> Vec<Answer> {
    bank.questions()
        .iter()
        .map(|question| {
            let option = &question.options[choice % question.options.len()];
            Answer::new(question.id.clone(), option.id.clone())
        })
        .collect()
}
