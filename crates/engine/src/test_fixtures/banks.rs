//! Synthetic question bank with evenly spread option weights.
//!
//! The bundled bank is authored prose and some of its attribute questions top
//! out below the maximum score, so tests that need exact totals use this one.
//!
//! | Category  | Option ids | Weights                                           |
//! |-----------|------------|---------------------------------------------------|
//! | attribute | A..E       | score 0..4                                        |
//! | alignment | A..F       | lawful, chaotic, good, evil, lawful+good, chaotic+evil (1 each) |
//! | race      | A..F       | `Race::ALL` in order                              |

use std::sync::{Arc, LazyLock};

use charforge_domain::{
    AttributeName, Question, QuestionBank, QuestionCategory, QuestionOption, Race,
    ALIGNMENT_QUESTION_COUNT, QUESTIONS_PER_ATTRIBUTE, RACE_QUESTION_COUNT,
};

pub const UNIFORM_ATTRIBUTE_OPTIONS: [&str; 5] = ["A", "B", "C", "D", "E"];
pub const UNIFORM_ALIGNMENT_OPTIONS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
pub const UNIFORM_RACE_OPTIONS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

static UNIFORM_BANK: LazyLock<Arc<QuestionBank>> = LazyLock::new(|| {
    let bank = QuestionBank::new("uniform-test", uniform_questions());
    Arc::new(bank.expect("uniform bank is valid"))
});

/// Shared instance of the uniform test bank.
pub fn uniform_bank() -> Arc<QuestionBank> {
    Arc::clone(&UNIFORM_BANK)
}

fn uniform_questions() -> Vec<Question> {
    let mut questions = Vec::new();

    for attr in AttributeName::ALL {
        for n in 1..=QUESTIONS_PER_ATTRIBUTE {
            let options = UNIFORM_ATTRIBUTE_OPTIONS
                .iter()
                .zip(0u8..)
                .map(|(&id, score)| QuestionOption::scored(id, score))
                .collect();
            questions.push(
                Question::attribute(format!("{}-{}", attr.code(), n), attr, options)
                    .with_title(format!("{} question {}", attr.display_name(), n)),
            );
        }
    }

    for n in 1..=ALIGNMENT_QUESTION_COUNT {
        let options = vec![
            QuestionOption::weighted("A", 1, 0, 0, 0),
            QuestionOption::weighted("B", 0, 1, 0, 0),
            QuestionOption::weighted("C", 0, 0, 1, 0),
            QuestionOption::weighted("D", 0, 0, 0, 1),
            QuestionOption::weighted("E", 1, 0, 1, 0),
            QuestionOption::weighted("F", 0, 1, 0, 1),
        ];
        questions.push(Question::new(
            format!("ALIGN-{}", n),
            QuestionCategory::Alignment,
            options,
        ));
    }

    for n in 1..=RACE_QUESTION_COUNT {
        let options = UNIFORM_RACE_OPTIONS
            .iter()
            .zip(Race::ALL)
            .map(|(&id, race)| QuestionOption::voting(id, race))
            .collect();
        questions.push(Question::new(
            format!("RACE-{}", n),
            QuestionCategory::Race,
            options,
        ));
    }

    questions
}
