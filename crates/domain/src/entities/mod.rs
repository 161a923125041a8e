//! Assessment entities: questions, options, and answers.

mod answer;
mod question;

pub use answer::{Answer, AnswerSheet};
pub use question::{
    Question, QuestionCategory, QuestionOption, MAX_OPTIONS, MAX_OPTION_SCORE, MIN_OPTIONS,
};
