//! CharForge domain: the vocabulary and authored data of the character assessment.
//!
//! Nothing in this crate scores answers. It defines the closed enumerations
//! (attributes, alignments, races, branches), the question bank and class
//! table with their load-time invariants, and the answer model the engine
//! consumes.

extern crate self as charforge_domain;

pub mod class_table;
pub mod entities;
pub mod error;
pub mod ids;
pub mod question_bank;
pub mod types;

pub use class_table::{ClassTable, ClassTableData, CLASS_COUNT};
pub use entities::{
    Answer, AnswerSheet, Question, QuestionCategory, QuestionOption, MAX_OPTIONS,
    MAX_OPTION_SCORE, MIN_OPTIONS,
};
pub use error::DomainError;
pub use ids::{ClassId, OptionId, QuestionId};
pub use question_bank::{
    QuestionBank, QuestionBankData, ALIGNMENT_QUESTION_COUNT, CORE_QUESTION_COUNT,
    QUESTIONS_PER_ATTRIBUTE, RACE_QUESTION_COUNT,
};
pub use types::{
    display_title, Alignment, AttributeName, AttributeTier, Branch, MoralPosition, OrderPosition,
    Race,
};
