//! Test fixtures shared by the scorer, composer, and engine tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{uniform_bank, AnswerBuilder};
//!
//! #[test]
//! fn strength_maxes_out() {
//!     let answers = AnswerBuilder::new()
//!         .attribute(AttributeName::Strength, &["E"; 5])
//!         .build();
//!     let scores = score_attributes(&uniform_bank(), &AnswerSheet::from_answers(&answers));
//!     assert_eq!(scores[AttributeName::Strength].normalized, 100);
//! }
//! ```

mod answers;
mod banks;

pub use answers::{answer_every_question, AnswerBuilder};
pub use banks::{
    uniform_bank, UNIFORM_ALIGNMENT_OPTIONS, UNIFORM_ATTRIBUTE_OPTIONS, UNIFORM_RACE_OPTIONS,
};
