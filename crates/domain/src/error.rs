//! Unified error types for the domain layer
//!
//! Every failure here is a contract violation of the authored data (question
//! bank or class table) or a parse failure of a vocabulary value. Scoring itself
//! never fails, so answers never produce a `DomainError`.

use thiserror::Error;

use crate::types::{Alignment, Branch};

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a question with too few options)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (vocabulary values, bank/table JSON)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The same identifier appears twice where it must be unique
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A (branch, alignment) pair has no class in the lookup table
    #[error("Class table has no entry for {branch} / {alignment}")]
    MissingClass { branch: Branch, alignment: Alignment },

    /// A question set does not have the expected number of questions
    #[error("Expected {expected} {what} questions, found {actual}")]
    UnexpectedCount {
        what: String,
        expected: usize,
        actual: usize,
    },
}

impl DomainError {
    /// Creates a validation error for shape violations in authored data.
    ///
    /// # Example
    /// ```ignore
    /// if question.options.len() < 2 {
    ///     return Err(DomainError::validation("STR-1 needs at least 2 options"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a duplicate identifier error
    pub fn duplicate_id(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    /// Create a missing class table entry error
    pub fn missing_class(branch: Branch, alignment: Alignment) -> Self {
        Self::MissingClass { branch, alignment }
    }

    /// Create an unexpected question count error
    pub fn unexpected_count(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::UnexpectedCount {
            what: what.into(),
            expected,
            actual,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
