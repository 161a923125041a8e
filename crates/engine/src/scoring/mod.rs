//! The four independent scorers.
//!
//! Attributes, alignment, and race each read their own question set from the
//! bank; class resolution combines the first two. All of them read answers
//! through an [`AnswerSheet`](charforge_domain::AnswerSheet).

pub mod alignment;
pub mod attributes;
pub mod class;
pub mod race;

pub use alignment::{alignment_from_axes, classify_alignment, AlignmentResult};
pub use attributes::{score_attributes, AttributeResult, AttributeScores};
pub use class::{resolve_class, ClassResolution};
pub use race::{vote_race, RaceResult};
