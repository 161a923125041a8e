//! Assessment vocabulary types
//!
//! Closed enumerations shared by the question bank, the class table, and the
//! scoring engine. Each enum that takes part in a tie-break exposes its
//! canonical ordering as an `ALL` constant.

mod alignment;
mod attribute;
mod branch;
mod race;

pub use alignment::{Alignment, MoralPosition, OrderPosition};
pub use attribute::{attribute_code, AttributeName, AttributeTier};
pub use branch::{display_title, Branch};
pub use race::Race;
