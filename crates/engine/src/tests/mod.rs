//! Property-based tests for the scoring pipeline
//!
//! Unit tests live next to each module. These check invariants that must hold
//! for every answer set, generated with proptest over the bundled bank:
//!
//! - Six attribute entries, each bounded
//! - Same input, same output
//! - Input order is irrelevant once duplicates are removed
//! - Later duplicates override earlier ones
//! - Race confidence stays within [0, 1]
//! - Complete answer sets always land on one of the 54 classes
//!
//! Case count follows `PROPTEST_CASES` (default 256).
