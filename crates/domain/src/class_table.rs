//! Branch x Alignment -> Class lookup table
//!
//! Authored data covering all 6 branches x 9 alignments. Completeness and
//! distinctness are checked when the table is built, so lookups never need a
//! fallback.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, LazyLock};

use crate::error::DomainError;
use crate::ids::ClassId;
use crate::types::{Alignment, Branch};

/// Number of classes in a complete table.
pub const CLASS_COUNT: usize = Branch::ALL.len() * Alignment::ALL.len();

const STANDARD_TABLE_JSON: &str = include_str!("../data/class_table.json");

static STANDARD_TABLE: LazyLock<Arc<ClassTable>> = LazyLock::new(|| {
    let table =
        ClassTable::from_json(STANDARD_TABLE_JSON).expect("bundled class table is complete");
    tracing::info!(version = %table.version(), "Loaded standard class table");
    Arc::new(table)
});

/// On-disk shape of the class table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTableData {
    pub version: String,
    pub classes: BTreeMap<Branch, BTreeMap<Alignment, ClassId>>,
}

/// Complete, immutable class lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTable {
    version: String,
    classes: BTreeMap<Branch, BTreeMap<Alignment, ClassId>>,
}

impl ClassTable {
    /// Build a table, rejecting any missing (branch, alignment) pair and any
    /// class id used twice.
    pub fn new(
        version: impl Into<String>,
        classes: BTreeMap<Branch, BTreeMap<Alignment, ClassId>>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(CLASS_COUNT);
        for branch in Branch::ALL {
            for alignment in Alignment::ALL {
                let class = classes
                    .get(&branch)
                    .and_then(|row| row.get(&alignment))
                    .ok_or_else(|| DomainError::missing_class(branch, alignment))?;
                if !seen.insert(class.as_str()) {
                    return Err(DomainError::duplicate_id("class", class.as_str()));
                }
            }
        }
        Ok(Self {
            version: version.into(),
            classes,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let data: ClassTableData = serde_json::from_str(json)?;
        Self::new(data.version, data.classes)
    }

    /// The bundled default table, parsed on first use.
    pub fn standard() -> Arc<ClassTable> {
        Arc::clone(&STANDARD_TABLE)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The class for a branch and alignment. Total over every pair.
    pub fn class_for(&self, branch: Branch, alignment: Alignment) -> &ClassId {
        // Completeness is checked in `new`, and the map is never mutated.
        &self.classes[&branch][&alignment]
    }

    /// Every class id in branch-then-alignment order.
    pub fn classes(&self) -> impl Iterator<Item = (Branch, Alignment, &ClassId)> {
        self.classes.iter().flat_map(|(&branch, row)| {
            row.iter()
                .map(move |(&alignment, class)| (branch, alignment, class))
        })
    }

    pub fn contains(&self, class: &ClassId) -> bool {
        self.classes().any(|(_, _, c)| c == class)
    }

    /// Reverse lookup: where a class sits in the table.
    pub fn position_of(&self, class: &str) -> Option<(Branch, Alignment)> {
        self.classes()
            .find(|(_, _, c)| c.as_str() == class)
            .map(|(branch, alignment, _)| (branch, alignment))
    }

    pub fn to_data(&self) -> ClassTableData {
        ClassTableData {
            version: self.version.clone(),
            classes: self.classes.clone(),
        }
    }
}
