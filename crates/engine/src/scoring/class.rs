//! Class resolver
//!
//! Only the primary attribute picks the branch; the table then maps
//! (branch, alignment) to a class. No blending of the other five scores.

use serde::{Deserialize, Serialize};

use charforge_domain::{Alignment, AttributeName, Branch, ClassId, ClassTable};

use super::attributes::AttributeScores;

/// The resolved class and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassResolution {
    #[serde(rename = "characterClass")]
    pub class: ClassId,
    pub branch: Branch,
    pub primary_attribute: AttributeName,
    pub secondary_attribute: AttributeName,
}

pub fn resolve_class(
    table: &ClassTable,
    attributes: &AttributeScores,
    alignment: Alignment,
) -> ClassResolution {
    let ranked = attributes.ranked();
    let primary_attribute = ranked[0];
    let branch = primary_attribute.branch();
    ClassResolution {
        class: table.class_for(branch, alignment).clone(),
        branch,
        primary_attribute,
        secondary_attribute: ranked[1],
    }
}
