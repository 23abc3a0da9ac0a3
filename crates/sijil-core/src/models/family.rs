//! Family-level metadata, derived from the generated population.

use serde::{Deserialize, Serialize};

/// Hereditary conditions recorded for every derived family.
pub const HEREDITARY_DISEASES: [&str; 1] = ["Thalassemia"];

/// Household-level disorders recorded for every derived family.
pub const FAMILY_DISORDERS: [&str; 1] = ["Asthma"];

/// Metadata shared by all patients with the same `family_id`.
///
/// Family units are never constructed independently: one entry is derived per
/// distinct family id present in the population after truncation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyUnit {
    pub family_id: String,
    /// Hereditary disease list shared across all members
    pub hereditary_diseases: Vec<String>,
    /// Family-level disorder list shared across all members
    pub family_disorders: Vec<String>,
}

impl FamilyUnit {
    /// Create the metadata entry for a family id with the registry's standard
    /// hereditary profile.
    pub fn new(family_id: impl Into<String>) -> Self {
        Self {
            family_id: family_id.into(),
            hereditary_diseases: HEREDITARY_DISEASES.iter().map(|d| d.to_string()).collect(),
            family_disorders: FAMILY_DISORDERS.iter().map(|d| d.to_string()).collect(),
        }
    }
}
