//! In-memory registry: the generated population and its read interface.

mod query;

pub use query::*;

use serde::Serialize;

use crate::generator::{generate, GeneratorConfig, GeneratorResult};
use crate::models::{FamilyUnit, PatientRecord};

/// A generated population with its derived family metadata.
///
/// Immutable after construction: there is no write path, and all queries
/// borrow. Consumers receive the value explicitly instead of importing shared
/// state.
#[derive(Debug, Clone, Serialize)]
pub struct Population {
    patients: Vec<PatientRecord>,
    families: Vec<FamilyUnit>,
    /// Construction timestamp, RFC 3339. Provenance only; not part of the
    /// seeded record content.
    generated_at: String,
}

impl Population {
    pub(crate) fn new(patients: Vec<PatientRecord>, families: Vec<FamilyUnit>) -> Self {
        Self {
            patients,
            families,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// All patients, in generation order.
    pub fn patients(&self) -> &[PatientRecord] {
        &self.patients
    }

    /// Derived family metadata, in first-seen order.
    pub fn families(&self) -> &[FamilyUnit] {
        &self.families
    }

    /// When this population was constructed.
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    /// Serialize the whole population to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Owning facade over a population, exposing the query layer as methods.
pub struct Registry {
    population: Population,
}

impl Registry {
    /// Generate a fresh population and wrap it.
    pub fn generate(config: &GeneratorConfig) -> GeneratorResult<Self> {
        Ok(Self {
            population: generate(config)?,
        })
    }

    /// Wrap an already generated population.
    pub fn from_population(population: Population) -> Self {
        Self { population }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn patients(&self) -> &[PatientRecord] {
        self.population.patients()
    }

    pub fn families(&self) -> &[FamilyUnit] {
        self.population.families()
    }

    /// Free-text and governorate search; see [`search`].
    pub fn search(&self, text: &str, governorate: &str) -> Vec<&PatientRecord> {
        search(self.population.patients(), text, governorate)
    }

    /// All members of a family; see [`members_of_family`].
    pub fn members_of_family(&self, family_id: &str) -> Vec<&PatientRecord> {
        members_of_family(self.population.patients(), family_id)
    }

    /// Metadata for a family; see [`family_metadata`].
    pub fn family_metadata(&self, family_id: &str) -> Option<&FamilyUnit> {
        family_metadata(self.population.families(), family_id)
    }
}
