//! Clinical payload models: history, surgeries, admissions, medications.

use serde::{Deserialize, Serialize};

/// A patient's accumulated medical history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalHistory {
    pub chronic_diseases: Vec<String>,
    pub surgeries: Vec<Surgery>,
    pub allergies: AllergyProfile,
    /// Conditions reported among relatives
    pub family_history: Vec<String>,
    /// Non-surgical inpatient admissions
    pub admissions: Vec<Admission>,
}

impl MedicalHistory {
    /// Surgery type labels, in recorded order.
    pub fn surgery_types(&self) -> Vec<String> {
        self.surgeries.iter().map(|s| s.kind.clone()).collect()
    }

    /// Whether any recorded surgery had complications.
    pub fn had_surgical_complications(&self) -> bool {
        self.surgeries.iter().any(|s| s.complications)
    }
}

/// A single surgical procedure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Surgery {
    /// Procedure label (e.g. "Gallbladder Removal")
    pub kind: String,
    pub year: u16,
    pub surgeon: String,
    pub anesthesia: Anesthesia,
    pub complications: bool,
    /// Present only when `complications` is set
    pub complication_note: Option<String>,
}

/// Anesthesia modality used for a surgery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anesthesia {
    General,
    Spinal,
    Local,
    Sedation,
}

/// Allergies, categorized the way the intake form captures them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllergyProfile {
    pub drug: Vec<String>,
    pub food: Vec<String>,
    pub chemical: Vec<String>,
}

impl AllergyProfile {
    /// True when no allergy of any category is recorded.
    pub fn is_empty(&self) -> bool {
        self.drug.is_empty() && self.food.is_empty() && self.chemical.is_empty()
    }
}

/// A non-surgical inpatient admission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Admission {
    pub date: String,
    pub reason: String,
    pub duration: String,
}

/// The most recent outpatient consultation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    pub date: String,
    pub doctor: String,
    pub department: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub recommendations: String,
}

/// One inpatient admission log entry with physician, procedures and summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospitalization {
    pub date: String,
    pub duration: String,
    pub chief_complaint: String,
    pub physician: String,
    pub history_taken_by: String,
    pub procedures: Vec<String>,
    pub clinical_summary: String,
}

/// An active or past medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub duration: String,
}

/// Vaccination card: completed doses plus missing/overdue entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccinationRecord {
    pub completed: Vec<VaccineDose>,
    pub missing: Vec<String>,
}

impl VaccinationRecord {
    /// Whether the card has no missing or overdue vaccines.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// A single administered vaccine dose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccineDose {
    pub name: String,
    /// ISO date, or "Initial" for the childhood schedule
    pub date: String,
}

/// Socio-economic attributes captured at registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialData {
    pub religion: String,
    pub financial_status: String,
    pub marriage_type: String,
    pub family_atmosphere: String,
    pub dietary_habits: String,
}
