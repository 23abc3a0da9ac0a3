//! Patient record model.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::clinical::{
    Consultation, Hospitalization, MedicalHistory, Medication, SocialData, VaccinationRecord,
};

/// A patient's position within their family unit.
///
/// The generator only emits `Father`/`Mother`/`Son`/`Daughter`; `Husband` and
/// `Wife` exist for records entered through other channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Father,
    Mother,
    Son,
    Daughter,
    Husband,
    Wife,
}

impl Role {
    /// Arabic display label for the role.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Role::Father => "الأب",
            Role::Mother => "الأم",
            Role::Son => "الابن",
            Role::Daughter => "الابنة",
            Role::Husband => "الزوج",
            Role::Wife => "الزوجة",
        }
    }

    /// Whether this role is one of the two parent positions.
    pub fn is_parent(&self) -> bool {
        matches!(self, Role::Father | Role::Mother | Role::Husband | Role::Wife)
    }

    /// Valid age band for the role: parents 35-79, children 1-30.
    pub fn age_band(&self) -> RangeInclusive<u8> {
        if self.is_parent() {
            35..=79
        } else {
            1..=30
        }
    }
}

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// One individual in the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Registry id, format `M-24-#####`, unique across the population
    pub id: String,
    /// Family this patient belongs to (many-to-one)
    pub family_id: String,
    /// Position within the family
    pub role: Role,
    /// Full native-script name: given + middle + family surname
    pub full_name: String,
    /// Latin transliteration: given + family surname
    pub full_name_en: String,
    pub gender: Gender,
    pub age: u8,
    /// One of the registry's four supported blood types
    pub blood_type: String,
    pub occupation: String,
    /// Shared across the family: neighborhood + governorate
    pub address: String,
    pub governorate: String,
    /// Photo reference keyed by full name
    pub photo: String,
    pub medical_history: MedicalHistory,
    pub last_consultation: Consultation,
    /// Inpatient admissions, most recent first
    pub hospitalizations: Vec<Hospitalization>,
    pub medications: Vec<Medication>,
    pub vaccinations: VaccinationRecord,
    pub social: SocialData,
    /// Free-text summary produced by the assistant boundary
    pub ai_summary: String,
}

impl PatientRecord {
    /// Family surname, the last segment of the native full name.
    pub fn surname(&self) -> &str {
        self.full_name
            .rsplit(' ')
            .next()
            .unwrap_or(&self.full_name)
    }

    /// Arabic label for the patient's family role.
    pub fn role_label_ar(&self) -> &'static str {
        self.role.label_ar()
    }

    /// Whether the patient's age falls inside the band their role allows.
    pub fn age_in_band(&self) -> bool {
        self.role.age_band().contains(&self.age)
    }
}
