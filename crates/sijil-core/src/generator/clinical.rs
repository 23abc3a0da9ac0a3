//! Age-banded clinical payload construction.
//!
//! Payload content is drawn from adult or child pools depending on the
//! patient's age, and every draw goes through the caller's random source so a
//! seeded run reproduces identical payloads.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::models::{
    Admission, AllergyProfile, Anesthesia, Consultation, Hospitalization, MedicalHistory,
    Medication, SocialData, Surgery, VaccinationRecord, VaccineDose,
};

use super::{pick, REFERENCE_YEAR};

/// Age at which a patient receives adult clinical content.
const CLINICAL_ADULT_AGE: u8 = 18;

/// Youngest age a child can carry a surgical history.
const CHILD_SURGERY_MIN_AGE: u8 = 3;

const ADULT_CHRONIC: &[&str] = &[
    "Diabetes Type 2",
    "Hypertension",
    "Ischemic Heart Disease",
    "Hypothyroidism",
    "Chronic Kidney Disease",
];

const CHILD_CHRONIC: &[&str] = &["Asthma", "Atopic Dermatitis", "Iron Deficiency Anemia"];

const ADULT_SURGERY_TYPES: &[&str] = &[
    "Gallbladder Removal",
    "Appendectomy",
    "Inguinal Hernia Repair",
    "Cataract Extraction",
    "Coronary Angioplasty",
];

const CHILD_SURGERY_TYPES: &[&str] = &["Appendectomy", "Tonsillectomy", "Adenoidectomy"];

const SURGEONS: &[&str] = &[
    "Dr. Ali Al-Rawi",
    "Dr. Ahmed Kamil",
    "Dr. Layla Hassan",
    "Dr. Omar Saleh",
];

const ANESTHESIA_MODES: [Anesthesia; 4] = [
    Anesthesia::General,
    Anesthesia::Spinal,
    Anesthesia::Local,
    Anesthesia::Sedation,
];

const COMPLICATION_NOTES: &[&str] = &[
    "Postoperative wound infection, treated with antibiotics",
    "Minor intraoperative bleeding, controlled",
    "Prolonged recovery from anesthesia, observed overnight",
];

const DRUG_ALLERGIES: &[&str] = &["Penicillin", "Sulfa drugs", "Aspirin"];
const FOOD_ALLERGIES: &[&str] = &["Nuts", "Eggs", "Shellfish"];
const CHEMICAL_ALLERGIES: &[&str] = &["Iodine", "Latex"];

const FAMILY_HISTORY: &[&str] = &[
    "Hereditary Heart Disease",
    "Thalassemia",
    "Diabetes Type 2",
    "Asthma",
];

const ADMISSION_REASONS: &[&str] = &[
    "Severe Bronchitis",
    "Acute Gastroenteritis",
    "Community-Acquired Pneumonia",
];

const CONSULTING_DOCTORS: &[&str] = &["د. حسن الهاشمي", "د. سارة النعيمي", "د. كريم الواسطي"];

/// (department, symptoms, diagnosis, recommendations)
const ADULT_CONSULTATIONS: &[(&str, &str, &str, &str)] = &[
    (
        "Internal Medicine",
        "Fatigue and joint pain",
        "Vitamin D deficiency",
        "Start Vitamin D supplements 50,000 IU weekly.",
    ),
    (
        "Endocrinology",
        "Polyuria and increased thirst",
        "Poorly controlled blood glucose",
        "Adjust Metformin dose and review dietary habits.",
    ),
    (
        "Cardiology",
        "Exertional chest tightness",
        "Stable angina",
        "Start low-dose aspirin and refer for stress testing.",
    ),
];

const CHILD_CONSULTATIONS: &[(&str, &str, &str, &str)] = &[
    (
        "Pediatrics",
        "Night cough and wheezing",
        "Mild persistent asthma",
        "Start inhaled salbutamol as needed.",
    ),
    (
        "Pediatrics",
        "Fever and sore throat",
        "Acute tonsillitis",
        "Supportive care and oral fluids.",
    ),
    (
        "Pediatrics",
        "Poor appetite and pallor",
        "Iron deficiency anemia",
        "Start oral iron syrup for three months.",
    ),
];

/// (chief complaint, procedures, clinical summary)
const ADULT_HOSPITALIZATIONS: &[(&str, &[&str], &str)] = &[
    (
        "Acute Abdominal Pain",
        &["Abdominal CT", "Blood Chemistry", "IV Fluids"],
        "Admitted with suspected appendicitis. Managed conservatively with antibiotics as symptoms improved. Follow-up scheduled.",
    ),
    (
        "Chest Pain",
        &["ECG", "Troponin Series", "Coronary Angiography"],
        "Admitted to rule out acute coronary syndrome. Serial enzymes negative. Discharged on antiplatelet therapy.",
    ),
];

const CHILD_HOSPITALIZATIONS: &[(&str, &[&str], &str)] = &[
    (
        "High Fever and Dehydration",
        &["Blood Culture", "IV Fluids"],
        "Admitted for rehydration and empirical antibiotics. Fever settled within 48 hours.",
    ),
    (
        "Acute Asthma Exacerbation",
        &["Chest X-Ray", "Nebulized Salbutamol"],
        "Admitted with respiratory distress. Responded to bronchodilators and a short steroid course.",
    ),
];

const WARD_PHYSICIANS: &[&str] = &["Dr. Ahmed Kamil", "Dr. Huda Al-Saadi", "Dr. Samir Al-Obaidi"];
const HISTORY_TAKERS: &[&str] = &["Nurse Zainab", "Nurse Ali", "Resident Mustafa"];

/// (name, dosage, duration)
const ADULT_MEDICATIONS: &[(&str, &str, &str)] = &[
    ("Metformin", "500mg", "Chronic"),
    ("Amlodipine", "5mg", "Chronic"),
    ("Atorvastatin", "20mg", "Chronic"),
    ("Levothyroxine", "50mcg", "Chronic"),
];

const CHILD_MEDICATIONS: &[(&str, &str, &str)] = &[
    ("Paracetamol Syrup", "120mg/5mL", "As needed"),
    ("Vitamin D Drops", "400 IU", "Daily"),
    ("Iron Syrup", "6mg/mL", "Three months"),
];

const CHILD_SCHEDULE: &[(&str, &str)] = &[
    ("BCG", "Initial"),
    ("Polio", "Initial"),
    ("DTP", "Initial"),
    ("Measles", "Initial"),
];

const ADULT_COMPLETED_VACCINES: &[(&str, &str)] = &[
    ("BCG", "Initial"),
    ("Polio", "Initial"),
    ("Pfizer COVID-19", "2021-12-05"),
];

const CHILD_MISSING_VACCINES: &[&str] = &[
    "Influenza (Seasonal)",
    "Meningococcal",
    "Hepatitis A booster",
];

const FINANCIAL_STATUS: &[&str] = &["Good", "Average", "Limited"];
const MARRIAGE_TYPES: &[&str] = &["Non-relative", "Relative"];
const FAMILY_ATMOSPHERES: &[&str] = &["Stable", "Generally stable", "Tense"];
const DIETARY_HABITS: &[&str] = &["Traditional", "Mixed", "High-carbohydrate"];

const ADULT_SUMMARIES: &[&str] = &[
    "Patient exhibits stable metabolic parameters. Surgical history is clean with no recent acute episodes.",
    "Chronic conditions are controlled on current therapy. No red flags in the recent admission history.",
    "Cardiovascular risk factors present but managed. Medication adherence reported as good.",
];

const CHILD_SUMMARIES: &[&str] = &[
    "Growth and development within the expected range. Vaccination record is nearly complete.",
    "Respiratory symptoms are seasonal and well controlled. No surgical concerns.",
];

/// Full clinical payload for one patient.
pub(crate) struct ClinicalPayload {
    pub medical_history: MedicalHistory,
    pub last_consultation: Consultation,
    pub hospitalizations: Vec<Hospitalization>,
    pub medications: Vec<Medication>,
    pub vaccinations: VaccinationRecord,
    pub social: SocialData,
    pub ai_summary: String,
}

/// Build the clinical payload for a patient of the given age.
pub(crate) fn for_patient(rng: &mut StdRng, age: u8) -> ClinicalPayload {
    let adult = age >= CLINICAL_ADULT_AGE;
    ClinicalPayload {
        medical_history: medical_history(rng, adult, age),
        last_consultation: consultation(rng, adult),
        hospitalizations: hospitalizations(rng, adult),
        medications: medications(rng, adult),
        vaccinations: vaccinations(rng, adult),
        social: social(rng),
        ai_summary: pick(rng, if adult { ADULT_SUMMARIES } else { CHILD_SUMMARIES }).to_string(),
    }
}

fn medical_history(rng: &mut StdRng, adult: bool, age: u8) -> MedicalHistory {
    let chronic_diseases = if adult {
        let count = if age >= 50 {
            rng.random_range(1..=3)
        } else {
            rng.random_range(0..=2)
        };
        sample(rng, ADULT_CHRONIC, count)
    } else if rng.random_bool(0.3) {
        vec![pick(rng, CHILD_CHRONIC).to_string()]
    } else {
        Vec::new()
    };

    let allergies = AllergyProfile {
        drug: maybe_one(rng, 0.4, DRUG_ALLERGIES),
        food: maybe_one(rng, 0.3, FOOD_ALLERGIES),
        chemical: maybe_one(rng, 0.2, CHEMICAL_ALLERGIES),
    };

    let admissions = if rng.random_bool(0.3) {
        vec![Admission {
            date: random_date(rng, REFERENCE_YEAR - 5, REFERENCE_YEAR - 1),
            reason: pick(rng, ADMISSION_REASONS).to_string(),
            duration: format!("{} days", rng.random_range(2..=7)),
        }]
    } else {
        Vec::new()
    };

    let family_history_count = rng.random_range(1..=2);
    MedicalHistory {
        chronic_diseases,
        surgeries: surgeries(rng, adult, age),
        allergies,
        family_history: sample(rng, FAMILY_HISTORY, family_history_count),
        admissions,
    }
}

fn surgeries(rng: &mut StdRng, adult: bool, age: u8) -> Vec<Surgery> {
    let count: usize = if adult {
        rng.random_range(0..=2)
    } else if age >= CHILD_SURGERY_MIN_AGE && rng.random_bool(0.25) {
        1
    } else {
        0
    };

    (0..count)
        .map(|_| {
            let pool = if adult {
                ADULT_SURGERY_TYPES
            } else {
                CHILD_SURGERY_TYPES
            };
            let complications = rng.random_bool(0.15);
            Surgery {
                kind: pick(rng, pool).to_string(),
                year: surgery_year(rng, adult, age),
                surgeon: pick(rng, SURGEONS).to_string(),
                anesthesia: *pick(rng, &ANESTHESIA_MODES),
                complications,
                complication_note: complications
                    .then(|| pick(rng, COMPLICATION_NOTES).to_string()),
            }
        })
        .collect()
}

/// A surgery year strictly after the patient's birth year and before the
/// reference year. Adult years are additionally capped to the last 25 years.
fn surgery_year(rng: &mut StdRng, adult: bool, age: u8) -> u16 {
    let birth_year = REFERENCE_YEAR - u16::from(age);
    let earliest = if adult {
        (REFERENCE_YEAR - 25).max(birth_year + 1)
    } else {
        birth_year + 1
    };
    rng.random_range(earliest..REFERENCE_YEAR)
}

fn consultation(rng: &mut StdRng, adult: bool) -> Consultation {
    let pool = if adult {
        ADULT_CONSULTATIONS
    } else {
        CHILD_CONSULTATIONS
    };
    let (department, symptoms, diagnosis, recommendations) = *pick(rng, pool);
    Consultation {
        date: random_date(rng, REFERENCE_YEAR, REFERENCE_YEAR),
        doctor: pick(rng, CONSULTING_DOCTORS).to_string(),
        department: department.to_string(),
        symptoms: symptoms.to_string(),
        diagnosis: diagnosis.to_string(),
        recommendations: recommendations.to_string(),
    }
}

fn hospitalizations(rng: &mut StdRng, adult: bool) -> Vec<Hospitalization> {
    let count: usize = if adult {
        rng.random_range(0..=2)
    } else {
        usize::from(rng.random_bool(0.3))
    };
    let pool = if adult {
        ADULT_HOSPITALIZATIONS
    } else {
        CHILD_HOSPITALIZATIONS
    };

    let mut entries: Vec<Hospitalization> = (0..count)
        .map(|_| {
            let (chief_complaint, procedures, clinical_summary) = *pick(rng, pool);
            Hospitalization {
                date: random_date(rng, REFERENCE_YEAR - 3, REFERENCE_YEAR - 1),
                duration: format!("{} Days", rng.random_range(2..=9)),
                chief_complaint: chief_complaint.to_string(),
                physician: pick(rng, WARD_PHYSICIANS).to_string(),
                history_taken_by: pick(rng, HISTORY_TAKERS).to_string(),
                procedures: procedures.iter().map(|p| p.to_string()).collect(),
                clinical_summary: clinical_summary.to_string(),
            }
        })
        .collect();

    // Most recent admission first; ISO dates sort lexicographically.
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

fn medications(rng: &mut StdRng, adult: bool) -> Vec<Medication> {
    let (pool, count): (_, usize) = if adult {
        (ADULT_MEDICATIONS, rng.random_range(1..=2))
    } else {
        (CHILD_MEDICATIONS, rng.random_range(0..=1))
    };

    pool.choose_multiple(rng, count)
        .map(|&(name, dosage, duration)| Medication {
            name: name.to_string(),
            dosage: dosage.to_string(),
            duration: duration.to_string(),
        })
        .collect()
}

fn vaccinations(rng: &mut StdRng, adult: bool) -> VaccinationRecord {
    if adult {
        VaccinationRecord {
            completed: doses(ADULT_COMPLETED_VACCINES),
            missing: vec!["Influenza (Seasonal)".into(), "Meningococcal".into()],
        }
    } else {
        let missing_count = rng.random_range(1..=2);
        VaccinationRecord {
            completed: doses(CHILD_SCHEDULE),
            missing: sample(rng, CHILD_MISSING_VACCINES, missing_count),
        }
    }
}

fn social(rng: &mut StdRng) -> SocialData {
    SocialData {
        religion: "Islam".into(),
        financial_status: pick(rng, FINANCIAL_STATUS).to_string(),
        marriage_type: pick(rng, MARRIAGE_TYPES).to_string(),
        family_atmosphere: pick(rng, FAMILY_ATMOSPHERES).to_string(),
        dietary_habits: pick(rng, DIETARY_HABITS).to_string(),
    }
}

fn doses(pairs: &[(&str, &str)]) -> Vec<VaccineDose> {
    pairs
        .iter()
        .map(|&(name, date)| VaccineDose {
            name: name.to_string(),
            date: date.to_string(),
        })
        .collect()
}

fn sample(rng: &mut StdRng, pool: &[&str], count: usize) -> Vec<String> {
    pool.choose_multiple(rng, count.min(pool.len()))
        .map(|s| s.to_string())
        .collect()
}

fn maybe_one(rng: &mut StdRng, probability: f64, pool: &[&str]) -> Vec<String> {
    if rng.random_bool(probability) {
        vec![pick(rng, pool).to_string()]
    } else {
        Vec::new()
    }
}

fn random_date(rng: &mut StdRng, year_lo: u16, year_hi: u16) -> String {
    let year = rng.random_range(year_lo..=year_hi);
    let month: u8 = rng.random_range(1..=12);
    let day: u8 = rng.random_range(1..=28);
    format!("{year}-{month:02}-{day:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_child_surgery_years_follow_birth_year() {
        let mut rng = StdRng::seed_from_u64(11);
        for age in 1..=30u8 {
            for _ in 0..20 {
                let payload = for_patient(&mut rng, age);
                let birth_year = REFERENCE_YEAR - u16::from(age);
                for surgery in &payload.medical_history.surgeries {
                    assert!(surgery.year > birth_year, "surgery predates birth");
                    assert!(surgery.year < REFERENCE_YEAR);
                }
            }
        }
    }

    #[test]
    fn test_young_children_have_no_surgeries() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..50 {
            let payload = for_patient(&mut rng, 2);
            assert!(payload.medical_history.surgeries.is_empty());
        }
    }

    #[test]
    fn test_band_selects_medication_pool() {
        let mut rng = StdRng::seed_from_u64(13);
        let adult_names: Vec<&str> = ADULT_MEDICATIONS.iter().map(|m| m.0).collect();
        let child_names: Vec<&str> = CHILD_MEDICATIONS.iter().map(|m| m.0).collect();

        for _ in 0..50 {
            let adult = for_patient(&mut rng, 45);
            for med in &adult.medications {
                assert!(adult_names.contains(&med.name.as_str()));
            }
            let child = for_patient(&mut rng, 6);
            for med in &child.medications {
                assert!(child_names.contains(&med.name.as_str()));
            }
        }
    }

    #[test]
    fn test_child_vaccination_card_has_gaps() {
        let mut rng = StdRng::seed_from_u64(14);
        let payload = for_patient(&mut rng, 5);
        assert_eq!(payload.vaccinations.completed.len(), CHILD_SCHEDULE.len());
        assert!(!payload.vaccinations.is_complete());
        assert!(payload.vaccinations.missing.len() <= 2);
    }

    #[test]
    fn test_hospitalizations_most_recent_first() {
        let mut rng = StdRng::seed_from_u64(15);
        for _ in 0..100 {
            let payload = for_patient(&mut rng, 60);
            let dates: Vec<&String> = payload.hospitalizations.iter().map(|h| &h.date).collect();
            let mut sorted = dates.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(dates, sorted);
        }
    }

    #[test]
    fn test_complication_note_only_with_complications() {
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..200 {
            let payload = for_patient(&mut rng, 55);
            for surgery in &payload.medical_history.surgeries {
                assert_eq!(surgery.complications, surgery.complication_note.is_some());
            }
        }
    }
}
