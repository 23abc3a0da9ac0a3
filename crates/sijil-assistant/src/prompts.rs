//! Consultation prompt construction.

use crate::report::ClinicalContext;

/// Rules appended to every consultation prompt.
pub const RESPONSE_RULES: &str = "Rules:
1. Arabic response with English clinical terms.
2. Professional and strictly medical.
3. If the query asks about risks, consider the surgical and admission history.";

/// Build the system prompt for one patient's clinical context.
pub fn build_system_prompt(context: &ClinicalContext) -> String {
    format!(
        "You are a medical consultant for the Iraqi Ministry of Health.
Analyze the following for patient {name}:
- Chronic: {chronic}
- Surgeries: {surgeries}
- Recent Admission: {admission}
- Allergies: {allergies}
Based on this clinical data, answer the doctor's query.
{rules}",
        name = context.patient_name,
        chronic = context.chronic_diseases.join(", "),
        surgeries = context.surgery_types.join(", "),
        admission = context.latest_admission_summary.as_deref().unwrap_or("None"),
        allergies = context.drug_allergies.join(", "),
        rules = RESPONSE_RULES,
    )
}
