//! Report boundary: clinical context extraction and one-shot generation with
//! fixed fallbacks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sijil_core::PatientRecord;

use crate::prompts;

/// Fixed Arabic message returned when the backend call fails.
pub const FALLBACK_MESSAGE: &str = "حدث خطأ في معالجة البيانات الطبية.";

/// Fixed Arabic message returned when the backend yields no usable text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "لا يمكن تحليل البيانات حالياً.";

/// Generation errors.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// One-shot text generation backend.
///
/// A single request/response exchange: no retry, no streaming, no timeout,
/// no cancellation.
pub trait TextGenerator {
    fn generate(&self, system_prompt: &str, query: &str) -> GenerationResult<String>;
}

/// Structured clinical context extracted from one patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicalContext {
    /// Transliterated patient name
    pub patient_name: String,
    pub chronic_diseases: Vec<String>,
    pub surgery_types: Vec<String>,
    /// Narrative summary of the most recent admission, if any
    pub latest_admission_summary: Option<String>,
    pub drug_allergies: Vec<String>,
}

impl ClinicalContext {
    /// Pull the context fields out of a patient record.
    pub fn from_patient(patient: &PatientRecord) -> Self {
        Self {
            patient_name: patient.full_name_en.clone(),
            chronic_diseases: patient.medical_history.chronic_diseases.clone(),
            surgery_types: patient.medical_history.surgery_types(),
            latest_admission_summary: patient
                .hospitalizations
                .first()
                .map(|h| h.clinical_summary.clone()),
            drug_allergies: patient.medical_history.allergies.drug.clone(),
        }
    }

    /// Compact JSON form of the context.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A finished assistant report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantReport {
    pub text: String,
    /// True when `text` is one of the fixed messages rather than model output
    pub degraded: bool,
    /// RFC 3339 timestamp of when the report was produced
    pub generated_at: String,
}

/// Ask the backend for a report on one patient.
///
/// Failures never propagate to the caller: a backend error yields
/// [`FALLBACK_MESSAGE`] and a blank response yields [`EMPTY_RESPONSE_MESSAGE`],
/// both flagged as degraded.
pub fn request_report(
    backend: &dyn TextGenerator,
    patient: &PatientRecord,
    query: &str,
) -> AssistantReport {
    let context = ClinicalContext::from_patient(patient);
    let system_prompt = prompts::build_system_prompt(&context);

    let (text, degraded) = match backend.generate(&system_prompt, query) {
        Ok(text) if text.trim().is_empty() => (EMPTY_RESPONSE_MESSAGE.to_string(), true),
        Ok(text) => (text, false),
        Err(_) => (FALLBACK_MESSAGE.to_string(), true),
    };

    AssistantReport {
        text,
        degraded,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Canned-reply backend for testing without a live model.
pub struct MockGenerator {
    reply: String,
}

impl MockGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, _system_prompt: &str, _query: &str) -> GenerationResult<String> {
        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sijil_core::{generate, GeneratorConfig};

    struct FailingGenerator;

    impl TextGenerator for FailingGenerator {
        fn generate(&self, _system_prompt: &str, _query: &str) -> GenerationResult<String> {
            Err(GenerationError::Backend("connection refused".into()))
        }
    }

    fn sample_patient() -> PatientRecord {
        let config = GeneratorConfig {
            target_size: 10,
            ..GeneratorConfig::seeded(42)
        };
        generate(&config).unwrap().patients()[0].clone()
    }

    #[test]
    fn test_context_from_patient() {
        let patient = sample_patient();
        let context = ClinicalContext::from_patient(&patient);

        assert_eq!(context.patient_name, patient.full_name_en);
        assert_eq!(
            context.chronic_diseases,
            patient.medical_history.chronic_diseases
        );
        assert_eq!(
            context.latest_admission_summary.is_some(),
            !patient.hospitalizations.is_empty()
        );
        assert!(context.to_json().unwrap().contains(&patient.full_name_en));
    }

    #[test]
    fn test_successful_report_passes_text_through() {
        let patient = sample_patient();
        let backend = MockGenerator::new("التحليل السريري: المريض مستقر (stable).");

        let report = request_report(&backend, &patient, "ما مدى خطورة التخدير العام؟");

        assert_eq!(report.text, "التحليل السريري: المريض مستقر (stable).");
        assert!(!report.degraded);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }

    #[test]
    fn test_backend_failure_becomes_fallback_message() {
        let patient = sample_patient();
        let report = request_report(&FailingGenerator, &patient, "query");

        assert_eq!(report.text, FALLBACK_MESSAGE);
        assert!(report.degraded);
    }

    #[test]
    fn test_blank_response_becomes_empty_message() {
        let patient = sample_patient();
        let backend = MockGenerator::new("   \n");
        let report = request_report(&backend, &patient, "query");

        assert_eq!(report.text, EMPTY_RESPONSE_MESSAGE);
        assert!(report.degraded);
    }
}
