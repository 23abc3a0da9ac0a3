//! Pure read-only queries over a generated population.
//!
//! Every function preserves the population's original relative order and is
//! recomputed from scratch per call; the population is small (hundreds of
//! records), so no index is kept.

use crate::models::{FamilyUnit, PatientRecord};

/// Free-text plus governorate filter.
///
/// A record matches when `text` is empty, or its native full name contains
/// `text` as a substring, or its family id contains `text`, or its
/// transliterated name contains `text` case-insensitively — and, in addition,
/// `governorate` is empty or equals the record's governorate exactly.
/// Substring containment only: no tokenization, no fuzzy matching.
pub fn search<'a>(
    patients: &'a [PatientRecord],
    text: &str,
    governorate: &str,
) -> Vec<&'a PatientRecord> {
    let text_lower = text.to_lowercase();
    patients
        .iter()
        .filter(|p| {
            let matches_text = text.is_empty()
                || p.full_name.contains(text)
                || p.family_id.contains(text)
                || p.full_name_en.to_lowercase().contains(&text_lower);
            let matches_governorate = governorate.is_empty() || p.governorate == governorate;
            matches_text && matches_governorate
        })
        .collect()
}

/// All records belonging to a family, in original population order.
///
/// An unknown family id yields an empty sequence, not an error.
pub fn members_of_family<'a>(
    patients: &'a [PatientRecord],
    family_id: &str,
) -> Vec<&'a PatientRecord> {
    patients
        .iter()
        .filter(|p| p.family_id == family_id)
        .collect()
}

/// Metadata for a single family, or `None` when the id is absent.
pub fn family_metadata<'a>(families: &'a [FamilyUnit], family_id: &str) -> Option<&'a FamilyUnit> {
    families.iter().find(|f| f.family_id == family_id)
}
