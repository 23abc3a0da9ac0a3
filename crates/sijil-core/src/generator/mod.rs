//! Synthetic population generator.
//!
//! Pipeline: family loop → member construction → truncation → family metadata
//!
//! Families are built whole (parent pair plus one to three children, shared
//! surname, address and governorate) until the running patient total reaches
//! the configured target. The accumulated list is then truncated to exactly
//! the target, which may leave the last family partially represented; family
//! metadata is derived from the ids that survive truncation, so metadata and
//! population can never disagree.

mod clinical;
mod config;
mod pools;

pub use config::*;
pub use pools::*;

use std::collections::HashSet;

use rand::prelude::*;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::models::{FamilyUnit, Gender, PatientRecord, Role};
use crate::registry::Population;

/// Generator errors. All are configuration defects; generation performs no I/O.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("empty {0} pool at generator construction")]
    EmptyPool(&'static str),

    #[error("patient id space exhausted after {0} ids")]
    IdSpaceExhausted(usize),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Registry year the dataset is anchored to; also the `24` in patient ids.
pub(crate) const REFERENCE_YEAR: u16 = 2024;

/// Patient id prefix; the numeric suffix has five digits.
const ID_PREFIX: &str = "M-24-";
const ID_SUFFIX_MIN: u32 = 10_000;
const ID_SUFFIX_SPAN: u32 = 90_000;

/// First family id; subsequent families count up from here.
const FAMILY_ID_BASE: u32 = 100_000;

/// Fixed occupation labels, split at the working-age threshold.
const ADULT_OCCUPATION_AGE: u8 = 22;
const ADULT_OCCUPATION: &str = "Medical Staff";
const CHILD_OCCUPATION: &str = "Student";

const BLOOD_TYPES: [&str; 4] = ["A+", "O+", "B+", "AB-"];

/// Generate a population per the given configuration.
///
/// The returned [`Population`] is an owned, immutable value: calling this
/// again produces a new, independently valid population. With a fixed seed
/// the generated records are identical across calls.
pub fn generate(config: &GeneratorConfig) -> GeneratorResult<Population> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut patients: Vec<PatientRecord> = Vec::with_capacity(config.target_size);
    let mut ids = IdAllocator::default();
    let mut family_index: u32 = 0;

    while patients.len() < config.target_size {
        let family_id = (FAMILY_ID_BASE + family_index).to_string();
        let members = build_family(&mut rng, &mut ids, &config.pools, &family_id)?;
        log::debug!("family {family_id}: {} members", members.len());
        patients.extend(members);
        family_index += 1;
    }

    let overshoot = patients.len() - config.target_size;
    patients.truncate(config.target_size);
    let families = derive_family_units(&patients);

    log::info!(
        "generated {} patients across {} families ({} truncated)",
        patients.len(),
        families.len(),
        overshoot
    );

    Ok(Population::new(patients, families))
}

/// Build one complete family: parent pair plus children, sharing surname,
/// address and governorate.
fn build_family(
    rng: &mut StdRng,
    ids: &mut IdAllocator,
    pools: &NamePools,
    family_id: &str,
) -> GeneratorResult<Vec<PatientRecord>> {
    let governorate = pick(rng, &pools.governorates).clone();
    let surname = pick(rng, &pools.surnames).clone();
    let neighborhood = pick(rng, &pools.neighborhoods);
    let address = format!("حي {neighborhood}، {governorate}");

    let size: usize = rng.random_range(3..=5);
    let mut members = Vec::with_capacity(size);
    for position in 0..size {
        members.push(build_member(
            rng,
            ids,
            pools,
            family_id,
            position,
            &surname,
            &address,
            &governorate,
        )?);
    }
    Ok(members)
}

#[allow(clippy::too_many_arguments)]
fn build_member(
    rng: &mut StdRng,
    ids: &mut IdAllocator,
    pools: &NamePools,
    family_id: &str,
    position: usize,
    surname: &NameEntry,
    address: &str,
    governorate: &str,
) -> GeneratorResult<PatientRecord> {
    let (role, gender) = role_for_position(rng, position);
    let given = match gender {
        Gender::Male => pick(rng, &pools.male_given),
        Gender::Female => pick(rng, &pools.female_given),
    };
    let middle = pick(rng, &pools.middle);

    let full_name = format!("{} {} {}", given.native, middle, surname.native);
    let full_name_en = format!("{} {}", given.latin, surname.latin);

    let age: u8 = rng.random_range(role.age_band());
    let occupation = if age >= ADULT_OCCUPATION_AGE {
        ADULT_OCCUPATION
    } else {
        CHILD_OCCUPATION
    };

    let blood_type = pick(rng, &BLOOD_TYPES).to_string();
    let id = ids.next(rng)?;
    let clinical = clinical::for_patient(rng, age);

    Ok(PatientRecord {
        id,
        family_id: family_id.to_string(),
        role,
        photo: photo_reference(&full_name),
        full_name,
        full_name_en,
        gender,
        age,
        blood_type,
        occupation: occupation.to_string(),
        address: address.to_string(),
        governorate: governorate.to_string(),
        medical_history: clinical.medical_history,
        last_consultation: clinical.last_consultation,
        hospitalizations: clinical.hospitalizations,
        medications: clinical.medications,
        vaccinations: clinical.vaccinations,
        social: clinical.social,
        ai_summary: clinical.ai_summary,
    })
}

/// Positions 0 and 1 are always the parent pair; later positions are children
/// with gender chosen independently.
fn role_for_position(rng: &mut StdRng, position: usize) -> (Role, Gender) {
    match position {
        0 => (Role::Father, Gender::Male),
        1 => (Role::Mother, Gender::Female),
        _ => {
            if rng.random_bool(0.5) {
                (Role::Son, Gender::Male)
            } else {
                (Role::Daughter, Gender::Female)
            }
        }
    }
}

/// One metadata entry per distinct family id present after truncation, in
/// first-seen population order.
fn derive_family_units(patients: &[PatientRecord]) -> Vec<FamilyUnit> {
    let mut seen = HashSet::new();
    let mut families = Vec::new();
    for patient in patients {
        if seen.insert(patient.family_id.as_str()) {
            families.push(FamilyUnit::new(&patient.family_id));
        }
    }
    families
}

fn photo_reference(full_name: &str) -> String {
    format!("assets/photos/{full_name}.png")
}

/// Hands out `M-24-#####` ids, redrawing on suffix collision.
#[derive(Default)]
struct IdAllocator {
    issued: HashSet<u32>,
}

impl IdAllocator {
    fn next(&mut self, rng: &mut StdRng) -> GeneratorResult<String> {
        if self.issued.len() >= ID_SUFFIX_SPAN as usize {
            return Err(GeneratorError::IdSpaceExhausted(self.issued.len()));
        }
        loop {
            let suffix = ID_SUFFIX_MIN + rng.random_range(0..ID_SUFFIX_SPAN);
            if self.issued.insert(suffix) {
                return Ok(format!("{ID_PREFIX}{suffix}"));
            }
        }
    }
}

/// Uniform pick from a pool. Pools are validated non-empty before generation
/// starts.
pub(crate) fn pick<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}
