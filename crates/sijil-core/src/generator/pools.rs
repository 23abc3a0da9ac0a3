//! Name and place pools the generator draws from.

use serde::{Deserialize, Serialize};

use super::{GeneratorError, GeneratorResult};

/// A native-script name paired with its Latin transliteration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameEntry {
    pub native: String,
    pub latin: String,
}

impl NameEntry {
    fn new(native: &str, latin: &str) -> Self {
        Self {
            native: native.into(),
            latin: latin.into(),
        }
    }
}

/// Enumerated pools for names, governorates and neighborhoods.
///
/// Defaults reproduce the registry's seed pools. Every pool must be non-empty:
/// an empty pool is a configuration error caught before generation starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamePools {
    /// Male given names
    pub male_given: Vec<NameEntry>,
    /// Female given names
    pub female_given: Vec<NameEntry>,
    /// Middle names, shared by both genders
    pub middle: Vec<String>,
    /// Family surnames
    pub surnames: Vec<NameEntry>,
    /// Governorates a family can be placed in
    pub governorates: Vec<String>,
    /// Neighborhood names used in the shared family address
    pub neighborhoods: Vec<String>,
}

impl Default for NamePools {
    fn default() -> Self {
        Self {
            male_given: entries(&[
                ("حيدر", "Haidar"),
                ("محمد", "Mohammed"),
                ("جاسم", "Jasim"),
                ("مصطفى", "Mustafa"),
                ("عباس", "Abbas"),
                ("علي", "Ali"),
                ("كرار", "Karrar"),
                ("حسين", "Hussein"),
                ("ياسين", "Yaseen"),
                ("سيف", "Saif"),
                ("زيد", "Zaid"),
                ("أحمد", "Ahmed"),
                ("عمر", "Omar"),
                ("عثمان", "Othman"),
                ("بكر", "Bakr"),
            ]),
            female_given: entries(&[
                ("زينب", "Zainab"),
                ("مريم", "Maryam"),
                ("فاطمة", "Fatima"),
                ("سارة", "Sarah"),
                ("نور", "Noor"),
                ("هدى", "Huda"),
                ("آية", "Aya"),
                ("رغد", "Raghad"),
                ("منى", "Muna"),
                ("دعاء", "Duaa"),
                ("يسرى", "Yusra"),
                ("غادة", "Ghada"),
                ("تمارة", "Tamara"),
                ("رؤى", "Ruaa"),
                ("ضحى", "Dhuha"),
            ]),
            middle: strings(&[
                "كاظم",
                "جواد",
                "عبد الحسن",
                "فالح",
                "كريم",
                "لطيف",
                "خالد",
                "شاكر",
                "محسن",
                "جبار",
                "ستار",
                "حميد",
                "مجيد",
            ]),
            surnames: entries(&[
                ("العامري", "Al-Amiri"),
                ("اللامي", "Al-Lami"),
                ("الزبيدي", "Al-Zubaidi"),
                ("الجبوري", "Al-Jubouri"),
                ("الخفاجي", "Al-Khafaji"),
                ("الساعدي", "Al-Saadi"),
                ("الربيعي", "Al-Rubaie"),
                ("التميمي", "Al-Tamimi"),
                ("العبيدي", "Al-Obaidi"),
                ("الجنابي", "Al-Janabi"),
                ("المحمداوي", "Al-Muhammadawi"),
            ]),
            governorates: strings(&[
                "بغداد",
                "البصرة",
                "نينوى",
                "أربيل",
                "النجف",
                "كربلاء",
                "كركوك",
                "ذي قار",
                "ميسان",
                "بابل",
                "الأنبار",
            ]),
            neighborhoods: strings(&["المنصور", "الحسين", "الكرامة", "السلام"]),
        }
    }
}

impl NamePools {
    /// Reject any empty pool before generation starts.
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.male_given.is_empty() {
            return Err(GeneratorError::EmptyPool("male_given"));
        }
        if self.female_given.is_empty() {
            return Err(GeneratorError::EmptyPool("female_given"));
        }
        if self.middle.is_empty() {
            return Err(GeneratorError::EmptyPool("middle"));
        }
        if self.surnames.is_empty() {
            return Err(GeneratorError::EmptyPool("surnames"));
        }
        if self.governorates.is_empty() {
            return Err(GeneratorError::EmptyPool("governorates"));
        }
        if self.neighborhoods.is_empty() {
            return Err(GeneratorError::EmptyPool("neighborhoods"));
        }
        Ok(())
    }
}

fn entries(pairs: &[(&str, &str)]) -> Vec<NameEntry> {
    pairs
        .iter()
        .map(|(native, latin)| NameEntry::new(native, latin))
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
