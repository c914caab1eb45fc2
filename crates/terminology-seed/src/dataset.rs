//! The hard-coded crosswalk dataset and its expansion.

use crate::models::{SourceSystem, TerminologyMapping};

/// ICD-10 diagnosis codes mapped to SNOMED-CT concepts, as
/// `(code, display, snomed)` triples.
const ICD10_MAPPINGS: [(&str, &str, &str); 10] = [
    ("A09", "Infectious gastroenteritis", "235595009"),
    ("I10", "Essential hypertension", "59621000"),
    ("E11", "Type 2 diabetes mellitus", "44054006"),
    ("J18.9", "Pneumonia", "233604007"),
    ("K29", "Gastritis", "4556007"),
    ("K35", "Acute appendicitis", "74400008"),
    ("N39.0", "Urinary tract infection", "68566005"),
    ("C34.9", "Malignant neoplasm of lung", "254637007"),
    ("B20", "HIV disease", "86406008"),
    ("O80", "Normal delivery", "48782003"),
];

/// ICD-9-CM procedure codes mapped to SNOMED-CT concepts.
const ICD9_MAPPINGS: [(&str, &str, &str); 4] = [
    ("88.39", "Ultrasound", "396538006"),
    ("99.04", "Platelet transfusion", "5971006"),
    ("96.04", "Endotracheal intubation", "6145007"),
    ("99.15", "Parenteral nutrition", "71388002"),
];

/// Times each table is repeated to inflate the seeded row count.
const ICD10_REPEATS: usize = 20;
const ICD9_REPEATS: usize = 10;

/// Expands the literal tables into the full list of records to insert.
///
/// The ICD-10 table is emitted in full `ICD10_REPEATS` times, then the
/// ICD-9-CM table `ICD9_REPEATS` times. There is no deduplication at any
/// layer: every repetition becomes its own row.
pub fn mappings() -> Vec<TerminologyMapping> {
    let mut records = Vec::with_capacity(
        ICD10_MAPPINGS.len() * ICD10_REPEATS + ICD9_MAPPINGS.len() * ICD9_REPEATS,
    );

    for _ in 0..ICD10_REPEATS {
        for (code, display, snomed) in ICD10_MAPPINGS {
            records.push(TerminologyMapping::equivalent(
                SourceSystem::Icd10,
                code,
                display,
                snomed,
            ));
        }
    }

    for _ in 0..ICD9_REPEATS {
        for (code, display, snomed) in ICD9_MAPPINGS {
            records.push(TerminologyMapping::equivalent(
                SourceSystem::Icd9Cm,
                code,
                display,
                snomed,
            ));
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MapType, TargetSystem};

    #[test]
    fn test_expansion_count() {
        let records = mappings();
        assert_eq!(records.len(), 240);

        let icd10 = records
            .iter()
            .filter(|m| m.source_system == SourceSystem::Icd10)
            .count();
        let icd9 = records
            .iter()
            .filter(|m| m.source_system == SourceSystem::Icd9Cm)
            .count();
        assert_eq!(icd10, 200);
        assert_eq!(icd9, 40);
    }

    #[test]
    fn test_every_record_is_equivalent_into_snomed() {
        for record in mappings() {
            assert_eq!(record.map_type, MapType::Equivalent);
            assert_eq!(record.target_system, TargetSystem::SnomedCt);
            assert_eq!(record.target_display, record.source_display);
        }
    }

    #[test]
    fn test_a09_repeated_twenty_times() {
        let records = mappings();
        let a09: Vec<_> = records.iter().filter(|m| m.source_code == "A09").collect();

        assert_eq!(a09.len(), 20);
        for record in a09 {
            assert_eq!(record.source_system, SourceSystem::Icd10);
            assert_eq!(record.source_display, "Infectious gastroenteritis");
            assert_eq!(record.target_code, "235595009");
            assert_eq!(record.target_display, "Infectious gastroenteritis");
        }
    }

    #[test]
    fn test_icd9_rows_repeated_ten_times() {
        let records = mappings();
        let intubation: Vec<_> = records
            .iter()
            .filter(|m| m.source_code == "96.04")
            .collect();

        assert_eq!(intubation.len(), 10);
        for record in intubation {
            assert_eq!(record.source_system, SourceSystem::Icd9Cm);
            assert_eq!(record.target_code, "6145007");
        }
    }
}
