//! Record types for the terminology crosswalk.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Coding system a mapping originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceSystem {
    #[serde(rename = "ICD-10")]
    Icd10,
    #[serde(rename = "ICD-9-CM")]
    Icd9Cm,
}

impl SourceSystem {
    /// Returns the tag stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceSystem::Icd10 => "ICD-10",
            SourceSystem::Icd9Cm => "ICD-9-CM",
        }
    }
}

/// Coding system a mapping targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetSystem {
    #[serde(rename = "SNOMED-CT")]
    SnomedCt,
}

impl TargetSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSystem::SnomedCt => "SNOMED-CT",
        }
    }
}

/// Relationship between the source and target concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    Equivalent,
}

impl MapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Equivalent => "equivalent",
        }
    }
}

/// A source-code to target-code mapping, ready for insertion.
///
/// The row id and `created_at` are assigned by the database at insert time,
/// so they are not part of this type; see [`StoredMapping`] for the
/// read-side shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminologyMapping {
    pub source_system: SourceSystem,
    pub source_code: String,
    pub source_display: String,
    pub target_system: TargetSystem,
    pub target_code: String,
    pub target_display: String,
    pub map_type: MapType,
}

impl TerminologyMapping {
    /// Builds an equivalent-type mapping into SNOMED-CT.
    ///
    /// The target display is the source display verbatim; the dataset ships
    /// no separate SNOMED preferred terms.
    pub fn equivalent(
        source_system: SourceSystem,
        source_code: &str,
        source_display: &str,
        target_code: &str,
    ) -> Self {
        Self {
            source_system,
            source_code: source_code.to_string(),
            source_display: source_display.to_string(),
            target_system: TargetSystem::SnomedCt,
            target_code: target_code.to_string(),
            target_display: source_display.to_string(),
            map_type: MapType::Equivalent,
        }
    }
}

/// A mapping row as stored, with the server-assigned id and timestamp.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct StoredMapping {
    pub id: Uuid,
    pub source_system: String,
    pub source_code: String,
    pub source_display: String,
    pub target_system: String,
    pub target_code: String,
    pub target_display: String,
    pub map_type: String,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_tags() {
        assert_eq!(SourceSystem::Icd10.as_str(), "ICD-10");
        assert_eq!(SourceSystem::Icd9Cm.as_str(), "ICD-9-CM");
        assert_eq!(TargetSystem::SnomedCt.as_str(), "SNOMED-CT");
        assert_eq!(MapType::Equivalent.as_str(), "equivalent");
    }

    #[test]
    fn test_serializes_with_document_field_names() {
        let mapping = TerminologyMapping::equivalent(
            SourceSystem::Icd10,
            "A09",
            "Infectious gastroenteritis",
            "235595009",
        );
        let value = serde_json::to_value(&mapping).unwrap();

        assert_eq!(value["sourceSystem"], "ICD-10");
        assert_eq!(value["sourceCode"], "A09");
        assert_eq!(value["sourceDisplay"], "Infectious gastroenteritis");
        assert_eq!(value["targetSystem"], "SNOMED-CT");
        assert_eq!(value["targetCode"], "235595009");
        assert_eq!(value["targetDisplay"], "Infectious gastroenteritis");
        assert_eq!(value["mapType"], "equivalent");
    }

    #[test]
    fn test_equivalent_copies_display() {
        let mapping =
            TerminologyMapping::equivalent(SourceSystem::Icd9Cm, "88.39", "Ultrasound", "396538006");

        assert_eq!(mapping.target_display, mapping.source_display);
        assert_eq!(mapping.map_type, MapType::Equivalent);
        assert_eq!(mapping.target_system, TargetSystem::SnomedCt);
    }
}
