//! Integration tests for loading reference data from files.

use std::io::Write;
use std::sync::Arc;

use gapfinder_core::{GapDetector, GapFinderError, GapType, Journey, ReferenceData, Stage};

const NONPROFIT_YAML: &str = r#"
industries:
  nonprofit:
    label: Nonprofit
    catalog:
      consideration:
        - id: impact-stories
          name: Impact Stories
          tags:
            communication_type: social-proof
            trust_level: high-trust
            conversion_proximity: conversion-prep
      decision:
        - id: donate-form
          name: Donation Form
          tags:
            communication_type: transactional
            trust_level: low-trust
            conversion_proximity: direct-conversion
    benchmarks:
      - stage: consideration
        touchpoint: impact-stories
        message: Donors want to see where their money goes
"#;

#[test]
fn test_load_yaml_file_drives_detection() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(NONPROFIT_YAML.as_bytes()).unwrap();

    let data = Arc::new(ReferenceData::from_path(file.path()).unwrap());
    let detector = GapDetector::new(data.clone());

    let donate = data.resolve_card("nonprofit", "donate-form").unwrap().clone();
    let journey = Journey::new().with_card(Stage::Decision, donate);
    let gaps = detector.detect_gaps(&journey, "nonprofit");

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].gap_type, GapType::IndustryStandard);
    assert_eq!(gaps[0].message, "Donors want to see where their money goes");
    assert_eq!(gaps[1].gap_type, GapType::SequenceViolation);

    // ecommerce is not in this file
    assert!(detector.detect_gaps(&Journey::new(), "ecommerce").is_empty());
}

#[test]
fn test_load_json_file() {
    let yaml_data = ReferenceData::from_yaml_str(NONPROFIT_YAML).unwrap();
    let document = gapfinder_core::ReferenceDocument::from(&yaml_data);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reference.json");
    std::fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

    let json_data = ReferenceData::from_path(&path).unwrap();
    assert_eq!(json_data, yaml_data);
}

#[test]
fn test_duplicate_card_ids_rejected() {
    let yaml = NONPROFIT_YAML.replace("id: donate-form", "id: impact-stories");
    let err = ReferenceData::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, GapFinderError::DuplicateCardId { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReferenceData::from_path(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, GapFinderError::Io(_)));
}

#[test]
fn test_malformed_yaml_is_reported() {
    let err = ReferenceData::from_yaml_str("industries: [not, a, map]").unwrap_err();
    assert!(matches!(err, GapFinderError::Yaml(_)));
}
