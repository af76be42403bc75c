//! Journey files - a journey written down as stage -> card ids.
//!
//! ```yaml
//! consideration: [product-pages, comparison]
//! decision: [checkout]
//! ```
//!
//! Stages may be omitted; they load as empty.

use std::collections::BTreeMap;
use std::path::Path;

use gapfinder_core::{Journey, ReferenceData, Stage};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// Card ids placed into each stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyFile {
    stages: BTreeMap<Stage, Vec<String>>,
}

impl JourneyFile {
    /// Parses a journey file; `.json` files as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SessionError::JourneyFile {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(serde_json::from_str(&content)?),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// Parses a journey file from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document is an empty journey.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Card ids listed for a stage.
    pub fn card_ids(&self, stage: Stage) -> &[String] {
        self.stages.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolves card ids against an industry's catalog.
    ///
    /// Fails on the first id the catalog does not contain.
    pub fn resolve(&self, data: &ReferenceData, industry: &str) -> Result<Journey> {
        let mut journey = Journey::new();
        for stage in Stage::ALL {
            for card_id in self.card_ids(stage) {
                journey.push(stage, data.resolve_card(industry, card_id)?.clone());
            }
        }
        Ok(journey)
    }
}

impl From<&Journey> for JourneyFile {
    fn from(journey: &Journey) -> Self {
        Self {
            stages: journey
                .iter()
                .map(|(stage, cards)| (stage, cards.iter().map(|card| card.id.clone()).collect()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_yaml() {
        let file = JourneyFile::from_yaml_str("decision: [cart, checkout]\n").unwrap();
        assert_eq!(file.card_ids(Stage::Decision).len(), 2);
        assert!(file.card_ids(Stage::Awareness).is_empty());
    }

    #[test]
    fn test_empty_document() {
        let file = JourneyFile::from_yaml_str("  \n").unwrap();
        assert_eq!(file, JourneyFile::default());
    }

    #[test]
    fn test_resolve_against_catalog() {
        let data = ReferenceData::builtin();
        let file = JourneyFile::from_yaml_str("consideration: [reviews, reviews]\n").unwrap();

        let journey = file.resolve(&data, "ecommerce").unwrap();
        assert_eq!(journey.cards(Stage::Consideration).len(), 2);
        assert_eq!(JourneyFile::from(&journey).card_ids(Stage::Consideration), file.card_ids(Stage::Consideration));
    }

    #[test]
    fn test_resolve_unknown_card() {
        let data = ReferenceData::builtin();
        let file = JourneyFile::from_yaml_str("awareness: [skywriting]\n").unwrap();
        assert!(matches!(
            file.resolve(&data, "ecommerce"),
            Err(SessionError::Core(gapfinder_core::GapFinderError::UnknownCard { .. }))
        ));
    }

    #[test]
    fn test_unknown_stage_rejected() {
        assert!(JourneyFile::from_yaml_str("checkout: [cart]\n").is_err());
    }
}
