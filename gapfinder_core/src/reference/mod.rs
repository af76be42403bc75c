//! Reference data - card catalogs and benchmark registries for every industry.
//!
//! Reference data is static configuration. It is built once (from the
//! built-in tables or a YAML/JSON document) and treated as immutable for the
//! rest of the session. Lookups for industries without data degrade to empty
//! results instead of failing.

mod builtin;

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::benchmarks::BenchmarkRegistry;
use crate::catalog::CardCatalog;
use crate::error::{GapFinderError, Result};
use crate::types::{BenchmarkRule, TouchpointCard};

static EMPTY_CATALOG: CardCatalog = CardCatalog::empty();

/// Reference data for a single industry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndustryData {
    /// Display label for industry selectors
    pub label: String,
    /// Touchpoint cards offered for this industry
    pub catalog: CardCatalog,
    /// Expected touchpoints for this industry
    pub benchmarks: BenchmarkRegistry,
}

/// Serialized form of the reference data.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReferenceDocument {
    /// Industries in declaration order
    #[serde(default)]
    pub industries: IndexMap<String, IndustryDocument>,
}

/// Serialized form of one industry's data.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndustryDocument {
    /// Optional display label, defaults to the industry id
    #[serde(default)]
    pub label: Option<String>,
    /// Cards grouped by stage
    #[serde(default)]
    pub catalog: CardCatalog,
    /// Benchmarks in evaluation order
    #[serde(default)]
    pub benchmarks: BenchmarkRegistry,
}

/// Card catalogs and benchmark registries keyed by industry id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceData {
    industries: IndexMap<String, IndustryData>,
}

impl ReferenceData {
    /// Reference data with no industries registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in reference data (ecommerce, plus selectable industries without data).
    pub fn builtin() -> Self {
        builtin::reference_data()
    }

    /// Parses reference data from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let document: ReferenceDocument = serde_yaml::from_str(yaml)?;
        Self::try_from(document)
    }

    /// Parses reference data from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: ReferenceDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    /// Loads reference data from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let data = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&content)?,
            _ => Self::from_yaml_str(&content)?,
        };
        tracing::info!(
            "Loaded reference data for {} industries from {}",
            data.industries.len(),
            path.display()
        );
        Ok(data)
    }

    /// Registers or replaces one industry's data after validating it.
    pub fn insert_industry(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        catalog: CardCatalog,
        benchmarks: BenchmarkRegistry,
    ) -> Result<()> {
        let id = id.into();
        let data = IndustryData {
            label: label.into(),
            catalog,
            benchmarks,
        };
        validate_industry(&id, &data)?;
        self.industries.insert(id, data);
        Ok(())
    }

    /// Industry ids and labels in declaration order.
    pub fn industries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.industries
            .iter()
            .map(|(id, data)| (id.as_str(), data.label.as_str()))
    }

    /// Data for one industry, if registered.
    pub fn industry(&self, industry: &str) -> Option<&IndustryData> {
        self.industries.get(industry)
    }

    /// Whether the industry id is registered (with or without data).
    pub fn is_registered(&self, industry: &str) -> bool {
        self.industries.contains_key(industry)
    }

    /// Card catalog for an industry, empty when the industry is unknown.
    pub fn get_cards(&self, industry: &str) -> &CardCatalog {
        self.industry(industry)
            .map(|data| &data.catalog)
            .unwrap_or(&EMPTY_CATALOG)
    }

    /// Benchmarks for an industry in registry order, empty when unknown.
    pub fn get_benchmarks(&self, industry: &str) -> &[BenchmarkRule] {
        self.industry(industry)
            .map(|data| data.benchmarks.rules())
            .unwrap_or(&[])
    }

    /// Resolves a card id against an industry's catalog.
    pub fn resolve_card(&self, industry: &str, card_id: &str) -> Result<&TouchpointCard> {
        self.get_cards(industry)
            .find(card_id)
            .ok_or_else(|| GapFinderError::UnknownCard {
                industry: industry.to_string(),
                card_id: card_id.to_string(),
            })
    }
}

impl TryFrom<ReferenceDocument> for ReferenceData {
    type Error = GapFinderError;

    fn try_from(document: ReferenceDocument) -> Result<Self> {
        let mut industries = IndexMap::with_capacity(document.industries.len());

        for (id, industry) in document.industries {
            let data = IndustryData {
                label: industry.label.unwrap_or_else(|| id.clone()),
                catalog: industry.catalog,
                benchmarks: industry.benchmarks,
            };
            validate_industry(&id, &data)?;
            industries.insert(id, data);
        }

        Ok(Self { industries })
    }
}

impl From<&ReferenceData> for ReferenceDocument {
    fn from(data: &ReferenceData) -> Self {
        Self {
            industries: data
                .industries
                .iter()
                .map(|(id, industry)| {
                    (
                        id.clone(),
                        IndustryDocument {
                            label: Some(industry.label.clone()),
                            catalog: industry.catalog.clone(),
                            benchmarks: industry.benchmarks.clone(),
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Checks one industry's data for internal consistency.
///
/// Benchmarks must reference catalog cards, unless the catalog is empty
/// (an industry may ship benchmarks before its cards are populated).
fn validate_industry(id: &str, data: &IndustryData) -> Result<()> {
    if id.trim().is_empty() {
        return Err(GapFinderError::InvalidReferenceData(
            "industry id must not be empty".to_string(),
        ));
    }

    data.catalog.validate(id)?;

    if data.catalog.is_empty() {
        return Ok(());
    }

    for rule in data.benchmarks.rules() {
        if data.catalog.find(&rule.touchpoint_id).is_none() {
            return Err(GapFinderError::InvalidReferenceData(format!(
                "benchmark for {} references unknown card '{}'",
                id, rule.touchpoint_id
            )));
        }
    }

    Ok(())
}
