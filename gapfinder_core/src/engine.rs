//! Gap detection engine - runs the rule set over a journey.

use std::sync::{Arc, OnceLock};

use crate::config::DetectorConfig;
use crate::reference::ReferenceData;
use crate::rules::{GapRule, RuleContext, RuleSet};
use crate::types::{Gap, Journey};

/// Evaluates journeys against reference data and an ordered rule set.
///
/// Detection is pure: the detector holds only immutable data, so it can be
/// shared freely and called on every journey edit.
///
/// # Examples
///
/// ```
/// use gapfinder_core::{GapDetector, Journey, ReferenceData};
/// use std::sync::Arc;
///
/// let detector = GapDetector::new(Arc::new(ReferenceData::builtin()));
/// let gaps = detector.detect_gaps(&Journey::new(), "ecommerce");
/// assert_eq!(gaps.len(), 2);
/// ```
#[derive(Debug)]
pub struct GapDetector {
    data: Arc<ReferenceData>,
    rules: RuleSet,
}

impl GapDetector {
    /// Creates a detector with the standard rules and default parameters.
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self::with_config(data, &DetectorConfig::default())
    }

    /// Creates a detector with the standard rules parameterised by `config`.
    pub fn with_config(data: Arc<ReferenceData>, config: &DetectorConfig) -> Self {
        Self {
            data,
            rules: RuleSet::standard(config),
        }
    }

    /// Creates a detector with an explicit rule set.
    pub fn with_rules(data: Arc<ReferenceData>, rules: RuleSet) -> Self {
        Self { data, rules }
    }

    /// Appends a rule after the existing ones (builder pattern).
    pub fn with_rule(mut self, rule: impl GapRule + 'static) -> Self {
        self.rules.push(rule);
        self
    }

    /// Reference data used for lookups.
    pub fn reference_data(&self) -> &ReferenceData {
        &self.data
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Detects gaps in `journey` for `industry`.
    ///
    /// Unknown industries evaluate with an empty catalog and no benchmarks.
    /// Output is the concatenation of each rule's gaps in rule order.
    pub fn detect_gaps(&self, journey: &Journey, industry: &str) -> Vec<Gap> {
        if !self.data.is_registered(industry) {
            tracing::debug!("Industry '{}' has no reference data, skipping benchmarks", industry);
        }

        let ctx = RuleContext {
            journey,
            industry,
            catalog: self.data.get_cards(industry),
            benchmarks: self.data.get_benchmarks(industry),
        };

        let mut gaps = Vec::new();
        for rule in self.rules.iter() {
            let found = rule.evaluate(&ctx);
            tracing::debug!("Rule {} produced {} gaps", rule.name(), found.len());
            gaps.extend(found);
        }

        tracing::debug!(
            "Detected {} gaps across {} cards for {}",
            gaps.len(),
            journey.total_cards(),
            industry
        );
        gaps
    }
}

/// Detects gaps using the built-in reference data and standard rules.
pub fn detect_gaps(journey: &Journey, industry: &str) -> Vec<Gap> {
    static BUILTIN: OnceLock<GapDetector> = OnceLock::new();
    BUILTIN
        .get_or_init(|| GapDetector::new(Arc::new(ReferenceData::builtin())))
        .detect_gaps(journey, industry)
}
