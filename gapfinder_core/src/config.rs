//! Detector configuration - parameters of the structural rules.

use serde::{Deserialize, Serialize};

use crate::types::Stage;

/// Parameters for the standard rule set.
///
/// Defaults reproduce the reference heuristics: conversion in `decision`
/// needs trust in `consideration`, and more than 2 `consideration` cards
/// need social proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Stage whose direct-conversion cards trigger the trust check (default: decision)
    pub conversion_stage: Stage,
    /// Stage that must contain a high-trust card (default: consideration)
    pub trust_stage: Stage,
    /// Stage checked for social proof (default: consideration)
    pub social_proof_stage: Stage,
    /// Card count above which social proof is required (default: 2)
    pub social_proof_threshold: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            conversion_stage: Stage::Decision,
            trust_stage: Stage::Consideration,
            social_proof_stage: Stage::Consideration,
            social_proof_threshold: 2,
        }
    }
}

impl DetectorConfig {
    /// Set the social-proof threshold (builder pattern)
    pub fn with_social_proof_threshold(mut self, threshold: usize) -> Self {
        self.social_proof_threshold = threshold;
        self
    }

    /// Set the stage checked for social proof (builder pattern)
    pub fn with_social_proof_stage(mut self, stage: Stage) -> Self {
        self.social_proof_stage = stage;
        self
    }

    /// Set the conversion and trust stages of the sequencing check (builder pattern)
    pub fn with_trust_sequence(mut self, trust_stage: Stage, conversion_stage: Stage) -> Self {
        self.trust_stage = trust_stage;
        self.conversion_stage = conversion_stage;
        self
    }
}
