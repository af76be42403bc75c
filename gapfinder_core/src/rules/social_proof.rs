//! Social-proof density - a crowded stage needs validation from other customers.

use super::{GapRule, RuleContext};
use crate::types::{CommunicationType, Gap, GapType, Severity, Stage};

/// Message reported when a crowded stage lacks social proof.
pub const SOCIAL_PROOF_MESSAGE: &str =
    "Customers need validation from others before making decisions";

/// Flags a stage holding more than `threshold` cards with no social-proof card.
#[derive(Clone, Copy, Debug)]
pub struct SocialProofDensityRule {
    stage: Stage,
    threshold: usize,
}

impl SocialProofDensityRule {
    /// Creates the rule for a stage; the gap fires strictly above `threshold` cards.
    pub fn new(stage: Stage, threshold: usize) -> Self {
        Self { stage, threshold }
    }
}

impl Default for SocialProofDensityRule {
    fn default() -> Self {
        Self::new(Stage::Consideration, 2)
    }
}

impl GapRule for SocialProofDensityRule {
    fn name(&self) -> &str {
        "social_proof_density"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Gap> {
        let cards = ctx.journey.cards(self.stage);
        let has_social_proof = cards
            .iter()
            .any(|card| card.tags.communication_type == CommunicationType::SocialProof);

        if cards.len() > self.threshold && !has_social_proof {
            vec![Gap::new(
                GapType::MissingSocialProof,
                self.stage,
                Severity::Medium,
                SOCIAL_PROOF_MESSAGE,
            )]
        } else {
            Vec::new()
        }
    }
}
