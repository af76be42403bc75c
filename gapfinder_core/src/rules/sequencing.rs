//! Trust sequencing - trust must be established before a direct conversion ask.
//!
//! The check is presence-based: a high-trust card anywhere in the trust stage
//! satisfies it, regardless of card position.

use super::{GapRule, RuleContext};
use crate::types::{ConversionProximity, Gap, GapType, Severity, Stage, TrustLevel};

/// Message reported when conversion is requested without prior trust.
pub const TRUST_SEQUENCE_MESSAGE: &str =
    "You're asking customers to convert before building enough trust";

/// Flags journeys that ask for a direct conversion without a high-trust
/// touchpoint earlier in the funnel.
#[derive(Clone, Copy, Debug)]
pub struct TrustSequencingRule {
    trust_stage: Stage,
    conversion_stage: Stage,
}

impl TrustSequencingRule {
    /// Creates the rule for the given stages.
    pub fn new(trust_stage: Stage, conversion_stage: Stage) -> Self {
        Self {
            trust_stage,
            conversion_stage,
        }
    }
}

impl Default for TrustSequencingRule {
    fn default() -> Self {
        Self::new(Stage::Consideration, Stage::Decision)
    }
}

impl GapRule for TrustSequencingRule {
    fn name(&self) -> &str {
        "trust_sequencing"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Gap> {
        let has_direct_conversion = ctx
            .journey
            .cards(self.conversion_stage)
            .iter()
            .any(|card| card.tags.conversion_proximity == ConversionProximity::DirectConversion);
        let has_high_trust = ctx
            .journey
            .cards(self.trust_stage)
            .iter()
            .any(|card| card.tags.trust_level == TrustLevel::HighTrust);

        if has_direct_conversion && !has_high_trust {
            vec![Gap::new(
                GapType::SequenceViolation,
                self.trust_stage,
                Severity::Medium,
                TRUST_SEQUENCE_MESSAGE,
            )]
        } else {
            Vec::new()
        }
    }
}
