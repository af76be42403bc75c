//! Core types for GapFinder.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GapFinderError;

/// Funnel stage a touchpoint is placed into.
///
/// Variant order is the canonical funnel order and is relied on by `Ord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Awareness,
    Consideration,
    Decision,
    Retention,
}

impl Stage {
    /// All stages in funnel order.
    pub const ALL: [Stage; 4] = [
        Stage::Awareness,
        Stage::Consideration,
        Stage::Decision,
        Stage::Retention,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Awareness => "awareness",
            Stage::Consideration => "consideration",
            Stage::Decision => "decision",
            Stage::Retention => "retention",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = GapFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GapFinderError::UnknownStage(s.to_string()))
    }
}

/// How a touchpoint talks to the customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommunicationType {
    Persuasive,
    Informational,
    SocialProof,
    Transactional,
    Relational,
}

impl CommunicationType {
    /// Returns the kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationType::Persuasive => "persuasive",
            CommunicationType::Informational => "informational",
            CommunicationType::SocialProof => "social-proof",
            CommunicationType::Transactional => "transactional",
            CommunicationType::Relational => "relational",
        }
    }
}

/// How much trust a touchpoint builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrustLevel {
    LowTrust,
    MediumTrust,
    HighTrust,
}

impl TrustLevel {
    /// Returns the kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::LowTrust => "low-trust",
            TrustLevel::MediumTrust => "medium-trust",
            TrustLevel::HighTrust => "high-trust",
        }
    }
}

/// How close a touchpoint sits to the conversion action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionProximity {
    Discovery,
    ConversionPrep,
    DirectConversion,
    Nurture,
}

/// Fixed classification attributes of a touchpoint card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTags {
    pub communication_type: CommunicationType,
    pub trust_level: TrustLevel,
    pub conversion_proximity: ConversionProximity,
}

impl CardTags {
    /// Creates a tag set.
    pub fn new(
        communication_type: CommunicationType,
        trust_level: TrustLevel,
        conversion_proximity: ConversionProximity,
    ) -> Self {
        Self {
            communication_type,
            trust_level,
            conversion_proximity,
        }
    }
}

/// A discrete interaction point between a customer and the business.
///
/// Cards are immutable reference data owned by the catalog; journeys hold clones.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchpointCard {
    /// Identifier, unique within one industry's catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Classification attributes
    pub tags: CardTags,
}

impl TouchpointCard {
    /// Creates a new card.
    pub fn new(id: impl Into<String>, name: impl Into<String>, tags: CardTags) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags,
        }
    }
}

/// A customer journey: cards placed into each funnel stage.
///
/// Duplicate cards within a stage are allowed. A stage missing from the
/// underlying map reads as empty, so partially initialised journeys are valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journey {
    stages: BTreeMap<Stage, Vec<TouchpointCard>>,
}

impl Journey {
    /// Creates a journey with all four stages present and empty.
    pub fn new() -> Self {
        Self {
            stages: Stage::ALL.into_iter().map(|s| (s, Vec::new())).collect(),
        }
    }

    /// Creates a journey from explicit stage contents.
    ///
    /// Stages not supplied are left absent and read as empty.
    pub fn from_stages(stages: impl IntoIterator<Item = (Stage, Vec<TouchpointCard>)>) -> Self {
        Self {
            stages: stages.into_iter().collect(),
        }
    }

    /// Returns the cards in a stage, empty if the stage is absent.
    pub fn cards(&self, stage: Stage) -> &[TouchpointCard] {
        self.stages.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends a card to a stage.
    pub fn push(&mut self, stage: Stage, card: TouchpointCard) {
        self.stages.entry(stage).or_default().push(card);
    }

    /// Appends a card to a stage (builder pattern).
    pub fn with_card(mut self, stage: Stage, card: TouchpointCard) -> Self {
        self.push(stage, card);
        self
    }

    /// Removes every card with `card_id` from a stage.
    ///
    /// Returns the number of cards removed.
    pub fn remove_all(&mut self, stage: Stage, card_id: &str) -> usize {
        match self.stages.get_mut(&stage) {
            Some(cards) => {
                let before = cards.len();
                cards.retain(|card| card.id != card_id);
                before - cards.len()
            }
            None => 0,
        }
    }

    /// Removes all cards from every stage.
    pub fn clear(&mut self) {
        for cards in self.stages.values_mut() {
            cards.clear();
        }
    }

    /// Whether any card in the stage has the given id.
    pub fn contains(&self, stage: Stage, card_id: &str) -> bool {
        self.cards(stage).iter().any(|card| card.id == card_id)
    }

    /// Total number of cards across all stages.
    pub fn total_cards(&self) -> usize {
        self.stages.values().map(Vec::len).sum()
    }

    /// Returns true if no stage holds a card.
    pub fn is_empty(&self) -> bool {
        self.total_cards() == 0
    }

    /// Iterates all four stages in funnel order, absent ones as empty.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &[TouchpointCard])> + '_ {
        Stage::ALL.into_iter().map(move |stage| (stage, self.cards(stage)))
    }
}

/// Industry-scoped expectation that a touchpoint appears in a stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRule {
    /// Stage the touchpoint is expected in
    pub stage: Stage,
    /// Expected card id
    #[serde(alias = "touchpoint", alias = "touchpointId")]
    pub touchpoint_id: String,
    /// Message reported when the touchpoint is missing
    pub message: String,
}

impl BenchmarkRule {
    /// Creates a new benchmark rule.
    pub fn new(stage: Stage, touchpoint_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage,
            touchpoint_id: touchpoint_id.into(),
            message: message.into(),
        }
    }
}

/// Severity of a detected gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a detected gap.
///
/// Serialized as a plain snake_case string. Unrecognised strings round-trip
/// through `Other` so consumers keep working as new rule types are added.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GapType {
    /// An industry benchmark touchpoint is missing
    IndustryStandard,
    /// Conversion is requested before trust is established
    SequenceViolation,
    /// A crowded consideration stage lacks social proof
    MissingSocialProof,
    /// Any other rule-defined category
    Other(String),
}

impl GapType {
    /// Returns the wire name.
    pub fn as_str(&self) -> &str {
        match self {
            GapType::IndustryStandard => "industry_standard",
            GapType::SequenceViolation => "sequence_violation",
            GapType::MissingSocialProof => "missing_social_proof",
            GapType::Other(name) => name,
        }
    }
}

impl From<String> for GapType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "industry_standard" => GapType::IndustryStandard,
            "sequence_violation" => GapType::SequenceViolation,
            "missing_social_proof" => GapType::MissingSocialProof,
            _ => GapType::Other(value),
        }
    }
}

impl From<GapType> for String {
    fn from(value: GapType) -> Self {
        match value {
            GapType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected deficiency or risk in a journey.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gap {
    /// Category of the finding
    #[serde(rename = "type")]
    pub gap_type: GapType,
    /// Stage the finding is attached to
    pub stage: Stage,
    /// Severity of the finding
    pub severity: Severity,
    /// Human-readable explanation
    pub message: String,
}

impl Gap {
    /// Creates a new gap.
    pub fn new(gap_type: GapType, stage: Stage, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            gap_type,
            stage,
            severity,
            message: message.into(),
        }
    }
}
