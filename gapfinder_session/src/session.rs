//! Journey editing session.
//!
//! A session owns the mutable state of one journey-building run: the selected
//! industry and the journey itself. Findings are never cached; every call to
//! [`JourneySession::gaps`] re-runs detection on the current snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gapfinder_core::{CardCatalog, Gap, GapDetector, Journey, Stage};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::insights::JourneyInsights;
use crate::journey_file::JourneyFile;

/// Unique identifier for a journey session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(uuid::Uuid);

impl SessionId {
    /// Create a new random SessionId
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single-writer session state for building a journey.
#[derive(Debug)]
pub struct JourneySession {
    id: SessionId,
    created_at: DateTime<Utc>,
    detector: Arc<GapDetector>,
    industry: String,
    journey: Journey,
}

impl JourneySession {
    /// Starts a session with an empty journey.
    pub fn new(detector: Arc<GapDetector>, industry: impl Into<String>) -> Self {
        let session = Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            detector,
            industry: industry.into(),
            journey: Journey::new(),
        };
        tracing::debug!("Started session {} for {}", session.id, session.industry);
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Currently selected industry.
    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Current journey snapshot.
    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    /// Cards offered for the selected industry (empty if it has no data).
    pub fn catalog(&self) -> &CardCatalog {
        self.detector.reference_data().get_cards(&self.industry)
    }

    /// Switches industry. Cards already placed stay in the journey.
    pub fn select_industry(&mut self, industry: impl Into<String>) {
        self.industry = industry.into();
        if !self.detector.reference_data().is_registered(&self.industry) {
            tracing::warn!("Selected industry '{}' has no reference data", self.industry);
        }
    }

    /// Places a catalog card into a stage.
    ///
    /// Any card can go into any stage, and the same card may be added repeatedly.
    pub fn add_card(&mut self, stage: Stage, card_id: &str) -> Result<()> {
        let card = self
            .detector
            .reference_data()
            .resolve_card(&self.industry, card_id)?
            .clone();
        self.journey.push(stage, card);
        Ok(())
    }

    /// Removes every instance of a card from a stage.
    ///
    /// Returns the number of cards removed.
    pub fn remove_card(&mut self, stage: Stage, card_id: &str) -> usize {
        self.journey.remove_all(stage, card_id)
    }

    /// Replaces the journey with the cards listed in a journey file.
    ///
    /// Every id is resolved against the selected industry first; on failure
    /// the current journey is left untouched.
    pub fn load_journey(&mut self, file: &JourneyFile) -> Result<()> {
        self.journey = file.resolve(self.detector.reference_data(), &self.industry)?;
        tracing::debug!(
            "Session {} loaded {} cards",
            self.id,
            self.journey.total_cards()
        );
        Ok(())
    }

    /// Empties every stage.
    pub fn clear(&mut self) {
        self.journey.clear();
    }

    /// Findings for the current journey and industry.
    pub fn gaps(&self) -> Vec<Gap> {
        self.detector.detect_gaps(&self.journey, &self.industry)
    }

    /// Findings attached to one stage, in detection order.
    pub fn stage_gaps(&self, stage: Stage) -> Vec<Gap> {
        self.gaps().into_iter().filter(|gap| gap.stage == stage).collect()
    }

    /// Summary counts for the current journey.
    pub fn insights(&self) -> JourneyInsights {
        JourneyInsights::from_findings(&self.journey, &self.gaps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapfinder_core::{GapType, ReferenceData};

    fn session() -> JourneySession {
        let detector = Arc::new(GapDetector::new(Arc::new(ReferenceData::builtin())));
        JourneySession::new(detector, "ecommerce")
    }

    #[test]
    fn test_session_id_uniqueness() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn test_new_session_starts_empty() {
        let session = session();
        assert!(session.journey().is_empty());
        assert_eq!(session.catalog().len(), 18);
        assert_eq!(session.gaps().len(), 2);
    }

    #[test]
    fn test_add_unknown_card_fails() {
        let mut session = session();
        assert!(session.add_card(Stage::Awareness, "billboard").is_err());
        assert!(session.journey().is_empty());
    }

    #[test]
    fn test_add_and_remove_duplicates() {
        let mut session = session();
        session.add_card(Stage::Awareness, "social-ads").unwrap();
        session.add_card(Stage::Awareness, "social-ads").unwrap();
        assert_eq!(session.journey().cards(Stage::Awareness).len(), 2);

        assert_eq!(session.remove_card(Stage::Awareness, "social-ads"), 2);
        assert!(session.journey().is_empty());
    }

    #[test]
    fn test_stage_gaps_filters_by_stage() {
        let mut session = session();
        session.add_card(Stage::Decision, "checkout").unwrap();

        let consideration = session.stage_gaps(Stage::Consideration);
        assert_eq!(consideration.len(), 2);
        assert_eq!(consideration[0].gap_type, GapType::IndustryStandard);
        assert_eq!(consideration[1].gap_type, GapType::SequenceViolation);
        assert!(session.stage_gaps(Stage::Retention).is_empty());
    }

    #[test]
    fn test_load_journey_replaces_cards() {
        let mut session = session();
        session.add_card(Stage::Awareness, "content-blog").unwrap();

        let file = JourneyFile::from_yaml_str("consideration: [reviews]\ndecision: [checkout]\n").unwrap();
        session.load_journey(&file).unwrap();

        assert!(session.journey().cards(Stage::Awareness).is_empty());
        assert_eq!(session.journey().total_cards(), 2);
        assert_eq!(session.gaps().len(), 1);
    }

    #[test]
    fn test_load_journey_failure_keeps_current_journey() {
        let mut session = session();
        session.add_card(Stage::Decision, "cart").unwrap();

        let file = JourneyFile::from_yaml_str("decision: [carrier-pigeon]\n").unwrap();
        assert!(session.load_journey(&file).is_err());
        assert_eq!(session.journey().cards(Stage::Decision).len(), 1);
    }

    #[test]
    fn test_switching_to_empty_industry_keeps_journey() {
        let mut session = session();
        session.add_card(Stage::Decision, "checkout").unwrap();
        session.select_industry("service");

        assert_eq!(session.journey().total_cards(), 1);
        assert!(session.catalog().is_empty());

        let gaps = session.gaps();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_type, GapType::SequenceViolation);
    }
}
