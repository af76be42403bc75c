//! Card catalog - the touchpoint cards offered for one industry.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{GapFinderError, Result};
use crate::types::{Stage, TouchpointCard};

/// Touchpoint cards grouped by the stage they are offered under.
///
/// Read-only once built. An industry without data has an empty catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardCatalog {
    stages: BTreeMap<Stage, Vec<TouchpointCard>>,
}

impl CardCatalog {
    /// Creates an empty catalog.
    pub const fn empty() -> Self {
        Self {
            stages: BTreeMap::new(),
        }
    }

    /// Builds a catalog, rejecting duplicate card ids.
    pub fn new(
        industry: &str,
        stages: impl IntoIterator<Item = (Stage, Vec<TouchpointCard>)>,
    ) -> Result<Self> {
        let catalog = Self {
            stages: stages.into_iter().collect(),
        };
        catalog.validate(industry)?;
        Ok(catalog)
    }

    /// Builds a catalog without validation, for tables known to be well formed.
    pub(crate) fn from_stages(stages: impl IntoIterator<Item = (Stage, Vec<TouchpointCard>)>) -> Self {
        Self {
            stages: stages.into_iter().collect(),
        }
    }

    /// Checks that card ids are unique across the whole catalog.
    pub(crate) fn validate(&self, industry: &str) -> Result<()> {
        let mut seen = HashSet::new();
        for card in self.stages.values().flatten() {
            if !seen.insert(card.id.as_str()) {
                return Err(GapFinderError::DuplicateCardId {
                    industry: industry.to_string(),
                    card_id: card.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Cards offered under a stage, in catalog order.
    pub fn cards(&self, stage: Stage) -> &[TouchpointCard] {
        self.stages.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks up a card by id across all stages.
    pub fn find(&self, card_id: &str) -> Option<&TouchpointCard> {
        self.stages.values().flatten().find(|card| card.id == card_id)
    }

    /// Returns the stage a card is offered under.
    pub fn stage_of(&self, card_id: &str) -> Option<Stage> {
        self.stages
            .iter()
            .find(|(_, cards)| cards.iter().any(|card| card.id == card_id))
            .map(|(stage, _)| *stage)
    }

    /// Iterates all four stages in funnel order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &[TouchpointCard])> + '_ {
        Stage::ALL.into_iter().map(move |stage| (stage, self.cards(stage)))
    }

    /// Total number of cards.
    pub fn len(&self) -> usize {
        self.stages.values().map(Vec::len).sum()
    }

    /// Returns true if the catalog holds no cards.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
