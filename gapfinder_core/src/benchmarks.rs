//! Benchmark registry - per-industry expected touchpoints.

use serde::{Deserialize, Serialize};

use crate::types::BenchmarkRule;

/// Ordered list of benchmark expectations for one industry.
///
/// Registry order is preserved in detection output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkRegistry {
    rules: Vec<BenchmarkRule>,
}

impl BenchmarkRegistry {
    /// Creates an empty registry.
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates a registry from rules in the given order.
    pub fn new(rules: Vec<BenchmarkRule>) -> Self {
        Self { rules }
    }

    /// Rules in registry order.
    pub fn rules(&self) -> &[BenchmarkRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
