//! Gap rules - independent heuristics evaluated against a journey.
//!
//! Every rule receives the same read-only [`RuleContext`] and returns zero or
//! more gaps. Rules must be total over any journey, including one where every
//! stage is empty, and must not depend on anything outside the context.
//!
//! The standard set runs in a fixed order:
//!
//! 1. [`BenchmarkCoverageRule`] (registry order)
//! 2. [`TrustSequencingRule`]
//! 3. [`SocialProofDensityRule`]
//!
//! New rules are appended to the end so output order stays stable.

pub mod benchmark;
pub mod sequencing;
pub mod social_proof;

use std::fmt;

pub use benchmark::BenchmarkCoverageRule;
pub use sequencing::TrustSequencingRule;
pub use social_proof::SocialProofDensityRule;

use crate::catalog::CardCatalog;
use crate::config::DetectorConfig;
use crate::types::{BenchmarkRule, Gap, Journey};

/// Everything a rule may look at during one evaluation.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    /// Journey snapshot under evaluation
    pub journey: &'a Journey,
    /// Industry identifier, possibly unregistered
    pub industry: &'a str,
    /// Card catalog for the industry (empty if unknown)
    pub catalog: &'a CardCatalog,
    /// Benchmarks for the industry in registry order (empty if unknown)
    pub benchmarks: &'a [BenchmarkRule],
}

/// A single gap-detection heuristic.
pub trait GapRule: Send + Sync {
    /// Short stable name used in logs.
    fn name(&self) -> &str;

    /// Evaluates the rule. Must not panic for any well-formed journey.
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Gap>;
}

/// Adapter that turns a plain function into a [`GapRule`].
pub struct FnRule<F> {
    name: String,
    check: F,
}

impl<F> FnRule<F>
where
    F: Fn(&RuleContext<'_>) -> Vec<Gap> + Send + Sync,
{
    /// Wraps a function as a named rule.
    pub fn new(name: impl Into<String>, check: F) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

impl<F> GapRule for FnRule<F>
where
    F: Fn(&RuleContext<'_>) -> Vec<Gap> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Gap> {
        (self.check)(ctx)
    }
}

/// Ordered list of rules.
///
/// Rules can only be appended; evaluation order equals insertion order.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn GapRule>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three standard rules, parameterised by `config`.
    pub fn standard(config: &DetectorConfig) -> Self {
        let mut rules = Self::new();
        rules.push(BenchmarkCoverageRule);
        rules.push(TrustSequencingRule::new(config.trust_stage, config.conversion_stage));
        rules.push(SocialProofDensityRule::new(
            config.social_proof_stage,
            config.social_proof_threshold,
        ));
        rules
    }

    /// Appends a rule to the end of the evaluation order.
    pub fn push(&mut self, rule: impl GapRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Appends a function rule to the end of the evaluation order.
    pub fn push_fn<F>(&mut self, name: impl Into<String>, check: F)
    where
        F: Fn(&RuleContext<'_>) -> Vec<Gap> + Send + Sync + 'static,
    {
        self.push(FnRule::new(name, check));
    }

    /// Rules in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn GapRule>> {
        self.rules.iter()
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
