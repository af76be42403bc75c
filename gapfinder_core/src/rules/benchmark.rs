//! Benchmark coverage - every industry-expected touchpoint must be present.

use super::{GapRule, RuleContext};
use crate::types::{Gap, GapType, Severity};

/// Emits one high-severity gap per benchmark whose touchpoint is missing
/// from its stage, in registry order.
#[derive(Clone, Copy, Debug, Default)]
pub struct BenchmarkCoverageRule;

impl GapRule for BenchmarkCoverageRule {
    fn name(&self) -> &str {
        "benchmark_coverage"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Gap> {
        ctx.benchmarks
            .iter()
            .filter(|benchmark| !ctx.journey.contains(benchmark.stage, &benchmark.touchpoint_id))
            .map(|benchmark| {
                Gap::new(
                    GapType::IndustryStandard,
                    benchmark.stage,
                    Severity::High,
                    benchmark.message.clone(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;
    use crate::types::{Journey, Stage};

    fn evaluate(data: &ReferenceData, journey: &Journey) -> Vec<Gap> {
        let ctx = RuleContext {
            journey,
            industry: "ecommerce",
            catalog: data.get_cards("ecommerce"),
            benchmarks: data.get_benchmarks("ecommerce"),
        };
        BenchmarkCoverageRule.evaluate(&ctx)
    }

    #[test]
    fn test_missing_benchmarks_in_registry_order() {
        let data = ReferenceData::builtin();
        let gaps = evaluate(&data, &Journey::new());

        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].stage, Stage::Consideration);
        assert_eq!(gaps[1].stage, Stage::Decision);
        assert!(gaps.iter().all(|g| g.severity == Severity::High));
        assert!(gaps.iter().all(|g| g.gap_type == GapType::IndustryStandard));
    }

    #[test]
    fn test_card_in_wrong_stage_does_not_count() {
        let data = ReferenceData::builtin();
        let reviews = data.resolve_card("ecommerce", "reviews").unwrap().clone();
        let journey = Journey::new().with_card(Stage::Decision, reviews);

        let gaps = evaluate(&data, &journey);
        assert_eq!(gaps.len(), 2);
    }

    #[test]
    fn test_present_benchmark_is_satisfied() {
        let data = ReferenceData::builtin();
        let badges = data.resolve_card("ecommerce", "security-badges").unwrap().clone();
        let journey = Journey::new().with_card(Stage::Decision, badges);

        let gaps = evaluate(&data, &journey);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].message, "95% of successful eCommerce sites show customer reviews");
    }
}
