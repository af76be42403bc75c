//! Journey insights - summary counts shown alongside the findings.

use gapfinder_core::{Gap, Journey, Severity, Stage};
use serde::Serialize;

/// Number of findings attached to one stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StageIssues {
    pub stage: Stage,
    pub count: usize,
}

impl StageIssues {
    /// Badge label such as "1 issue" or "3 issues"; `None` when clean.
    pub fn badge(&self) -> Option<String> {
        match self.count {
            0 => None,
            1 => Some("1 issue".to_string()),
            n => Some(format!("{} issues", n)),
        }
    }
}

/// Summary of a journey's findings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JourneyInsights {
    /// High-severity findings
    pub critical_issues: usize,
    /// Medium-severity findings
    pub opportunities: usize,
    /// Cards placed minus findings, floored at zero
    pub strong_touchpoints: usize,
    /// Findings per stage in funnel order
    pub stage_issues: Vec<StageIssues>,
}

impl JourneyInsights {
    /// Computes insights from a journey and its findings.
    pub fn from_findings(journey: &Journey, gaps: &[Gap]) -> Self {
        let with_severity = |severity: Severity| gaps.iter().filter(|g| g.severity == severity).count();

        Self {
            critical_issues: with_severity(Severity::High),
            opportunities: with_severity(Severity::Medium),
            strong_touchpoints: journey.total_cards().saturating_sub(gaps.len()),
            stage_issues: Stage::ALL
                .into_iter()
                .map(|stage| StageIssues {
                    stage,
                    count: gaps.iter().filter(|g| g.stage == stage).count(),
                })
                .collect(),
        }
    }

    /// Total findings across all stages.
    pub fn total_issues(&self) -> usize {
        self.stage_issues.iter().map(|s| s.count).sum()
    }
}
