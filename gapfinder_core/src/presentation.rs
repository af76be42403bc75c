//! Presentation lookup - how each finding should be displayed.
//!
//! Kept outside the rules so detection stays free of UI concerns. Gap types
//! without an entry fall back to a neutral lightbulb treatment.

use serde::Serialize;

use crate::types::{GapType, Severity};

/// Banner color for a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Banner {
    Red,
    Yellow,
    Orange,
    Neutral,
}

/// Icon shown next to a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapIcon {
    BarChart,
    AlertTriangle,
    MessageSquare,
    Lightbulb,
}

/// Border accent derived from severity alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Yellow,
    Blue,
}

/// Display treatment for one gap type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GapPresentation {
    /// Heading shown above the message
    pub title: &'static str,
    pub banner: Banner,
    pub icon: GapIcon,
}

const NEUTRAL: GapPresentation = GapPresentation {
    title: "Journey Insight",
    banner: Banner::Neutral,
    icon: GapIcon::Lightbulb,
};

/// Looks up the display treatment for a gap type.
pub fn presentation_for(gap_type: &GapType) -> GapPresentation {
    match gap_type {
        GapType::IndustryStandard => GapPresentation {
            title: "Missing Industry Standard",
            banner: Banner::Red,
            icon: GapIcon::BarChart,
        },
        GapType::SequenceViolation => GapPresentation {
            title: "Flow Issue",
            banner: Banner::Yellow,
            icon: GapIcon::AlertTriangle,
        },
        GapType::MissingSocialProof => GapPresentation {
            title: "Missing Social Proof",
            banner: Banner::Orange,
            icon: GapIcon::MessageSquare,
        },
        GapType::Other(_) => NEUTRAL,
    }
}

/// Border accent for a severity.
pub fn severity_accent(severity: Severity) -> Accent {
    match severity {
        Severity::High => Accent::Red,
        Severity::Medium => Accent::Yellow,
        Severity::Low => Accent::Blue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(presentation_for(&GapType::IndustryStandard).banner, Banner::Red);
        assert_eq!(presentation_for(&GapType::SequenceViolation).icon, GapIcon::AlertTriangle);
        assert_eq!(presentation_for(&GapType::MissingSocialProof).banner, Banner::Orange);
    }

    #[test]
    fn test_unknown_type_falls_back_to_lightbulb() {
        let style = presentation_for(&GapType::Other("checkout_friction".to_string()));
        assert_eq!(style.banner, Banner::Neutral);
        assert_eq!(style.icon, GapIcon::Lightbulb);
    }

    #[test]
    fn test_severity_accent() {
        assert_eq!(severity_accent(Severity::High), Accent::Red);
        assert_eq!(severity_accent(Severity::Low), Accent::Blue);
    }
}
