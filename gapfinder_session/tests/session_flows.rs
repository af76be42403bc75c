//! End-to-end journey building flows through the session API.

use std::sync::Arc;

use gapfinder_core::{GapDetector, GapType, ReferenceData, Severity, Stage};
use gapfinder_session::JourneySession;

fn ecommerce_session() -> JourneySession {
    let detector = GapDetector::new(Arc::new(ReferenceData::builtin()));
    JourneySession::new(Arc::new(detector), "ecommerce")
}

fn types(session: &JourneySession) -> Vec<GapType> {
    session.gaps().into_iter().map(|g| g.gap_type).collect()
}

#[test]
fn test_building_a_complete_journey_clears_all_gaps() {
    let mut session = ecommerce_session();
    assert_eq!(
        types(&session),
        vec![GapType::IndustryStandard, GapType::IndustryStandard]
    );

    session.add_card(Stage::Awareness, "social-ads").unwrap();
    session.add_card(Stage::Decision, "checkout").unwrap();
    assert_eq!(
        types(&session),
        vec![
            GapType::IndustryStandard,
            GapType::IndustryStandard,
            GapType::SequenceViolation,
        ]
    );

    session.add_card(Stage::Consideration, "product-pages").unwrap();
    session.add_card(Stage::Consideration, "comparison").unwrap();
    session.add_card(Stage::Consideration, "live-chat").unwrap();
    assert_eq!(
        types(&session),
        vec![
            GapType::IndustryStandard,
            GapType::IndustryStandard,
            GapType::SequenceViolation,
            GapType::MissingSocialProof,
        ]
    );

    session.add_card(Stage::Consideration, "reviews").unwrap();
    session.add_card(Stage::Decision, "security-badges").unwrap();
    assert!(session.gaps().is_empty());

    let insights = session.insights();
    assert_eq!(insights.critical_issues, 0);
    assert_eq!(insights.strong_touchpoints, 7);
}

#[test]
fn test_removing_a_card_brings_gaps_back() {
    let mut session = ecommerce_session();
    session.add_card(Stage::Consideration, "reviews").unwrap();
    session.add_card(Stage::Decision, "security-badges").unwrap();
    session.add_card(Stage::Decision, "cart").unwrap();
    assert!(session.gaps().is_empty());

    session.remove_card(Stage::Consideration, "reviews");
    let gaps = session.gaps();
    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].severity, Severity::High);
    assert_eq!(gaps[1].gap_type, GapType::SequenceViolation);
}

#[test]
fn test_insights_counts_by_severity() {
    let mut session = ecommerce_session();
    session.add_card(Stage::Decision, "cart").unwrap();
    for id in ["product-pages", "comparison", "size-guide"] {
        session.add_card(Stage::Consideration, id).unwrap();
    }

    let insights = session.insights();
    assert_eq!(insights.critical_issues, 2);
    assert_eq!(insights.opportunities, 2);
    assert_eq!(insights.strong_touchpoints, 0);
    assert_eq!(insights.stage_issues[1].badge().as_deref(), Some("3 issues"));
    assert_eq!(insights.stage_issues[2].badge().as_deref(), Some("1 issue"));
}

#[test]
fn test_clear_resets_to_empty_journey_findings() {
    let mut session = ecommerce_session();
    session.add_card(Stage::Retention, "loyalty-program").unwrap();
    session.clear();

    assert!(session.journey().is_empty());
    assert_eq!(session.gaps().len(), 2);
}
