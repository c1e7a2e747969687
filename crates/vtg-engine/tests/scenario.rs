//! End-to-end analysis of a five-insight batch
//!
//! - Readiness classification and blockers per item
//! - Dependency edges, phase order, and foundational detection
//! - Prioritization (experimental items never HIGH) and quick wins
//! - Markdown report sections

use pretty_assertions::assert_eq;

use vtg_core::entities::InsightItem;
use vtg_core::enums::{Priority, ReadinessStatus};
use vtg_core::responses::AnalysisResult;
use vtg_engine::IntelligenceEngine;

fn scenario_items() -> Vec<InsightItem> {
    vec![
        InsightItem::new(
            "Quick Automation Script",
            "A small shell script that renames and files your downloads automatically. \
             Saves 10 minutes every day. Takes 15 minutes to set up.",
        )
        .with_id("quick"),
        InsightItem::new(
            "Basic API Setup",
            "Requires an API key from the provider. Store the key in an environment file \
             and send a test request to confirm access. Setup takes about 40 minutes and \
             saves 15 minutes every week.",
        )
        .with_id("api"),
        InsightItem::new(
            "Advanced Workflow Automation",
            "Depends on Basic API Setup. An advanced workflow that chains the API with Slack \
             and Notion webhooks. First configure each integration, then map fields, finally \
             test the pipeline and debug errors. Takes 2 hours to implement and saves 30 \
             minutes every day.",
        )
        .with_id("workflow"),
        InsightItem::new(
            "Experimental Beta Feature",
            "This beta feature auto-summarizes meeting notes. Saves 25 minutes every day \
             once it works.",
        )
        .with_id("beta"),
        InsightItem::new(
            "Database Integration",
            "Needs Basic API Setup and a PostgreSQL database. Sync API results into tables \
             nightly. Takes 90 minutes to set up and saves 10 minutes every day.",
        )
        .with_id("database"),
    ]
}

fn analyze() -> AnalysisResult {
    IntelligenceEngine::default().analyze_items(&scenario_items())
}

// ---------------------------------------------------------------------------
// Readiness
// ---------------------------------------------------------------------------

#[test]
fn statuses_match_descriptions() {
    let result = analyze();
    let status = |id: &str| result.readiness_scores[id].status;
    assert_eq!(status("quick"), ReadinessStatus::Ready);
    assert_eq!(status("api"), ReadinessStatus::NeedsSetup);
    assert_eq!(status("workflow"), ReadinessStatus::NeedsSetup);
    assert_eq!(status("beta"), ReadinessStatus::Experimental);
    assert_eq!(status("database"), ReadinessStatus::NeedsSetup);
}

#[test]
fn api_key_is_a_blocker() {
    let result = analyze();
    let api = &result.readiness_scores["api"];
    assert_eq!(api.prerequisites, vec!["API key from the provider"]);
    assert_eq!(api.blockers, api.prerequisites);
    assert!(result.readiness_scores["beta"].confidence <= 0.7);
}

#[test]
fn workflow_is_more_complex_than_script() {
    let result = analyze();
    assert!(
        result.readiness_scores["workflow"].complexity
            > result.readiness_scores["quick"].complexity
    );
}

// ---------------------------------------------------------------------------
// Learning path
// ---------------------------------------------------------------------------

#[test]
fn api_setup_is_scheduled_before_its_dependents() {
    let result = analyze();
    let path = &result.learning_path;
    assert_eq!(path.dependency_graph["workflow"], vec!["api"]);
    assert_eq!(path.dependency_graph["database"], vec!["api"]);

    let api_phase = path.phase_of("api").unwrap();
    assert!(api_phase < path.phase_of("workflow").unwrap());
    assert!(api_phase < path.phase_of("database").unwrap());
}

#[test]
fn unmatched_prerequisites_stay_external() {
    let result = analyze();
    let external = &result.learning_path.external_requirements;
    assert!(
        external["database"]
            .iter()
            .any(|requirement| requirement == "PostgreSQL database")
    );
    assert!(external["workflow"].iter().any(|requirement| requirement == "Slack"));
}

#[test]
fn every_item_is_placed_exactly_once() {
    let result = analyze();
    let mut placed: Vec<&str> = result
        .learning_path
        .phases
        .iter()
        .flat_map(|phase| phase.items.iter().map(String::as_str))
        .collect();
    placed.sort_unstable();
    assert_eq!(placed, vec!["api", "beta", "database", "quick", "workflow"]);
    assert_eq!(result.learning_path.order.len(), 5);
    assert!(result.learning_path.removed_edges.is_empty());
}

// ---------------------------------------------------------------------------
// Prioritization
// ---------------------------------------------------------------------------

#[test]
fn experimental_item_is_never_high_priority() {
    let result = analyze();
    assert_ne!(result.prioritization.priority_of("beta"), Some(Priority::High));
    assert_eq!(result.prioritization.len(), 5);
}

#[test]
fn quick_wins_include_script_but_not_workflow() {
    let result = analyze();
    let wins: Vec<&str> = result
        .learning_path
        .quick_wins
        .iter()
        .map(|win| win.id.as_str())
        .collect();
    assert!(wins.contains(&"quick"));
    assert!(!wins.contains(&"workflow"));
    assert!(!wins.contains(&"beta"));
    assert_eq!(result.prioritization.priority_of("quick"), Some(Priority::High));
}

#[test]
fn statistics_summarize_the_batch() {
    let result = analyze();
    let stats = &result.statistics;
    assert_eq!(stats.total_items, 5);
    assert_eq!(stats.ready_count, 1);
    assert_eq!(stats.needs_setup_count, 3);
    assert_eq!(stats.experimental_count, 1);
    assert!((stats.ready_percent - 20.0).abs() < 1e-9);
    let hours: f64 = result.roi_scores.values().map(|m| m.implementation_hours).sum();
    assert!((stats.total_implementation_hours - hours).abs() < 1e-9);
    assert_eq!(stats.phase_count, result.learning_path.phases.len());
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[test]
fn report_covers_every_section() {
    let engine = IntelligenceEngine::default();
    let result = engine.analyze_items(&scenario_items());
    let report = engine.generate_report(&result);

    for section in [
        "## Executive Summary",
        "## Quick Wins",
        "## Prioritization Dashboard",
        "## Learning Path",
        "```mermaid",
        "graph TD",
    ] {
        assert!(report.contains(section), "missing {section}");
    }
    assert!(report.contains("**Quick Automation Script**"));
    assert!(report.contains("P1 --> P2"));
}

#[test]
fn result_bundle_serializes_with_status_labels() {
    let result = analyze();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["readiness_scores"]["beta"]["status"], "EXPERIMENTAL");
    assert!(json["roi_scores"]["workflow"]["breakeven_weeks"].is_number());
    assert_eq!(json["prioritization"]["high"][0]["id"], "quick");
    assert_eq!(json["learning_path"]["order"].as_array().map(Vec::len), Some(5));
}
