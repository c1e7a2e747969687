//! Invariants that hold for any batch
//!
//! - Score ranges over generated descriptions
//! - Dependencies never scheduled after their dependents
//! - Determinism across runs
//! - Cycle safety and division safety
//! - Re-scoring under different economic assumptions

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use vtg_config::VantageConfig;
use vtg_core::entities::InsightItem;
use vtg_core::enums::ReadinessStatus;
use vtg_core::responses::AnalysisResult;
use vtg_engine::{IntelligenceEngine, RoiScorer};

fn mixed_batch() -> Vec<InsightItem> {
    vec![
        InsightItem::new("Terminal Alias Pack", "A few shell aliases. Saves 5 minutes daily."),
        InsightItem::new(
            "Docker Dev Environment",
            "Install Docker and run `docker compose up`. Takes 1 hour to set up. \
             Saves 20 minutes every week.",
        ),
        InsightItem::new(
            "Container Monitoring",
            "Requires Docker Dev Environment and a Grafana account. Setup takes 3 hours. \
             Saves hours of manual work each month.",
        ),
        InsightItem::new(
            "Log Search Dashboards",
            "Needs Container Monitoring. Build saved searches for common errors and debug \
             failures faster. Saves 30 minutes 3 times a week.",
        ),
        InsightItem::new(
            "AI Meeting Notes",
            "Uses the OpenAI API with an API key. Costs $20 per month. Still testing the \
             summarization prompt. Saves 15 minutes per meeting, twice a week.",
        ),
        InsightItem::new("Empty Shell", ""),
        InsightItem::new(
            "Release Checklist",
            "1. Tag the release\n2. Build artifacts\n3. Publish notes\nFinally announce it. \
             Needs Log Search Dashboards first.",
        ),
    ]
}

const FRAGMENTS: &[&str] = &[
    "Saves 10 minutes every day.",
    "Saves hours of manual work.",
    "Requires Docker and a Slack account.",
    "Needs an API key from the provider.",
    "This beta feature is unstable.",
    "Ships in version 0.3.",
    "Takes 0 hours to set up.",
    "Setup takes about 2 hours.",
    "Costs $20 per month.",
    "1. Install\n2. Configure\n3. Run\n4. Verify",
    "```\nexport TOKEN=<your-token>\ncurl -H \"Authorization: $TOKEN\" https://api.example.com\n```",
    "Advanced setup for experts.",
    "Debug errors and retry failures.",
    "Use the preview pane to check results.",
    "",
];

const EFFORT_UNITS: &[&str] = &["minutes", "hours", "days"];

const SERVICE_NAMES: &[&str] = &["Harbor", "Lantern", "Meadow", "Quartz", "Summit", "Willow"];

fn description() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..8)
            .prop_map(|parts| parts.join(" ")),
        "\\PC{0,160}",
    ]
}

fn generated_batch() -> impl Strategy<Value = Vec<InsightItem>> {
    prop::collection::vec(description(), 1..7).prop_map(|descriptions| {
        descriptions
            .into_iter()
            .enumerate()
            .map(|(index, text)| InsightItem::new(format!("Generated Item {index}"), text))
            .collect()
    })
}

/// Every service requires exactly one other service, so each batch contains
/// at least one cycle.
fn service_ring() -> impl Strategy<Value = Vec<InsightItem>> {
    (2..=SERVICE_NAMES.len())
        .prop_flat_map(|count| prop::collection::vec(1..count, count))
        .prop_map(|offsets| {
            let count = offsets.len();
            offsets
                .iter()
                .enumerate()
                .map(|(index, offset)| {
                    let target = (index + offset) % count;
                    InsightItem::new(
                        format!("{} Service", SERVICE_NAMES[index]),
                        format!("Requires {} Service to be configured.", SERVICE_NAMES[target]),
                    )
                })
                .collect::<Vec<_>>()
        })
        .prop_flat_map(|items| Just(items).prop_shuffle())
}

fn assert_dependencies_precede(result: &AnalysisResult) {
    let path = &result.learning_path;
    let position = |id: &str| path.order.iter().position(|o| o == id).unwrap();
    for (item, prerequisites) in &path.dependency_graph {
        for prerequisite in prerequisites {
            assert!(position(prerequisite) < position(item), "{prerequisite} before {item}");
            assert!(path.phase_of(prerequisite).unwrap() <= path.phase_of(item).unwrap());
        }
    }
}

// ---------------------------------------------------------------------------
// Ranges and ordering
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scores_stay_in_range(items in generated_batch()) {
        let engine = IntelligenceEngine::default();
        let result = engine.analyze_items(&items);

        prop_assert_eq!(result.learning_path.order.len(), items.len());
        prop_assert!(result.learning_path.phases.len() <= 6);
        for (id, score) in &result.readiness_scores {
            prop_assert!((0.0..=1.0).contains(&score.complexity), "{} complexity", id);
            prop_assert!((0.0..=1.0).contains(&score.confidence), "{} confidence", id);
            if score.status == ReadinessStatus::Experimental {
                prop_assert!(score.confidence <= 0.7);
            }
        }
        for (id, metrics) in &result.roi_scores {
            prop_assert!(metrics.implementation_hours > 0.0, "{} hours", id);
            prop_assert!(metrics.roi_score.is_finite(), "{} roi", id);
            prop_assert!((0.0..=1.0).contains(&metrics.confidence), "{} roi confidence", id);
        }

        let again = engine.analyze_items(&items);
        prop_assert_eq!(&result, &again);
    }
}

#[test]
fn prerequisites_never_land_in_a_later_phase() {
    let result = IntelligenceEngine::default().analyze_items(&mixed_batch());
    assert!(!result.learning_path.dependency_graph.values().all(Vec::is_empty));
    assert_dependencies_precede(&result);
    assert!(result.learning_path.phases.len() <= 6);
}

#[test]
fn chain_is_ordered_end_to_end() {
    let result = IntelligenceEngine::default().analyze_items(&mixed_batch());
    let position = |title: &str| {
        let id = &result.items.iter().find(|i| i.title == title).unwrap().id;
        result.learning_path.order.iter().position(|o| o == id).unwrap()
    };
    assert!(position("Docker Dev Environment") < position("Container Monitoring"));
    assert!(position("Container Monitoring") < position("Log Search Dashboards"));
    assert!(position("Log Search Dashboards") < position("Release Checklist"));
}

#[test]
fn empty_description_degrades_instead_of_failing() {
    let result = IntelligenceEngine::default().analyze_items(&mixed_batch());
    let id = &result.items.iter().find(|i| i.title == "Empty Shell").unwrap().id;
    let score = &result.readiness_scores[id];
    assert!(score.confidence <= 0.3);
    assert_eq!(score.blockers, vec!["insufficient information"]);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_are_identical() {
    let engine = IntelligenceEngine::default();
    let first = engine.analyze_items(&mixed_batch());
    let second = engine.analyze_items(&mixed_batch());
    assert_eq!(first, second);
    assert_eq!(engine.generate_report(&first), engine.generate_report(&second));
}

// ---------------------------------------------------------------------------
// Cycle and arithmetic safety
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn requirement_rings_are_repaired(items in service_ring()) {
        let result = IntelligenceEngine::default().analyze_items(&items);
        let order = &result.learning_path.order;

        prop_assert_eq!(order.len(), items.len());
        for item in &result.items {
            prop_assert_eq!(order.iter().filter(|id| **id == item.id).count(), 1);
        }
        prop_assert!(!result.learning_path.removed_edges.is_empty());
        assert_dependencies_precede(&result);
    }

    #[test]
    fn roi_is_always_finite(
        effort in 0u32..200,
        unit in prop::sample::select(EFFORT_UNITS),
        saved in 0u32..120,
    ) {
        let description = format!("Takes {effort} {unit} to set up and saves {saved} minutes daily.");
        let metrics = RoiScorer::default().score(&InsightItem::new("Edge", description));
        prop_assert!(metrics.roi_score.is_finite());
        prop_assert!(metrics.implementation_hours > 0.0);
        if let Some(weeks) = metrics.breakeven_weeks {
            prop_assert!(weeks.is_finite() && weeks >= 0.0);
        }
    }

    #[test]
    fn more_time_saved_never_lowers_roi(
        minutes in 1u32..480,
        extra in 0u32..480,
        hours in 1u32..24,
    ) {
        let scorer = RoiScorer::default();
        let roi = |saved: u32| {
            let item = InsightItem::new(
                "Same Effort",
                format!("Saves {saved} minutes every week. Takes {hours} hours to set up."),
            );
            scorer.estimate(&item).roi_score
        };
        prop_assert!(roi(minutes + extra) >= roi(minutes));
    }
}

#[test]
fn mutual_requirements_are_repaired() {
    let items = vec![
        InsightItem::new("Auth Service", "Requires Billing Service to be configured."),
        InsightItem::new("Billing Service", "Requires Auth Service to be configured."),
    ];
    let result = IntelligenceEngine::default().analyze_items(&items);
    let order = &result.learning_path.order;
    assert_eq!(order.len(), 2);
    for item in &result.items {
        assert_eq!(order.iter().filter(|id| **id == item.id).count(), 1);
    }
    assert_eq!(result.learning_path.removed_edges.len(), 1);
}

#[test]
fn empty_and_zero_effort_descriptions_stay_finite() {
    for description in ["", "Saves 0 minutes. Takes 0 hours to set up."] {
        let metrics = RoiScorer::default().score(&InsightItem::new("Edge", description));
        assert!(metrics.roi_score.is_finite());
        assert!(metrics.implementation_hours > 0.0);
    }
}

// ---------------------------------------------------------------------------
// Quick wins
// ---------------------------------------------------------------------------

#[test]
fn quick_wins_are_capped_at_ten() {
    let items: Vec<InsightItem> = (1..=12)
        .map(|n| {
            InsightItem::new(
                format!("Alias Pack {n:02}"),
                "A tiny shell alias that renames downloaded files by date. \
                 Saves 10 minutes every day.",
            )
        })
        .collect();
    let result = IntelligenceEngine::default().analyze_items(&items);

    assert!(result.roi_scores.values().all(|m| m.top_bracket));
    assert!(
        result
            .readiness_scores
            .values()
            .all(|s| s.status == ReadinessStatus::Ready && s.complexity < 0.3)
    );
    assert_eq!(result.learning_path.quick_wins.len(), 10);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn higher_hourly_rate_lowers_roi() {
    let item = InsightItem::new("Rate Sensitive", "Saves 10 minutes every week. Takes 4 hours to set up.")
        .with_id("rate");
    let cheap = IntelligenceEngine::default().analyze_items(std::slice::from_ref(&item));

    let mut config = VantageConfig::default();
    config.economics.hourly_rate = 200.0;
    let expensive = IntelligenceEngine::try_new(config)
        .unwrap()
        .analyze_items(std::slice::from_ref(&item));

    assert!(expensive.roi_scores["rate"].roi_score < cheap.roi_scores["rate"].roi_score);
    assert!(expensive.roi_scores["rate"].cost > cheap.roi_scores["rate"].cost);
}

#[test]
fn confidence_ceilings_cannot_be_raised_by_config() {
    let mut config = VantageConfig::default();
    config.readiness.experimental_confidence_cap = 0.95;
    assert!(IntelligenceEngine::try_new(config).is_err());

    let mut config = VantageConfig::default();
    config.readiness.insufficient_confidence = 0.9;
    assert!(IntelligenceEngine::try_new(config).is_err());
}

#[test]
fn tighter_phase_budget_yields_more_phases() {
    let mut config = VantageConfig::default();
    config.path.phase_hour_budget = 0.5;
    let narrow = IntelligenceEngine::try_new(config)
        .unwrap()
        .analyze_items(&mixed_batch());
    let wide = IntelligenceEngine::default().analyze_items(&mixed_batch());
    assert!(narrow.learning_path.phases.len() >= wide.learning_path.phases.len());
}
