//! Readiness analysis: classify how immediately an insight can be used and
//! estimate its complexity and setup cost.
//!
//! Classification runs the ordered rules in [`rules::RULES`]. Complexity is
//! the capped, weighted sum in [`complexity`]. Prerequisites combine explicit
//! phrase parsing with implicit catalog detection ([`prerequisites`]).
//!
//! Analysis never fails. An empty or unusable description yields
//! `NEEDS_SETUP` with low confidence and an "insufficient information" blocker.

pub mod complexity;
pub mod prerequisites;
pub mod rules;

use std::collections::BTreeMap;

use rayon::prelude::*;
use vtg_config::{MAX_EXPERIMENTAL_CONFIDENCE, MAX_INSUFFICIENT_CONFIDENCE, ReadinessConfig};
use vtg_core::entities::{ComplexityBreakdown, InsightItem, Prerequisite, ReadinessScore};
use vtg_core::enums::{DetectionOrigin, PrerequisiteKind, ReadinessStatus};

use self::complexity::ComplexitySignals;
use self::rules::Evidence;
use crate::text;

/// Blocker text used when a description carries no usable signal.
pub const INSUFFICIENT_INFORMATION: &str = "insufficient information";

/// Descriptions with fewer words than this are treated as unusable.
const MIN_DESCRIPTION_WORDS: usize = 3;

/// Setup assumed for an insight nobody described.
const UNKNOWN_SETUP_MINUTES: u32 = 30;

/// Extra minutes when two or more external services must be wired together.
const INTEGRATION_OVERHEAD_MINUTES: u32 = 30;

const BASE_CONFIDENCE: f64 = 0.9;
const IMPLICIT_PENALTY: f64 = 0.08;
const MAX_IMPLICIT_PENALTY: f64 = 0.4;
const SHORT_DESCRIPTION_WORDS: usize = 12;

/// Classifies insights by implementation readiness.
#[derive(Debug, Clone, Default)]
pub struct ReadinessAnalyzer {
    config: ReadinessConfig,
}

impl ReadinessAnalyzer {
    #[must_use]
    pub const fn new(config: ReadinessConfig) -> Self {
        Self { config }
    }

    /// Score one insight.
    #[must_use]
    pub fn analyze(&self, item: &InsightItem) -> ReadinessScore {
        let description = item.description.trim();
        let breakdown = ComplexitySignals::from_text(description).weigh(&self.config);

        if text::word_count(description) < MIN_DESCRIPTION_WORDS {
            tracing::warn!(id = %item.id, "description too thin to analyze, degrading readiness");
            return self.insufficient(breakdown);
        }

        let prerequisites = prerequisites::extract(description);
        let fragments = text::code_fragments(description);
        let placeholders = prerequisites::has_placeholders(&fragments);
        let evidence = Evidence::gather(description, &prerequisites, placeholders);
        let rule = rules::classify(&evidence);
        let status = rule.outcome;

        let blockers: Vec<String> = prerequisites
            .iter()
            .filter(|p| p.kind.is_blocking())
            .map(|p| p.text.clone())
            .collect();
        let setup_time_minutes = setup_minutes(&prerequisites, !fragments.is_empty());
        let confidence = self.confidence(status, &prerequisites, description, placeholders);
        let complexity = breakdown.total();

        let reasoning = reasoning(
            rule.name,
            status,
            &evidence,
            &prerequisites,
            blockers.len(),
            complexity,
            breakdown.dominant(),
            setup_time_minutes,
        );

        tracing::debug!(
            id = %item.id,
            status = %status,
            rule = rule.name,
            complexity,
            confidence,
            prerequisites = prerequisites.len(),
            "readiness analyzed"
        );

        ReadinessScore {
            status,
            complexity,
            complexity_breakdown: breakdown,
            setup_time_minutes,
            prerequisites: prerequisites.iter().map(|p| p.text.clone()).collect(),
            prerequisite_details: prerequisites,
            blockers,
            confidence,
            reasoning,
        }
    }

    /// Score every insight in parallel, keyed by id.
    #[must_use]
    pub fn analyze_batch(&self, items: &[InsightItem]) -> BTreeMap<String, ReadinessScore> {
        items
            .par_iter()
            .map(|item| (item.id.clone(), self.analyze(item)))
            .collect()
    }

    fn insufficient(&self, breakdown: ComplexityBreakdown) -> ReadinessScore {
        let placeholder = Prerequisite {
            text: INSUFFICIENT_INFORMATION.to_string(),
            kind: PrerequisiteKind::General,
            origin: DetectionOrigin::Implicit,
        };
        ReadinessScore {
            status: ReadinessStatus::NeedsSetup,
            complexity: breakdown.total(),
            complexity_breakdown: breakdown,
            setup_time_minutes: UNKNOWN_SETUP_MINUTES,
            prerequisites: vec![placeholder.text.clone()],
            prerequisite_details: vec![placeholder],
            blockers: vec![INSUFFICIENT_INFORMATION.to_string()],
            confidence: self
                .config
                .insufficient_confidence
                .clamp(0.0, MAX_INSUFFICIENT_CONFIDENCE),
            reasoning: String::from(
                "NEEDS_SETUP (insufficient-information): description is empty or too short to assess",
            ),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn confidence(
        &self,
        status: ReadinessStatus,
        prerequisites: &[Prerequisite],
        description: &str,
        placeholders: bool,
    ) -> f64 {
        let implicit = prerequisites
            .iter()
            .filter(|p| p.origin == DetectionOrigin::Implicit)
            .count();
        let mut confidence =
            BASE_CONFIDENCE - (implicit as f64 * IMPLICIT_PENALTY).min(MAX_IMPLICIT_PENALTY);
        if text::word_count(description) < SHORT_DESCRIPTION_WORDS {
            confidence -= 0.1;
        }
        if placeholders {
            confidence -= 0.05;
        }
        if status == ReadinessStatus::Experimental {
            confidence = confidence
                .min(self.config.experimental_confidence_cap)
                .min(MAX_EXPERIMENTAL_CONFIDENCE);
        }
        confidence.clamp(0.0, 1.0)
    }
}

/// Lookup-table setup estimate keyed by prerequisite count and kind.
#[must_use]
pub fn setup_minutes(prerequisites: &[Prerequisite], has_code: bool) -> u32 {
    if prerequisites.is_empty() {
        return if has_code { 10 } else { 5 };
    }
    let base: u32 = prerequisites.iter().map(|p| kind_minutes(p.kind)).sum();
    let external = prerequisites.iter().filter(|p| p.kind.is_external()).count();
    let mut total = base;
    if external >= 2 {
        total += INTEGRATION_OVERHEAD_MINUTES;
    }
    if prerequisites.len() >= 4 {
        total += 15;
    }
    total.min(240)
}

const fn kind_minutes(kind: PrerequisiteKind) -> u32 {
    match kind {
        PrerequisiteKind::Tool => 5,
        PrerequisiteKind::General => 10,
        PrerequisiteKind::Credential => 15,
        PrerequisiteKind::Service => 20,
        PrerequisiteKind::Platform => 25,
        PrerequisiteKind::Paid => 30,
    }
}

#[allow(clippy::too_many_arguments)]
fn reasoning(
    rule: &str,
    status: ReadinessStatus,
    evidence: &Evidence,
    prerequisites: &[Prerequisite],
    blockers: usize,
    complexity: f64,
    dominant: Option<&str>,
    setup_minutes: u32,
) -> String {
    let explicit = prerequisites
        .iter()
        .filter(|p| p.origin == DetectionOrigin::Explicit)
        .count();
    let implicit = prerequisites.len() - explicit;

    let mut parts = vec![format!("{status} ({rule})")];
    if !evidence.instability_markers.is_empty() {
        parts.push(format!("marked {}", evidence.instability_markers.join("/")));
    }
    if let Some(version) = &evidence.pre_release_version {
        parts.push(format!("pre-1.0 version {version}"));
    }
    parts.push(format!(
        "{} prerequisite(s) ({explicit} explicit, {implicit} implicit), {blockers} blocker(s)",
        prerequisites.len()
    ));
    if evidence.has_placeholders {
        parts.push(String::from("code has unresolved placeholders"));
    }
    match dominant {
        Some(signal) => parts.push(format!("complexity {complexity:.2} driven by {signal}")),
        None => parts.push(format!("complexity {complexity:.2}")),
    }
    parts.push(format!("setup ~{setup_minutes} min"));
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn analyzer() -> ReadinessAnalyzer {
        ReadinessAnalyzer::default()
    }

    #[test]
    fn self_contained_script_is_ready() {
        let item = InsightItem::new(
            "Quick Automation Script",
            "A tiny shell alias that renames downloaded files by date. Saves 10 minutes every day.",
        );
        let score = analyzer().analyze(&item);
        assert_eq!(score.status, ReadinessStatus::Ready);
        assert!(score.prerequisites.is_empty());
        assert!(score.blockers.is_empty());
        assert_eq!(score.setup_time_minutes, 5);
        assert!(score.complexity < 0.3);
    }

    #[test]
    fn api_key_makes_item_need_setup_with_blocker() {
        let item = InsightItem::new(
            "Basic API Setup",
            "Requires an API key from the provider dashboard. Store it in an environment file and test one request.",
        );
        let score = analyzer().analyze(&item);
        assert_eq!(score.status, ReadinessStatus::NeedsSetup);
        assert_eq!(score.prerequisites, vec!["API key from the provider dashboard"]);
        assert_eq!(score.blockers, score.prerequisites);
        assert_eq!(score.setup_time_minutes, 15);
    }

    #[test]
    fn beta_marker_is_experimental_with_capped_confidence() {
        let item = InsightItem::new(
            "Experimental Beta Feature",
            "This beta feature auto-summarizes meetings and is still being tested by the vendor.",
        );
        let score = analyzer().analyze(&item);
        assert_eq!(score.status, ReadinessStatus::Experimental);
        assert!(score.confidence <= 0.7);
        assert!(score.reasoning.contains("beta"));
    }

    #[test]
    fn title_words_do_not_mark_an_item_experimental() {
        let item = InsightItem::new(
            "Beta Service",
            "A shell alias that lists files quickly by size.",
        );
        let score = analyzer().analyze(&item);
        assert_eq!(score.status, ReadinessStatus::Ready);
        assert!(!score.reasoning.contains("marked"));
    }

    #[test]
    fn confidence_ceilings_hold_for_unvalidated_config() {
        let analyzer = ReadinessAnalyzer::new(ReadinessConfig {
            experimental_confidence_cap: 0.95,
            insufficient_confidence: 0.9,
            ..ReadinessConfig::default()
        });
        let beta = analyzer.analyze(&InsightItem::new(
            "Summaries",
            "This beta feature auto-summarizes meetings for the whole team every week.",
        ));
        let empty = analyzer.analyze(&InsightItem::new("Empty", ""));
        assert_eq!(beta.status, ReadinessStatus::Experimental);
        assert!(beta.confidence <= 0.7);
        assert!(empty.confidence <= 0.3);
    }

    #[test]
    fn empty_description_degrades() {
        let item = InsightItem::new("Mystery", "   ");
        let score = analyzer().analyze(&item);
        assert_eq!(score.status, ReadinessStatus::NeedsSetup);
        assert!(score.confidence <= 0.3);
        assert_eq!(score.blockers, vec![INSUFFICIENT_INFORMATION.to_string()]);
        assert_eq!(score.prerequisites, score.blockers);
    }

    #[test]
    fn implicit_prerequisites_lower_confidence() {
        let explicit = InsightItem::new(
            "Explicit",
            "Requires Docker. Run the bundled compose file and open the dashboard in a browser tab.",
        );
        let implicit = InsightItem::new(
            "Implicit",
            "Run the bundled Docker compose file and open the dashboard in a browser tab afterwards.",
        );
        let explicit_score = analyzer().analyze(&explicit);
        let implicit_score = analyzer().analyze(&implicit);
        assert_eq!(explicit_score.implicit_count(), 0);
        assert_eq!(implicit_score.implicit_count(), 1);
        assert!(implicit_score.confidence < explicit_score.confidence);
    }

    #[test]
    fn multi_service_integration_costs_more_setup() {
        let prereqs = vec![
            Prerequisite {
                text: String::from("Slack"),
                kind: PrerequisiteKind::Service,
                origin: DetectionOrigin::Implicit,
            },
            Prerequisite {
                text: String::from("Notion"),
                kind: PrerequisiteKind::Service,
                origin: DetectionOrigin::Implicit,
            },
            Prerequisite {
                text: String::from("API key"),
                kind: PrerequisiteKind::Credential,
                origin: DetectionOrigin::Explicit,
            },
        ];
        assert_eq!(setup_minutes(&prereqs, false), 20 + 20 + 15 + 30);
        assert_eq!(setup_minutes(&[], false), 5);
        assert_eq!(setup_minutes(&[], true), 10);
    }

    #[test]
    fn batch_is_keyed_by_id() {
        let items = vec![
            InsightItem::new("One", "A shell alias for listing files quickly.").with_id("a"),
            InsightItem::new("Two", "Requires Docker and a Slack account.").with_id("b"),
        ];
        let scores = analyzer().analyze_batch(&items);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores["a"].status, ReadinessStatus::Ready);
        assert_eq!(scores["b"].status, ReadinessStatus::NeedsSetup);
    }

    #[test]
    fn ranges_hold_for_noisy_text() {
        let item = InsightItem::new(
            "Noisy",
            "Advanced expert-level setup: install Docker, Kubernetes, Redis, Postgres, Terraform. \
             Requires AWS, Azure, GCP, OpenAI API key, Stripe subscription. Debug errors, retry \
             failures, fix issues. 1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g",
        );
        let score = analyzer().analyze(&item);
        assert!((0.0..=1.0).contains(&score.complexity));
        assert!((0.0..=1.0).contains(&score.confidence));
        assert!(score.setup_time_minutes <= 240);
    }
}
