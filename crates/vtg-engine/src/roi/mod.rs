//! ROI scoring: time saved, cost, return multiple, and breakeven per insight.
//!
//! Per-item estimation is independent and runs in parallel. Recommendations
//! are relative to the batch, so they are assigned in a second, sequential
//! pass once every estimate is known.

pub mod extract;

use std::collections::BTreeMap;

use rayon::prelude::*;
use vtg_config::{EconomicsConfig, PrioritizationConfig};
use vtg_core::entities::{InsightItem, RoiMetrics};
use vtg_core::enums::Recommendation;

use self::extract::TimeSource;
use crate::{catalog, text};

const MAX_HEURISTIC_HOURS: f64 = 40.0;
const WEEKS_PER_YEAR: f64 = 52.0;

/// Estimates value and cost for insights under one set of economic assumptions.
#[derive(Debug, Clone, Default)]
pub struct RoiScorer {
    economics: EconomicsConfig,
    prioritization: PrioritizationConfig,
}

impl RoiScorer {
    #[must_use]
    pub const fn new(economics: EconomicsConfig, prioritization: PrioritizationConfig) -> Self {
        Self {
            economics,
            prioritization,
        }
    }

    /// Score a single insight, bracketed against a batch of one.
    #[must_use]
    pub fn score(&self, item: &InsightItem) -> RoiMetrics {
        let mut metrics = self.estimate(item);
        self.assign_recommendations(std::iter::once(&mut metrics));
        metrics
    }

    /// Score every insight, keyed by id, with batch-relative recommendations.
    #[must_use]
    pub fn score_batch(&self, items: &[InsightItem]) -> BTreeMap<String, RoiMetrics> {
        let mut scores: BTreeMap<String, RoiMetrics> = items
            .par_iter()
            .map(|item| (item.id.clone(), self.estimate(item)))
            .collect();
        self.assign_recommendations(scores.values_mut());

        let high = scores
            .values()
            .filter(|m| m.recommendation == Recommendation::High)
            .count();
        tracing::info!(items = scores.len(), high, "ROI batch scored");
        scores
    }

    /// Per-item estimate. The recommendation is provisional (`LOW`) until
    /// [`Self::assign_recommendations`] runs.
    #[must_use]
    pub fn estimate(&self, item: &InsightItem) -> RoiMetrics {
        let text = item.description.as_str();
        let economics = &self.economics;

        let saved = extract::time_saved(text);
        let (use_frequency, frequency_stated) = extract::frequency(text);
        let (recurring_annual_cost, cost_note) =
            extract::recurring_annual_cost(text, economics.metered_api_annual_cost);
        let stated_effort = extract::stated_effort_hours(text);

        let implementation_hours = stated_effort
            .unwrap_or_else(|| heuristic_hours(&item.description))
            .max(economics.min_implementation_hours);

        let annual_time_savings_hours =
            saved.minutes / 60.0 * use_frequency.occurrences_per_year();
        let annual_value = annual_time_savings_hours * economics.value_per_hour;
        let cost = implementation_hours.mul_add(economics.hourly_rate, recurring_annual_cost);
        let roi_score = (annual_value - cost) / implementation_hours;
        let breakeven_weeks =
            (annual_value > 0.0).then(|| cost / (annual_value / WEEKS_PER_YEAR));

        let confidence = confidence(saved.source, frequency_stated, stated_effort.is_some());

        let mut notes = vec![
            format!(
                "saves {:.0} min/use ({})",
                saved.minutes,
                match saved.source {
                    TimeSource::Explicit => "stated",
                    TimeSource::Qualitative => "qualitative",
                    TimeSource::Default => "assumed",
                }
            ),
            format!(
                "{use_frequency}{}",
                if frequency_stated { "" } else { " (assumed)" }
            ),
            format!(
                "{implementation_hours:.2}h to implement ({})",
                if stated_effort.is_some() { "stated" } else { "estimated" }
            ),
        ];
        if let Some(note) = cost_note {
            notes.push(note);
        }
        notes.push(format!("{annual_time_savings_hours:.1}h/yr saved"));

        tracing::debug!(
            id = %item.id,
            roi_score,
            implementation_hours,
            annual_time_savings_hours,
            confidence,
            "ROI estimated"
        );

        RoiMetrics {
            implementation_hours,
            time_saved_per_use_minutes: saved.minutes,
            use_frequency,
            annual_time_savings_hours,
            annual_value,
            recurring_annual_cost,
            cost,
            roi_score,
            breakeven_weeks,
            confidence,
            top_bracket: false,
            recommendation: Recommendation::Low,
            reasoning: notes.join("; "),
        }
    }

    /// Mark the top bracket and assign `HIGH`/`MEDIUM`/`LOW` relative to the batch.
    ///
    /// The top bracket is the highest `ceil(n * top_bracket_fraction)` positive
    /// scores (ties with the cutoff included).
    pub fn assign_recommendations<'a>(&self, metrics: impl Iterator<Item = &'a mut RoiMetrics>) {
        let mut metrics: Vec<&mut RoiMetrics> = metrics.collect();
        let cutoff = top_bracket_cutoff(
            metrics.iter().map(|m| m.roi_score),
            self.prioritization.top_bracket_fraction,
        );

        for entry in &mut metrics {
            entry.top_bracket = cutoff.is_some_and(|cutoff| entry.roi_score >= cutoff);
            let (recommendation, why) = self.recommend(entry);
            entry.recommendation = recommendation;
            entry.reasoning = format!(
                "{recommendation} ({why}): ROI {:.1}x, breakeven {}; {}",
                entry.roi_score,
                entry.breakeven_label(),
                provisional_notes(&entry.reasoning)
            );
        }
    }

    fn recommend(&self, metrics: &RoiMetrics) -> (Recommendation, &'static str) {
        let rules = &self.prioritization;
        if metrics.roi_score <= 0.0 {
            return (Recommendation::Low, "non-positive return");
        }
        if metrics.confidence < rules.min_confidence {
            return (Recommendation::Low, "low-confidence estimate");
        }
        let quick_payback = metrics
            .breakeven_weeks
            .is_some_and(|weeks| weeks <= rules.high_breakeven_weeks);
        match (metrics.top_bracket, quick_payback) {
            (true, true) => (Recommendation::High, "top bracket, quick payback"),
            (true, false) => (Recommendation::Medium, "top bracket, slow payback"),
            _ => (Recommendation::Medium, "positive return"),
        }
    }
}

/// Lowest ROI score still inside the top bracket, or `None` when no score is positive.
#[must_use]
pub fn top_bracket_cutoff(scores: impl Iterator<Item = f64>, fraction: f64) -> Option<f64> {
    let all: Vec<f64> = scores.collect();
    let mut positive: Vec<f64> = all.iter().copied().filter(|s| *s > 0.0).collect();
    if positive.is_empty() {
        return None;
    }
    positive.sort_by(|a, b| b.total_cmp(a));

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let bracket = ((all.len() as f64 * fraction).ceil() as usize).max(1);
    positive.get(bracket.min(positive.len()) - 1).copied()
}

/// Effort estimate from complexity signals when no duration is stated.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn heuristic_hours(description: &str) -> f64 {
    let steps = text::step_count(description) as f64;
    let tools = catalog::distinct_tools(description) as f64;
    let troubleshooting = if text::troubleshooting_hits(description) > 0 {
        0.5
    } else {
        0.0
    };
    let hours = 0.05f64.mul_add(
        text::code_lines(description),
        0.25f64.mul_add(steps, 0.5f64.mul_add(tools, 0.5)),
    ) + text::difficulty_level(description)
        + troubleshooting;
    hours.min(MAX_HEURISTIC_HOURS)
}

fn confidence(time: TimeSource, frequency_stated: bool, effort_stated: bool) -> f64 {
    let mut confidence: f64 = 0.3;
    confidence += match time {
        TimeSource::Explicit => 0.3,
        TimeSource::Qualitative => 0.1,
        TimeSource::Default => 0.0,
    };
    if frequency_stated {
        confidence += 0.2;
    }
    if effort_stated {
        confidence += 0.1;
    }
    confidence.clamp(0.0, 1.0)
}

/// Strip a previously assigned recommendation prefix so re-bracketing is idempotent.
fn provisional_notes(reasoning: &str) -> &str {
    reasoning
        .split_once("; ")
        .filter(|(head, _)| head.contains("ROI ") && head.contains("breakeven"))
        .map_or(reasoning, |(_, rest)| rest)
}
