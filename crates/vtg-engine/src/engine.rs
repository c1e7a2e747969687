//! Orchestration: per-item analysis in parallel, then the whole-set learning
//! path, prioritization, and statistics.

use std::collections::{BTreeMap, HashSet};

use vtg_config::VantageConfig;
use vtg_core::entities::{InsightItem, LearningPath, ReadinessScore, RoiMetrics};
use vtg_core::enums::{Priority, ReadinessStatus};
use vtg_core::responses::{AnalysisResult, PrioritizedItem, Prioritization, Statistics};

use crate::error::EngineError;
use crate::path::LearningPathGenerator;
use crate::readiness::ReadinessAnalyzer;
use crate::report;
use crate::roi::RoiScorer;

/// Runs every analyzer over a batch of insights under one configuration.
///
/// The engine holds no state between runs; analyzing the same items twice
/// yields identical results.
#[derive(Debug, Clone, Default)]
pub struct IntelligenceEngine {
    readiness: ReadinessAnalyzer,
    roi: RoiScorer,
    path: LearningPathGenerator,
}

impl IntelligenceEngine {
    /// Build an engine without validating the configuration.
    #[must_use]
    pub fn new(config: VantageConfig) -> Self {
        let VantageConfig {
            economics,
            readiness,
            prioritization,
            path,
        } = config;
        Self {
            readiness: ReadinessAnalyzer::new(readiness),
            roi: RoiScorer::new(economics, prioritization.clone()),
            path: LearningPathGenerator::new(path, prioritization),
        }
    }

    /// Build an engine, rejecting out-of-range configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when [`VantageConfig::validate`] fails.
    pub fn try_new(config: VantageConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub const fn readiness_analyzer(&self) -> &ReadinessAnalyzer {
        &self.readiness
    }

    #[must_use]
    pub const fn roi_scorer(&self) -> &RoiScorer {
        &self.roi
    }

    #[must_use]
    pub const fn path_generator(&self) -> &LearningPathGenerator {
        &self.path
    }

    /// Analyze a batch of insights.
    ///
    /// Items without an id get one derived from their title, items with a
    /// blank title are skipped, and duplicate ids keep the first occurrence.
    #[must_use]
    pub fn analyze_items(&self, items: &[InsightItem]) -> AnalysisResult {
        let items = prepare(items);

        let (readiness_scores, roi_scores) = rayon::join(
            || self.readiness.analyze_batch(&items),
            || self.roi.score_batch(&items),
        );
        let learning_path = self.path.build(&items, &readiness_scores, &roi_scores);
        let prioritization = prioritize(&items, &readiness_scores, &roi_scores);
        let statistics = statistics(&readiness_scores, &roi_scores, &learning_path, &prioritization);

        tracing::info!(
            items = statistics.total_items,
            ready = statistics.ready_count,
            high = statistics.high_priority_count,
            phases = statistics.phase_count,
            "analysis complete"
        );

        AnalysisResult {
            items,
            readiness_scores,
            roi_scores,
            learning_path,
            prioritization,
            statistics,
        }
    }

    /// Render a result bundle as Markdown.
    #[must_use]
    pub fn generate_report(&self, result: &AnalysisResult) -> String {
        report::generate_report(result)
    }
}

fn prepare(items: &[InsightItem]) -> Vec<InsightItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut prepared = Vec::with_capacity(items.len());
    for item in items {
        if let Err(error) = item.validate() {
            tracing::warn!(id = %item.id, %error, "skipping insight");
            continue;
        }
        let item = item.clone().ensure_id();
        if !seen.insert(item.id.clone()) {
            tracing::warn!(id = %item.id, "duplicate insight id, keeping first occurrence");
            continue;
        }
        prepared.push(item);
    }
    prepared
}

/// Bucket items by recommendation. `EXPERIMENTAL` items never land in `HIGH`.
/// Within a bucket, readier items come first, then higher ROI, then id.
#[must_use]
pub fn prioritize(
    items: &[InsightItem],
    readiness: &BTreeMap<String, ReadinessScore>,
    roi: &BTreeMap<String, RoiMetrics>,
) -> Prioritization {
    let mut prioritization = Prioritization::default();
    for item in items {
        let (Some(score), Some(metrics)) = (readiness.get(&item.id), roi.get(&item.id)) else {
            continue;
        };
        let mut priority = Priority::from(metrics.recommendation);
        if priority == Priority::High && score.status == ReadinessStatus::Experimental {
            priority = Priority::Medium;
        }
        let entry = PrioritizedItem {
            id: item.id.clone(),
            title: item.title.clone(),
            priority,
            recommendation: metrics.recommendation,
            status: score.status,
            roi_score: metrics.roi_score,
            implementation_hours: metrics.implementation_hours,
        };
        match priority {
            Priority::High => prioritization.high.push(entry),
            Priority::Medium => prioritization.medium.push(entry),
            Priority::Low => prioritization.low.push(entry),
        }
    }
    for bucket in [
        &mut prioritization.high,
        &mut prioritization.medium,
        &mut prioritization.low,
    ] {
        bucket.sort_by(|a, b| {
            a.status
                .rank()
                .cmp(&b.status.rank())
                .then_with(|| b.roi_score.total_cmp(&a.roi_score))
                .then_with(|| a.id.cmp(&b.id))
        });
    }
    prioritization
}

#[allow(clippy::cast_precision_loss)]
fn statistics(
    readiness: &BTreeMap<String, ReadinessScore>,
    roi: &BTreeMap<String, RoiMetrics>,
    path: &LearningPath,
    prioritization: &Prioritization,
) -> Statistics {
    let count = |status: ReadinessStatus| readiness.values().filter(|s| s.status == status).count();
    let total_items = readiness.len();
    let ready_count = count(ReadinessStatus::Ready);
    let average_roi_score = if roi.is_empty() {
        0.0
    } else {
        roi.values().map(|m| m.roi_score).sum::<f64>() / roi.len() as f64
    };

    Statistics {
        total_items,
        ready_count,
        needs_setup_count: count(ReadinessStatus::NeedsSetup),
        experimental_count: count(ReadinessStatus::Experimental),
        ready_percent: if total_items == 0 {
            0.0
        } else {
            ready_count as f64 * 100.0 / total_items as f64
        },
        total_implementation_hours: roi.values().map(|m| m.implementation_hours).sum(),
        total_annual_savings_hours: roi.values().map(|m| m.annual_time_savings_hours).sum(),
        total_annual_value: roi.values().map(|m| m.annual_value).sum(),
        average_roi_score,
        high_priority_count: prioritization.high.len(),
        quick_win_count: path.quick_wins.len(),
        phase_count: path.phases.len(),
    }
}
