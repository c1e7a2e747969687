//! Result bundle types returned by the intelligence engine.
//!
//! These structs define the shape of `vtg analyze` JSON output and the input
//! to Markdown report rendering. Downstream dashboards consume them as-is.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{InsightItem, LearningPath, ReadinessScore, RoiMetrics};
use crate::enums::{Priority, ReadinessStatus, Recommendation};

/// One row of the prioritization dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PrioritizedItem {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub recommendation: Recommendation,
    pub status: ReadinessStatus,
    pub roi_score: f64,
    pub implementation_hours: f64,
}

/// HIGH / MEDIUM / LOW buckets, each ordered best-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Prioritization {
    pub high: Vec<PrioritizedItem>,
    pub medium: Vec<PrioritizedItem>,
    pub low: Vec<PrioritizedItem>,
}

impl Prioritization {
    /// Bucket an item was placed in.
    #[must_use]
    pub fn priority_of(&self, item_id: &str) -> Option<Priority> {
        self.high
            .iter()
            .chain(&self.medium)
            .chain(&self.low)
            .find(|entry| entry.id == item_id)
            .map(|entry| entry.priority)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Aggregate numbers for the executive summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Statistics {
    pub total_items: usize,
    pub ready_count: usize,
    pub needs_setup_count: usize,
    pub experimental_count: usize,
    pub ready_percent: f64,
    pub total_implementation_hours: f64,
    pub total_annual_savings_hours: f64,
    pub total_annual_value: f64,
    pub average_roi_score: f64,
    pub high_priority_count: usize,
    pub quick_win_count: usize,
    pub phase_count: usize,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalysisResult {
    pub items: Vec<InsightItem>,
    pub readiness_scores: BTreeMap<String, ReadinessScore>,
    pub roi_scores: BTreeMap<String, RoiMetrics>,
    pub learning_path: LearningPath,
    pub prioritization: Prioritization,
    pub statistics: Statistics,
}

impl AnalysisResult {
    /// Title for an item id, falling back to the id itself.
    #[must_use]
    pub fn title_of<'a>(&'a self, item_id: &'a str) -> &'a str {
        self.items
            .iter()
            .find(|item| item.id == item_id)
            .map_or(item_id, |item| item.title.as_str())
    }
}
