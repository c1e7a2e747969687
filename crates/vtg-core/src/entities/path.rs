use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MatchKind;

/// Directed dependency: `item_id` requires `prerequisite_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DependencyEdge {
    pub item_id: String,
    pub prerequisite_id: String,
    /// The prerequisite phrase that matched the target title.
    pub prerequisite_text: String,
    pub kind: MatchKind,
    pub confidence: f64,
}

/// A batch of insights schedulable together.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LearningPhase {
    pub phase_number: u32,
    pub title: String,
    pub goal: String,
    pub items: Vec<String>,
    pub estimated_hours: f64,
    pub prerequisite_phase_numbers: Vec<u32>,
    pub success_criteria: Vec<String>,
}

/// High-value, low-effort, immediately-ready insight.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuickWin {
    pub id: String,
    pub title: String,
    pub roi_score: f64,
    pub complexity: f64,
    pub implementation_hours: f64,
    pub setup_time_minutes: u32,
}

/// Insight required by several others.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FoundationalItem {
    pub id: String,
    pub title: String,
    pub dependents: Vec<String>,
}

/// Dependency-ordered, phase-clustered roadmap over an insight set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LearningPath {
    pub phases: Vec<LearningPhase>,
    pub total_hours: f64,
    pub quick_wins: Vec<QuickWin>,
    pub foundational_items: Vec<FoundationalItem>,
    /// Item id -> prerequisite item ids it was matched to (after cycle breaking).
    pub dependency_graph: BTreeMap<String, Vec<String>>,
    /// Full topological order of item ids.
    pub order: Vec<String>,
    /// Edges dropped to break dependency cycles.
    pub removed_edges: Vec<DependencyEdge>,
    /// Item id -> prerequisite text that matched no other item.
    pub external_requirements: BTreeMap<String, Vec<String>>,
    pub diagram: String,
}

impl LearningPath {
    /// Phase number an item was assigned to.
    #[must_use]
    pub fn phase_of(&self, item_id: &str) -> Option<u32> {
        self.phases
            .iter()
            .find(|phase| phase.items.iter().any(|id| id == item_id))
            .map(|phase| phase.phase_number)
    }
}
