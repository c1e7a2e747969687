//! Learning path generation: dependency graph, cycle repair, ordering,
//! phase clustering, quick wins, foundational items, and the phase diagram.
//!
//! Runs single-threaded over the complete item set once every per-item score
//! is known. Items missing from the score maps fall back to conservative
//! values instead of failing.

pub mod diagram;
pub mod graph;
pub mod matching;
pub mod ordering;
pub mod phases;

use std::collections::BTreeMap;

use vtg_config::{PathConfig, PrioritizationConfig};
use vtg_core::entities::{
    FoundationalItem, InsightItem, LearningPath, QuickWin, ReadinessScore, RoiMetrics,
};
use vtg_core::enums::ReadinessStatus;

use self::graph::DependencyGraph;
use self::ordering::Rank;
use self::phases::PhaseInput;

/// Complexity assumed for an item with no readiness score.
const UNKNOWN_COMPLEXITY: f64 = 0.5;

/// Builds a [`LearningPath`] from items and their per-item scores.
#[derive(Debug, Clone, Default)]
pub struct LearningPathGenerator {
    path: PathConfig,
    prioritization: PrioritizationConfig,
}

impl LearningPathGenerator {
    #[must_use]
    pub const fn new(path: PathConfig, prioritization: PrioritizationConfig) -> Self {
        Self {
            path,
            prioritization,
        }
    }

    #[must_use]
    pub fn build(
        &self,
        items: &[InsightItem],
        readiness: &BTreeMap<String, ReadinessScore>,
        roi: &BTreeMap<String, RoiMetrics>,
    ) -> LearningPath {
        let mut graph = DependencyGraph::build(items, readiness, &self.path);
        let removed_edges = graph.break_cycles();

        let rank = |id: &str| Rank {
            roi_score: roi.get(id).map_or(0.0, |m| m.roi_score),
            complexity: readiness.get(id).map_or(UNKNOWN_COMPLEXITY, |s| s.complexity),
        };
        let order = ordering::topological_order(&graph, rank);

        let phase_input = |id: &str| PhaseInput {
            hours: roi.get(id).map_or(0.0, |m| m.implementation_hours),
            status: readiness
                .get(id)
                .map_or(ReadinessStatus::NeedsSetup, |s| s.status),
        };
        let planned = phases::cluster(&order, &graph, phase_input, &self.path);
        let diagram = diagram::render(&planned);
        let phases: Vec<_> = planned.into_iter().map(|p| p.phase).collect();

        let quick_wins = self.quick_wins(items, readiness, roi);
        let foundational_items = self.foundational_items(items, &graph);
        let total_hours: f64 = phases.iter().map(|p| p.estimated_hours).sum();

        tracing::info!(
            items = order.len(),
            edges = graph.edge_count(),
            removed = removed_edges.len(),
            phases = phases.len(),
            quick_wins = quick_wins.len(),
            "learning path built"
        );

        LearningPath {
            phases,
            total_hours,
            quick_wins,
            foundational_items,
            dependency_graph: graph.adjacency(),
            order,
            removed_edges,
            external_requirements: graph.external_requirements().clone(),
            diagram,
        }
    }

    /// Top-bracket, low-complexity, `READY` items by descending ROI.
    #[must_use]
    pub fn quick_wins(
        &self,
        items: &[InsightItem],
        readiness: &BTreeMap<String, ReadinessScore>,
        roi: &BTreeMap<String, RoiMetrics>,
    ) -> Vec<QuickWin> {
        let rules = &self.prioritization;
        let mut wins: Vec<QuickWin> = Vec::new();
        for item in items {
            if wins.iter().any(|win| win.id == item.id) {
                continue;
            }
            let (Some(score), Some(metrics)) = (readiness.get(&item.id), roi.get(&item.id)) else {
                continue;
            };
            if metrics.top_bracket
                && score.complexity < rules.quick_win_complexity
                && score.status == ReadinessStatus::Ready
            {
                wins.push(QuickWin {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    roi_score: metrics.roi_score,
                    complexity: score.complexity,
                    implementation_hours: metrics.implementation_hours,
                    setup_time_minutes: score.setup_time_minutes,
                });
            }
        }
        wins.sort_by(|a, b| b.roi_score.total_cmp(&a.roi_score).then_with(|| a.id.cmp(&b.id)));
        wins.truncate(rules.quick_win_limit);
        wins
    }

    /// Items that enough other items depend on, most depended-on first.
    #[must_use]
    pub fn foundational_items(
        &self,
        items: &[InsightItem],
        graph: &DependencyGraph,
    ) -> Vec<FoundationalItem> {
        let titles: BTreeMap<&str, &str> = items
            .iter()
            .rev()
            .map(|item| (item.id.as_str(), item.title.as_str()))
            .collect();
        let mut foundational: Vec<FoundationalItem> = graph
            .ids()
            .filter_map(|id| {
                let dependents = graph.dependents_of(id);
                (dependents.len() >= self.prioritization.foundational_min_dependents).then(|| {
                    FoundationalItem {
                        id: id.to_string(),
                        title: titles.get(id).copied().unwrap_or(id).to_string(),
                        dependents,
                    }
                })
            })
            .collect();
        foundational.sort_by(|a, b| {
            b.dependents
                .len()
                .cmp(&a.dependents.len())
                .then_with(|| a.id.cmp(&b.id))
        });
        foundational
    }
}
