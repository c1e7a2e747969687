//! Kahn ordering with a value-first tie-break.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::graph::DependencyGraph;

/// Tie-break key for items whose prerequisites are all placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rank {
    pub roi_score: f64,
    pub complexity: f64,
}

#[derive(Debug)]
struct Ready<'a> {
    rank: Rank,
    id: &'a str,
}

impl Ord for Ready<'_> {
    /// Higher ROI first, then lower complexity, then smaller id.
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .roi_score
            .total_cmp(&other.rank.roi_score)
            .then_with(|| other.rank.complexity.total_cmp(&self.rank.complexity))
            .then_with(|| other.id.cmp(self.id))
    }
}

impl PartialOrd for Ready<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ready<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ready<'_> {}

/// Order items so every prerequisite precedes its dependents.
///
/// Runs in O((V + E) log V). If a cycle survived (it should not after
/// [`DependencyGraph::break_cycles`]) the stuck items are appended in rank
/// order rather than dropped.
pub fn topological_order(graph: &DependencyGraph, rank: impl Fn(&str) -> Rank) -> Vec<String> {
    let mut waiting: HashMap<&str, usize> = graph
        .ids()
        .map(|id| (id, graph.prerequisites_of(id).len()))
        .collect();
    let mut heap: BinaryHeap<Ready<'_>> = waiting
        .iter()
        .filter(|(_, remaining)| **remaining == 0)
        .map(|(&id, _)| Ready { rank: rank(id), id })
        .collect();
    let mut order: Vec<String> = Vec::with_capacity(waiting.len());

    while let Some(Ready { id, .. }) = heap.pop() {
        waiting.remove(id);
        order.push(id.to_string());
        for dependent in graph.dependents_of(id) {
            let Some((&key, remaining)) = waiting.get_key_value(dependent.as_str()) else {
                continue;
            };
            let remaining = remaining.saturating_sub(1);
            waiting.insert(key, remaining);
            if remaining == 0 {
                heap.push(Ready {
                    rank: rank(key),
                    id: key,
                });
            }
        }
    }

    if !waiting.is_empty() {
        tracing::warn!(stuck = waiting.len(), "ordering left items unplaced; appending by rank");
        let mut stuck: Vec<Ready<'_>> = waiting
            .into_keys()
            .map(|id| Ready { rank: rank(id), id })
            .collect();
        stuck.sort_by(|a, b| b.cmp(a));
        order.extend(stuck.into_iter().map(|ready| ready.id.to_string()));
    }
    order
}
