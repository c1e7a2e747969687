//! Dependency graph over insights: edges run from an item to the item its
//! prerequisite text was matched to.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use rustworkx_core::petgraph::Direction;
use rustworkx_core::petgraph::algo::{tarjan_scc, toposort};
use rustworkx_core::petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use rustworkx_core::petgraph::visit::EdgeRef;
use vtg_config::PathConfig;
use vtg_core::entities::{DependencyEdge, InsightItem, ReadinessScore};

use super::matching::{TitleMatch, match_title};
use crate::readiness::INSUFFICIENT_INFORMATION;

/// Directed item graph plus the prerequisite text that matched no item.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, DependencyEdge>,
    id_to_index: HashMap<String, NodeIndex>,
    external: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Match every prerequisite of every item against the other items' titles.
    ///
    /// Each prerequisite links to its single best-matching item (earliest item
    /// wins a tie). Repeated links between the same pair keep the strongest
    /// confidence.
    #[must_use]
    pub fn build(
        items: &[InsightItem],
        readiness: &BTreeMap<String, ReadinessScore>,
        config: &PathConfig,
    ) -> Self {
        let mut dependency_graph = Self::default();
        let mut nodes: Vec<&InsightItem> = Vec::with_capacity(items.len());
        for item in items {
            if dependency_graph.id_to_index.contains_key(&item.id) {
                continue;
            }
            let index = dependency_graph.graph.add_node(item.id.clone());
            dependency_graph.id_to_index.insert(item.id.clone(), index);
            nodes.push(item);
        }

        for item in &nodes {
            let Some(score) = readiness.get(&item.id) else {
                continue;
            };
            for prerequisite in &score.prerequisites {
                if prerequisite == INSUFFICIENT_INFORMATION {
                    continue;
                }
                match best_match(prerequisite, item, &nodes, config) {
                    Some((target, found)) => dependency_graph.link(DependencyEdge {
                        item_id: item.id.clone(),
                        prerequisite_id: target.id.clone(),
                        prerequisite_text: prerequisite.clone(),
                        kind: found.kind,
                        confidence: found.confidence,
                    }),
                    None => dependency_graph
                        .external
                        .entry(item.id.clone())
                        .or_default()
                        .push(prerequisite.clone()),
                }
            }
        }

        tracing::debug!(
            nodes = dependency_graph.graph.node_count(),
            edges = dependency_graph.graph.edge_count(),
            external = dependency_graph.external.values().map(Vec::len).sum::<usize>(),
            "dependency graph built"
        );
        dependency_graph
    }

    fn link(&mut self, edge: DependencyEdge) {
        let (Some(&from), Some(&to)) = (
            self.id_to_index.get(&edge.item_id),
            self.id_to_index.get(&edge.prerequisite_id),
        ) else {
            return;
        };
        if let Some(existing) = self.graph.find_edge(from, to) {
            if self.graph[existing].confidence < edge.confidence {
                self.graph[existing] = edge;
            }
            return;
        }
        self.graph.add_edge(from, to, edge);
    }

    /// Remove the weakest edge inside every cycle until the graph is acyclic.
    ///
    /// Every edge inside a strongly connected component of two or more nodes
    /// lies on some cycle, so dropping the weakest one per component and
    /// recomputing always terminates. Ties break on `(item_id, prerequisite_id)`.
    pub fn break_cycles(&mut self) -> Vec<DependencyEdge> {
        let mut removed = Vec::new();
        loop {
            let cyclic: Vec<Vec<NodeIndex>> = tarjan_scc(&self.graph)
                .into_iter()
                .filter(|component| component.len() > 1)
                .collect();
            if cyclic.is_empty() {
                break;
            }
            for component in cyclic {
                let Some(weakest) = self.weakest_edge_within(&component) else {
                    continue;
                };
                if let Some(edge) = self.graph.remove_edge(weakest) {
                    tracing::warn!(
                        item = %edge.item_id,
                        prerequisite = %edge.prerequisite_id,
                        confidence = edge.confidence,
                        "dependency cycle broken by dropping weakest edge"
                    );
                    removed.push(edge);
                }
            }
        }
        removed
    }

    fn weakest_edge_within(&self, component: &[NodeIndex]) -> Option<EdgeIndex> {
        let members: HashSet<NodeIndex> = component.iter().copied().collect();
        self.graph
            .edge_references()
            .filter(|edge| members.contains(&edge.source()) && members.contains(&edge.target()))
            .min_by(|a, b| {
                let (a, b) = (a.weight(), b.weight());
                a.confidence
                    .total_cmp(&b.confidence)
                    .then_with(|| a.item_id.cmp(&b.item_id))
                    .then_with(|| a.prerequisite_id.cmp(&b.prerequisite_id))
            })
            .map(|edge| edge.id())
    }

    /// Whether any cycle remains.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        toposort(&self.graph, None).is_err()
    }

    /// Item ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|index| self.graph[index].as_str())
    }

    /// Ids of the items `id` depends on, sorted.
    #[must_use]
    pub fn prerequisites_of(&self, id: &str) -> Vec<String> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Ids of the items depending on `id`, sorted.
    #[must_use]
    pub fn dependents_of(&self, id: &str) -> Vec<String> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: &str, direction: Direction) -> Vec<String> {
        let Some(&index) = self.id_to_index.get(id) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(index, direction)
            .map(|neighbor| self.graph[neighbor].clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Surviving edges sorted by `(item_id, prerequisite_id)`.
    #[must_use]
    pub fn edges(&self) -> Vec<DependencyEdge> {
        let mut edges: Vec<DependencyEdge> = self.graph.edge_weights().cloned().collect();
        edges.sort_by(|a, b| {
            a.item_id
                .cmp(&b.item_id)
                .then_with(|| a.prerequisite_id.cmp(&b.prerequisite_id))
        });
        edges
    }

    /// Adjacency: every item id to the sorted ids it depends on.
    #[must_use]
    pub fn adjacency(&self) -> BTreeMap<String, Vec<String>> {
        self.ids()
            .map(|id| (id.to_string(), self.prerequisites_of(id)))
            .collect()
    }

    /// Prerequisite text per item that matched no other item.
    #[must_use]
    pub const fn external_requirements(&self) -> &BTreeMap<String, Vec<String>> {
        &self.external
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn best_match<'a>(
    prerequisite: &str,
    owner: &InsightItem,
    candidates: &[&'a InsightItem],
    config: &PathConfig,
) -> Option<(&'a InsightItem, TitleMatch)> {
    candidates
        .iter()
        .filter(|candidate| candidate.id != owner.id)
        .map(|candidate| (*candidate, match_title(prerequisite, &candidate.title, config)))
        .filter(|(_, found)| found.is_match())
        .fold(None, |best: Option<(&'a InsightItem, TitleMatch)>, (candidate, found)| {
            match best {
                Some((_, current)) if current.confidence >= found.confidence => best,
                _ => Some((candidate, found)),
            }
        })
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vtg_core::enums::MatchKind;

    use super::fixtures::inputs;
    use super::*;

    #[test]
    fn edges_point_from_item_to_prerequisite() {
        let (items, readiness) = inputs(&[
            ("a", "Basic API Setup", "API key"),
            ("b", "Database Integration", "Basic API Setup"),
        ]);
        let graph = DependencyGraph::build(&items, &readiness, &PathConfig::default());
        assert_eq!(graph.prerequisites_of("b"), vec!["a"]);
        assert_eq!(graph.dependents_of("a"), vec!["b"]);
        assert_eq!(
            graph.external_requirements().get("a"),
            Some(&vec![String::from("API key")])
        );
        assert_eq!(graph.edges()[0].kind, MatchKind::Strong);
    }

    #[test]
    fn two_cycle_loses_weaker_edge() {
        let (items, readiness) = inputs(&[
            ("a", "Alpha Pipeline", "Beta Runner"),
            ("b", "Beta Runner", "Alpha Pipeline basics"),
        ]);
        let mut graph = DependencyGraph::build(&items, &readiness, &PathConfig::default());
        assert!(graph.has_cycles());

        let removed = graph.break_cycles();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].item_id, "b");
        assert!(!graph.has_cycles());
        assert_eq!(graph.prerequisites_of("a"), vec!["b"]);
    }

    #[test]
    fn equal_confidence_cycle_breaks_deterministically() {
        let (items, readiness) = inputs(&[
            ("a", "Alpha", "Beta"),
            ("b", "Beta", "Gamma"),
            ("c", "Gamma", "Alpha"),
        ]);
        let mut graph = DependencyGraph::build(&items, &readiness, &PathConfig::default());
        let removed = graph.break_cycles();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].item_id, "a");
        assert_eq!(removed[0].prerequisite_id, "b");
        assert!(!graph.has_cycles());
    }

    #[test]
    fn self_references_are_ignored() {
        let (items, readiness) = inputs(&[("a", "Docker Basics", "Docker Basics")]);
        let graph = DependencyGraph::build(&items, &readiness, &PathConfig::default());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.adjacency().get("a"), Some(&Vec::new()));
    }
}
