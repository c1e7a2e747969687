//! Phase clustering over the topological order.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use vtg_config::PathConfig;
use vtg_core::entities::LearningPhase;
use vtg_core::enums::ReadinessStatus;

use super::graph::DependencyGraph;

/// A clustered phase and the readiness status most of its items share.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPhase {
    pub phase: LearningPhase,
    pub dominant: ReadinessStatus,
}

/// Per-item facts clustering needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseInput {
    pub hours: f64,
    pub status: ReadinessStatus,
}

/// Walk `order`, opening a new phase when an item depends on something in the
/// current phase or the phase's hour budget would be exceeded. Once
/// `max_phases` is reached the remaining items merge into the last phase.
pub fn cluster(
    order: &[String],
    graph: &DependencyGraph,
    input: impl Fn(&str) -> PhaseInput,
    config: &PathConfig,
) -> Vec<PlannedPhase> {
    let max_phases = config.max_phases.max(1);
    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut hours: Vec<f64> = Vec::new();
    let mut phase_of: HashMap<&str, usize> = HashMap::new();

    for id in order {
        let id = id.as_str();
        let item_hours = input(id).hours;
        let prerequisites = graph.prerequisites_of(id);

        let open_new = match groups.len() {
            0 => true,
            count if count >= max_phases => false,
            count => {
                let current = count - 1;
                let depends_on_current = prerequisites
                    .iter()
                    .any(|prerequisite| phase_of.get(prerequisite.as_str()) == Some(&current));
                let over_budget = hours[current] + item_hours > config.phase_hour_budget;
                depends_on_current || over_budget
            }
        };
        if open_new {
            groups.push(Vec::new());
            hours.push(0.0);
        }

        let current = groups.len() - 1;
        groups[current].push(id);
        hours[current] += item_hours;
        phase_of.insert(id, current);
    }

    let mut used_titles: BTreeMap<&'static str, usize> = BTreeMap::new();
    groups
        .iter()
        .enumerate()
        .map(|(index, members)| {
            let statuses: Vec<ReadinessStatus> = members.iter().map(|id| input(id).status).collect();
            let dominant = dominant_status(&statuses);
            let template = Template::for_status(dominant);

            let seen = used_titles.entry(template.title).or_insert(0);
            *seen += 1;
            let title = if *seen == 1 {
                template.title.to_string()
            } else {
                format!("{} (part {seen})", template.title)
            };

            let prerequisite_phase_numbers: Vec<u32> = members
                .iter()
                .flat_map(|id| graph.prerequisites_of(id))
                .filter_map(|prerequisite| phase_of.get(prerequisite.as_str()).copied())
                .filter(|phase| *phase < index)
                .map(phase_number)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();

            let estimated_hours = hours[index];
            let mut success_criteria: Vec<String> =
                template.criteria.iter().map(ToString::to_string).collect();
            success_criteria.push(format!("Complete within ~{estimated_hours:.1} hours"));

            PlannedPhase {
                phase: LearningPhase {
                    phase_number: phase_number(index),
                    title,
                    goal: (template.goal)(members.len()),
                    items: members.iter().map(ToString::to_string).collect(),
                    estimated_hours,
                    prerequisite_phase_numbers,
                    success_criteria,
                },
                dominant,
            }
        })
        .collect()
}

fn phase_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// Most common status; ties go to the less ready status.
fn dominant_status(statuses: &[ReadinessStatus]) -> ReadinessStatus {
    [
        ReadinessStatus::Ready,
        ReadinessStatus::NeedsSetup,
        ReadinessStatus::Experimental,
    ]
    .into_iter()
    .map(|status| (statuses.iter().filter(|s| **s == status).count(), status.rank(), status))
    .max_by_key(|(count, rank, _)| (*count, *rank))
    .map_or(ReadinessStatus::NeedsSetup, |(_, _, status)| status)
}

struct Template {
    title: &'static str,
    goal: fn(usize) -> String,
    criteria: &'static [&'static str],
}

impl Template {
    fn for_status(status: ReadinessStatus) -> Self {
        match status {
            ReadinessStatus::Ready => Self {
                title: "Quick Start",
                goal: |count| format!("Put {count} ready-to-use insight(s) to work for immediate savings"),
                criteria: &[
                    "Each item used at least once in real work",
                    "Time saved is noticeable in the daily routine",
                ],
            },
            ReadinessStatus::NeedsSetup => Self {
                title: "Setup & Integration",
                goal: |count| format!("Set up the tools and accounts {count} insight(s) depend on"),
                criteria: &[
                    "All prerequisites installed and credentials stored",
                    "Each item runs end to end at least once",
                ],
            },
            ReadinessStatus::Experimental => Self {
                title: "Exploration",
                goal: |count| format!("Trial {count} experimental insight(s) before committing to them"),
                criteria: &[
                    "Each feature evaluated against a real task",
                    "Keep or drop decision recorded for each item",
                ],
            },
        }
    }
}
