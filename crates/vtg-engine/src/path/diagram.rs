//! Mermaid rendering of the phase sequence.
//!
//! Only phase-to-phase edges are drawn. Consecutive phases are joined with a
//! solid arrow; a phase that depends on an earlier, non-adjacent phase also
//! gets a dotted arrow from it.

use std::fmt::Write;

use vtg_core::enums::ReadinessStatus;

use super::phases::PlannedPhase;

const CLASS_DEFS: &[(&str, &str)] = &[
    ("ready", "fill:#d4edda,stroke:#28a745,color:#155724"),
    ("setup", "fill:#fff3cd,stroke:#ffc107,color:#856404"),
    ("experimental", "fill:#f8d7da,stroke:#dc3545,color:#721c24"),
];

const fn class_for(status: ReadinessStatus) -> &'static str {
    match status {
        ReadinessStatus::Ready => "ready",
        ReadinessStatus::NeedsSetup => "setup",
        ReadinessStatus::Experimental => "experimental",
    }
}

/// Render phases as a top-down Mermaid flowchart.
#[must_use]
pub fn render(phases: &[PlannedPhase]) -> String {
    let mut out = String::from("graph TD\n");
    if phases.is_empty() {
        out.push_str("    empty[\"No phases\"]\n");
        return out;
    }

    for planned in phases {
        let phase = &planned.phase;
        let _ = writeln!(
            out,
            "    P{}[\"Phase {}: {}<br/>{} item(s), ~{:.1}h\"]",
            phase.phase_number,
            phase.phase_number,
            escape(&phase.title),
            phase.items.len(),
            phase.estimated_hours
        );
    }

    for pair in phases.windows(2) {
        let _ = writeln!(
            out,
            "    P{} --> P{}",
            pair[0].phase.phase_number, pair[1].phase.phase_number
        );
    }

    for planned in phases {
        let phase = &planned.phase;
        for required in &phase.prerequisite_phase_numbers {
            if required + 1 < phase.phase_number {
                let _ = writeln!(out, "    P{required} -.-> P{}", phase.phase_number);
            }
        }
    }

    for (name, style) in CLASS_DEFS {
        let _ = writeln!(out, "    classDef {name} {style}");
    }
    for planned in phases {
        let _ = writeln!(
            out,
            "    class P{} {}",
            planned.phase.phase_number,
            class_for(planned.dominant)
        );
    }
    out
}

fn escape(label: &str) -> String {
    label.replace('"', "#quot;").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use vtg_core::entities::LearningPhase;

    use super::*;

    fn planned(number: u32, title: &str, requires: &[u32], dominant: ReadinessStatus) -> PlannedPhase {
        PlannedPhase {
            phase: LearningPhase {
                phase_number: number,
                title: title.to_string(),
                goal: String::new(),
                items: vec![format!("item-{number}")],
                estimated_hours: 1.5,
                prerequisite_phase_numbers: requires.to_vec(),
                success_criteria: Vec::new(),
            },
            dominant,
        }
    }

    #[test]
    fn sequential_and_skip_edges() {
        let diagram = render(&[
            planned(1, "Quick Start", &[], ReadinessStatus::Ready),
            planned(2, "Setup & Integration", &[1], ReadinessStatus::NeedsSetup),
            planned(3, "Exploration", &[1, 2], ReadinessStatus::Experimental),
        ]);
        assert!(diagram.starts_with("graph TD\n"));
        assert!(diagram.contains("P1[\"Phase 1: Quick Start<br/>1 item(s), ~1.5h\"]"));
        assert!(diagram.contains("    P1 --> P2\n"));
        assert!(diagram.contains("    P2 --> P3\n"));
        assert!(diagram.contains("    P1 -.-> P3\n"));
        assert!(!diagram.contains("P1 -.-> P2"));
        assert!(diagram.contains("class P3 experimental"));
    }

    #[test]
    fn quotes_are_escaped() {
        let diagram = render(&[planned(1, "The \"fast\" path", &[], ReadinessStatus::Ready)]);
        assert!(diagram.contains("The #quot;fast#quot; path"));
        assert!(!diagram.contains("-->"));
    }

    #[test]
    fn empty_path_still_renders() {
        assert_eq!(render(&[]), "graph TD\n    empty[\"No phases\"]\n");
    }
}
