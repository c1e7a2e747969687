//! Markdown rendering of an [`AnalysisResult`]. Pure formatting: every number
//! shown here was computed by the engine.

use std::fmt::Write;

use vtg_core::entities::RoiMetrics;
use vtg_core::responses::{AnalysisResult, PrioritizedItem};

/// Render the executive summary, quick wins, prioritization dashboard, and
/// learning path (ending in the phase diagram) as Markdown.
#[must_use]
pub fn generate_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Insight Intelligence Report\n");
    summary(&mut out, result);
    quick_wins(&mut out, result);
    dashboard(&mut out, result);
    learning_path(&mut out, result);
    out
}

fn summary(out: &mut String, result: &AnalysisResult) {
    let stats = &result.statistics;
    let _ = writeln!(out, "## Executive Summary\n");
    let _ = writeln!(out, "- **Insights analyzed:** {}", stats.total_items);
    let _ = writeln!(
        out,
        "- **Ready now:** {} ({:.0}%)",
        stats.ready_count, stats.ready_percent
    );
    let _ = writeln!(out, "- **Needs setup:** {}", stats.needs_setup_count);
    let _ = writeln!(out, "- **Experimental:** {}", stats.experimental_count);
    let _ = writeln!(
        out,
        "- **Total implementation effort:** {:.1} hours",
        stats.total_implementation_hours
    );
    let _ = writeln!(
        out,
        "- **Potential annual savings:** {:.1} hours (~${:.0})",
        stats.total_annual_savings_hours, stats.total_annual_value
    );
    let _ = writeln!(out, "- **Average ROI:** {:.1}x", stats.average_roi_score);
    let _ = writeln!(
        out,
        "- **High priority:** {} | **Quick wins:** {} | **Phases:** {}\n",
        stats.high_priority_count, stats.quick_win_count, stats.phase_count
    );
}

fn quick_wins(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "## Quick Wins\n");
    let wins = &result.learning_path.quick_wins;
    if wins.is_empty() {
        let _ = writeln!(out, "_No quick wins identified._\n");
        return;
    }
    for (rank, win) in wins.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. **{}**: ROI {:.1}x, {:.1}h to implement, ~{} min setup",
            rank + 1,
            win.title,
            win.roi_score,
            win.implementation_hours,
            win.setup_time_minutes
        );
    }
    out.push('\n');
}

fn dashboard(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "## Prioritization Dashboard\n");
    let buckets = [
        ("HIGH", &result.prioritization.high),
        ("MEDIUM", &result.prioritization.medium),
        ("LOW", &result.prioritization.low),
    ];
    for (label, entries) in buckets {
        let _ = writeln!(out, "### {label} ({})\n", entries.len());
        if entries.is_empty() {
            let _ = writeln!(out, "_None._\n");
            continue;
        }
        let _ = writeln!(out, "| Insight | Status | ROI | Effort | Breakeven |");
        let _ = writeln!(out, "|---|---|---|---|---|");
        for entry in entries {
            dashboard_row(out, result, entry);
        }
        out.push('\n');
    }
}

fn dashboard_row(out: &mut String, result: &AnalysisResult, entry: &PrioritizedItem) {
    let breakeven = result
        .roi_scores
        .get(&entry.id)
        .map_or_else(|| String::from("n/a"), RoiMetrics::breakeven_label);
    let _ = writeln!(
        out,
        "| {} | {} | {:.1}x | {:.1}h | {} |",
        cell(&entry.title),
        entry.status,
        entry.roi_score,
        entry.implementation_hours,
        breakeven
    );
}

fn learning_path(out: &mut String, result: &AnalysisResult) {
    let path = &result.learning_path;
    let _ = writeln!(out, "## Learning Path\n");
    let _ = writeln!(
        out,
        "{} phase(s), ~{:.1} hours total.\n",
        path.phases.len(),
        path.total_hours
    );

    if !path.foundational_items.is_empty() {
        let _ = writeln!(out, "**Foundational items:**\n");
        for item in &path.foundational_items {
            let _ = writeln!(
                out,
                "- {} (required by {})",
                item.title,
                item.dependents.len()
            );
        }
        out.push('\n');
    }

    if !path.removed_edges.is_empty() {
        let _ = writeln!(out, "> Dependency cycles were broken by dropping:");
        for edge in &path.removed_edges {
            let _ = writeln!(
                out,
                "> - {} requires {} ({} match, {:.2})",
                result.title_of(&edge.item_id),
                result.title_of(&edge.prerequisite_id),
                edge.kind,
                edge.confidence
            );
        }
        out.push('\n');
    }

    for phase in &path.phases {
        let _ = writeln!(out, "### Phase {}: {}\n", phase.phase_number, phase.title);
        let _ = writeln!(out, "*Goal:* {}\n", phase.goal);
        let _ = writeln!(out, "*Estimated effort:* {:.1} hours", phase.estimated_hours);
        if !phase.prerequisite_phase_numbers.is_empty() {
            let numbers: Vec<String> = phase
                .prerequisite_phase_numbers
                .iter()
                .map(ToString::to_string)
                .collect();
            let _ = writeln!(out, "*Builds on phase(s):* {}", numbers.join(", "));
        }
        out.push('\n');
        for id in &phase.items {
            let status = result
                .readiness_scores
                .get(id)
                .map_or("UNKNOWN", |s| s.status.as_str());
            let hours = result
                .roi_scores
                .get(id)
                .map_or(0.0, |m| m.implementation_hours);
            let _ = writeln!(out, "- {} ({status}, {hours:.1}h)", result.title_of(id));
        }
        let _ = writeln!(out, "\n**Success criteria:**\n");
        for criterion in &phase.success_criteria {
            let _ = writeln!(out, "- [ ] {criterion}");
        }
        out.push('\n');
    }

    if !path.external_requirements.is_empty() {
        let _ = writeln!(out, "### External Requirements\n");
        for (id, requirements) in &path.external_requirements {
            let _ = writeln!(
                out,
                "- {}: {}",
                result.title_of(id),
                requirements.join(", ")
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "### Phase Diagram\n");
    let _ = writeln!(out, "```mermaid\n{}```", path.diagram);
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
