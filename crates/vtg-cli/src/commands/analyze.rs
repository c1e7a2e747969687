use vtg_core::responses::AnalysisResult;
use vtg_engine::IntelligenceEngine;

use crate::cli::root_commands::InputArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::input::load_items;
use crate::output::output;
use crate::output::table::{TableOptions, render_table};

const SUMMARY_HEADERS: [&str; 8] = [
    "id", "title", "priority", "status", "roi", "effort", "breakeven", "phase",
];

/// Handle `vtg analyze`.
///
/// JSON and raw print the full result bundle; table prints one row per item
/// in dashboard order.
pub fn handle(
    args: &InputArgs,
    engine: &IntelligenceEngine,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let items = load_items(&args.file)?;
    let result = engine.analyze_items(&items);

    match flags.format {
        OutputFormat::Table => {
            println!(
                "{}",
                render_table(&SUMMARY_HEADERS, &summary_rows(&result), TableOptions::detect())
            );
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&result, flags.format),
    }
}

fn summary_rows(result: &AnalysisResult) -> Vec<Vec<String>> {
    let prioritization = &result.prioritization;
    prioritization
        .high
        .iter()
        .chain(&prioritization.medium)
        .chain(&prioritization.low)
        .map(|entry| {
            let breakeven = result
                .roi_scores
                .get(&entry.id)
                .map_or_else(|| String::from("-"), vtg_core::entities::RoiMetrics::breakeven_label);
            let phase = result
                .learning_path
                .phase_of(&entry.id)
                .map_or_else(|| String::from("-"), |number| number.to_string());
            vec![
                entry.id.clone(),
                entry.title.clone(),
                entry.priority.to_string(),
                entry.status.to_string(),
                format!("{:.1}x", entry.roi_score),
                format!("{:.1}h", entry.implementation_hours),
                breakeven,
                phase,
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vtg_core::entities::InsightItem;

    use super::*;

    #[test]
    fn rows_follow_dashboard_order() {
        let items = vec![
            InsightItem::new(
                "Slow Migration",
                "Requires a paid Snowflake account. Takes 40 hours to implement. Saves 5 minutes a month.",
            )
            .with_id("slow"),
            InsightItem::new(
                "Alias Pack",
                "Shell aliases. Saves 10 minutes every day. Takes 15 minutes to set up.",
            )
            .with_id("alias"),
        ];
        let result = IntelligenceEngine::default().analyze_items(&items);
        let rows = summary_rows(&result);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "alias");
        assert_eq!(rows[0][2], "HIGH");
        assert_eq!(rows[1][0], "slow");
        assert_eq!(rows[1][2], "LOW");
        assert!(rows.iter().all(|row| row.len() == SUMMARY_HEADERS.len()));
    }
}
