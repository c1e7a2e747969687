use anyhow::Context;
use vtg_engine::IntelligenceEngine;

use crate::cli::root_commands::ReportArgs;
use crate::input::load_items;

/// Handle `vtg report`.
pub fn handle(args: &ReportArgs, engine: &IntelligenceEngine) -> anyhow::Result<()> {
    let items = load_items(&args.file)?;
    let result = engine.analyze_items(&items);
    let report = engine.generate_report(&result);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{report}"),
    }
    Ok(())
}
