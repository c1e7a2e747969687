use vtg_engine::IntelligenceEngine;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InputArgs;
use crate::input::load_items;
use crate::output::output;

/// Handle `vtg path`.
pub fn handle(
    args: &InputArgs,
    engine: &IntelligenceEngine,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let items = load_items(&args.file)?;
    let result = engine.analyze_items(&items);
    output(&result.learning_path, flags.format)
}
