use vtg_engine::IntelligenceEngine;

use crate::cli::root_commands::InputArgs;
use crate::input::load_items;

/// Handle `vtg diagram`. Always plain text, ready to paste into a Mermaid block.
pub fn handle(args: &InputArgs, engine: &IntelligenceEngine) -> anyhow::Result<()> {
    let items = load_items(&args.file)?;
    let result = engine.analyze_items(&items);
    print!("{}", result.learning_path.diagram);
    Ok(())
}
