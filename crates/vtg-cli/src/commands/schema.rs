use schemars::schema_for;
use vtg_core::entities::InsightItem;
use vtg_core::responses::AnalysisResult;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output::output;

/// Handle `vtg schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(args.target)?, flags.format)
}

fn schema_value(target: SchemaTarget) -> anyhow::Result<serde_json::Value> {
    let schema = match target {
        SchemaTarget::Insight => schema_for!(InsightItem),
        SchemaTarget::Result => schema_for!(AnalysisResult),
    };
    Ok(serde_json::to_value(schema)?)
}
