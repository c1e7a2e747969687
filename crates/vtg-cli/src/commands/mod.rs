use anyhow::Context;
use vtg_config::VantageConfig;
use vtg_engine::IntelligenceEngine;

use crate::cli::{Commands, GlobalFlags};

pub mod analyze;
pub mod config;
pub mod diagram;
pub mod path;
pub mod report;
pub mod schema;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: VantageConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Schema(args) => return schema::handle(args, flags),
        Commands::Config => return config::handle(&config, flags),
        _ => {}
    }

    let engine = IntelligenceEngine::try_new(config).context("invalid engine configuration")?;
    match command {
        Commands::Analyze(args) => analyze::handle(args, &engine, flags),
        Commands::Report(args) => report::handle(args, &engine),
        Commands::Path(args) => path::handle(args, &engine, flags),
        Commands::Diagram(args) => diagram::handle(args, &engine),
        Commands::Schema(_) | Commands::Config => {
            unreachable!("schema/config are handled before the engine is built")
        }
    }
}
