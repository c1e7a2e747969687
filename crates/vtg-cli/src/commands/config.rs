use vtg_config::VantageConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `vtg config`.
pub fn handle(config: &VantageConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(config, flags.format)
}
