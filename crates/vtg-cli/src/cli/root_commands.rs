use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Score every insight and build the learning path.
    Analyze(InputArgs),
    /// Render the Markdown intelligence report.
    Report(ReportArgs),
    /// Print only the learning path.
    Path(InputArgs),
    /// Print only the phase diagram (Mermaid).
    Diagram(InputArgs),
    /// Dump JSON schema for the input record or the result bundle.
    Schema(SchemaArgs),
    /// Print the effective merged configuration.
    Config,
}

/// An insight file: a JSON array of records or JSONL.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    pub file: PathBuf,
}

/// Arguments for `vtg report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    pub file: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `vtg schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value = "insight")]
    pub target: SchemaTarget,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Insight,
    Result,
}
