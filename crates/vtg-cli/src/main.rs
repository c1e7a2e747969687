use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod input;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("vtg error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let project_root = resolve_project_root(flags.config_dir.as_deref())?;
    let config = load_config(&project_root)?;

    commands::dispatch(&cli.command, config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VANTAGE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// The directory whose `.vantage/config.toml` and `.env` are read.
///
/// `--config-dir` may point at the project root or at its `.vantage` directory.
fn resolve_project_root(config_dir: Option<&str>) -> anyhow::Result<PathBuf> {
    let Some(path) = config_dir else {
        return std::env::current_dir().context("failed to read current directory");
    };

    let explicit = PathBuf::from(path);
    if explicit
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == vtg_config::PROJECT_CONFIG_DIR)
    {
        return explicit
            .parent()
            .map(Path::to_path_buf)
            .context("invalid --config-dir: '.vantage' directory has no parent");
    }

    if explicit.is_dir() {
        return Ok(explicit);
    }

    anyhow::bail!(
        "invalid --config-dir '{}': directory does not exist",
        explicit.display()
    );
}

fn load_config(project_root: &Path) -> anyhow::Result<vtg_config::VantageConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    vtg_config::VantageConfig::load_from(project_root).with_context(|| {
        format!(
            "failed to load configuration for {}",
            project_root.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_accepts_the_dot_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dot = dir.path().join(".vantage");
        std::fs::create_dir(&dot).expect("mkdir");

        let root = resolve_project_root(dot.to_str()).expect("root should resolve");
        assert_eq!(root, dir.path());
    }

    #[test]
    fn config_dir_must_exist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        assert!(resolve_project_root(missing.to_str()).is_err());
    }

    #[test]
    fn project_config_file_is_applied() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dot = dir.path().join(".vantage");
        std::fs::create_dir(&dot).expect("mkdir");
        std::fs::write(dot.join("config.toml"), "[economics]\nhourly_rate = 120.0\n")
            .expect("write config");

        let config = load_config(dir.path()).expect("config should load");
        assert!((config.economics.hourly_rate - 120.0).abs() < f64::EPSILON);
    }
}
