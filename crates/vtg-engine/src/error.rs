//! Engine error types.
//!
//! Analysis itself never fails: poor input degrades to conservative defaults.
//! Errors only arise when building an engine from an invalid configuration.

use vtg_config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The supplied configuration has out-of-range values.
    #[error("invalid engine configuration: {0}")]
    Config(#[from] ConfigError),
}
