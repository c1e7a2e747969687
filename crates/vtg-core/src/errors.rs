//! Cross-cutting error types for Vantage.
//!
//! Domain-specific errors (`ConfigError`, `EngineError`) live in their respective
//! crates. A unified error is deferred to `vtg-cli` where everything converges
//! into `anyhow`.

use thiserror::Error;

/// Errors raised by the data model itself.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
