//! # vtg-config
//!
//! Layered configuration loading for Vantage using figment.
//!
//! Every economic assumption and threshold the engine uses lives here, so a
//! batch can be re-scored under different assumptions without touching code.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VANTAGE_*` prefix, `__` as separator)
//! 2. Project-level `.vantage/config.toml`
//! 3. User-level `~/.config/vantage/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VANTAGE_ECONOMICS__HOURLY_RATE` -> `economics.hourly_rate`,
//! `VANTAGE_PATH__MAX_PHASES` -> `path.max_phases`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vtg_config::VantageConfig;
//!
//! let config = VantageConfig::load_with_dotenv().expect("config");
//! println!("hourly rate: {}", config.economics.hourly_rate);
//! ```

mod economics;
mod error;
mod path;
mod prioritization;
mod readiness;

pub use economics::EconomicsConfig;
pub use error::ConfigError;
pub use path::PathConfig;
pub use prioritization::PrioritizationConfig;
pub use readiness::{
    ComplexityWeights, MAX_EXPERIMENTAL_CONFIDENCE, MAX_INSUFFICIENT_CONFIDENCE, ReadinessConfig,
};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the project-local config file.
pub const PROJECT_CONFIG_DIR: &str = ".vantage";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VantageConfig {
    #[serde(default)]
    pub economics: EconomicsConfig,
    #[serde(default)]
    pub readiness: ReadinessConfig,
    #[serde(default)]
    pub prioritization: PrioritizationConfig,
    #[serde(default)]
    pub path: PathConfig,
}

impl VantageConfig {
    /// Load configuration from all sources rooted at the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with the project-local layer read from `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value is out of range.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VANTAGE_").split("__"))
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.economics.validate()?;
        self.readiness.validate()?;
        self.prioritization.validate()?;
        self.path.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vantage").join("config.toml"))
    }
}
