//! Learning path scheduling knobs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Start a new phase once the running hours would exceed this.
const fn default_phase_hour_budget() -> f64 {
    4.0
}

const fn default_max_phases() -> usize {
    6
}

/// Title matches at or above this confidence are `strong`.
const fn default_strong_match_threshold() -> f64 {
    0.75
}

/// Title matches below this confidence are discarded.
const fn default_weak_match_threshold() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PathConfig {
    #[serde(default = "default_phase_hour_budget")]
    pub phase_hour_budget: f64,

    #[serde(default = "default_max_phases")]
    pub max_phases: usize,

    #[serde(default = "default_strong_match_threshold")]
    pub strong_match_threshold: f64,

    #[serde(default = "default_weak_match_threshold")]
    pub weak_match_threshold: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            phase_hour_budget: default_phase_hour_budget(),
            max_phases: default_max_phases(),
            strong_match_threshold: default_strong_match_threshold(),
            weak_match_threshold: default_weak_match_threshold(),
        }
    }
}

impl PathConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.phase_hour_budget.is_finite() && self.phase_hour_budget > 0.0) {
            return Err(ConfigError::invalid(
                "path.phase_hour_budget",
                "must be a finite, positive number of hours",
            ));
        }
        if self.max_phases == 0 {
            return Err(ConfigError::invalid("path.max_phases", "must be at least 1"));
        }
        if !(self.weak_match_threshold > 0.0
            && self.weak_match_threshold <= self.strong_match_threshold
            && self.strong_match_threshold <= 1.0)
        {
            return Err(ConfigError::invalid(
                "path.weak_match_threshold",
                "thresholds must satisfy 0 < weak <= strong <= 1",
            ));
        }
        Ok(())
    }
}
