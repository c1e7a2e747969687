//! Bracket cutoffs for recommendations, quick wins, and foundational items.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Share of the batch (by ROI rank) that forms the top bracket.
const fn default_top_bracket_fraction() -> f64 {
    0.25
}

/// A HIGH recommendation must break even within this many weeks.
const fn default_high_breakeven_weeks() -> f64 {
    6.0
}

/// ROI estimates below this confidence are recommended LOW.
const fn default_min_confidence() -> f64 {
    0.5
}

const fn default_quick_win_complexity() -> f64 {
    0.3
}

const fn default_quick_win_limit() -> usize {
    10
}

const fn default_foundational_min_dependents() -> usize {
    3
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PrioritizationConfig {
    #[serde(default = "default_top_bracket_fraction")]
    pub top_bracket_fraction: f64,

    #[serde(default = "default_high_breakeven_weeks")]
    pub high_breakeven_weeks: f64,

    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Quick wins must have complexity strictly below this.
    #[serde(default = "default_quick_win_complexity")]
    pub quick_win_complexity: f64,

    #[serde(default = "default_quick_win_limit")]
    pub quick_win_limit: usize,

    #[serde(default = "default_foundational_min_dependents")]
    pub foundational_min_dependents: usize,
}

impl Default for PrioritizationConfig {
    fn default() -> Self {
        Self {
            top_bracket_fraction: default_top_bracket_fraction(),
            high_breakeven_weeks: default_high_breakeven_weeks(),
            min_confidence: default_min_confidence(),
            quick_win_complexity: default_quick_win_complexity(),
            quick_win_limit: default_quick_win_limit(),
            foundational_min_dependents: default_foundational_min_dependents(),
        }
    }
}

impl PrioritizationConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.top_bracket_fraction > 0.0 && self.top_bracket_fraction <= 1.0) {
            return Err(ConfigError::invalid(
                "prioritization.top_bracket_fraction",
                "must be in (0, 1]",
            ));
        }
        if !(self.high_breakeven_weeks.is_finite() && self.high_breakeven_weeks > 0.0) {
            return Err(ConfigError::invalid(
                "prioritization.high_breakeven_weeks",
                "must be a finite, positive number of weeks",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::invalid(
                "prioritization.min_confidence",
                "must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.quick_win_complexity) {
            return Err(ConfigError::invalid(
                "prioritization.quick_win_complexity",
                "must be in [0, 1]",
            ));
        }
        if self.foundational_min_dependents == 0 {
            return Err(ConfigError::invalid(
                "prioritization.foundational_min_dependents",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
