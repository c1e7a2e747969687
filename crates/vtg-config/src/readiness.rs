//! Readiness analysis knobs: complexity signal weights and confidence caps.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Highest confidence an experimental item may carry.
pub const MAX_EXPERIMENTAL_CONFIDENCE: f64 = 0.7;

/// Highest confidence an item with an unusable description may carry.
pub const MAX_INSUFFICIENT_CONFIDENCE: f64 = 0.3;

const fn default_steps_weight() -> f64 {
    0.20
}

const fn default_code_weight() -> f64 {
    0.15
}

const fn default_jargon_weight() -> f64 {
    0.20
}

const fn default_tools_weight() -> f64 {
    0.20
}

const fn default_troubleshooting_weight() -> f64 {
    0.10
}

const fn default_difficulty_weight() -> f64 {
    0.25
}

/// No single complexity signal may contribute more than this.
const fn default_max_signal_contribution() -> f64 {
    0.35
}

/// Confidence ceiling for items with an empty or unusable description.
const fn default_insufficient_confidence() -> f64 {
    MAX_INSUFFICIENT_CONFIDENCE
}

/// Confidence ceiling for experimental items.
const fn default_experimental_confidence_cap() -> f64 {
    MAX_EXPERIMENTAL_CONFIDENCE
}

/// Weight of each complexity signal (each signal is normalized to `[0, 1]` first).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComplexityWeights {
    #[serde(default = "default_steps_weight")]
    pub steps: f64,
    #[serde(default = "default_code_weight")]
    pub code: f64,
    #[serde(default = "default_jargon_weight")]
    pub jargon: f64,
    #[serde(default = "default_tools_weight")]
    pub tools: f64,
    #[serde(default = "default_troubleshooting_weight")]
    pub troubleshooting: f64,
    #[serde(default = "default_difficulty_weight")]
    pub difficulty: f64,
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            steps: default_steps_weight(),
            code: default_code_weight(),
            jargon: default_jargon_weight(),
            tools: default_tools_weight(),
            troubleshooting: default_troubleshooting_weight(),
            difficulty: default_difficulty_weight(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReadinessConfig {
    #[serde(default)]
    pub weights: ComplexityWeights,

    #[serde(default = "default_max_signal_contribution")]
    pub max_signal_contribution: f64,

    #[serde(default = "default_insufficient_confidence")]
    pub insufficient_confidence: f64,

    #[serde(default = "default_experimental_confidence_cap")]
    pub experimental_confidence_cap: f64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            weights: ComplexityWeights::default(),
            max_signal_contribution: default_max_signal_contribution(),
            insufficient_confidence: default_insufficient_confidence(),
            experimental_confidence_cap: default_experimental_confidence_cap(),
        }
    }
}

impl ReadinessConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("readiness.weights.steps", self.weights.steps),
            ("readiness.weights.code", self.weights.code),
            ("readiness.weights.jargon", self.weights.jargon),
            ("readiness.weights.tools", self.weights.tools),
            (
                "readiness.weights.troubleshooting",
                self.weights.troubleshooting,
            ),
            ("readiness.weights.difficulty", self.weights.difficulty),
        ];
        for (field, weight) in weights {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(ConfigError::invalid(field, "must be a non-negative weight"));
            }
        }
        for (field, value) in [
            (
                "readiness.max_signal_contribution",
                self.max_signal_contribution,
            ),
            (
                "readiness.insufficient_confidence",
                self.insufficient_confidence,
            ),
            (
                "readiness.experimental_confidence_cap",
                self.experimental_confidence_cap,
            ),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::invalid(field, "must be in (0, 1]"));
            }
        }
        if self.insufficient_confidence > MAX_INSUFFICIENT_CONFIDENCE {
            return Err(ConfigError::invalid(
                "readiness.insufficient_confidence",
                "must not exceed 0.3",
            ));
        }
        if self.experimental_confidence_cap > MAX_EXPERIMENTAL_CONFIDENCE {
            return Err(ConfigError::invalid(
                "readiness.experimental_confidence_cap",
                "must not exceed 0.7",
            ));
        }
        Ok(())
    }
}
