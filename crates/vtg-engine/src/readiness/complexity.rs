//! Complexity estimate: six independently normalized signals, weighted and
//! capped so that no single signal dominates.

use vtg_config::ReadinessConfig;
use vtg_core::entities::ComplexityBreakdown;

use crate::catalog;
use crate::text;

/// Raw, normalized (`[0, 1]`) complexity signals for one description.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComplexitySignals {
    pub steps: f64,
    pub code: f64,
    pub jargon: f64,
    pub tools: f64,
    pub troubleshooting: f64,
    pub difficulty: f64,
}

impl ComplexitySignals {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_text(description: &str) -> Self {
        let words = text::word_count(description).max(1) as f64;
        let jargon_density = text::jargon_hits(description) as f64 / words;
        Self {
            steps: ratio(text::step_count(description) as f64, 6.0),
            code: ratio(text::code_lines(description), 15.0),
            jargon: ratio(jargon_density, 0.12),
            tools: ratio(catalog::distinct_tools(description) as f64, 4.0),
            troubleshooting: ratio(text::troubleshooting_hits(description) as f64, 3.0),
            difficulty: text::difficulty_level(description),
        }
    }

    /// Apply weights and the per-signal contribution cap.
    #[must_use]
    pub fn weigh(&self, config: &ReadinessConfig) -> ComplexityBreakdown {
        let cap = config.max_signal_contribution;
        let weights = &config.weights;
        let contribution = |signal: f64, weight: f64| (signal * weight).clamp(0.0, cap);
        ComplexityBreakdown {
            steps: contribution(self.steps, weights.steps),
            code: contribution(self.code, weights.code),
            jargon: contribution(self.jargon, weights.jargon),
            tools: contribution(self.tools, weights.tools),
            troubleshooting: contribution(self.troubleshooting, weights.troubleshooting),
            difficulty: contribution(self.difficulty, weights.difficulty),
        }
    }
}

fn ratio(value: f64, saturation: f64) -> f64 {
    (value / saturation).clamp(0.0, 1.0)
}
