use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DetectionOrigin, PrerequisiteKind, ReadinessStatus};

/// A requirement detected in an insight description.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Prerequisite {
    pub text: String,
    pub kind: PrerequisiteKind,
    pub origin: DetectionOrigin,
}

/// Weighted contribution of each complexity signal, already capped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ComplexityBreakdown {
    pub steps: f64,
    pub code: f64,
    pub jargon: f64,
    pub tools: f64,
    pub troubleshooting: f64,
    pub difficulty: f64,
}

impl ComplexityBreakdown {
    /// Sum of all contributions clamped to `[0, 1]`.
    #[must_use]
    pub fn total(&self) -> f64 {
        (self.steps + self.code + self.jargon + self.tools + self.troubleshooting + self.difficulty)
            .clamp(0.0, 1.0)
    }

    /// Name of the largest contributing signal, if any contributed.
    #[must_use]
    pub fn dominant(&self) -> Option<&'static str> {
        [
            ("steps", self.steps),
            ("code", self.code),
            ("jargon", self.jargon),
            ("tools", self.tools),
            ("troubleshooting", self.troubleshooting),
            ("difficulty", self.difficulty),
        ]
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
    }
}

/// Implementation readiness of one insight.
///
/// Invariants: `complexity` and `confidence` lie in `[0, 1]`; every blocker
/// also appears in `prerequisites`; `Experimental` implies `confidence <= 0.7`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReadinessScore {
    pub status: ReadinessStatus,
    pub complexity: f64,
    pub complexity_breakdown: ComplexityBreakdown,
    pub setup_time_minutes: u32,
    pub prerequisites: Vec<String>,
    pub prerequisite_details: Vec<Prerequisite>,
    pub blockers: Vec<String>,
    pub confidence: f64,
    pub reasoning: String,
}

impl ReadinessScore {
    /// Prerequisites that were only inferred from category nouns.
    #[must_use]
    pub fn implicit_count(&self) -> usize {
        self.prerequisite_details
            .iter()
            .filter(|p| p.origin == DetectionOrigin::Implicit)
            .count()
    }
}
