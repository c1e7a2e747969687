//! Status, frequency, recommendation, and match enums for Vantage.
//!
//! Status-like enums (`ReadinessStatus`, `Recommendation`, `Priority`) serialize as
//! `SCREAMING_SNAKE_CASE` so the JSON output uses the same labels as the report.
//! Everything else uses `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ReadinessStatus
// ---------------------------------------------------------------------------

/// How immediately an insight can be put to use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessStatus {
    Ready,
    NeedsSetup,
    Experimental,
}

impl ReadinessStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::NeedsSetup => "NEEDS_SETUP",
            Self::Experimental => "EXPERIMENTAL",
        }
    }

    /// Sort rank used as a tie-breaker when bucketing priorities (ready first).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Ready => 0,
            Self::NeedsSetup => 1,
            Self::Experimental => 2,
        }
    }
}

impl fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UseFrequency
// ---------------------------------------------------------------------------

/// How often an insight is expected to be used once implemented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UseFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Rarely,
}

impl UseFrequency {
    /// Fixed occurrences-per-year lookup.
    #[must_use]
    pub const fn occurrences_per_year(self) -> f64 {
        match self {
            Self::Daily => 365.0,
            Self::Weekly => 52.0,
            Self::Monthly => 12.0,
            Self::Quarterly => 4.0,
            Self::Rarely => 1.0,
        }
    }

    /// Snap an arbitrary yearly use count onto the nearest frequency bucket.
    #[must_use]
    pub fn from_uses_per_year(uses: f64) -> Self {
        if uses >= 200.0 {
            Self::Daily
        } else if uses >= 40.0 {
            Self::Weekly
        } else if uses >= 10.0 {
            Self::Monthly
        } else if uses >= 3.0 {
            Self::Quarterly
        } else {
            Self::Rarely
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Rarely => "rarely",
        }
    }
}

impl fmt::Display for UseFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Recommendation / Priority
// ---------------------------------------------------------------------------

/// ROI-based recommendation, bracketed relative to the scored batch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    High,
    Medium,
    Low,
}

impl Recommendation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final dashboard bucket for an insight.
///
/// Derived from [`Recommendation`] with readiness applied on top: an
/// experimental insight never lands in `High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl From<Recommendation> for Priority {
    fn from(value: Recommendation) -> Self {
        match value {
            Recommendation::High => Self::High,
            Recommendation::Medium => Self::Medium,
            Recommendation::Low => Self::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PrerequisiteKind / DetectionOrigin
// ---------------------------------------------------------------------------

/// What sort of thing a prerequisite asks for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PrerequisiteKind {
    /// Something installed locally (CLI tool, runtime, library).
    Tool,
    /// A hosted service or account.
    Service,
    /// An API key, token, or other secret.
    Credential,
    /// Locked to one operating system or vendor platform.
    Platform,
    /// A paid subscription or metered API.
    Paid,
    /// Free-text requirement that fits no other category.
    General,
}

impl PrerequisiteKind {
    /// Whether this kind of prerequisite counts as a blocker.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Credential | Self::Platform | Self::Paid)
    }

    /// Whether this kind implies an external account or hosted dependency.
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(self, Self::Service | Self::Credential | Self::Paid)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Service => "service",
            Self::Credential => "credential",
            Self::Platform => "platform",
            Self::Paid => "paid",
            Self::General => "general",
        }
    }
}

impl fmt::Display for PrerequisiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a prerequisite was found in the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DetectionOrigin {
    /// Parsed from an explicit "requires"/"needs"/"depends on" phrase.
    Explicit,
    /// Inferred from a known category noun (tool name, "API key", "account").
    Implicit,
}

// ---------------------------------------------------------------------------
// MatchKind
// ---------------------------------------------------------------------------

/// Strength of a prerequisite-text to item-title match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Strong,
    Weak,
    None,
}

impl MatchKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Weak => "weak",
            Self::None => "none",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
