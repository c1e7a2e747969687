//! Ordered status classification: the first rule whose predicate holds wins.

use std::sync::LazyLock;

use regex::Regex;
use vtg_core::entities::Prerequisite;
use vtg_core::enums::ReadinessStatus;

use crate::text::static_regex;

static INSTABILITY: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\b(?:beta|experimental|unstable|still testing|still being tested|(?:in|public|developer|technical) preview|alpha (?:release|version|build)|in (?:alpha|early access))\b",
    )
});
static PRE_RELEASE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"(?i)(?:\bversion\s+|\bv)(0\.\d+(?:\.\d+)?)\b"));

/// Facts about an insight that status rules are evaluated against.
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    pub instability_markers: Vec<String>,
    pub pre_release_version: Option<String>,
    pub prerequisite_count: usize,
    pub has_placeholders: bool,
    pub implies_external: bool,
}

impl Evidence {
    #[must_use]
    pub fn gather(description: &str, prerequisites: &[Prerequisite], has_placeholders: bool) -> Self {
        let mut instability_markers: Vec<String> = Vec::new();
        for found in INSTABILITY.find_iter(description) {
            let marker = found.as_str().to_lowercase();
            if !instability_markers.contains(&marker) {
                instability_markers.push(marker);
            }
        }
        Self {
            instability_markers,
            pre_release_version: PRE_RELEASE_VERSION
                .captures(description)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
            prerequisite_count: prerequisites.len(),
            has_placeholders,
            implies_external: prerequisites.iter().any(|p| p.kind.is_external()),
        }
    }
}

/// A named predicate and the status it assigns.
pub struct StatusRule {
    pub name: &'static str,
    pub applies: fn(&Evidence) -> bool,
    pub outcome: ReadinessStatus,
}

fn is_unstable(evidence: &Evidence) -> bool {
    !evidence.instability_markers.is_empty() || evidence.pre_release_version.is_some()
}

fn is_self_contained(evidence: &Evidence) -> bool {
    evidence.prerequisite_count == 0 && !evidence.has_placeholders && !evidence.implies_external
}

const fn always(_: &Evidence) -> bool {
    true
}

/// Classification rules in priority order. The last rule always applies.
pub const RULES: &[StatusRule] = &[
    StatusRule {
        name: "instability-marker",
        applies: is_unstable,
        outcome: ReadinessStatus::Experimental,
    },
    StatusRule {
        name: "self-contained",
        applies: is_self_contained,
        outcome: ReadinessStatus::Ready,
    },
    StatusRule {
        name: "needs-setup",
        applies: always,
        outcome: ReadinessStatus::NeedsSetup,
    },
];

/// Evaluate [`RULES`] in order, returning the winning rule.
#[must_use]
pub fn classify(evidence: &Evidence) -> &'static StatusRule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(evidence))
        .unwrap_or(&RULES[RULES.len() - 1])
}
