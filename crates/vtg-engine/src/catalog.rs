//! Known category nouns: tools, services, credentials, platform locks, and
//! paid/metered offerings.
//!
//! Readiness uses the catalog for implicit prerequisite detection and blocker
//! classification; ROI uses it as an effort signal.

use std::sync::LazyLock;

use regex::Regex;
use vtg_core::enums::PrerequisiteKind;

use crate::text::static_regex;

/// A catalog entry: a pattern, the canonical requirement it implies, and its kind.
pub struct CatalogEntry {
    pub label: &'static str,
    pub kind: PrerequisiteKind,
    /// Generic entries are only reported when no specific entry of the same kind matched.
    pub generic: bool,
    pattern: Regex,
}

impl CatalogEntry {
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

const RAW_CATALOG: &[(&str, &str, PrerequisiteKind, bool)] = &[
    // Credentials
    (r"(?i)\bapi[ -]?keys?\b", "API key", PrerequisiteKind::Credential, false),
    (
        r"(?i)\b(?:access|auth|bearer|personal access|api) tokens?\b|\boauth\b",
        "access token",
        PrerequisiteKind::Credential,
        false,
    ),
    (r"(?i)\bcredentials?\b", "credentials", PrerequisiteKind::Credential, true),
    // Paid / metered
    (
        r"(?i)\bsubscriptions?\b|\bpaid (?:plan|tier|account|service|version)\b|\bpremium\b|\bpro plan\b",
        "paid subscription",
        PrerequisiteKind::Paid,
        false,
    ),
    (
        r"(?i)\bper[- ](?:request|call|token|1k|1,000)\b|\busage[- ]based\b|\bmetered\b|\bpay[- ]as[- ]you[- ]go\b|\bapi (?:pricing|costs?)\b",
        "metered API usage",
        PrerequisiteKind::Paid,
        false,
    ),
    // Platform locks
    (
        r"(?i)\b(?:macos|mac|windows|linux)[- ]only\b|\bonly (?:on|for|works on) (?:macos|mac|windows|linux|ios|android)\b|\bapplescript\b|\bxcode\b|\bpowershell\b|\bshortcuts app\b",
        "platform-specific tooling",
        PrerequisiteKind::Platform,
        false,
    ),
    // Hosted services
    (r"(?i)\bopenai\b|\bchatgpt\b|\bgpt-4\w*\b", "OpenAI", PrerequisiteKind::Service, false),
    (r"(?i)\banthropic\b|\bclaude\b", "Anthropic", PrerequisiteKind::Service, false),
    (r"(?i)\baws\b|\bamazon web services\b", "AWS", PrerequisiteKind::Service, false),
    (r"(?i)\bgcp\b|\bgoogle cloud\b", "Google Cloud", PrerequisiteKind::Service, false),
    (r"(?i)\bazure\b", "Azure", PrerequisiteKind::Service, false),
    (r"(?i)\bzapier\b", "Zapier", PrerequisiteKind::Service, false),
    (r"(?i)\bslack\b", "Slack", PrerequisiteKind::Service, false),
    (r"(?i)\bnotion\b", "Notion", PrerequisiteKind::Service, false),
    (r"(?i)\bgithub\b", "GitHub", PrerequisiteKind::Service, false),
    (r"(?i)\bairtable\b", "Airtable", PrerequisiteKind::Service, false),
    (r"(?i)\bsupabase\b", "Supabase", PrerequisiteKind::Service, false),
    (r"(?i)\bfirebase\b", "Firebase", PrerequisiteKind::Service, false),
    (r"(?i)\bstripe\b", "Stripe", PrerequisiteKind::Service, false),
    (
        r"(?i)\b(?:an? )?accounts?\b|\bsign(?:ing)?[- ]?up\b|\blog(?:ging)?[- ]?in(?:to)?\b",
        "account",
        PrerequisiteKind::Service,
        true,
    ),
    // Local tools
    (r"(?i)\bdocker\b", "Docker", PrerequisiteKind::Tool, false),
    (r"(?i)\bkubernetes\b|\bk8s\b|\bkubectl\b", "Kubernetes", PrerequisiteKind::Tool, false),
    (r"(?i)\bpython\b|\bpip\b", "Python", PrerequisiteKind::Tool, false),
    (r"(?i)\bnode(?:\.js|js)?\b|\bnpm\b|\bnpx\b", "Node.js", PrerequisiteKind::Tool, false),
    (r"(?i)\bgit\b", "Git", PrerequisiteKind::Tool, false),
    (r"(?i)\bhomebrew\b|\bbrew\b", "Homebrew", PrerequisiteKind::Tool, false),
    (r"(?i)\bpostgres(?:ql)?\b", "PostgreSQL", PrerequisiteKind::Tool, false),
    (r"(?i)\bredis\b", "Redis", PrerequisiteKind::Tool, false),
    (r"(?i)\bterraform\b", "Terraform", PrerequisiteKind::Tool, false),
    (r"(?i)\bffmpeg\b", "ffmpeg", PrerequisiteKind::Tool, false),
    (r"(?i)\bvs ?code\b", "VS Code", PrerequisiteKind::Tool, false),
    (r"(?i)\b(?:browser|chrome) extensions?\b", "browser extension", PrerequisiteKind::Tool, false),
    (
        r"(?i)\binstall(?:s|ed|ing|ation)?\b",
        "local installation",
        PrerequisiteKind::Tool,
        true,
    ),
];

static CATALOG: LazyLock<Vec<CatalogEntry>> = LazyLock::new(|| {
    RAW_CATALOG
        .iter()
        .map(|&(pattern, label, kind, generic)| CatalogEntry {
            label,
            kind,
            generic,
            pattern: static_regex(pattern),
        })
        .collect()
});

/// All catalog entries in priority order.
#[must_use]
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Kind of the first catalog entry matching `text`, if any.
#[must_use]
pub fn classify(text: &str) -> Option<PrerequisiteKind> {
    entries()
        .iter()
        .find(|entry| entry.matches(text))
        .map(|entry| entry.kind)
}

/// Catalog entries found in `text`, with generic entries suppressed when a
/// specific entry of the same kind is present.
#[must_use]
pub fn scan(text: &str) -> Vec<&'static CatalogEntry> {
    let hits: Vec<&CatalogEntry> = entries().iter().filter(|e| e.matches(text)).collect();
    hits.iter()
        .filter(|entry| {
            !entry.generic
                || !hits
                    .iter()
                    .any(|other| !other.generic && other.kind == entry.kind)
        })
        .copied()
        .collect()
}

/// Distinct tools and services referenced (credentials, paid, and generic entries excluded).
#[must_use]
pub fn distinct_tools(text: &str) -> usize {
    scan(text)
        .iter()
        .filter(|entry| {
            !entry.generic
                && matches!(
                    entry.kind,
                    PrerequisiteKind::Tool | PrerequisiteKind::Service | PrerequisiteKind::Platform
                )
        })
        .count()
}
