//! Prerequisite extraction: explicit "requires/needs" phrases plus implicit
//! category nouns from the catalog.

use std::sync::LazyLock;

use regex::Regex;
use vtg_core::entities::Prerequisite;
use vtg_core::enums::{DetectionOrigin, PrerequisiteKind};

use crate::catalog;
use crate::text::{normalize, static_regex};

static EXPLICIT: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\b(?:requires|require|required|needs|need|depends on|dependent on|prerequisites?|built on(?: top of)?|builds on|after (?:setting up|installing|completing)|must (?:have|install|set up))\b\s*:?\s+([^.;:\n]+)",
    )
});
static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"(?i)\s*(?:,|\band\b|&|\bplus\b|\+)\s*"));
static LEADING_FILLER: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(r"(?i)^(?:to (?:have|install|set up|configure) |to be |having |an? |the |your |some )+")
});
static TRAILING_FILLER: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\s+(?:first|installed|configured|set up|setup done|to work|to run|to be done|in place|already)$",
    )
});
static NEGATION: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"(?i)^(?:no|nothing|none|zero)\b"));

/// Placeholder conventions that mark a code fragment as incomplete.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"<[A-Za-z_][A-Za-z0-9_ -]*>|\bYOUR_[A-Z0-9_]+\b|\{\{[^}]*\}\}|\bREPLACE_?ME\b|\bCHANGEME\b|\bxxx+\b|\.\.\.",
    )
});

/// Requirement phrases parsed from explicit "requires"/"needs"/"depends on" wording.
#[must_use]
pub fn explicit(description: &str) -> Vec<Prerequisite> {
    let mut found: Vec<Prerequisite> = Vec::new();
    for caps in EXPLICIT.captures_iter(description) {
        let Some(list) = caps.get(1) else {
            continue;
        };
        for raw in LIST_SEPARATOR.split(list.as_str()) {
            let Some(text) = clean(raw) else {
                continue;
            };
            if found
                .iter()
                .any(|existing| normalize(&existing.text) == normalize(&text))
            {
                continue;
            }
            let kind = catalog::classify(&text).unwrap_or(PrerequisiteKind::General);
            found.push(Prerequisite {
                text,
                kind,
                origin: DetectionOrigin::Explicit,
            });
        }
    }
    found
}

/// Catalog nouns not already covered by an explicit prerequisite.
#[must_use]
pub fn implicit(description: &str, explicit: &[Prerequisite]) -> Vec<Prerequisite> {
    catalog::scan(description)
        .into_iter()
        .filter(|entry| !explicit.iter().any(|known| entry.matches(&known.text)))
        .map(|entry| Prerequisite {
            text: entry.label.to_string(),
            kind: entry.kind,
            origin: DetectionOrigin::Implicit,
        })
        .collect()
}

/// Explicit then implicit prerequisites, in detection order.
#[must_use]
pub fn extract(description: &str) -> Vec<Prerequisite> {
    let mut all = explicit(description);
    let inferred = implicit(description, &all);
    all.extend(inferred);
    all
}

/// Whether any code fragment carries an unresolved placeholder.
#[must_use]
pub fn has_placeholders(fragments: &[String]) -> bool {
    fragments.iter().any(|fragment| PLACEHOLDER.is_match(fragment))
}

fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches(|c: char| c == '"' || c == '\'' || c == '(' || c == ')');
    if trimmed.is_empty() || NEGATION.is_match(trimmed) {
        return None;
    }
    let without_lead = LEADING_FILLER.replace(trimmed, "");
    let without_trail = TRAILING_FILLER.replace(without_lead.trim(), "");
    let text = without_trail.trim();
    if text.is_empty() || normalize(text).is_empty() {
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts(prereqs: &[Prerequisite]) -> Vec<&str> {
        prereqs.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn explicit_list_is_split_and_cleaned() {
        let found = explicit("Requires Docker, a GitHub account and the Basic API Setup.");
        assert_eq!(texts(&found), vec!["Docker", "GitHub account", "Basic API Setup"]);
        assert_eq!(found[0].kind, PrerequisiteKind::Tool);
        assert_eq!(found[1].kind, PrerequisiteKind::Service);
        assert_eq!(found[2].kind, PrerequisiteKind::General);
        assert!(found.iter().all(|p| p.origin == DetectionOrigin::Explicit));
    }

    #[test]
    fn depends_on_is_explicit() {
        let found = explicit("This workflow depends on Basic API Setup being done");
        assert_eq!(texts(&found), vec!["Basic API Setup being done"]);
    }

    #[test]
    fn negated_requirements_are_ignored() {
        assert!(explicit("Needs no setup at all. Requires nothing.").is_empty());
    }

    #[test]
    fn implicit_skips_what_explicit_covers() {
        let description = "Needs an API key. Install Docker to run it.";
        let all = extract(description);
        assert_eq!(texts(&all), vec!["API key", "Docker"]);
        assert_eq!(all[0].origin, DetectionOrigin::Explicit);
        assert_eq!(all[1].origin, DetectionOrigin::Implicit);
    }

    #[test]
    fn placeholders_are_detected_in_code_only() {
        assert!(has_placeholders(&[String::from("curl -H 'Authorization: <TOKEN>'")]));
        assert!(has_placeholders(&[String::from("export KEY=YOUR_API_KEY")]));
        assert!(!has_placeholders(&[String::from("echo done")]));
        assert!(!has_placeholders(&[]));
    }
}
