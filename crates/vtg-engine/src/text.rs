//! Text normalization and signal counters shared by the analyzers.
//!
//! Readiness and ROI analysis are independent of each other; both read the
//! same raw description through these helpers.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words ignored when comparing prerequisite phrases against titles.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "the", "to", "of", "for", "in", "on", "with", "your", "my", "our", "its",
    "from", "by", "via", "using", "use", "or", "at", "be", "is", "it",
];

/// Technical vocabulary counted for jargon density.
const JARGON: &[&str] = &[
    "api",
    "apis",
    "endpoint",
    "endpoints",
    "webhook",
    "webhooks",
    "oauth",
    "json",
    "yaml",
    "regex",
    "cli",
    "sdk",
    "container",
    "containers",
    "async",
    "schema",
    "middleware",
    "deployment",
    "deploy",
    "pipeline",
    "cron",
    "env",
    "token",
    "tokens",
    "authentication",
    "integration",
    "script",
    "scripts",
    "repository",
    "dependency",
    "dependencies",
    "config",
    "configuration",
    "database",
    "query",
    "sql",
    "http",
    "rest",
    "graphql",
    "server",
    "proxy",
    "cache",
    "kubernetes",
    "docker",
    "lambda",
    "serverless",
    "runtime",
    "parser",
    "workflow",
    "workflows",
];

static FENCE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"(?s)```[^\n]*\n(.*?)```"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"`([^`\n]+)`"));
static COMMAND_LINE: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"(?m)^(?:\$ |> |    \S)"));
static LIST_LINE: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"(?m)^\s*(?:\d+[.)]|[-*•])\s+\S"));
static SEQUENCE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(r"(?i)\b(?:first|then|next|after that|afterwards|finally|lastly|step \d+)\b")
});
static TROUBLESHOOTING: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\b(?:errors?|troubleshoot\w*|debug\w*|fix(?:es|ing)?|fails?|failures?|workarounds?|retr(?:y|ies)|gotchas?|caveats?|issues?)\b",
    )
});
static HARD_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\b(?:advanced|for experts|expert[- ]level|complex|sophisticated|in-depth|deep dive|difficult|steep learning curve)\b",
    )
});
static MEDIUM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"(?i)\b(?:intermediate|moderate(?:ly)? (?:complex|difficult))\b"));

/// Compile a pattern that is known at build time.
pub(crate) fn static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern is a valid regex")
}

/// Lowercase, replace punctuation with spaces, collapse whitespace.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if ch.is_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized tokens minus stopwords.
#[must_use]
pub fn significant_tokens(text: &str) -> BTreeSet<String> {
    normalize(text)
        .split(' ')
        .filter(|token| !token.is_empty() && !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Whole-word containment of `needle` inside `haystack` (both normalized).
#[must_use]
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    format!(" {haystack} ").contains(&format!(" {needle} "))
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .count()
}

/// Code fragments: fenced block bodies and inline code spans.
#[must_use]
pub fn code_fragments(text: &str) -> Vec<String> {
    let mut fragments: Vec<String> = FENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect();
    let without_fences = FENCE.replace_all(text, " ");
    fragments.extend(
        INLINE_CODE
            .captures_iter(&without_fences)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string())),
    );
    fragments
}

/// Approximate code length in lines.
///
/// Fenced lines and shell-prompt/indented lines count fully; inline spans
/// count as half a line each.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn code_lines(text: &str) -> f64 {
    let fenced: usize = FENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|body| body.as_str().lines().filter(|l| !l.trim().is_empty()).count())
        .sum();
    let prose = FENCE.replace_all(text, " ");
    let commands = COMMAND_LINE.find_iter(&prose).count();
    let inline = INLINE_CODE.find_iter(&prose).count();
    (fenced + commands) as f64 + inline as f64 * 0.5
}

/// Numbered/bulleted lines plus sequencing words.
#[must_use]
pub fn step_count(text: &str) -> usize {
    let prose = FENCE.replace_all(text, " ");
    LIST_LINE.find_iter(&prose).count() + SEQUENCE_WORD.find_iter(&prose).count()
}

/// Occurrences of technical vocabulary.
#[must_use]
pub fn jargon_hits(text: &str) -> usize {
    normalize(text)
        .split(' ')
        .filter(|token| JARGON.contains(token))
        .count()
}

#[must_use]
pub fn troubleshooting_hits(text: &str) -> usize {
    TROUBLESHOOTING.find_iter(text).count()
}

/// Explicit difficulty level in `[0, 1]`.
#[must_use]
pub fn difficulty_level(text: &str) -> f64 {
    if HARD_MARKER.is_match(text) {
        1.0
    } else if MEDIUM_MARKER.is_match(text) {
        0.5
    } else {
        0.0
    }
}

/// Convert an amount/unit pair like (`"15"`, `"minutes"`) to minutes.
///
/// Accepts `a`/`an`/`half an`/`a few` as amounts.
#[must_use]
pub fn duration_minutes(amount: &str, unit: &str) -> Option<f64> {
    let amount = amount.trim().to_ascii_lowercase();
    let value = match amount.as_str() {
        "a" | "an" | "one" => 1.0,
        "half a" | "half an" => 0.5,
        "two" | "a couple of" | "couple of" => 2.0,
        "few" | "a few" => 3.0,
        other => other.parse::<f64>().ok()?,
    };
    let unit = unit.trim().to_ascii_lowercase();
    let per_unit = if unit.starts_with("sec") {
        1.0 / 60.0
    } else if unit.starts_with("min") || unit == "m" {
        1.0
    } else if unit.starts_with("h") {
        60.0
    } else if unit.starts_with("day") {
        8.0 * 60.0
    } else if unit.starts_with("week") {
        40.0 * 60.0
    } else {
        return None;
    };
    let minutes = value * per_unit;
    minutes.is_finite().then_some(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("  Basic API-Setup!  "), "basic api setup");
    }

    #[test]
    fn phrase_containment_respects_word_boundaries() {
        assert!(contains_phrase("basic api setup", "api setup"));
        assert!(!contains_phrase("rapid setup", "api"));
        assert!(!contains_phrase("anything", ""));
    }

    #[test]
    fn significant_tokens_drop_stopwords() {
        let tokens = significant_tokens("Set up the API key for your account");
        assert!(tokens.contains("api"));
        assert!(tokens.contains("account"));
        assert!(!tokens.contains("the"));
        assert!(!tokens.contains("your"));
    }

    #[test]
    fn code_lines_counts_fences_and_inline() {
        let text = "Run this:\n```bash\necho hi\necho there\n```\nthen call `make`.";
        assert!((code_lines(text) - 2.5).abs() < f64::EPSILON);
        assert_eq!(code_fragments(text).len(), 2);
    }

    #[test]
    fn step_count_sees_lists_and_sequence_words() {
        let text = "1. Install it\n2. Configure it\nThen run it and finally check output.";
        assert_eq!(step_count(text), 4);
    }

    #[test]
    fn durations_convert_to_minutes() {
        assert_eq!(duration_minutes("15", "minutes"), Some(15.0));
        assert_eq!(duration_minutes("2", "hours"), Some(120.0));
        assert_eq!(duration_minutes("an", "hour"), Some(60.0));
        assert_eq!(duration_minutes("half an", "hour"), Some(30.0));
        assert_eq!(duration_minutes("1", "day"), Some(480.0));
        assert_eq!(duration_minutes("lots", "minutes"), None);
    }

    #[test]
    fn difficulty_markers() {
        assert!((difficulty_level("An advanced technique") - 1.0).abs() < f64::EPSILON);
        assert!((difficulty_level("intermediate users") - 0.5).abs() < f64::EPSILON);
        assert!(difficulty_level("simple and quick").abs() < f64::EPSILON);
    }
}
