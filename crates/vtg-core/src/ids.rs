//! ID prefix constants and deterministic ID helpers.
//!
//! Insight records coming from an extraction pipeline do not always carry an
//! id. A missing id is derived from an xxh3 hash of the normalized title so
//! that re-running an analysis over the same file yields the same ids.

/// Prefix for insight ids.
pub const PREFIX_INSIGHT: &str = "ins";

/// xxh3 over the lowercased, whitespace-collapsed text.
#[must_use]
pub fn fingerprint(text: &str) -> u64 {
    let normalized = text
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    xxhash_rust::xxh3::xxh3_64(normalized.as_bytes())
}

/// Derive a stable insight id (`ins-xxxxxxxx`) from a title.
#[must_use]
pub fn insight_id(title: &str) -> String {
    format_id(PREFIX_INSIGHT, fingerprint(title))
}

/// Format a prefixed id from the low 32 bits of a hash.
#[must_use]
pub fn format_id(prefix: &str, hash: u64) -> String {
    format!("{prefix}-{:08x}", hash & 0xffff_ffff)
}
