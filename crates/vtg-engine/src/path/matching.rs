//! Fuzzy matching of prerequisite text against insight titles.

use vtg_config::PathConfig;
use vtg_core::enums::MatchKind;

use crate::text::{contains_phrase, normalize, significant_tokens};

/// Tagged match result: a kind plus the numeric confidence it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleMatch {
    pub kind: MatchKind,
    pub confidence: f64,
}

impl TitleMatch {
    pub const NONE: Self = Self {
        kind: MatchKind::None,
        confidence: 0.0,
    };

    #[must_use]
    pub fn is_match(&self) -> bool {
        self.kind != MatchKind::None
    }
}

/// Compare a prerequisite phrase with an item title.
///
/// Exact matches score 1.0. A title contained in the prerequisite
/// ("Basic API Setup being done") scores 0.8 to 1.0 by how much of the
/// phrase it covers. A prerequisite contained in the title scores 0.5 to 0.9
/// by token coverage. Anything else falls back to token overlap (Dice).
#[must_use]
pub fn match_title(prerequisite: &str, title: &str, config: &PathConfig) -> TitleMatch {
    let prereq = normalize(prerequisite);
    let title = normalize(title);
    if prereq.is_empty() || title.is_empty() {
        return TitleMatch::NONE;
    }

    let confidence = if prereq == title {
        1.0
    } else if contains_phrase(&prereq, &title) {
        #[allow(clippy::cast_precision_loss)]
        let coverage = title.len() as f64 / prereq.len() as f64;
        0.2f64.mul_add(coverage, 0.8)
    } else if contains_phrase(&title, &prereq) {
        0.4f64.mul_add(token_ratio(&prereq, &title), 0.5)
    } else {
        dice(&prereq, &title) * 0.8
    };

    classify(confidence, config)
}

fn classify(confidence: f64, config: &PathConfig) -> TitleMatch {
    let kind = if confidence >= config.strong_match_threshold {
        MatchKind::Strong
    } else if confidence >= config.weak_match_threshold {
        MatchKind::Weak
    } else {
        return TitleMatch::NONE;
    };
    TitleMatch {
        kind,
        confidence: confidence.clamp(0.0, 1.0),
    }
}

#[allow(clippy::cast_precision_loss)]
fn token_ratio(part: &str, whole: &str) -> f64 {
    let part = significant_tokens(part);
    let whole = significant_tokens(whole);
    if whole.is_empty() {
        return 0.0;
    }
    part.intersection(&whole).count() as f64 / whole.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn dice(a: &str, b: &str) -> f64 {
    let a = significant_tokens(a);
    let b = significant_tokens(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    2.0 * a.intersection(&b).count() as f64 / (a.len() + b.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PathConfig {
        PathConfig::default()
    }

    #[test]
    fn exact_match_is_strong() {
        let found = match_title("basic api setup", "Basic API Setup", &config());
        assert_eq!(found.kind, MatchKind::Strong);
        assert!((found.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn title_inside_prerequisite_is_strong() {
        let found = match_title("Basic API Setup being done", "Basic API Setup", &config());
        assert_eq!(found.kind, MatchKind::Strong);
        assert!(found.confidence > 0.8 && found.confidence < 1.0);
    }

    #[test]
    fn prerequisite_inside_title_depends_on_coverage() {
        let found = match_title("Docker", "Docker Compose Dev Environment", &config());
        assert_eq!(found.kind, MatchKind::Weak);
        let found = match_title("API key", "Basic API Setup", &config());
        assert!(!found.is_match());
    }

    #[test]
    fn partial_overlap_can_be_weak_or_none() {
        let found = match_title("Workflow Automation basics", "Advanced Workflow Automation", &config());
        assert_eq!(found.kind, MatchKind::Weak);
        assert!(!match_title("Slack account", "Database Integration", &config()).is_match());
    }

    #[test]
    fn whole_words_only() {
        assert!(!match_title("api", "Rapid Prototyping", &config()).is_match());
    }
}
