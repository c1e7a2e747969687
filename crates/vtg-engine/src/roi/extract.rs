//! Signal extraction for ROI estimation: time saved per use, use frequency,
//! recurring cost, and stated implementation effort.

use std::sync::LazyLock;

use regex::Regex;
use vtg_core::enums::{PrerequisiteKind, UseFrequency};

use crate::catalog;
use crate::text::{duration_minutes, static_regex};

/// Minutes saved per use when the description gives no hint.
pub const DEFAULT_MINUTES_SAVED: f64 = 10.0;

/// Upper bound for a single use; anything above is a parse artifact.
const MAX_MINUTES_PER_USE: f64 = 8.0 * 60.0;
const MAX_ANNUAL_COST: f64 = 1_000_000.0;

const AMOUNT: &str = r"(\d+(?:\.\d+)?|a few|a couple of|half an?|an?|one|two)";
const UNIT: &str = r"(seconds?|secs?|minutes?|mins?|hours?|hrs?|h|days?|weeks?)";

static SAVES: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(&format!(
        r"(?i)\b(?:saves?|saving|cuts?|shaves?(?: off)?|frees? up|reclaims?)\s+(?:you\s+|me\s+|us\s+|teams?\s+)?(?:about\s+|around\s+|roughly\s+|up to\s+|over\s+|nearly\s+|~)?{AMOUNT}\s*{UNIT}\b"
    ))
});
static REDUCES_BY: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(&format!(
        r"(?i)\breduc(?:es?|ing)\b[^.\n]{{0,60}}?\bby\s+(?:about\s+|around\s+|~)?{AMOUNT}\s*{UNIT}\b"
    ))
});
static AMOUNT_SAVED: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(&format!(
        r"(?i)\b{AMOUNT}\s*{UNIT}\s+(?:saved|of (?:time )?savings?)\b"
    ))
});

static QUALITATIVE_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\bhours of (?:manual |tedious |repetitive )?(?:work|effort)\b|\bsaves? (?:you )?hours\b",
    )
});
static QUALITATIVE_LOTS: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\b(?:significant|a lot of|lots of|tons of|massive|huge) (?:amounts? of )?time\b|\bsaves? (?:you )?(?:a lot|lots)\b",
    )
});

static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\$\s?(\d[\d,]*(?:\.\d+)?)\s*(?:/\s*|\bper\s+|\ba\s+|\ban\s+|\beach\s+|\bevery\s+)(month|mo|year|yr|annum|week|wk|day)\b",
    )
});
static TIMES_PER: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"(?i)\b(?:(\d+|two|three|four|five|several)\s*(?:times|x)|(once|twice))\s+(?:a|an|per|each|every)\s+(day|week|month|quarter|year)\b",
    )
});
static EVERY_N: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(r"(?i)\bevery\s+(\d+|two|three|few|other)\s+(day|week|month)s?\b")
});

static QUALITATIVE_FREQUENCY: LazyLock<Vec<(UseFrequency, Regex)>> = LazyLock::new(|| {
    vec![
        (
            UseFrequency::Daily,
            static_regex(
                r"(?i)\b(?:daily|every ?day|each day|per day|every (?:morning|evening|night)|nightly|hourly|constantly|all the time)\b",
            ),
        ),
        (
            UseFrequency::Weekly,
            static_regex(
                r"(?i)\b(?:weekly|every week|each week|per week|every (?:monday|tuesday|wednesday|thursday|friday|weekend))\b",
            ),
        ),
        (
            UseFrequency::Monthly,
            static_regex(r"(?i)\b(?:monthly|every month|each month|per month)\b"),
        ),
        (
            UseFrequency::Quarterly,
            static_regex(
                r"(?i)\b(?:quarterly|every quarter|each quarter|per quarter|occasionally|a few times a year)\b",
            ),
        ),
        (
            UseFrequency::Rarely,
            static_regex(
                r"(?i)\b(?:rarely|annually|yearly|once a year|every year|one[- ]off|one[- ]time)\b",
            ),
        ),
    ]
});

static EFFORT: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(&format!(
        r"(?i)\b(?:takes?|took|taking|requires?|needs?|spend|spending)\s+(?:about\s+|around\s+|roughly\s+|only\s+|just\s+|under\s+|less than\s+|~)?{AMOUNT}\s*{UNIT}\s+(?:to\s+)?(?:set ?up|setup|implement|build|configure|install|get (?:started|running)|learn|complete|wire up)"
    ))
});
static SETUP_TAKES: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(&format!(
        r"(?i)\b(?:set ?up|setup|implementation|installation|configuration)\s+(?:takes|took|requires|needs|time(?: is)?:?|is)\s+(?:about\s+|around\s+|roughly\s+|only\s+|just\s+|under\s+|~)?{AMOUNT}\s*{UNIT}\b"
    ))
});
static AMOUNT_SETUP: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(&format!(
        r"(?i)\b{AMOUNT}[\s-]*{UNIT}\s+(?:of\s+)?(?:set ?up|setup|implementation|installation)\b"
    ))
});

/// Where a time-saved estimate came from; drives confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    Explicit,
    Qualitative,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSaved {
    pub minutes: f64,
    pub source: TimeSource,
}

/// Minutes saved per use. Explicit numeric phrases win over qualitative ones.
#[must_use]
pub fn time_saved(text: &str) -> TimeSaved {
    let explicit = [&*SAVES, &*REDUCES_BY, &*AMOUNT_SAVED]
        .iter()
        .filter_map(|pattern| first_duration(pattern, text))
        .next();
    if let Some(minutes) = explicit {
        return TimeSaved {
            minutes: minutes.min(MAX_MINUTES_PER_USE),
            source: TimeSource::Explicit,
        };
    }
    let qualitative = if QUALITATIVE_HOURS.is_match(text) {
        Some(60.0)
    } else if QUALITATIVE_LOTS.is_match(text) {
        Some(30.0)
    } else {
        None
    };
    qualitative.map_or(
        TimeSaved {
            minutes: DEFAULT_MINUTES_SAVED,
            source: TimeSource::Default,
        },
        |minutes| TimeSaved {
            minutes,
            source: TimeSource::Qualitative,
        },
    )
}

/// Use frequency and whether the text actually stated one.
///
/// Prices are stripped first so "$20 per month" never reads as a monthly
/// habit. Numeric phrases ("3 times a week", "every 2 days") take precedence
/// over frequency words; among words, the earliest mention wins.
#[must_use]
pub fn frequency(text: &str) -> (UseFrequency, bool) {
    let text = PRICE.replace_all(text, " ");

    if let Some(uses) = numeric_uses_per_year(&text) {
        return (UseFrequency::from_uses_per_year(uses), true);
    }

    QUALITATIVE_FREQUENCY
        .iter()
        .filter_map(|(frequency, pattern)| pattern.find(&text).map(|m| (m.start(), *frequency)))
        .min_by_key(|(start, _)| *start)
        .map_or((UseFrequency::Monthly, false), |(_, frequency)| (frequency, true))
}

fn numeric_uses_per_year(text: &str) -> Option<f64> {
    if let Some(caps) = TIMES_PER.captures(text) {
        let count = caps
            .get(1)
            .or_else(|| caps.get(2))
            .and_then(|m| count_word(m.as_str()))?;
        let per_year = caps.get(3).map(|m| periods_per_year(m.as_str()))?;
        return Some(count * per_year);
    }
    let caps = EVERY_N.captures(text)?;
    let every = caps.get(1).and_then(|m| count_word(m.as_str()))?;
    let per_year = caps.get(2).map(|m| periods_per_year(m.as_str()))?;
    (every > 0.0).then(|| per_year / every)
}

fn count_word(word: &str) -> Option<f64> {
    match word.to_ascii_lowercase().as_str() {
        "once" => Some(1.0),
        "twice" | "two" | "other" => Some(2.0),
        "three" | "few" | "several" => Some(3.0),
        "four" => Some(4.0),
        "five" => Some(5.0),
        digits => digits.parse::<f64>().ok().filter(|n| n.is_finite()),
    }
}

fn periods_per_year(unit: &str) -> f64 {
    match unit.to_ascii_lowercase().as_str() {
        "day" => 365.0,
        "week" => 52.0,
        "month" => 12.0,
        "quarter" => 4.0,
        _ => 1.0,
    }
}

/// Recurring cost per year and a short note on where it came from.
///
/// Explicit prices are annualized and summed. A paid or metered offering
/// without a price falls back to `metered_default`.
#[must_use]
pub fn recurring_annual_cost(text: &str, metered_default: f64) -> (f64, Option<String>) {
    let priced: f64 = PRICE
        .captures_iter(text)
        .filter_map(|caps| {
            let amount = caps.get(1)?.as_str().replace(',', "").parse::<f64>().ok()?;
            let unit = caps.get(2)?.as_str().to_ascii_lowercase();
            let multiplier = match unit.as_str() {
                "month" | "mo" => 12.0,
                "week" | "wk" => 52.0,
                "day" => 365.0,
                _ => 1.0,
            };
            Some(amount * multiplier).filter(|cost| cost.is_finite())
        })
        .sum();
    if priced > 0.0 {
        let cost = priced.min(MAX_ANNUAL_COST);
        return (cost, Some(format!("${cost:.0}/yr stated")));
    }
    let paid = catalog::scan(text)
        .into_iter()
        .find(|entry| entry.kind == PrerequisiteKind::Paid);
    paid.map_or((0.0, None), |entry| {
        (metered_default, Some(format!("{} assumed ${metered_default:.0}/yr", entry.label)))
    })
}

/// Implementation effort in hours when the text states it.
#[must_use]
pub fn stated_effort_hours(text: &str) -> Option<f64> {
    [&*EFFORT, &*SETUP_TAKES, &*AMOUNT_SETUP]
        .iter()
        .find_map(|pattern| first_duration(pattern, text))
        .map(|minutes| minutes / 60.0)
}

fn first_duration(pattern: &Regex, text: &str) -> Option<f64> {
    pattern.captures_iter(text).find_map(|caps| {
        let amount = caps.get(1)?.as_str();
        let unit = caps.get(2)?.as_str();
        duration_minutes(amount, unit)
    })
}
