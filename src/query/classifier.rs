//! Query intent classification.
//!
//! Classifies free-text queries into one of four intents via an ordered
//! rule list. Each rule pairs cheap trigger words with a detailed
//! extraction pattern; when the triggers match but the pattern does not,
//! the rule falls through to the next one instead of raising a parse
//! error, so malformed phrasings degrade to the general response.

use std::sync::LazyLock;

use regex::Regex;

use super::types::QueryIntent;

/// Classifies free-text market queries into structured intents.
#[derive(Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a query. Evaluated against the lowercased, trimmed text;
    /// the first rule whose extraction succeeds wins.
    pub fn classify(&self, query: &str) -> QueryIntent {
        let query = query.trim().to_lowercase();

        // compare <area1> and <area2>
        if query.contains("compare") && query.contains("and") {
            if let Some(caps) = COMPARE_PATTERN.captures(&query) {
                return QueryIntent::Comparison {
                    area1: caps[1].trim().to_string(),
                    area2: caps[2].trim().to_string(),
                };
            }
        }

        // analyze <area> / analysis of <area> / analysis for <area>
        if query.contains("analyze") || query.contains("analysis") {
            if let Some(caps) = ANALYZE_PATTERN.captures(&query) {
                return QueryIntent::Analysis {
                    area: caps[1].trim().to_string(),
                };
            }
        }

        // <area> over the last <N> years
        if query.contains("price growth") || query.contains("trend") {
            if let Some(caps) = TREND_PATTERN.captures(&query) {
                // A window too large for u32 counts as a failed extraction.
                if let Ok(years) = caps[2].parse::<u32>() {
                    return QueryIntent::Trend {
                        area: caps[1].trim().to_string(),
                        years,
                    };
                }
            }
        }

        QueryIntent::General
    }
}

static COMPARE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"compare\s+(.+?)\s+and\s+(.+)").expect("Invalid regex"));

static ANALYZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:analyze|analysis of|analysis for)\s+(.+)").expect("Invalid regex")
});

static TREND_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?)\s+over the last\s+(\d+)\s+years").expect("Invalid regex"));
