//! Response Analyzer — scores a single stimulus/response pair.
//!
//! Pure and deterministic: no I/O, no randomness. Every input, including an
//! empty response, produces a well-formed `ResponseAnalysis`.
//!
//! Score = 50
//!       + 10 × positive terms + 8 × action terms − 15 × negative terms
//!       + 10 if the response is 20–80 characters long
//!       − 20 negative_language, −15 too_short, −10 cliche_response, −25 unrelated_response
//! clamped to [0, 100].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::lexicon::{
    count_matches, related_terms, ACTION_WORDS, CLICHE_PHRASES, NEGATIVE_INDICATORS,
    POSITIVE_INDICATORS,
};

const BASE_SCORE: i32 = 50;
const POSITIVE_WEIGHT: i32 = 10;
const NEGATIVE_WEIGHT: i32 = 15;
const ACTION_WEIGHT: i32 = 8;
const LENGTH_BONUS: i32 = 10;
const NEGATIVE_LANGUAGE_PENALTY: i32 = 20;
const TOO_SHORT_PENALTY: i32 = 15;
const CLICHE_PENALTY: i32 = 10;
const UNRELATED_PENALTY: i32 = 25;

const TOO_SHORT_BELOW: usize = 10;
const TOO_LONG_ABOVE: usize = 100;
const IDEAL_LENGTH: std::ops::RangeInclusive<usize> = 20..=80;

/// Diagnostic flag attached to a scored response.
///
/// Declaration order is the order flags are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFlag {
    NoResponse,
    NegativeLanguage,
    TooShort,
    TooLong,
    ClicheResponse,
    UnrelatedResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators {
    pub positive: u32,
    pub negative: u32,
    pub action: u32,
    /// Character count of the untrimmed response.
    pub length: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseAnalysis {
    pub word: String,
    pub response: String,
    pub score: u32, // 0 – 100
    pub flags: BTreeSet<ResponseFlag>,
    pub indicators: Indicators,
}

/// Scores one candidate reaction to one stimulus word.
pub fn analyze_response(word: &str, response: &str) -> ResponseAnalysis {
    if response.trim().is_empty() {
        return ResponseAnalysis {
            word: word.to_string(),
            response: response.to_string(),
            score: 0,
            flags: BTreeSet::from([ResponseFlag::NoResponse]),
            indicators: Indicators::default(),
        };
    }

    let normalized = response.trim().to_lowercase();
    let length = response.chars().count();

    let positive = count_matches(&normalized, POSITIVE_INDICATORS);
    let negative = count_matches(&normalized, NEGATIVE_INDICATORS);
    let action = count_matches(&normalized, ACTION_WORDS);

    let mut flags = BTreeSet::new();
    if negative > 0 {
        flags.insert(ResponseFlag::NegativeLanguage);
    }
    if length < TOO_SHORT_BELOW {
        flags.insert(ResponseFlag::TooShort);
    }
    if length > TOO_LONG_ABOVE {
        flags.insert(ResponseFlag::TooLong);
    }
    if CLICHE_PHRASES.iter().any(|p| normalized.contains(p)) {
        flags.insert(ResponseFlag::ClicheResponse);
    }

    let stimulus = word.trim().to_lowercase();
    if !normalized.contains(&stimulus) && !is_conceptually_related(&stimulus, &normalized) {
        flags.insert(ResponseFlag::UnrelatedResponse);
    }

    let mut score = BASE_SCORE + POSITIVE_WEIGHT * positive as i32
        - NEGATIVE_WEIGHT * negative as i32
        + ACTION_WEIGHT * action as i32;

    if IDEAL_LENGTH.contains(&length) {
        score += LENGTH_BONUS;
    }
    for flag in &flags {
        score -= match flag {
            ResponseFlag::NegativeLanguage => NEGATIVE_LANGUAGE_PENALTY,
            ResponseFlag::TooShort => TOO_SHORT_PENALTY,
            ResponseFlag::ClicheResponse => CLICHE_PENALTY,
            ResponseFlag::UnrelatedResponse => UNRELATED_PENALTY,
            ResponseFlag::NoResponse | ResponseFlag::TooLong => 0,
        };
    }
    let score = score.clamp(0, 100) as u32;

    debug!(word, score, ?flags, "scored response");

    ResponseAnalysis {
        word: word.to_string(),
        response: response.to_string(),
        score,
        flags,
        indicators: Indicators {
            positive,
            negative,
            action,
            length: length as u32,
        },
    }
}

/// True when `response` mentions one of the terms associated with `word`.
/// Words without an association entry are never conceptually related.
fn is_conceptually_related(word: &str, response: &str) -> bool {
    related_terms(word)
        .map(|terms| terms.iter().any(|t| response.contains(t)))
        .unwrap_or(false)
}
