//! Test Aggregator — folds per-word analyses into a whole-test summary.
//!
//! Runs the analyzer once per submitted response (input order preserved),
//! then derives completion, pacing, indicator totals, flag counts and
//! narrative feedback. Pure: the same submission always yields the same summary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::analyzer::{analyze_response, ResponseAnalysis, ResponseFlag};

/// Number of words in a full WAT sitting, regardless of how many were answered.
pub const TOTAL_WORDS: u32 = 60;
/// Ideal duration for a full sitting (15 seconds per word).
pub const IDEAL_TIME_SECONDS: f64 = 900.0;

const NO_RESPONSES_FEEDBACK: &str =
    "No responses were submitted. Attempt the test to receive feedback on your thought patterns.";
const CLOSING_NOTE: &str = "Remember that the WAT reflects your subconscious thought patterns, so regular practice helps you respond spontaneously and positively.";

/// One candidate reaction to one stimulus word, as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    #[serde(rename = "word")]
    pub stimulus: String,
    /// Missing text is treated as no response.
    #[serde(rename = "response", default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
}

impl ResponseRecord {
    pub fn new(stimulus: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            stimulus: stimulus.into(),
            text: text.into(),
            elapsed_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patterns {
    pub positive_indicators: u32,
    pub negative_indicators: u32,
    pub action_words: u32,
    /// Number of responses carrying each flag.
    pub flags: BTreeMap<ResponseFlag, u32>,
}

impl Patterns {
    fn flag_count(&self, flag: ResponseFlag) -> u32 {
        self.flags.get(&flag).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAnalysis {
    pub overall_score: u32,
    pub completion_rate: u32, // may exceed 100 on over-long submissions
    pub total_responses: u32,
    pub total_words: u32,
    pub time_efficiency: u32,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub detailed_analysis: Vec<ResponseAnalysis>,
    pub patterns: Patterns,
}

impl TestAnalysis {
    fn empty() -> Self {
        Self {
            overall_score: 0,
            completion_rate: 0,
            total_responses: 0,
            total_words: TOTAL_WORDS,
            time_efficiency: 0,
            feedback: NO_RESPONSES_FEEDBACK.to_string(),
            strengths: vec![],
            areas_for_improvement: vec!["Complete the test with responses".to_string()],
            detailed_analysis: vec![],
            patterns: Patterns::default(),
        }
    }
}

/// Scores a complete test attempt.
pub fn analyze_test(responses: &[ResponseRecord], total_time_used: f64) -> TestAnalysis {
    if responses.is_empty() {
        return TestAnalysis::empty();
    }

    let detailed_analysis: Vec<ResponseAnalysis> = responses
        .iter()
        .map(|r| analyze_response(&r.stimulus, &r.text))
        .collect();

    let valid_scores: Vec<u32> = detailed_analysis
        .iter()
        .map(|a| a.score)
        .filter(|s| *s > 0)
        .collect();
    let overall_score = if valid_scores.is_empty() {
        0
    } else {
        let sum: u32 = valid_scores.iter().sum();
        (sum as f64 / valid_scores.len() as f64).round() as u32
    };

    let total_responses = responses.len();
    let completion_rate =
        ((total_responses as f64 / TOTAL_WORDS as f64) * 100.0).round() as u32;
    let time_efficiency = compute_time_efficiency(total_time_used);

    let patterns = collect_patterns(&detailed_analysis);
    let strengths = derive_strengths(&patterns, total_responses, completion_rate, time_efficiency);
    let areas_for_improvement = derive_improvements(&patterns, total_responses, completion_rate);
    let feedback = build_feedback(
        overall_score,
        completion_rate,
        &strengths,
        &areas_for_improvement,
    );

    debug!(
        total_responses,
        overall_score, completion_rate, time_efficiency, "aggregated test analysis"
    );

    TestAnalysis {
        overall_score,
        completion_rate,
        total_responses: total_responses as u32,
        total_words: TOTAL_WORDS,
        time_efficiency,
        feedback,
        strengths,
        areas_for_improvement,
        detailed_analysis,
        patterns,
    }
}

/// 100 at exactly the ideal duration, falling linearly to 0 at twice (or zero times) it.
fn compute_time_efficiency(total_time_used: f64) -> u32 {
    let deviation = (total_time_used - IDEAL_TIME_SECONDS).abs() / IDEAL_TIME_SECONDS * 100.0;
    (100.0 - deviation).max(0.0).round() as u32
}

fn collect_patterns(analyses: &[ResponseAnalysis]) -> Patterns {
    let mut patterns = Patterns::default();
    for analysis in analyses {
        patterns.positive_indicators += analysis.indicators.positive;
        patterns.negative_indicators += analysis.indicators.negative;
        patterns.action_words += analysis.indicators.action;
        for flag in &analysis.flags {
            *patterns.flags.entry(*flag).or_insert(0) += 1;
        }
    }
    patterns
}

fn derive_strengths(
    patterns: &Patterns,
    total_responses: usize,
    completion_rate: u32,
    time_efficiency: u32,
) -> Vec<String> {
    let n = total_responses as f64;
    let mut strengths = Vec::new();

    if completion_rate >= 90 {
        strengths.push(
            "Excellent completion rate - you attempted almost every word in the time available"
                .to_string(),
        );
    }
    if patterns.positive_indicators > patterns.negative_indicators * 2 {
        strengths.push(
            "Positive mindset - your responses reflect optimism and constructive thinking"
                .to_string(),
        );
    }
    if patterns.action_words as f64 > n * 0.3 {
        strengths.push("Action-oriented responses - you show initiative and drive".to_string());
    }
    if time_efficiency > 80 {
        strengths
            .push("Good time management - you paced the test close to the ideal".to_string());
    }

    strengths
}

fn derive_improvements(
    patterns: &Patterns,
    total_responses: usize,
    completion_rate: u32,
) -> Vec<String> {
    let n = total_responses as f64;
    let mut areas = Vec::new();

    if completion_rate < 70 {
        areas.push(
            "Work on speed - aim to write a response for every word within the time limit"
                .to_string(),
        );
    }
    if patterns.flag_count(ResponseFlag::NegativeLanguage) as f64 > n * 0.2 {
        areas.push(
            "Reduce negative language - frame your responses constructively".to_string(),
        );
    }
    if patterns.flag_count(ResponseFlag::TooShort) as f64 > n * 0.3 {
        areas.push(
            "Add more detail - expand very short responses into complete thoughts".to_string(),
        );
    }
    if patterns.flag_count(ResponseFlag::ClicheResponse) as f64 > n * 0.2 {
        areas.push(
            "Avoid cliched phrases - write spontaneous, personal responses".to_string(),
        );
    }
    if (patterns.action_words as f64) < n * 0.1 {
        areas.push(
            "Use more action words - show initiative and willingness to act".to_string(),
        );
    }

    areas
}

fn build_feedback(
    overall_score: u32,
    completion_rate: u32,
    strengths: &[String],
    areas: &[String],
) -> String {
    let mut feedback = if overall_score >= 80 && completion_rate >= 90 {
        "Excellent performance! Your responses show strong officer-like qualities and a positive outlook."
    } else if overall_score >= 65 && completion_rate >= 75 {
        "Good performance with some room for improvement."
    } else if overall_score >= 50 {
        "Average performance. Focus on more positive and action-oriented thinking."
    } else {
        "Below average performance. Response quality and completion both need significant work."
    }
    .to_string();

    if !strengths.is_empty() {
        feedback.push_str(&format!(" Your strengths: {}.", strengths.join("; ")));
    }
    if !areas.is_empty() {
        feedback.push_str(&format!(" Areas to work on: {}.", areas.join("; ")));
    }
    feedback.push(' ');
    feedback.push_str(CLOSING_NOTE);

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(&str, &str)]) -> Vec<ResponseRecord> {
        pairs
            .iter()
            .map(|(w, r)| ResponseRecord::new(*w, *r))
            .collect()
    }

    #[test]
    fn test_empty_submission() {
        let a = analyze_test(&[], 450.0);
        assert_eq!(a.overall_score, 0);
        assert_eq!(a.completion_rate, 0);
        assert_eq!(a.total_responses, 0);
        assert_eq!(a.total_words, TOTAL_WORDS);
        assert_eq!(a.time_efficiency, 0);
        assert_eq!(a.areas_for_improvement, vec!["Complete the test with responses"]);
        assert!(a.strengths.is_empty());
        assert!(a.detailed_analysis.is_empty());
        assert_eq!(a.patterns, Patterns::default());
        assert_eq!(a.feedback, NO_RESPONSES_FEEDBACK);
    }

    #[test]
    fn test_order_preserved() {
        let input = records(&[
            ("Leader", "Leader inspires others by example."),
            ("Rain", ""),
            ("Army", "The army defends the nation"),
        ]);
        let a = analyze_test(&input, 900.0);
        assert_eq!(a.detailed_analysis.len(), input.len());
        for (analysis, record) in a.detailed_analysis.iter().zip(&input) {
            assert_eq!(analysis.word, record.stimulus);
            assert_eq!(analysis.response, record.text);
        }
    }

    #[test]
    fn test_overall_score_ignores_zero_scores() {
        // 78 and 0 (empty) → mean over the single valid score
        let input = records(&[("Leader", "Leader inspires others by example."), ("Rain", "")]);
        let a = analyze_test(&input, 900.0);
        assert_eq!(a.overall_score, 78);
    }

    #[test]
    fn test_all_empty_responses() {
        let input: Vec<ResponseRecord> =
            (0..60).map(|i| ResponseRecord::new(format!("w{i}"), "")).collect();
        let a = analyze_test(&input, 900.0);
        assert_eq!(a.overall_score, 0);
        assert_eq!(a.completion_rate, 100);
        assert_eq!(a.patterns.flags.get(&ResponseFlag::NoResponse), Some(&60));
        assert!(!a
            .areas_for_improvement
            .iter()
            .any(|s| s.starts_with("Work on speed") || s.starts_with("Reduce negative")));
        assert!(a
            .areas_for_improvement
            .iter()
            .any(|s| s.starts_with("Use more action words")));
    }

    #[test]
    fn test_completion_rate_not_clamped() {
        let input: Vec<ResponseRecord> =
            (0..90).map(|i| ResponseRecord::new(format!("w{i}"), "")).collect();
        assert_eq!(analyze_test(&input, 900.0).completion_rate, 150);
    }

    #[test]
    fn test_completion_rate_rounds() {
        let input = records(&[("Sun", "sun"); 20]);
        // 20 / 60 = 33.33…
        assert_eq!(analyze_test(&input, 900.0).completion_rate, 33);
    }

    #[test]
    fn test_time_efficiency() {
        assert_eq!(compute_time_efficiency(900.0), 100);
        assert_eq!(compute_time_efficiency(450.0), 50);
        assert_eq!(compute_time_efficiency(1350.0), 50);
        assert_eq!(compute_time_efficiency(1800.0), 0);
        assert_eq!(compute_time_efficiency(5000.0), 0);
        assert_eq!(compute_time_efficiency(0.0), 0);
    }

    #[test]
    fn test_patterns_sum_indicators() {
        let input = records(&[
            ("Leader", "Leader inspires others by example."),
            ("Failure", "Failure is bad."),
            ("Team", "Team work and unity bring success"),
        ]);
        let a = analyze_test(&input, 600.0);
        let positive: u32 = a.detailed_analysis.iter().map(|d| d.indicators.positive).sum();
        let negative: u32 = a.detailed_analysis.iter().map(|d| d.indicators.negative).sum();
        let action: u32 = a.detailed_analysis.iter().map(|d| d.indicators.action).sum();
        assert_eq!(a.patterns.positive_indicators, positive);
        assert_eq!(a.patterns.negative_indicators, negative);
        assert_eq!(a.patterns.action_words, action);
    }

    #[test]
    fn test_flag_counts_are_per_response() {
        let input = records(&[
            ("Fear", "fear, hate and anger destroy"),
            ("Night", "never alone, never afraid"),
        ]);
        let a = analyze_test(&input, 900.0);
        assert_eq!(
            a.patterns.flags.get(&ResponseFlag::NegativeLanguage),
            Some(&2)
        );
    }

    #[test]
    fn test_strengths_for_strong_submission() {
        let input: Vec<ResponseRecord> = (0..60)
            .map(|_| ResponseRecord::new("Leader", "Leader inspires others by example."))
            .collect();
        let a = analyze_test(&input, 900.0);
        assert_eq!(a.strengths.len(), 4);
        assert!(a.areas_for_improvement.is_empty());
        assert!(a.feedback.starts_with("Good performance"));
        assert!(a.feedback.contains("Your strengths:"));
        assert!(!a.feedback.contains("Areas to work on:"));
        assert!(a.feedback.ends_with(CLOSING_NOTE));
    }

    #[test]
    fn test_improvements_for_weak_submission() {
        let input = records(&[("Tree", "no"), ("Moon", "bad"), ("Sky", "sad")]);
        let a = analyze_test(&input, 100.0);
        assert!(a.strengths.is_empty());
        assert_eq!(a.areas_for_improvement.len(), 4);
        assert!(a.feedback.starts_with("Below average"));
        assert!(!a.feedback.contains("Your strengths:"));
    }

    #[test]
    fn test_cliche_improvement() {
        let input = records(&[("Hard work", "Hard work is the key to success in life")]);
        let a = analyze_test(&input, 900.0);
        assert!(a
            .areas_for_improvement
            .iter()
            .any(|s| s.starts_with("Avoid cliched phrases")));
    }

    #[test]
    fn test_feedback_bands() {
        assert!(build_feedback(85, 95, &[], &[]).starts_with("Excellent"));
        assert!(build_feedback(85, 80, &[], &[]).starts_with("Good"));
        assert!(build_feedback(70, 50, &[], &[]).starts_with("Average"));
        assert!(build_feedback(49, 100, &[], &[]).starts_with("Below average"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let a = analyze_test(&records(&[("Sun", "sunrise brings hope")]), 900.0);
        let json = serde_json::to_value(&a).unwrap();
        for key in [
            "overallScore",
            "completionRate",
            "totalResponses",
            "totalWords",
            "timeEfficiency",
            "feedback",
            "strengths",
            "areasForImprovement",
            "detailedAnalysis",
            "patterns",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["patterns"].get("positiveIndicators").is_some());
    }

    #[test]
    fn test_record_missing_response_defaults_to_empty() {
        let r: ResponseRecord = serde_json::from_str(r#"{"word": "Sun"}"#).unwrap();
        assert_eq!(r.stimulus, "Sun");
        assert_eq!(r.text, "");
        assert!(r.elapsed_seconds.is_none());
    }
}
