// censora-core/src/report.rs
//! Result records and match reporting for censoring operations.
//!
//! Whole-text operations return a [`CensoredText`]; single-word operations
//! return the simpler [`CensoredWord`]. Both are produced fresh per call and
//! immutable once returned. [`ProfanityMatch`] records carry the detail a
//! moderation pipeline needs (spans, hashes) without forcing consumers to
//! re-scan the text.
//!
//! Matched profane words are sensitive for logging purposes: debug output
//! goes through a redaction gate so logs do not reproduce profanity unless
//! the operator explicitly opts in.

use chrono::Utc;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::normalize::normalize;

/// A static boolean that is initialized once to determine if matched words
/// are allowed in debug logs.
static MATCH_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("CENSORA_ALLOW_DEBUG_MATCHES")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// The outcome of censoring a whole text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensoredText {
    /// The input text, byte-identical to what the caller supplied.
    pub original: String,
    /// The censored text. Non-matched content is byte-identical to the input.
    pub censored: String,
    /// Whether at least one profane token was found.
    pub is_profane: bool,
    /// Number of profane tokens censored.
    pub words_censored: usize,
}

impl fmt::Display for CensoredText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.censored)
    }
}

/// The outcome of a single-word censoring operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensoredWord {
    pub original: String,
    pub censored: String,
}

impl fmt::Display for CensoredWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.censored)
    }
}

/// A single profane token found in a text, with its byte span in the
/// original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfanityMatch {
    /// The stripped original token (boundary punctuation removed, case kept).
    pub original_word: String,
    /// The replacement this token censors to.
    pub censored_word: String,
    /// Byte offset of the stripped token in the original text.
    pub start: usize,
    /// Byte offset one past the end of the stripped token.
    pub end: usize,
    #[serde(default)]
    pub sample_hash: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ProfanityMatch {
    pub fn new(original_word: &str, censored_word: String, start: usize, end: usize) -> Self {
        Self {
            original_word: original_word.to_string(),
            censored_word,
            start,
            end,
            sample_hash: None,
            timestamp: Some(Utc::now().to_rfc3339()),
        }
    }
}

/// A per-word rollup of the matches found in one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummaryItem {
    /// Normalized form shared by the grouped matches.
    pub word: String,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
    pub censored_texts: Vec<String>,
}

/// Replaces a matched word with a placeholder safe for logs and reports.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[MATCH]".to_string()
    } else {
        format!("[MATCH: {} chars]", s.len())
    }
}

fn get_loggable_content(matched_word: &str) -> String {
    if *MATCH_DEBUG_ALLOWED {
        matched_word.to_string()
    } else {
        redact_sensitive(matched_word)
    }
}

pub(crate) fn log_censor_action_debug(matched_word: &str, replacement: &str, start: usize, end: usize) {
    debug!(
        "Censored token {} -> '{}' at bytes {}..{}",
        get_loggable_content(matched_word),
        replacement,
        start,
        end
    );
}

/// Stable hash of a matched word, keyed by its normalized form so that
/// casing, punctuation, and leetspeak variants of the same word collapse to
/// one value.
pub fn canonical_sample_hash(word: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize(word).as_bytes());
    hex::encode(hasher.finalize())
}

/// Fills in `sample_hash` for any match that does not have one yet.
pub fn ensure_sample_hashes(matches: &mut [ProfanityMatch]) {
    for m in matches.iter_mut() {
        if m.sample_hash.is_none() {
            m.sample_hash = Some(canonical_sample_hash(&m.original_word));
        }
    }
}

/// Groups matches by normalized word, preserving first-seen order.
pub fn summarize_matches(matches: &[ProfanityMatch]) -> Vec<MatchSummaryItem> {
    let mut summary: Vec<MatchSummaryItem> = Vec::new();
    for m in matches {
        let normalized = normalize(&m.original_word);
        match summary.iter_mut().find(|item| item.word == normalized) {
            Some(item) => {
                item.occurrences += 1;
                item.original_texts.push(m.original_word.clone());
                item.censored_texts.push(m.censored_word.clone());
            }
            None => summary.push(MatchSummaryItem {
                word: normalized,
                occurrences: 1,
                original_texts: vec![m.original_word.clone()],
                censored_texts: vec![m.censored_word.clone()],
            }),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[MATCH]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[MATCH: 9 chars]".to_string());
    }

    #[test]
    fn test_canonical_sample_hash_consistency() {
        let h1 = canonical_sample_hash("FUCK!");
        let h2 = canonical_sample_hash("fuck");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_ensure_sample_hashes_fills_missing() {
        let mut matches = vec![ProfanityMatch::new("fuck", "####".to_string(), 0, 4)];
        assert!(matches[0].sample_hash.is_none());
        ensure_sample_hashes(&mut matches);
        assert!(matches[0].sample_hash.is_some());
    }

    #[test]
    fn test_summarize_groups_variants() {
        let matches = vec![
            ProfanityMatch::new("FUCK", "####".to_string(), 0, 4),
            ProfanityMatch::new("f*ck", "####".to_string(), 10, 14),
            ProfanityMatch::new("fuck", "####".to_string(), 20, 24),
        ];
        let summary = summarize_matches(&matches);
        // "f*ck" normalizes differently from "fuck", so two groups.
        assert_eq!(summary.len(), 2);
        let fuck = summary.iter().find(|s| s.word == "fuck").unwrap();
        assert_eq!(fuck.occurrences, 2);
        assert_eq!(fuck.original_texts, vec!["FUCK", "fuck"]);
    }

    #[test]
    fn test_censored_text_displays_censored_form() {
        let result = CensoredText {
            original: "a fuck b".to_string(),
            censored: "a #### b".to_string(),
            is_profane: true,
            words_censored: 1,
        };
        assert_eq!(result.to_string(), "a #### b");
    }

    #[test]
    fn test_records_serialize_round_trip() {
        let word = CensoredWord {
            original: "fuck".to_string(),
            censored: "f##k".to_string(),
        };
        let json = serde_json::to_string(&word).unwrap();
        let back: CensoredWord = serde_json::from_str(&json).unwrap();
        assert_eq!(word, back);
    }
}
