// censora-core/src/matcher.rs
//! The per-word profanity verdict.
//!
//! A word is profane iff its normalized form contains at least one profanity
//! pattern and no exclude pattern. Matching is substring containment, not
//! whole-word equality: a short profanity root flags longer derived words,
//! and exclude patterns whitelist specific longer words that happen to
//! contain a flagged substring.
//!
//! License: MIT OR Apache-2.0

use crate::normalize::normalize;
use crate::patterns::PatternSet;

/// Classifies a raw or stripped word against a combined pattern view.
///
/// The word is normalized internally, so callers pass tokens straight from
/// the text. Exclusion takes semantic precedence over inclusion: if any
/// exclude pattern is contained in the normalized word the verdict is clean,
/// regardless of profanity patterns. Empty sets match nothing.
pub fn is_profane_word(word: &str, pattern_set: &PatternSet) -> bool {
    let normalized = normalize(word);

    if pattern_set
        .exclude_patterns
        .iter()
        .any(|pattern| normalized.contains(pattern.as_str()))
    {
        return false;
    }

    pattern_set
        .patterns
        .iter()
        .any(|pattern| normalized.contains(pattern.as_str()))
}
