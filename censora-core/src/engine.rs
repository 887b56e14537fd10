// censora-core/src/engine.rs
//! The censoring engine: per-token classification and occurrence-safe
//! replacement.
//!
//! [`ProfanityFilter`] orchestrates a pass over a text: resolve the active
//! languages, build the combined pattern view, split the text into
//! whitespace-delimited tokens, classify each token's normalized form, and
//! rewrite the stripped core of every profane token inside the output buffer
//! while leaving all other bytes identical to the input.
//!
//! Replacement tracks an explicit cursor through the buffer rather than
//! substituting string-wide: each token's stripped core is located at or
//! after the cursor, so a clean word that happens to contain the same
//! substring elsewhere in the text is never touched.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use std::collections::HashSet;

use crate::config::FilterConfig;
use crate::matcher::is_profane_word;
use crate::normalize::strip_word;
use crate::patterns::{LanguageRegistry, PatternSet, CUSTOM_LANGUAGE};
use crate::report::{
    ensure_sample_hashes, log_censor_action_debug, CensoredText, CensoredWord, ProfanityMatch,
};
use crate::sources::{EmbeddedSource, PatternSource};

/// The default masking character.
pub const DEFAULT_CENSOR_CHAR: char = '#';

/// Per-call knobs for a censoring or detection pass.
///
/// `languages` replaces-and-extends the default active languages for the
/// call (and any newly named language becomes a default, matching registry
/// semantics); `additional_languages` are loaded for this call only. The
/// custom pattern sets are call-scoped and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensorOptions {
    pub languages: Option<HashSet<String>>,
    pub additional_languages: Option<HashSet<String>>,
    pub custom_patterns: HashSet<String>,
    pub custom_exclude_patterns: HashSet<String>,
    pub partial_censor: bool,
    pub censoring_char: char,
}

impl Default for CensorOptions {
    fn default() -> Self {
        Self {
            languages: None,
            additional_languages: None,
            custom_patterns: HashSet::new(),
            custom_exclude_patterns: HashSet::new(),
            partial_censor: false,
            censoring_char: DEFAULT_CENSOR_CHAR,
        }
    }
}

impl CensorOptions {
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_additional_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_custom_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_custom_exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn partial(mut self, partial_censor: bool) -> Self {
        self.partial_censor = partial_censor;
        self
    }

    pub fn censoring_char(mut self, censoring_char: char) -> Self {
        self.censoring_char = censoring_char;
        self
    }
}

fn mask_word(word: &str, partial_censor: bool, censoring_char: char) -> String {
    let length = word.chars().count();

    if partial_censor && length > 2 {
        let mut chars = word.chars();
        let first = chars.next().unwrap();
        let last = chars.next_back().unwrap();
        let mut masked = String::with_capacity(word.len());
        masked.push(first);
        masked.extend(std::iter::repeat(censoring_char).take(length - 2));
        masked.push(last);
        masked
    } else {
        censoring_char.to_string().repeat(length)
    }
}

/// Censors a single, already-stripped word.
///
/// Full mode masks every character; partial mode keeps the first and last
/// characters when the word is longer than two characters, falling back to
/// a full mask otherwise. The mask has one censoring character per character
/// of the input, so the censored form has the same visible length.
pub fn censor_word(word: &str, partial_censor: bool, censoring_char: char) -> CensoredWord {
    CensoredWord {
        original: word.to_string(),
        censored: mask_word(word, partial_censor, censoring_char),
    }
}

/// A multilingual profanity filter.
///
/// Holds the language registry and the pattern-source collaborator. Methods
/// that can load languages take `&mut self`; the filter performs no internal
/// locking, so cross-thread sharing must be synchronized by the host
/// application.
pub struct ProfanityFilter {
    source: Box<dyn PatternSource>,
    registry: LanguageRegistry,
}

impl ProfanityFilter {
    /// Builds a filter over the bundled pattern lists with every bundled
    /// language active.
    pub fn new() -> Result<Self> {
        Self::from_config(FilterConfig::default())
    }

    /// Builds a filter over the bundled pattern lists from a configuration.
    pub fn from_config(config: FilterConfig) -> Result<Self> {
        Self::with_source(config, Box::new(EmbeddedSource::new()))
    }

    /// Builds a filter over a caller-supplied pattern source.
    pub fn with_source(config: FilterConfig, source: Box<dyn PatternSource>) -> Result<Self> {
        let mut filter = Self {
            source,
            registry: LanguageRegistry::new(),
        };

        filter.registry.load(filter.source.as_ref(), &config.languages, false)?;

        if !config.custom_patterns.is_empty() || !config.custom_exclude_patterns.is_empty() {
            filter.add_custom_profanity_patterns(config.custom_patterns, config.custom_exclude_patterns);
        }

        Ok(filter)
    }

    /// The languages currently active by default.
    pub fn active_languages(&self) -> &HashSet<String> {
        self.registry.active_languages()
    }

    /// Merges custom patterns under the `"custom"` language key and
    /// activates it. Cumulative across calls.
    pub fn add_custom_profanity_patterns<P, E>(&mut self, patterns: P, exclude_patterns: E)
    where
        P: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        self.add_custom_language(CUSTOM_LANGUAGE, patterns, exclude_patterns);
    }

    /// Merges custom patterns under a named language key and activates it.
    /// Cumulative across calls; existing patterns are never removed.
    pub fn add_custom_language<P, E>(&mut self, language: &str, patterns: P, exclude_patterns: E)
    where
        P: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        self.registry.add_custom(language, patterns, exclude_patterns);
    }

    fn combined_for(&mut self, options: &CensorOptions) -> Result<PatternSet> {
        let active = self.registry.resolve_active(
            self.source.as_ref(),
            options.languages.as_ref(),
            options.additional_languages.as_ref(),
        )?;
        self.registry.combined(
            &active,
            &options.custom_patterns,
            &options.custom_exclude_patterns,
        )
    }

    /// Returns whether the text contains at least one profane token,
    /// stopping at the first hit.
    pub fn contains_profanity(&mut self, text: &str, options: &CensorOptions) -> Result<bool> {
        let combined = self.combined_for(options)?;
        Ok(text.split_whitespace().any(|token| is_profane_word(token, &combined)))
    }

    /// Censors every profane token in the text.
    ///
    /// The whole text is processed as one token stream; newlines are plain
    /// whitespace. For each profane token only the stripped core is
    /// rewritten, so boundary punctuation and every non-matched byte of the
    /// input survive unchanged in the output.
    pub fn censor(&mut self, text: &str, options: &CensorOptions) -> Result<CensoredText> {
        let combined = self.combined_for(options)?;

        let mut censored = String::from(text);
        let mut cursor = 0usize;
        let mut words_censored = 0usize;

        for token in text.split_whitespace() {
            let stripped = strip_word(token);
            if stripped.is_empty() {
                continue;
            }

            // Locate this token's occurrence at or after the cursor. The
            // region between the cursor and the next token is boundary
            // punctuation and whitespace only, so the first hit is this
            // token's own core, never a substring of an earlier word.
            let Some(found) = censored[cursor..].find(stripped) else {
                continue;
            };
            let start = cursor + found;
            let end = start + stripped.len();

            if is_profane_word(token, &combined) {
                let replacement =
                    mask_word(stripped, options.partial_censor, options.censoring_char);
                log_censor_action_debug(stripped, &replacement, start, end);
                censored.replace_range(start..end, &replacement);
                cursor = start + replacement.len();
                words_censored += 1;
            } else {
                cursor = end;
            }
        }

        Ok(CensoredText {
            original: text.to_string(),
            censored,
            is_profane: words_censored > 0,
            words_censored,
        })
    }

    /// Finds every profane token without modifying the text.
    ///
    /// Returns one [`ProfanityMatch`] per profane token, ordered by byte
    /// offset, with sample hashes filled in.
    pub fn analyze(&mut self, text: &str, options: &CensorOptions) -> Result<Vec<ProfanityMatch>> {
        let combined = self.combined_for(options)?;

        let mut matches = Vec::new();
        let mut cursor = 0usize;

        for token in text.split_whitespace() {
            let stripped = strip_word(token);
            if stripped.is_empty() {
                continue;
            }
            let Some(found) = text[cursor..].find(stripped) else {
                continue;
            };
            let start = cursor + found;
            let end = start + stripped.len();
            cursor = end;

            if is_profane_word(token, &combined) {
                let replacement =
                    mask_word(stripped, options.partial_censor, options.censoring_char);
                matches.push(ProfanityMatch::new(stripped, replacement, start, end));
            }
        }

        ensure_sample_hashes(&mut matches);
        Ok(matches)
    }
}

impl std::fmt::Debug for ProfanityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ProfanityFilter")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_censor_word_full_preserves_length() {
        for word in ["fuck", "@ssh0l3", "a", "сука"] {
            let censored = censor_word(word, false, '#');
            assert_eq!(censored.censored.chars().count(), word.chars().count());
        }
    }

    #[test]
    fn test_censor_word_full_mask() {
        assert_eq!(censor_word("@ssh0l3", false, '#').censored, "#######");
    }

    #[test]
    fn test_censor_word_partial_keeps_endpoints() {
        let censored = censor_word("fuck", true, '#');
        assert_eq!(censored.censored, "f##k");
        assert_eq!(censored.original, "fuck");
    }

    #[test]
    fn test_censor_word_partial_short_words_fall_back_to_full() {
        assert_eq!(censor_word("no", true, '#').censored, "##");
        assert_eq!(censor_word("x", true, '#').censored, "#");
    }

    #[test]
    fn test_censor_word_partial_multibyte() {
        let censored = censor_word("сука", true, '*');
        assert_eq!(censored.censored, "с**а");
    }

    #[test]
    fn test_censor_word_custom_char() {
        assert_eq!(censor_word("fuck", false, '*').censored, "****");
    }
}
