// censora-core/src/sources/embedded.rs
//! The default [`PatternSource`], backed by pattern lists compiled into the
//! library.
//!
//! The lists under `data/` are embedded with `include_str!` so the crate
//! works without any runtime data files. Each bundled language ships a
//! profanity list and an exclude list in the canonical whitespace-separated
//! format.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::collections::HashSet;

use crate::errors::CensoraError;
use crate::patterns::PatternSet;
use crate::sources::{parse_pattern_list, PatternSource};

/// Bundled languages: (key, profanity list, exclude list).
const BUNDLED_LANGUAGES: &[(&str, &str, &str)] = &[
    (
        "en",
        include_str!("../../data/patterns/en.txt"),
        include_str!("../../data/exclude_patterns/en.txt"),
    ),
    (
        "de",
        include_str!("../../data/patterns/de.txt"),
        include_str!("../../data/exclude_patterns/de.txt"),
    ),
    (
        "es",
        include_str!("../../data/patterns/es.txt"),
        include_str!("../../data/exclude_patterns/es.txt"),
    ),
    (
        "fr",
        include_str!("../../data/patterns/fr.txt"),
        include_str!("../../data/exclude_patterns/fr.txt"),
    ),
    (
        "ru",
        include_str!("../../data/patterns/ru.txt"),
        include_str!("../../data/exclude_patterns/ru.txt"),
    ),
    (
        "uk",
        include_str!("../../data/patterns/uk.txt"),
        include_str!("../../data/exclude_patterns/uk.txt"),
    ),
];

/// Pattern source serving the lists bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

impl PatternSource for EmbeddedSource {
    fn available_languages(&self) -> Result<HashSet<String>, CensoraError> {
        Ok(BUNDLED_LANGUAGES.iter().map(|(lang, _, _)| lang.to_string()).collect())
    }

    fn load_patterns(&self, language: &str) -> Result<PatternSet, CensoraError> {
        let (_, patterns_raw, excludes_raw) = BUNDLED_LANGUAGES
            .iter()
            .find(|(lang, _, _)| *lang == language)
            .ok_or_else(|| CensoraError::LanguageNotFound(language.to_string()))?;

        let set = PatternSet::new(parse_pattern_list(patterns_raw), parse_pattern_list(excludes_raw));
        debug!(
            "Embedded language '{}': {} patterns, {} exclude patterns.",
            language,
            set.patterns.len(),
            set.exclude_patterns.len()
        );
        Ok(set)
    }
}
