// censora-core/src/sources/memory.rs
//! An in-process [`PatternSource`] backed by a plain map.
//!
//! Intended for host applications that manage their own pattern lists, and
//! for tests that need full control over the available languages.
//!
//! License: MIT OR Apache-2.0

use std::collections::{HashMap, HashSet};

use crate::errors::CensoraError;
use crate::patterns::PatternSet;
use crate::sources::PatternSource;

/// A pattern source whose languages are supplied programmatically.
#[derive(Debug, Default)]
pub struct MemorySource {
    languages: HashMap<String, PatternSet>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs (or replaces) the pattern data for a language.
    pub fn insert(
        &mut self,
        language: &str,
        patterns: HashSet<String>,
        exclude_patterns: HashSet<String>,
    ) -> &mut Self {
        self.languages
            .insert(language.to_string(), PatternSet::new(patterns, exclude_patterns));
        self
    }
}

impl PatternSource for MemorySource {
    fn available_languages(&self) -> Result<HashSet<String>, CensoraError> {
        Ok(self.languages.keys().cloned().collect())
    }

    fn load_patterns(&self, language: &str) -> Result<PatternSet, CensoraError> {
        self.languages
            .get(language)
            .cloned()
            .ok_or_else(|| CensoraError::LanguageNotFound(language.to_string()))
    }
}
