// censora-core/src/patterns.rs
//! Pattern storage and language registry for the profanity filter.
//!
//! A [`PatternSet`] holds the profanity patterns and exclude patterns for a
//! single language. The [`LanguageRegistry`] maps language keys to their
//! pattern sets, tracks which languages are active by default, and produces
//! the combined per-call pattern view the matcher runs against.
//!
//! The registry grows monotonically: languages are never unloaded within a
//! session, loading an already-present language is a no-op, and custom
//! pattern additions merge by union rather than overwrite.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use log::debug;
use std::collections::{HashMap, HashSet};

use crate::errors::CensoraError;
use crate::sources::PatternSource;

/// The special language key that expands to every language the pattern
/// source can enumerate.
pub const ALL_LANGUAGES: &str = "all";

/// The language key used for ad-hoc custom patterns when the caller does not
/// name one.
pub const CUSTOM_LANGUAGE: &str = "custom";

/// Profanity patterns and exclude patterns for one language.
///
/// The two sets are maintained independently; a pattern string may appear in
/// both, in which case exclusion wins per word at match time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    /// Substrings whose containment in a normalized word flags it as profane.
    pub patterns: HashSet<String>,
    /// Substrings whose containment overrides any profanity match.
    pub exclude_patterns: HashSet<String>,
}

impl PatternSet {
    pub fn new(patterns: HashSet<String>, exclude_patterns: HashSet<String>) -> Self {
        Self { patterns, exclude_patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.exclude_patterns.is_empty()
    }

    /// Unions another set's patterns into this one. Never removes entries.
    pub fn merge(&mut self, other: &PatternSet) {
        self.patterns.extend(other.patterns.iter().cloned());
        self.exclude_patterns.extend(other.exclude_patterns.iter().cloned());
    }

    /// Unions iterators of pattern strings into this set, discarding empty
    /// strings. An empty pattern is a substring of every word and would flag
    /// the entire input.
    pub fn extend_filtered<P, E>(&mut self, patterns: P, exclude_patterns: E)
    where
        P: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        self.patterns.extend(patterns.into_iter().filter(|p| !p.is_empty()));
        self.exclude_patterns.extend(exclude_patterns.into_iter().filter(|p| !p.is_empty()));
    }
}

/// Maps language keys to their pattern sets and tracks default active
/// languages.
///
/// Mutation (loading languages, adding custom patterns) is not internally
/// synchronized; a filter shared across threads must be synchronized by the
/// host application.
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    sets: HashMap<String, PatternSet>,
    active: HashSet<String>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The languages currently active by default.
    pub fn active_languages(&self) -> &HashSet<String> {
        &self.active
    }

    /// Returns the pattern set for a loaded language, if present.
    pub fn pattern_set(&self, language: &str) -> Option<&PatternSet> {
        self.sets.get(language)
    }

    /// Loads every requested language from the source.
    ///
    /// The special key `"all"` expands to every language the source can
    /// enumerate. Languages already present are not fetched again. Unless
    /// `mark_additional` is set, each loaded language is registered as a
    /// default active language; additional languages are loaded for the
    /// current call only and do not become defaults.
    pub fn load(
        &mut self,
        source: &dyn PatternSource,
        languages: &HashSet<String>,
        mark_additional: bool,
    ) -> Result<()> {
        let languages_for_loading: HashSet<String> = if languages.contains(ALL_LANGUAGES) {
            source.available_languages()?
        } else {
            languages.clone()
        };

        for language in &languages_for_loading {
            self.load_one(source, language, mark_additional)?;
        }
        Ok(())
    }

    fn load_one(
        &mut self,
        source: &dyn PatternSource,
        language: &str,
        mark_additional: bool,
    ) -> Result<()> {
        if !self.sets.contains_key(language) {
            let set = source.load_patterns(language).map_err(|e| match e {
                CensoraError::LanguageNotFound(lang) => CensoraError::PatternsNotFound(lang),
                other => other,
            })?;
            debug!(
                "Loaded language '{}': {} patterns, {} exclude patterns.",
                language,
                set.patterns.len(),
                set.exclude_patterns.len()
            );
            self.sets.insert(language.to_string(), set);
        }

        if !mark_additional {
            self.active.insert(language.to_string());
        }
        Ok(())
    }

    /// Merges custom patterns into the named language, creating it if absent,
    /// and registers the language as a default active language.
    ///
    /// Repeated calls are cumulative: existing patterns are never overwritten
    /// or removed.
    pub fn add_custom<P, E>(&mut self, language: &str, patterns: P, exclude_patterns: E)
    where
        P: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        let set = self.sets.entry(language.to_string()).or_default();
        set.extend_filtered(patterns, exclude_patterns);
        debug!(
            "Custom language '{}' now has {} patterns, {} exclude patterns.",
            language,
            set.patterns.len(),
            set.exclude_patterns.len()
        );
        self.active.insert(language.to_string());
    }

    /// Resolves the set of languages a call should match against.
    ///
    /// With no arguments this is the current defaults. Requested `languages`
    /// are loaded first; if `"all"` was requested the result is every default
    /// language after loading, otherwise the requested keys unioned with the
    /// current defaults. `additional_languages` are loaded without becoming
    /// defaults and are unioned into the result for this call only.
    pub fn resolve_active(
        &mut self,
        source: &dyn PatternSource,
        languages: Option<&HashSet<String>>,
        additional_languages: Option<&HashSet<String>>,
    ) -> Result<HashSet<String>> {
        let mut resolved = self.active.clone();

        if let Some(languages) = languages {
            self.load(source, languages, false)?;
            if languages.contains(ALL_LANGUAGES) {
                resolved = self.active.clone();
            } else {
                resolved.extend(languages.iter().cloned());
            }
        }

        if let Some(additional) = additional_languages {
            self.load(source, additional, true)?;
            resolved.extend(additional.iter().cloned());
        }

        Ok(resolved)
    }

    /// Produces the combined pattern view for a call: the union of pattern
    /// and exclude sets across the given languages plus the call-scoped
    /// custom patterns.
    ///
    /// Recomputed per call because custom patterns are call-scoped. Fails
    /// with [`CensoraError::NoLanguagesSpecified`] when there is nothing to
    /// match against at all.
    pub fn combined(
        &self,
        languages: &HashSet<String>,
        custom_patterns: &HashSet<String>,
        custom_exclude_patterns: &HashSet<String>,
    ) -> Result<PatternSet> {
        if languages.is_empty() && custom_patterns.is_empty() && custom_exclude_patterns.is_empty() {
            return Err(CensoraError::NoLanguagesSpecified.into());
        }

        let mut combined = PatternSet::default();
        for language in languages {
            if let Some(set) = self.sets.get(language) {
                combined.merge(set);
            }
        }
        combined.extend_filtered(
            custom_patterns.iter().cloned(),
            custom_exclude_patterns.iter().cloned(),
        );
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MemorySource;

    fn set_of(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn test_source() -> MemorySource {
        let mut source = MemorySource::new();
        source.insert("en", set_of(&["fuck"]), set_of(&[]));
        source.insert("de", set_of(&["fick"]), set_of(&[]));
        source
    }

    #[test]
    fn test_load_registers_defaults() -> Result<()> {
        let source = test_source();
        let mut registry = LanguageRegistry::new();
        registry.load(&source, &set_of(&["en"]), false)?;
        assert!(registry.active_languages().contains("en"));
        assert!(registry.pattern_set("en").is_some());
        Ok(())
    }

    #[test]
    fn test_load_additional_is_not_default() -> Result<()> {
        let source = test_source();
        let mut registry = LanguageRegistry::new();
        registry.load(&source, &set_of(&["de"]), true)?;
        assert!(!registry.active_languages().contains("de"));
        assert!(registry.pattern_set("de").is_some());

        // A later non-additional load of the same language only has to
        // activate it, not refetch it.
        registry.load(&source, &set_of(&["de"]), false)?;
        assert!(registry.active_languages().contains("de"));
        Ok(())
    }

    #[test]
    fn test_load_all_expands_enumeration() -> Result<()> {
        let source = test_source();
        let mut registry = LanguageRegistry::new();
        registry.load(&source, &set_of(&[ALL_LANGUAGES]), false)?;
        assert!(registry.active_languages().contains("en"));
        assert!(registry.active_languages().contains("de"));
        Ok(())
    }

    #[test]
    fn test_load_unknown_language_fails() {
        let source = test_source();
        let mut registry = LanguageRegistry::new();
        let err = registry.load(&source, &set_of(&["xx"]), false).unwrap_err();
        match err.downcast_ref::<CensoraError>() {
            Some(CensoraError::PatternsNotFound(lang)) => assert_eq!(lang, "xx"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_add_custom_is_cumulative() {
        let mut registry = LanguageRegistry::new();
        registry.add_custom("custom_lang", set_of(&["foobar"]), set_of(&["notfoobar"]));
        registry.add_custom("custom_lang", set_of(&["bazqux"]), set_of(&[]));

        let set = registry.pattern_set("custom_lang").unwrap();
        assert!(set.patterns.contains("foobar"));
        assert!(set.patterns.contains("bazqux"));
        assert!(set.exclude_patterns.contains("notfoobar"));
        assert!(registry.active_languages().contains("custom_lang"));
    }

    #[test]
    fn test_add_custom_discards_empty_patterns() {
        let mut registry = LanguageRegistry::new();
        registry.add_custom("custom", set_of(&["", "real"]), set_of(&[""]));
        let set = registry.pattern_set("custom").unwrap();
        assert_eq!(set.patterns, set_of(&["real"]));
        assert!(set.exclude_patterns.is_empty());
    }

    #[test]
    fn test_resolve_active_unions_requested_with_defaults() -> Result<()> {
        let source = test_source();
        let mut registry = LanguageRegistry::new();
        registry.load(&source, &set_of(&["en"]), false)?;

        let resolved = registry.resolve_active(&source, Some(&set_of(&["de"])), None)?;
        assert!(resolved.contains("en"));
        assert!(resolved.contains("de"));
        Ok(())
    }

    #[test]
    fn test_resolve_additional_scoped_to_call() -> Result<()> {
        let source = test_source();
        let mut registry = LanguageRegistry::new();
        registry.load(&source, &set_of(&["en"]), false)?;

        let resolved = registry.resolve_active(&source, None, Some(&set_of(&["de"])))?;
        assert!(resolved.contains("de"));
        // The additional language never became a default.
        assert!(!registry.active_languages().contains("de"));
        Ok(())
    }

    #[test]
    fn test_combined_unions_languages_and_customs() -> Result<()> {
        let source = test_source();
        let mut registry = LanguageRegistry::new();
        registry.load(&source, &set_of(&["en", "de"]), false)?;

        let combined = registry.combined(
            &set_of(&["en", "de"]),
            &set_of(&["custom"]),
            &set_of(&["customexclude"]),
        )?;
        assert!(combined.patterns.contains("fuck"));
        assert!(combined.patterns.contains("fick"));
        assert!(combined.patterns.contains("custom"));
        assert!(combined.exclude_patterns.contains("customexclude"));
        Ok(())
    }

    #[test]
    fn test_combined_with_nothing_to_match_fails() {
        let registry = LanguageRegistry::new();
        let err = registry
            .combined(&HashSet::new(), &HashSet::new(), &HashSet::new())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CensoraError>(),
            Some(CensoraError::NoLanguagesSpecified)
        ));
    }
}
