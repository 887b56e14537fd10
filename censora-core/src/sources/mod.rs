// censora-core/src/sources/mod.rs
//! Pattern data providers for the profanity filter.
//!
//! The core never touches the filesystem on its own: all pattern data comes
//! through the [`PatternSource`] trait, which decouples the matching and
//! censoring logic from wherever the lists actually live. This module
//! contains the trait plus the bundled implementations.
//!
//! To add a new source, create a new file (e.g., `embedded.rs`), define its
//! logic, and declare it here using `pub mod <source_name>;`.
//!
//! License: MIT OR Apache-2.0

pub mod embedded;
pub mod memory;

pub use embedded::EmbeddedSource;
pub use memory::MemorySource;

use std::collections::HashSet;

use crate::errors::CensoraError;
use crate::patterns::PatternSet;

/// A provider of per-language profanity pattern data.
///
/// Implementations must be cheap to query repeatedly: the registry caches
/// loaded languages, but `available_languages` is consulted every time the
/// `"all"` key is resolved.
pub trait PatternSource: Send + Sync {
    /// Lists every language key this source can load.
    fn available_languages(&self) -> Result<HashSet<String>, CensoraError>;

    /// Loads the pattern set for one language.
    ///
    /// Fails with [`CensoraError::LanguageNotFound`] when the source has no
    /// data for the key. There is no partial success: either both lists
    /// resolve or the call fails.
    fn load_patterns(&self, language: &str) -> Result<PatternSet, CensoraError>;
}

/// Parses a pattern list in the canonical data-file format: UTF-8 text with
/// one pattern per whitespace run. Empty entries cannot occur by
/// construction.
pub fn parse_pattern_list(content: &str) -> HashSet<String> {
    content.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_list_splits_on_any_whitespace() {
        let parsed = parse_pattern_list("foo bar\nbaz\t qux\n");
        assert_eq!(parsed.len(), 4);
        assert!(parsed.contains("foo"));
        assert!(parsed.contains("qux"));
    }

    #[test]
    fn test_parse_pattern_list_deduplicates() {
        let parsed = parse_pattern_list("foo foo foo");
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_pattern_list("").is_empty());
        assert!(parse_pattern_list("   \n\t ").is_empty());
    }
}
