// censora-core/src/lib.rs
//! # Censora Core Library
//!
//! `censora-core` provides the fundamental, platform-independent logic for
//! multilingual profanity detection and censoring. It defines the per-language
//! pattern model, the normalization and matching rules, and a censoring engine
//! that rewrites profane tokens while leaving every other byte of the input
//! untouched.
//!
//! The library is designed to be pure and stateless beyond its language
//! registry, focusing solely on the transformation of input text based on
//! loaded pattern sets, without concerns for I/O or application-specific
//! state management: all pattern data arrives through the [`PatternSource`]
//! collaborator trait.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterConfig` for construction-time configuration.
//! * `normalize`: Boundary-punctuation stripping, leetspeak substitution, case folding.
//! * `patterns`: Per-language `PatternSet`s and the `LanguageRegistry`.
//! * `matcher`: The per-word profanity verdict (containment, exclusion precedence).
//! * `engine`: The `ProfanityFilter` censoring engine and `CensorOptions`.
//! * `report`: Result records, match records, summaries, and safe logging.
//! * `sources`: The `PatternSource` trait and bundled implementations.
//! * `oneshot`: Convenience wrappers for one-off, non-interactive use.
//!
//! ## Matching model
//!
//! Words are whitespace-delimited tokens. Each token is stripped of boundary
//! punctuation, leetspeak-substituted, and lowercased; the result is matched
//! by substring containment against the combined profanity patterns of the
//! active languages. Exclude patterns whitelist words that happen to contain
//! a flagged substring, and exclusion always wins over inclusion.
//!
//! ## Usage Example
//!
//! ```rust
//! use censora_core::{CensorOptions, FilterConfig, ProfanityFilter};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Build a filter over the bundled English pattern list.
//!     let config = FilterConfig {
//!         languages: ["en".to_string()].into_iter().collect(),
//!         ..FilterConfig::default()
//!     };
//!     let mut filter = ProfanityFilter::from_config(config)?;
//!
//!     // 2. Censor a text. Only the profane token is rewritten.
//!     let result = filter.censor("This is a fucking bad text.", &CensorOptions::default())?;
//!     assert_eq!(result.censored, "This is a ####### bad text.");
//!     assert_eq!(result.words_censored, 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations and defines
//! specific error types like `CensoraError::PatternsNotFound` for clearer
//! error reporting. Errors surface synchronously from the call that
//! triggered them; a language's patterns either load fully or the call fails.
//!
//! ## Design Principles
//!
//! * **Pluggable data:** The `PatternSource` trait decouples matching from
//!   wherever pattern lists live (bundled, in-memory, host-supplied).
//! * **Exact output:** Censoring rewrites only the stripped core of profane
//!   tokens; all other bytes are identical to the input.
//! * **Testable:** Logic is easily unit-testable in isolation.
//! * **No internal locking:** Concurrent use of one filter across threads
//!   must be synchronized by the host application.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod config;
pub mod engine;
pub mod errors;
pub mod matcher;
pub mod normalize;
pub mod oneshot;
pub mod patterns;
pub mod report;
pub mod sources;

/// Re-exports the public configuration types and functions.
pub use config::{merge_configs, FilterConfig, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CensoraError;

/// Re-exports the censoring engine and its per-call options.
pub use engine::{censor_word, CensorOptions, ProfanityFilter, DEFAULT_CENSOR_CHAR};

/// Re-exports the word-level classification primitive.
pub use matcher::is_profane_word;

/// Re-exports normalization primitives and their fixed tables.
pub use normalize::{normalize, strip_word, STRIP_CHARS, SUBSTITUTION_TABLE};

/// Re-exports the pattern model.
pub use patterns::{LanguageRegistry, PatternSet, ALL_LANGUAGES, CUSTOM_LANGUAGE};

/// Re-exports result and match-reporting types.
pub use report::{
    canonical_sample_hash, ensure_sample_hashes, redact_sensitive, summarize_matches,
    CensoredText, CensoredWord, MatchSummaryItem, ProfanityMatch,
};

/// Re-exports the pattern-source trait and bundled implementations.
pub use sources::{parse_pattern_list, EmbeddedSource, MemorySource, PatternSource};

/// Re-exports functions for one-shot, non-interactive use.
pub use oneshot::{censor_string, contains_profanity_string};
