//! errors.rs - Custom error types for the censora-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `censora-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CensoraError {
    /// The pattern source has no data for the requested language key.
    #[error("Language '{0}' is not available from the pattern source")]
    LanguageNotFound(String),

    /// Loading a language into the registry failed because its patterns
    /// could not be resolved.
    #[error("Profanity patterns for language '{0}' not found")]
    PatternsNotFound(String),

    /// A pattern combination was requested with zero resolved languages and
    /// no custom patterns. This is a caller error, not a data error.
    #[error("No languages resolved and no custom patterns supplied")]
    NoLanguagesSpecified,

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    // Add other specific error types as the project grows
    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
