//! normalize.rs - Word normalization for profanity matching.
//!
//! This module turns a raw whitespace-delimited token into the canonical
//! form that pattern matching operates on: boundary punctuation is stripped,
//! common leetspeak homoglyphs are substituted, and the result is lowercased.
//! Normalized forms are used solely for matching and never appear in output.
//!
//! Normalization is pure and idempotent, so results are memoized through a
//! global, capacity-bounded cache to speed up texts with repeated tokens.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;
use std::sync::RwLock;

/// Characters stripped from the beginning and end of a token before matching.
/// Interior occurrences are left untouched.
pub const STRIP_CHARS: &str = ".,!?:;/()[]{}-";

/// Leetspeak substitutions applied character-by-character after stripping.
/// The domain is disjoint, so application order does not matter.
pub const SUBSTITUTION_TABLE: [(char, char); 8] = [
    ('0', 'o'),
    ('1', 'i'),
    ('@', 'a'),
    ('$', 's'),
    ('3', 'e'),
    ('5', 's'),
    ('7', 't'),
    ('8', 'b'),
];

/// Upper bound on memoized normalizations. Once the cache is full, further
/// inputs are normalized without being inserted, so adversarial input cannot
/// grow memory without bound.
const NORMALIZE_CACHE_CAPACITY: usize = 8192;

lazy_static! {
    /// A thread-safe, global cache of input token -> normalized form.
    static ref NORMALIZE_CACHE: RwLock<HashMap<String, String>> = RwLock::new(HashMap::new());
}

/// Removes leading and trailing runs of [`STRIP_CHARS`] from a token.
///
/// Returns a subslice of the input; case and interior characters are
/// preserved exactly. The stripped form is what censoring replaces in the
/// original text.
pub fn strip_word(word: &str) -> &str {
    word.trim_matches(|c| STRIP_CHARS.contains(c))
}

fn substitute_char(c: char) -> char {
    match c {
        '0' => 'o',
        '1' => 'i',
        '@' => 'a',
        '$' => 's',
        '3' => 'e',
        '5' => 's',
        '7' => 't',
        '8' => 'b',
        other => other,
    }
}

fn normalize_uncached(word: &str) -> String {
    // Strip first so punctuation adjacent to letters cannot block
    // substitution, then substitute, then lowercase.
    strip_word(word)
        .chars()
        .map(substitute_char)
        .collect::<String>()
        .to_lowercase()
}

/// Normalizes a token for matching: strip boundary punctuation, substitute
/// leetspeak homoglyphs, lowercase.
///
/// Same input always yields the same output, and
/// `normalize(&normalize(x)) == normalize(x)` for all `x`.
pub fn normalize(word: &str) -> String {
    {
        let cache = NORMALIZE_CACHE.read().unwrap();
        if let Some(hit) = cache.get(word) {
            return hit.clone();
        }
    } // Read lock is released here.

    let normalized = normalize_uncached(word);

    let mut cache = NORMALIZE_CACHE.write().unwrap();
    if cache.len() < NORMALIZE_CACHE_CAPACITY {
        cache.insert(word.to_string(), normalized.clone());
    } else {
        debug!("Normalize cache full ({} entries); skipping insert.", cache.len());
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_boundary_punctuation() {
        assert_eq!(strip_word("?hello?"), "hello");
        assert_eq!(strip_word("...what!!"), "what");
        assert_eq!(strip_word("(word)"), "word");
        assert_eq!(strip_word("--dash--"), "dash");
    }

    #[test]
    fn test_strip_preserves_interior_punctuation() {
        assert_eq!(strip_word("well-known,"), "well-known");
        assert_eq!(strip_word("a.b.c"), "a.b.c");
    }

    #[test]
    fn test_strip_to_empty() {
        assert_eq!(strip_word("..."), "");
        assert_eq!(strip_word(""), "");
    }

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize("h3ll0!"), "hello");
        assert_eq!(normalize("@ssh0l3"), "asshole");
        assert_eq!(normalize("FUCK"), "fuck");
    }

    #[test]
    fn test_normalize_strips_before_substituting() {
        // The trailing '.' must not block substitution of the adjacent '3'.
        assert_eq!(normalize("cas3."), "case");
    }

    #[test]
    fn test_normalize_idempotent() {
        for word in ["h3ll0!", "?Sh1t?", "plain", "ПрИвЕт,", ""] {
            let once = normalize(word);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_cached_result_is_stable() {
        assert_eq!(normalize("7e5t!"), "test");
        assert_eq!(normalize("7e5t!"), "test");
    }

    #[test]
    fn test_substitution_table_matches_substitute_char() {
        for (from, to) in SUBSTITUTION_TABLE {
            assert_eq!(substitute_char(from), to);
        }
    }
}
