// censora-core/src/oneshot.rs

//! `oneshot.rs`
//! Convenience wrappers for one-off, non-interactive use of the filter.
//! Each call builds a fresh [`ProfanityFilter`] over the bundled pattern
//! lists, runs a single operation, and throws the filter away. Hosts that
//! censor repeatedly should construct one filter and reuse it.

use anyhow::Result;

use crate::config::FilterConfig;
use crate::engine::{CensorOptions, ProfanityFilter};

/// Censors a string in a single call.
///
/// # Arguments
///
/// * `config` - Construction-time configuration (languages, custom patterns).
/// * `options` - Per-call options (partial censor, censoring character).
/// * `text` - The text to censor.
pub fn censor_string(config: FilterConfig, options: &CensorOptions, text: &str) -> Result<String> {
    let mut filter = ProfanityFilter::from_config(config)?;
    Ok(filter.censor(text, options)?.censored)
}

/// Checks a string for profanity in a single call.
pub fn contains_profanity_string(config: FilterConfig, text: &str) -> Result<bool> {
    let mut filter = ProfanityFilter::from_config(config)?;
    filter.contains_profanity(text, &CensorOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_only() -> FilterConfig {
        FilterConfig {
            languages: ["en".to_string()].into_iter().collect(),
            ..FilterConfig::default()
        }
    }

    #[test]
    fn test_censor_string() -> Result<()> {
        let censored = censor_string(
            english_only(),
            &CensorOptions::default(),
            "This is a fucking bad text.",
        )?;
        assert_eq!(censored, "This is a ####### bad text.");
        Ok(())
    }

    #[test]
    fn test_contains_profanity_string() -> Result<()> {
        assert!(contains_profanity_string(english_only(), "lorem ipsum @ssh0l3 dolor sit amet")?);
        assert!(!contains_profanity_string(english_only(), "lorem ipsum dolor sit amet")?);
        Ok(())
    }

    #[test]
    fn test_custom_patterns_from_config() -> Result<()> {
        let config = FilterConfig {
            languages: ["en".to_string()].into_iter().collect(),
            custom_patterns: ["blorbo".to_string()].into_iter().collect(),
            custom_exclude_patterns: Default::default(),
        };
        assert!(contains_profanity_string(config, "what a blorbo move")?);
        Ok(())
    }
}
