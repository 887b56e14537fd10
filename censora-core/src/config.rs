//! Configuration management for `censora-core`.
//!
//! This module defines the filter configuration: which languages to load at
//! construction time and which custom patterns to install. It handles
//! serialization/deserialization of YAML configurations and provides
//! utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::patterns::ALL_LANGUAGES;

/// Maximum allowed length, in characters, for a single pattern string.
/// Patterns are matched by substring containment; anything longer than this
/// is almost certainly a pasted phrase or corrupted data, not a word root.
pub const MAX_PATTERN_LENGTH: usize = 64;

/// Construction-time configuration for a [`crate::ProfanityFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Languages to load and activate. The special key `"all"` loads every
    /// language the pattern source can enumerate.
    pub languages: HashSet<String>,
    /// Custom profanity patterns installed under the `"custom"` language.
    pub custom_patterns: HashSet<String>,
    /// Custom exclude patterns installed under the `"custom"` language.
    pub custom_exclude_patterns: HashSet<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            languages: [ALL_LANGUAGES.to_string()].into_iter().collect(),
            custom_patterns: HashSet::new(),
            custom_exclude_patterns: HashSet::new(),
        }
    }
}

impl FilterConfig {
    /// Loads a filter configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded configuration: {} languages, {} custom patterns.",
            config.languages.len(),
            config.custom_patterns.len()
        );

        Ok(config)
    }

    /// Validates configuration integrity, accumulating every problem into a
    /// single error report.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for language in &self.languages {
            if language.trim().is_empty() {
                errors.push("A language key is empty.".to_string());
            }
        }

        for pattern in self.custom_patterns.iter().chain(&self.custom_exclude_patterns) {
            if pattern.trim().is_empty() {
                errors.push("A custom pattern is empty.".to_string());
            } else if pattern.chars().count() > MAX_PATTERN_LENGTH {
                errors.push(format!(
                    "Pattern '{}...': length ({}) exceeds maximum allowed ({}).",
                    &pattern.chars().take(16).collect::<String>(),
                    pattern.chars().count(),
                    MAX_PATTERN_LENGTH
                ));
            } else if pattern.split_whitespace().count() > 1 {
                warn!(
                    "Pattern '{}' contains whitespace and can never match a single token.",
                    pattern
                );
            }
        }

        if !errors.is_empty() {
            let full_error_message = format!("Config validation failed:\n{}", errors.join("\n"));
            Err(anyhow!(full_error_message))
        } else {
            Ok(())
        }
    }
}

/// Merges a user configuration over a default one.
///
/// Languages and custom pattern sets merge by union; nothing is removed.
pub fn merge_configs(default_config: FilterConfig, user_config: Option<FilterConfig>) -> FilterConfig {
    debug!(
        "merge_configs called. Initial default languages: {}",
        default_config.languages.len()
    );

    let mut merged = default_config;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} languages.", user_cfg.languages.len());
        merged.languages.extend(user_cfg.languages);
        merged.custom_patterns.extend(user_cfg.custom_patterns);
        merged
            .custom_exclude_patterns
            .extend(user_cfg.custom_exclude_patterns);
    }

    merged
}
