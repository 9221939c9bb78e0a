//! Configuration settings
//!
//! Settings are loaded from `edudoc.toml`:
//!
//! ```toml
//! [reading]
//! words_per_minute = 200
//!
//! [search]
//! min_query_len = 2
//! highlight_class = "search-highlight"
//!
//! [progress]
//! step_delay_ms = 800
//!
//! [notices]
//! dismiss_after_ms = 3000
//! ```
//!
//! Every table and key is optional; missing values keep their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub reading: ReadingSettings,
    pub search: SearchSettings,
    pub progress: ProgressSettings,
    pub notices: NoticeSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.check()?;
        Ok(settings)
    }

    /// Reject values that would make downstream arithmetic meaningless
    fn check(&self) -> Result<(), SettingsError> {
        if self.reading.words_per_minute == 0 {
            return Err(SettingsError::Invalid {
                key: "reading.words_per_minute",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.search.min_query_len == 0 {
            return Err(SettingsError::Invalid {
                key: "search.min_query_len",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.search.highlight_class.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "search.highlight_class",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Reading time estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingSettings {
    /// Average reading speed used for the "min read" estimate
    pub words_per_minute: usize,
}

impl Default for ReadingSettings {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
        }
    }
}

/// In-document search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Shortest query, in characters, that triggers highlighting
    pub min_query_len: usize,
    /// CSS class of the highlight marker in HTML output
    pub highlight_class: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            highlight_class: "search-highlight".to_string(),
        }
    }
}

/// Generation progress animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// How long each phase is held, in milliseconds
    pub step_delay_ms: u64,
}

impl ProgressSettings {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self { step_delay_ms: 800 }
    }
}

/// Transient notices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeSettings {
    /// How long a notice stays visible, in milliseconds
    pub dismiss_after_ms: u64,
}

impl NoticeSettings {
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 3000,
        }
    }
}
