//! Word count and reading time of rendered content.

use serde::{Deserialize, Serialize};

/// Reading speed assumed when no settings are given
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Summary figures shown alongside a rendered article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMeta {
    pub word_count: usize,
    pub reading_minutes: usize,
}

impl ContentMeta {
    /// Count whitespace-separated words and estimate reading time
    ///
    /// Reading time rounds up, so any non-empty text reads in at least one
    /// minute. `words_per_minute` of zero is treated as one.
    pub fn from_text(text: &str, words_per_minute: usize) -> Self {
        let word_count = text.split_whitespace().count();
        let reading_minutes = word_count.div_ceil(words_per_minute.max(1));
        Self {
            word_count,
            reading_minutes,
        }
    }

    /// "N words"
    pub fn words_label(&self) -> String {
        format!("{} words", self.word_count)
    }

    /// "N min read"
    pub fn reading_label(&self) -> String {
        format!("{} min read", self.reading_minutes)
    }
}
