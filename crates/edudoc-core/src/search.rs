//! In-document search highlighting
//!
//! The highlighter marks every case-insensitive occurrence of a literal
//! query inside the text model of a rendered document, and removes those
//! marks again without altering a single character.
//!
//! It is a two-state machine:
//!
//! - **Idle**: no markers, the text model is pristine.
//! - **Highlighted**: at least one marker, each wrapping exactly one match
//!   of the active query.
//!
//! Every new query first clears all existing markers, so highlights from
//! different queries never compound. A query that is too short or matches
//! nothing leaves the highlighter Idle.
//!
//! # Example
//!
//! ```
//! use edudoc_ast::TextModel;
//! use edudoc_core::search::{SearchHighlighter, SearchState};
//!
//! let mut model = TextModel::from_texts(["Roman law and roman roads"]);
//! let mut search = SearchHighlighter::new();
//!
//! assert_eq!(search.apply(&mut model, "roman"), 2);
//! assert_eq!(search.state(), SearchState::Highlighted);
//!
//! search.clear(&mut model);
//! assert_eq!(model, TextModel::from_texts(["Roman law and roman roads"]));
//! ```

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use edudoc_ast::{TextModel, TextRun};

/// Shortest query that triggers highlighting unless configured otherwise
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Highlighter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchState {
    Idle,
    Highlighted,
}

/// Position of one highlight marker in the text model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightRef {
    /// Index of the text node
    pub node: usize,
    /// Index of the highlighted run within that node
    pub run: usize,
}

/// Applies and clears search highlights on a text model
#[derive(Debug, Clone)]
pub struct SearchHighlighter {
    min_query_len: usize,
    highlights: Vec<HighlightRef>,
    query: Option<String>,
}

impl SearchHighlighter {
    /// Create a highlighter with the default minimum query length
    pub fn new() -> Self {
        Self::with_min_query_len(DEFAULT_MIN_QUERY_LEN)
    }

    /// Create a highlighter that ignores queries shorter than `min_query_len`
    /// characters
    pub fn with_min_query_len(min_query_len: usize) -> Self {
        Self {
            min_query_len: min_query_len.max(1),
            highlights: Vec::new(),
            query: None,
        }
    }

    /// Current state
    pub fn state(&self) -> SearchState {
        if self.highlights.is_empty() {
            SearchState::Idle
        } else {
            SearchState::Highlighted
        }
    }

    /// Markers placed by the last query, in document order
    pub fn highlights(&self) -> &[HighlightRef] {
        &self.highlights
    }

    /// Number of active markers
    pub fn match_count(&self) -> usize {
        self.highlights.len()
    }

    /// The query whose matches are currently highlighted
    pub fn active_query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Whether `query` is long enough to search for, after trimming
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.min_query_len
    }

    /// Highlight every occurrence of `query` in `model`
    ///
    /// Existing markers are removed first. The query is trimmed and taken
    /// literally; matching is case-insensitive, never spans text nodes, and
    /// resumes after each match so occurrences never overlap. Returns the
    /// number of markers placed.
    pub fn apply(&mut self, model: &mut TextModel, query: &str) -> usize {
        self.clear(model);

        if !self.accepts(query) || model.is_empty() {
            return 0;
        }
        let query = query.trim();

        let Some(matcher) = build_matcher(query) else {
            return 0;
        };

        for (node_index, node) in model.nodes.iter_mut().enumerate() {
            let text = node.text();
            let mut runs: Vec<TextRun> = Vec::new();
            let mut last = 0;

            for found in matcher.find_iter(&text) {
                if found.start() > last {
                    runs.push(TextRun::plain(&text[last..found.start()]));
                }
                runs.push(TextRun::highlighted(found.as_str()));
                self.highlights.push(HighlightRef {
                    node: node_index,
                    run: runs.len() - 1,
                });
                last = found.end();
            }

            if runs.is_empty() {
                continue;
            }
            if last < text.len() {
                runs.push(TextRun::plain(&text[last..]));
            }
            node.runs = runs;
        }

        if !self.highlights.is_empty() {
            self.query = Some(query.to_string());
        }
        debug!(query, matches = self.highlights.len(), "applied search highlights");
        self.highlights.len()
    }

    /// Remove every marker, splicing its text back into the surrounding runs
    pub fn clear(&mut self, model: &mut TextModel) {
        let had_markers = !self.highlights.is_empty();

        for node in &mut model.nodes {
            if node.has_highlights() {
                node.unwrap_highlights();
            }
        }
        self.highlights.clear();
        self.query = None;

        if had_markers {
            debug!("cleared search highlights");
        }
    }

    /// Text of each active marker, in document order
    pub fn marked_texts<'a>(&self, model: &'a TextModel) -> Vec<&'a str> {
        self.highlights
            .iter()
            .filter_map(|h| model.nodes.get(h.node)?.runs.get(h.run))
            .map(|run| run.text.as_str())
            .collect()
    }
}

impl Default for SearchHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive matcher for a literal query
fn build_matcher(query: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(%err, "could not build search matcher");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudoc_ast::{RunKind, TextNode};

    fn model() -> TextModel {
        TextModel::from_texts([
            "Introduction to Machine Learning",
            "Machine learning is a subset of AI. Learning never stops.",
            "References",
        ])
    }

    #[test]
    fn test_accepts_uses_trimmed_length() {
        let search = SearchHighlighter::new();
        assert!(!search.accepts(""));
        assert!(!search.accepts("  a  "));
        assert!(search.accepts(" ab "));
        assert!(search.accepts("é€"));

        let search = SearchHighlighter::with_min_query_len(3);
        assert!(!search.accepts("ab"));
        assert!(search.accepts("abc"));
    }

    #[test]
    fn test_rejected_query_places_no_markers() {
        let mut model = model();
        let mut search = SearchHighlighter::new();
        for query in ["", " ", "m", "  m  "] {
            assert!(!search.accepts(query));
            assert_eq!(search.apply(&mut model, query), 0);
        }
        assert!(search.accepts("ma"));
        assert!(search.apply(&mut model, "ma") > 0);
    }

    /// Every marker points at a live highlighted run
    fn assert_consistent(search: &SearchHighlighter, model: &TextModel) {
        for h in search.highlights() {
            let run = &model.nodes[h.node].runs[h.run];
            assert_eq!(run.kind, RunKind::Highlighted);
        }
        assert_eq!(search.match_count(), model.highlight_count());
    }

    #[test]
    fn test_highlight_and_clear_restores_text() {
        let original = model();
        let mut text = original.clone();
        let mut search = SearchHighlighter::new();

        assert_eq!(search.apply(&mut text, "learning"), 3);
        assert_consistent(&search, &text);
        assert_eq!(text.node_texts(), original.node_texts());

        search.clear(&mut text);
        assert_eq!(text, original);
        assert_eq!(search.state(), SearchState::Idle);
        assert_eq!(search.active_query(), None);
    }

    #[test]
    fn test_case_insensitive_preserves_original_case() {
        let mut text = model();
        let mut search = SearchHighlighter::new();
        search.apply(&mut text, "LEARNING");
        assert_eq!(search.marked_texts(&text), vec!["Learning", "learning", "Learning"]);
    }

    #[test]
    fn test_split_runs() {
        let mut text = TextModel::from_texts(["abcabc"]);
        let mut search = SearchHighlighter::new();
        search.apply(&mut text, "bc");
        assert_eq!(
            text.nodes[0],
            TextNode {
                runs: vec![
                    TextRun::plain("a"),
                    TextRun::highlighted("bc"),
                    TextRun::plain("a"),
                    TextRun::highlighted("bc"),
                ]
            }
        );
        assert_eq!(
            search.highlights(),
            &[HighlightRef { node: 0, run: 1 }, HighlightRef { node: 0, run: 3 }]
        );
    }

    #[test]
    fn test_non_overlapping_matches() {
        let mut text = TextModel::from_texts(["aaaa"]);
        let mut search = SearchHighlighter::new();
        assert_eq!(search.apply(&mut text, "aa"), 2);

        let mut text = TextModel::from_texts(["aaa"]);
        assert_eq!(search.apply(&mut text, "aa"), 1);
        assert_eq!(text.nodes[0].runs[1], TextRun::plain("a"));
    }

    #[test]
    fn test_short_query_stays_idle() {
        let original = model();
        let mut text = original.clone();
        let mut search = SearchHighlighter::new();

        search.apply(&mut text, "learning");
        assert_eq!(search.apply(&mut text, "l"), 0);
        assert_eq!(search.state(), SearchState::Idle);
        assert_eq!(text, original);

        assert_eq!(search.apply(&mut text, "  a  "), 0);
        assert_eq!(search.apply(&mut text, ""), 0);
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut text = model();
        let mut search = SearchHighlighter::new();
        assert_eq!(search.apply(&mut text, "  subset "), 1);
        assert_eq!(search.active_query(), Some("subset"));
    }

    #[test]
    fn test_zero_matches_stay_idle() {
        let original = model();
        let mut text = original.clone();
        let mut search = SearchHighlighter::new();
        search.apply(&mut text, "learning");

        assert_eq!(search.apply(&mut text, "quantum"), 0);
        assert_eq!(search.state(), SearchState::Idle);
        assert_eq!(search.active_query(), None);
        assert_eq!(text, original);
    }

    #[test]
    fn test_special_characters_are_literal() {
        let mut text = TextModel::from_texts(["Use (a+b)* here, not aab", "C++ and C#", "a.b axb"]);
        let mut search = SearchHighlighter::new();

        assert_eq!(search.apply(&mut text, "(a+b)*"), 1);
        assert_eq!(search.marked_texts(&text), vec!["(a+b)*"]);

        assert_eq!(search.apply(&mut text, "c++"), 1);
        assert_eq!(search.apply(&mut text, "a.b"), 1);
        assert_eq!(search.marked_texts(&text), vec!["a.b"]);
        assert_eq!(search.apply(&mut text, "[x"), 0);
    }

    #[test]
    fn test_matches_do_not_span_nodes() {
        let mut text = TextModel::from_texts(["ends with ab", "cd starts"]);
        let mut search = SearchHighlighter::new();
        assert_eq!(search.apply(&mut text, "abcd"), 0);
        assert_eq!(search.apply(&mut text, "ab\ncd"), 0);
    }

    #[test]
    fn test_no_compounding() {
        let mut sequential = model();
        let mut search = SearchHighlighter::new();
        search.apply(&mut sequential, "learning");
        search.apply(&mut sequential, "machine");
        let sequential_refs = search.highlights().to_vec();

        let mut direct = model();
        let mut fresh = SearchHighlighter::new();
        fresh.apply(&mut direct, "machine");

        assert_eq!(sequential, direct);
        assert_eq!(sequential_refs, fresh.highlights());
    }

    #[test]
    fn test_overlapping_queries_do_not_nest() {
        let mut text = model();
        let mut search = SearchHighlighter::new();
        search.apply(&mut text, "machine learning");
        search.apply(&mut text, "learn");
        assert_consistent(&search, &text);
        assert_eq!(search.marked_texts(&text), vec!["Learn", "learn", "Learn"]);
    }

    #[test]
    fn test_empty_model_is_noop() {
        let mut text = TextModel::default();
        let mut search = SearchHighlighter::new();
        assert_eq!(search.apply(&mut text, "anything"), 0);
        assert_eq!(text, TextModel::default());
    }

    #[test]
    fn test_unicode_text_preserved() {
        let original = TextModel::from_texts(["Café société — ÉCOLE école"]);
        let mut text = original.clone();
        let mut search = SearchHighlighter::new();
        assert_eq!(search.apply(&mut text, "école"), 2);
        assert_eq!(search.marked_texts(&text), vec!["ÉCOLE", "école"]);
        assert_eq!(text.node_texts(), original.node_texts());
        search.clear(&mut text);
        assert_eq!(text, original);
    }

    #[test]
    fn test_custom_min_query_len() {
        let mut text = model();
        let mut search = SearchHighlighter::with_min_query_len(4);
        assert_eq!(search.apply(&mut text, "ref"), 0);
        assert_eq!(search.apply(&mut text, "refe"), 1);

        let mut single = SearchHighlighter::with_min_query_len(0);
        assert!(single.apply(&mut text, "a") > 0);
    }

    #[test]
    fn test_clear_when_idle_is_noop() {
        let original = model();
        let mut text = original.clone();
        let mut search = SearchHighlighter::new();
        search.clear(&mut text);
        search.clear(&mut text);
        assert_eq!(text, original);
    }
}
