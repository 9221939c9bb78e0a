//! Text model of a rendered article
//!
//! The text model stands in for the visual tree: a sequence of text nodes,
//! one per display block, each made of runs that are either plain text or
//! wrapped in a highlight marker. Markers only ever wrap text; unwrapping
//! them never changes the characters of a node.

use serde::{Deserialize, Serialize};

/// How a run is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    /// Ordinary text
    Plain,
    /// Text wrapped in a search highlight marker
    Highlighted,
}

/// A contiguous piece of text with a single presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub kind: RunKind,
}

impl TextRun {
    /// Create a plain run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: RunKind::Plain,
        }
    }

    /// Create a highlighted run
    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: RunKind::Highlighted,
        }
    }

    /// Whether the run is wrapped in a highlight marker
    pub fn is_highlighted(&self) -> bool {
        self.kind == RunKind::Highlighted
    }
}

/// The runs of one display block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextNode {
    pub runs: Vec<TextRun>,
}

impl TextNode {
    /// A node holding a single plain run
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            runs: vec![TextRun::plain(text)],
        }
    }

    /// Concatenated text of every run
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Whether any run is highlighted
    pub fn has_highlights(&self) -> bool {
        self.runs.iter().any(TextRun::is_highlighted)
    }

    /// Turn every highlighted run back into plain text and merge runs
    pub fn unwrap_highlights(&mut self) {
        for run in &mut self.runs {
            run.kind = RunKind::Plain;
        }
        self.normalize();
    }

    /// Merge adjacent plain runs and drop empty ones
    pub fn normalize(&mut self) {
        let mut merged: Vec<TextRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.kind == RunKind::Plain && run.kind == RunKind::Plain => {
                    last.text.push_str(&run.text);
                }
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

/// All text nodes of a rendered article, in document order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextModel {
    pub nodes: Vec<TextNode>,
}

impl TextModel {
    /// Build a pristine model from node texts
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: texts.into_iter().map(TextNode::plain).collect(),
        }
    }

    /// Whether the model holds no text at all
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|n| n.runs.is_empty())
    }

    /// Text of each node
    pub fn node_texts(&self) -> Vec<String> {
        self.nodes.iter().map(TextNode::text).collect()
    }

    /// Visible text: node texts separated by newlines
    pub fn text(&self) -> String {
        self.node_texts().join("\n")
    }

    /// Number of highlighted runs
    pub fn highlight_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|n| n.runs.iter())
            .filter(|r| r.is_highlighted())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_node() {
        let node = TextNode::plain("Hello");
        assert_eq!(node.runs, vec![TextRun::plain("Hello")]);
        assert!(TextNode::plain("").runs.is_empty());
    }

    #[test]
    fn test_unwrap_merges_runs() {
        let mut node = TextNode {
            runs: vec![
                TextRun::plain("The "),
                TextRun::highlighted("law"),
                TextRun::plain(" of "),
                TextRun::highlighted("Law"),
            ],
        };
        assert!(node.has_highlights());
        node.unwrap_highlights();
        assert_eq!(node.runs, vec![TextRun::plain("The law of Law")]);
    }

    #[test]
    fn test_normalize_keeps_adjacent_highlights_apart() {
        let mut node = TextNode {
            runs: vec![
                TextRun::highlighted("ab"),
                TextRun::highlighted("ab"),
                TextRun::plain(""),
                TextRun::plain("c"),
            ],
        };
        node.normalize();
        assert_eq!(node.runs.len(), 3);
    }

    #[test]
    fn test_model_text() {
        let model = TextModel::from_texts(["Title", "Body"]);
        assert_eq!(model.text(), "Title\nBody");
        assert_eq!(model.highlight_count(), 0);
        assert!(!model.is_empty());
        assert!(TextModel::default().is_empty());
    }
}
