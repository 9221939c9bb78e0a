//! Generated document definitions
//!
//! A document is the unit produced by template generation and consumed by
//! rendering and export: a title, ordered sections and a reference list.

use serde::{Deserialize, Serialize};

/// A generated article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Article title (never empty for generated documents)
    pub title: String,
    /// Ordered sections (never empty for generated documents)
    pub sections: Vec<Section>,
    /// Reference list, possibly empty
    #[serde(default)]
    pub references: Vec<String>,
}

/// A titled section of an article
///
/// `content` holds paragraphs separated by a blank line. A paragraph
/// wrapped in `**` is emphasized; paragraphs starting with `1. ` read as
/// numbered items but carry no extra structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub heading: String,
    /// Section body
    pub content: String,
}

impl Document {
    /// Create a document with a title and no sections yet
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Append a section
    pub fn push_section(&mut self, heading: impl Into<String>, content: impl Into<String>) {
        self.sections.push(Section::new(heading, content));
    }

    /// Append a reference entry
    pub fn push_reference(&mut self, reference: impl Into<String>) {
        self.references.push(reference.into());
    }

    /// Check the structural invariants: non-empty title and sections
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty() && !self.sections.is_empty()
    }

    /// Section headings in order
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.heading.as_str())
    }
}

impl Section {
    /// Create a section
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }

    /// Paragraphs of the section body, trimmed, blank ones skipped
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
