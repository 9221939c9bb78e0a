//! Display blocks for rendered articles
//!
//! A rendered article is a flat sequence of display blocks. Each block
//! contributes exactly one text node to the text model, which keeps the
//! mapping between markup and searchable text trivial.

use serde::{Deserialize, Serialize};

/// Block-level element of a rendered article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DisplayBlock {
    /// The article title (top-level heading)
    Title(String),
    /// A section heading
    SectionHeading(String),
    /// A plain paragraph inside a section
    Paragraph(String),
    /// A paragraph rendered as a single emphasized run
    EmphasizedParagraph(String),
    /// Heading introducing the reference list
    ReferencesHeading(String),
    /// One entry of the reference list
    ReferenceItem(String),
}

impl DisplayBlock {
    /// Visible text of the block
    pub fn text(&self) -> &str {
        match self {
            DisplayBlock::Title(text)
            | DisplayBlock::SectionHeading(text)
            | DisplayBlock::Paragraph(text)
            | DisplayBlock::EmphasizedParagraph(text)
            | DisplayBlock::ReferencesHeading(text)
            | DisplayBlock::ReferenceItem(text) => text,
        }
    }

    /// Whether the block is a heading of any level
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            DisplayBlock::Title(_)
                | DisplayBlock::SectionHeading(_)
                | DisplayBlock::ReferencesHeading(_)
        )
    }
}
