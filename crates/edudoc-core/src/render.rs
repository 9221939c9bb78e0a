//! Document Renderer
//!
//! This module converts a [`Document`] into its display form: a flat list of
//! [`DisplayBlock`]s paired with the [`TextModel`] that search highlighting
//! works on, and from there into HTML markup or a standalone printable page.
//!
//! # Example
//!
//! ```
//! use edudoc_ast::Document;
//! use edudoc_core::render::{render, DocumentRenderer};
//!
//! let mut doc = Document::with_title("Notes");
//! doc.push_section("Intro", "First paragraph.\n\n**Remember this**");
//!
//! let rendered = render(&doc);
//! let html = DocumentRenderer::new().to_html(&rendered);
//! assert!(html.starts_with("<h1>Notes</h1>"));
//! assert!(html.contains("<p><strong>Remember this</strong></p>"));
//! ```

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use edudoc_ast::{DisplayBlock, Document, RunKind, TextModel, TextNode};

use crate::error::DocumentError;

/// Heading shown above the reference list in rendered output
pub const REFERENCES_HEADING: &str = "References and Further Reading";

/// Fixed stylesheet of the printable page
const PRINT_STYLESHEET: &str = "\
        body { font-family: Arial, sans-serif; line-height: 1.6; margin: 20px; }
        h1 { color: #2c5282; border-bottom: 2px solid #e2e8f0; padding-bottom: 10px; }
        h2 { color: #3182ce; margin-top: 30px; }
        p { margin-bottom: 15px; text-align: justify; }";

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// CSS class wrapped around highlighted runs
    pub highlight_class: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            highlight_class: "search-highlight".to_string(),
        }
    }
}

/// A document in display form
///
/// `blocks` and `text.nodes` are parallel: node `i` holds the runs of block
/// `i`. Blocks never change after rendering; only the runs do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub title: String,
    pub blocks: Vec<DisplayBlock>,
    pub text: TextModel,
}

impl RenderedDocument {
    /// Visible text, one line per block
    pub fn plain_text(&self) -> String {
        self.text.text()
    }
}

/// Where the HTML writer currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    None,
    SectionContent,
    ReferenceList,
}

/// Renders documents to display blocks and markup
pub struct DocumentRenderer {
    config: RendererConfig,
    output: String,
}

impl DocumentRenderer {
    /// Create a renderer with default configuration
    pub fn new() -> Self {
        Self::with_config(RendererConfig::default())
    }

    /// Create a renderer with custom configuration
    pub fn with_config(config: RendererConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Lay a document out as display blocks and a pristine text model
    pub fn render(&self, doc: &Document) -> RenderedDocument {
        let mut blocks = vec![DisplayBlock::Title(doc.title.clone())];

        for section in &doc.sections {
            blocks.push(DisplayBlock::SectionHeading(section.heading.clone()));
            blocks.extend(format_content(&section.content));
        }

        if !doc.references.is_empty() {
            blocks.push(DisplayBlock::ReferencesHeading(REFERENCES_HEADING.to_string()));
            blocks.extend(doc.references.iter().cloned().map(DisplayBlock::ReferenceItem));
        }

        let text = TextModel::from_texts(blocks.iter().map(|b| b.text().to_string()));
        debug!(blocks = blocks.len(), title = %doc.title, "rendered document");

        RenderedDocument {
            title: doc.title.clone(),
            blocks,
            text,
        }
    }

    /// Produce the display markup, including any highlight markers
    pub fn to_html(&mut self, rendered: &RenderedDocument) -> String {
        self.output.clear();
        let mut container = Container::None;
        let empty = TextNode::default();

        for (i, block) in rendered.blocks.iter().enumerate() {
            let node = rendered.text.nodes.get(i).unwrap_or(&empty);

            let wanted = if block.is_heading() {
                Container::None
            } else if matches!(block, DisplayBlock::ReferenceItem(_)) {
                Container::ReferenceList
            } else {
                Container::SectionContent
            };
            if wanted != container {
                self.close(container);
                self.open(wanted);
                container = wanted;
            }

            match block {
                DisplayBlock::Title(_) => {
                    self.output.push_str("<h1>");
                    self.write_runs(node);
                    self.output.push_str("</h1>");
                }
                DisplayBlock::SectionHeading(_) | DisplayBlock::ReferencesHeading(_) => {
                    self.output.push_str("<h2>");
                    self.write_runs(node);
                    self.output.push_str("</h2>");
                }
                DisplayBlock::Paragraph(_) => {
                    self.output.push_str("<p>");
                    self.write_runs(node);
                    self.output.push_str("</p>");
                }
                DisplayBlock::EmphasizedParagraph(_) => {
                    self.output.push_str("<p><strong>");
                    self.write_runs(node);
                    self.output.push_str("</strong></p>");
                }
                DisplayBlock::ReferenceItem(_) => {
                    self.output.push_str("<li>");
                    self.write_runs(node);
                    self.output.push_str("</li>");
                }
            }
        }
        self.close(container);

        std::mem::take(&mut self.output)
    }

    /// Wrap the pristine display markup of `doc` in a standalone page
    pub fn to_printable(&mut self, doc: &Document) -> String {
        let rendered = self.render(doc);
        let body = self.to_html(&rendered);

        let mut page = String::new();
        writeln!(page, "<!DOCTYPE html>").unwrap();
        writeln!(page, "<html>").unwrap();
        writeln!(page, "<head>").unwrap();
        writeln!(page, "    <meta charset=\"UTF-8\">").unwrap();
        writeln!(page, "    <title>{}</title>", html_escape(&doc.title)).unwrap();
        writeln!(page, "    <style>").unwrap();
        writeln!(page, "{}", PRINT_STYLESHEET).unwrap();
        writeln!(page, "    </style>").unwrap();
        writeln!(page, "</head>").unwrap();
        writeln!(page, "<body>").unwrap();
        writeln!(page, "{}", body).unwrap();
        writeln!(page, "</body>").unwrap();
        writeln!(page, "</html>").unwrap();
        page
    }

    fn open(&mut self, container: Container) {
        match container {
            Container::None => {}
            Container::SectionContent => self.output.push_str("<div class=\"section-content\">"),
            Container::ReferenceList => self.output.push_str("<ul>"),
        }
    }

    fn close(&mut self, container: Container) {
        match container {
            Container::None => {}
            Container::SectionContent => self.output.push_str("</div>"),
            Container::ReferenceList => self.output.push_str("</ul>"),
        }
    }

    fn write_runs(&mut self, node: &TextNode) {
        for run in &node.runs {
            match run.kind {
                RunKind::Plain => self.output.push_str(&html_escape(&run.text)),
                RunKind::Highlighted => {
                    write!(
                        self.output,
                        "<span class=\"{}\">{}</span>",
                        html_escape(&self.config.highlight_class),
                        html_escape(&run.text)
                    )
                    .unwrap();
                }
            }
        }
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render a document with the default renderer
pub fn render(doc: &Document) -> RenderedDocument {
    DocumentRenderer::new().render(doc)
}

/// Render a document straight to display markup
pub fn to_html(doc: &Document) -> String {
    let mut renderer = DocumentRenderer::new();
    let rendered = renderer.render(doc);
    renderer.to_html(&rendered)
}

/// Render a document as a standalone printable page
pub fn to_printable(doc: &Document) -> String {
    DocumentRenderer::new().to_printable(doc)
}

/// Reject documents without a title or without sections
///
/// Generated documents always pass; this guards documents that arrive
/// deserialized from elsewhere.
pub fn check_document(doc: &Document) -> Result<(), DocumentError> {
    if doc.is_well_formed() {
        Ok(())
    } else if doc.title.trim().is_empty() {
        Err(DocumentError::MissingTitle)
    } else {
        Err(DocumentError::NoSections)
    }
}

/// Split section content into display blocks
///
/// Paragraphs are separated by a blank line and trimmed; empty ones are
/// dropped. A paragraph wrapped in `**` on both ends becomes a single
/// emphasized block. Everything else, numbered `1. ` items included, stays
/// a plain paragraph with its text untouched.
pub fn format_content(content: &str) -> Vec<DisplayBlock> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.len() >= 4 && p.starts_with("**") && p.ends_with("**") {
                DisplayBlock::EmphasizedParagraph(p[2..p.len() - 2].to_string())
            } else {
                DisplayBlock::Paragraph(p.to_string())
            }
        })
        .collect()
}

/// Basic HTML escaping for text and attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
