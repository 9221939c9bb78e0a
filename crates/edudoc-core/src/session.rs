//! Session controller
//!
//! A [`Session`] owns everything a front end keeps between user actions:
//! the current document (a single slot, replaced by each generation), its
//! rendered form with any search highlights, the generation-in-flight guard
//! and the notice slot.
//!
//! Only one generation may be in flight. [`Session::begin_generation`] hands
//! out a ticket and refuses to start another until that ticket is completed
//! or cancelled; completing a ticket that is no longer current is ignored,
//! so a late completion can never overwrite a newer document.
//!
//! # Example
//!
//! ```
//! use edudoc_ast::FormFields;
//! use edudoc_core::session::Session;
//!
//! let mut session = Session::new();
//! let fields = FormFields::new("Roman Law", "History", "Beginner", "Tutorial", "Medium");
//!
//! let rendered = session.generate(&fields).unwrap();
//! assert_eq!(rendered.title, "Roman Law: A Beginner Tutorial");
//!
//! assert_eq!(session.search("roman"), 4);
//! let export = session.markdown_export().unwrap();
//! assert_eq!(export.filename, "roman_law__a_beginner_tutorial.md");
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use edudoc_ast::{Document, FormFields, FormInput};

use crate::config::Settings;
use crate::error::{Result, SessionError};
use crate::markdown::{markdown_filename, to_markdown};
use crate::meta::ContentMeta;
use crate::notice::{Notice, NoticeSlot};
use crate::render::{DocumentRenderer, RenderedDocument, RendererConfig};
use crate::samples::SampleTopic;
use crate::search::{SearchHighlighter, SearchState};
use crate::template::ContentTemplateEngine;
use crate::validate::validate;

/// A validated request waiting to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    ticket: u64,
    input: FormInput,
}

impl PendingGeneration {
    /// The validated request
    pub fn input(&self) -> &FormInput {
        &self.input
    }
}

/// Markdown file ready to be saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownExport {
    pub filename: String,
    pub content: String,
}

/// Document and its rendered form, replaced together
#[derive(Debug, Clone)]
struct Current {
    document: Document,
    rendered: RenderedDocument,
}

/// Explicit state of one user session
pub struct Session {
    settings: Settings,
    engine: ContentTemplateEngine,
    renderer: DocumentRenderer,
    highlighter: SearchHighlighter,
    current: Option<Current>,
    next_ticket: u64,
    in_flight: Option<u64>,
    notices: NoticeSlot,
}

impl Session {
    /// Create a session with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a session with custom settings
    pub fn with_settings(settings: Settings) -> Self {
        let renderer = DocumentRenderer::with_config(RendererConfig {
            highlight_class: settings.search.highlight_class.clone(),
        });
        let highlighter = SearchHighlighter::with_min_query_len(settings.search.min_query_len);

        Self {
            settings,
            engine: ContentTemplateEngine::new(),
            renderer,
            highlighter,
            current: None,
            next_ticket: 0,
            in_flight: None,
            notices: NoticeSlot::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validate `fields` and reserve the right to generate
    ///
    /// Fails with [`SessionError::Busy`] while another generation is in
    /// flight. A validation failure is also posted as an error notice.
    pub fn begin_generation(&mut self, fields: &FormFields) -> Result<PendingGeneration> {
        if self.in_flight.is_some() {
            return Err(SessionError::Busy);
        }

        let input = match validate(fields) {
            Ok(input) => input,
            Err(err) => {
                self.notices.post(Notice::error(err.to_string()));
                return Err(err.into());
            }
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        debug!(ticket, "generation started");

        Ok(PendingGeneration { ticket, input })
    }

    /// Whether a generation is in flight
    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Generate and display the document for `pending`
    ///
    /// Returns `None`, leaving the current document untouched, when the
    /// ticket is not the one in flight.
    pub fn complete(&mut self, pending: PendingGeneration) -> Option<&RenderedDocument> {
        if self.in_flight != Some(pending.ticket) {
            warn!(ticket = pending.ticket, "discarding stale generation");
            return None;
        }
        Some(self.finish(pending.input))
    }

    /// Abandon `pending` so a new generation can start
    pub fn cancel(&mut self, pending: PendingGeneration) {
        if self.in_flight == Some(pending.ticket) {
            self.in_flight = None;
            debug!(ticket = pending.ticket, "generation cancelled");
        }
    }

    /// Validate, generate and display in one step
    pub fn generate(&mut self, fields: &FormFields) -> Result<&RenderedDocument> {
        let pending = self.begin_generation(fields)?;
        Ok(self.finish(pending.input))
    }

    fn finish(&mut self, input: FormInput) -> &RenderedDocument {
        let document = self.engine.generate(&input);
        let rendered = self.renderer.render(&document);

        self.highlighter = SearchHighlighter::with_min_query_len(self.settings.search.min_query_len);
        self.in_flight = None;
        self.notices
            .post(Notice::success("Article generated successfully!"));
        info!(title = %document.title, sections = document.sections.len(), "article generated");

        let current = self.current.insert(Current { document, rendered });
        &current.rendered
    }

    /// The document currently displayed
    pub fn current(&self) -> Option<&Document> {
        self.current.as_ref().map(|c| &c.document)
    }

    /// The rendered form of the current document, highlights included
    pub fn rendered(&self) -> Option<&RenderedDocument> {
        self.current.as_ref().map(|c| &c.rendered)
    }

    /// Display markup of the current document, highlights included
    pub fn html(&mut self) -> Option<String> {
        let current = self.current.as_ref()?;
        Some(self.renderer.to_html(&current.rendered))
    }

    /// Word count and reading time of the current document
    pub fn meta(&self) -> Option<ContentMeta> {
        let rendered = self.rendered()?;
        Some(ContentMeta::from_text(
            &rendered.plain_text(),
            self.settings.reading.words_per_minute,
        ))
    }

    /// Highlight `query` in the current document, replacing earlier
    /// highlights; returns the number of matches
    pub fn search(&mut self, query: &str) -> usize {
        match self.current.as_mut() {
            Some(current) => self.highlighter.apply(&mut current.rendered.text, query),
            None => 0,
        }
    }

    /// Close the search panel, removing every highlight
    pub fn close_search(&mut self) {
        if let Some(current) = self.current.as_mut() {
            self.highlighter.clear(&mut current.rendered.text);
        }
    }

    pub fn search_state(&self) -> SearchState {
        self.highlighter.state()
    }

    pub fn highlighter(&self) -> &SearchHighlighter {
        &self.highlighter
    }

    /// Markdown file for the current document
    pub fn markdown_export(&mut self) -> Result<MarkdownExport> {
        let document = self.require_document("download")?;
        let export = MarkdownExport {
            filename: markdown_filename(&document.title),
            content: to_markdown(document),
        };
        self.notices.post(Notice::success("Markdown file downloaded!"));
        Ok(export)
    }

    /// Standalone printable page for the current document
    pub fn printable_export(&mut self) -> Result<String> {
        let document = self.require_document("download")?.clone();
        let page = self.renderer.to_printable(&document);
        self.notices.post(Notice::success("PDF download initiated!"));
        Ok(page)
    }

    /// Plain visible text of the current document, for the clipboard
    ///
    /// Report the outcome of the clipboard write with
    /// [`Session::copy_finished`].
    pub fn clipboard_text(&mut self) -> Result<String> {
        self.require_document("copy")?;
        Ok(self
            .rendered()
            .map(RenderedDocument::plain_text)
            .unwrap_or_default())
    }

    /// Post the notice for a finished clipboard write
    pub fn copy_finished(&mut self, copied: bool) {
        if copied {
            self.notices.post(Notice::success("Content copied to clipboard!"));
        } else {
            self.notices.post(Notice::error("Failed to copy content"));
        }
    }

    /// Form values for a sample topic
    pub fn load_sample(&mut self, sample: &SampleTopic) -> FormFields {
        self.notices
            .post(Notice::success("Sample topic loaded successfully!"));
        sample.form_fields()
    }

    /// The notice currently shown
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    /// Dismiss the notice currently shown
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.dismiss()
    }

    fn require_document(&mut self, action: &'static str) -> Result<&Document> {
        match self.current.as_ref() {
            Some(current) => Ok(&current.document),
            None => {
                let err = SessionError::NoContent(action);
                self.notices.post(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
