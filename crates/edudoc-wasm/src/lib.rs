//! edudoc-wasm - WebAssembly bindings for edudoc
//!
//! Exposes article generation, rendering and export to browsers. The
//! [`Workspace`] class is the page-side state: it keeps the current article
//! and its search highlights, and hands the page display markup to put on
//! screen after every change.
//!
//! Documents and form values cross the boundary as plain JS objects
//! (`{ topic, subject, level, contentType, length }` for the form).

use wasm_bindgen::prelude::*;

use edudoc_ast::{Document, FormFields};
use edudoc_core::render::check_document;
use edudoc_core::samples::SAMPLE_TOPICS;
use edudoc_core::{template, DocumentError, Session, Settings};

/// Returns the current version of edudoc
#[wasm_bindgen]
pub fn version() -> String {
    edudoc_core::VERSION.to_string()
}

/// Generate the document for a form object
#[wasm_bindgen]
pub fn generate(fields: JsValue) -> Result<JsValue, JsError> {
    let fields: FormFields = serde_wasm_bindgen::from_value(fields)?;
    let input = edudoc_core::validate(&fields)?;
    let document = template::generate(&input);
    Ok(serde_wasm_bindgen::to_value(&document)?)
}

/// Display markup for a document object
///
/// Fails for documents without a title or sections.
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html(document: JsValue) -> Result<String, JsError> {
    let document: Document = serde_wasm_bindgen::from_value(document)?;
    Ok(html_for(&document)?)
}

/// Markdown file body for a document object
///
/// Fails for documents without a title or sections.
#[wasm_bindgen(js_name = toMarkdown)]
pub fn to_markdown(document: JsValue) -> Result<String, JsError> {
    let document: Document = serde_wasm_bindgen::from_value(document)?;
    Ok(markdown_for(&document)?)
}

fn html_for(document: &Document) -> Result<String, DocumentError> {
    check_document(document)?;
    Ok(edudoc_core::render::to_html(document))
}

fn markdown_for(document: &Document) -> Result<String, DocumentError> {
    check_document(document)?;
    Ok(edudoc_core::to_markdown(document))
}

/// Download file name for a document title
#[wasm_bindgen(js_name = markdownFilename)]
pub fn markdown_filename(title: &str) -> String {
    edudoc_core::markdown_filename(title)
}

/// Built-in sample topics
#[wasm_bindgen]
pub fn samples() -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&SAMPLE_TOPICS)?)
}

/// A generation session bound to one page
#[wasm_bindgen]
pub struct Workspace {
    session: Session,
}

#[wasm_bindgen]
impl Workspace {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Workspace {
        Workspace {
            session: Session::new(),
        }
    }

    /// Create a workspace from `edudoc.toml` contents
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(toml: &str) -> Result<Workspace, JsError> {
        let settings = Settings::from_toml_str(toml)?;
        Ok(Workspace {
            session: Session::with_settings(settings),
        })
    }

    /// Generate from a form object; returns the display markup
    pub fn generate(&mut self, fields: JsValue) -> Result<String, JsError> {
        let fields: FormFields = serde_wasm_bindgen::from_value(fields)?;
        self.run(&fields)
    }

    /// Generate from individual form values; returns the display markup
    #[wasm_bindgen(js_name = generateRequest)]
    pub fn generate_request(
        &mut self,
        topic: &str,
        subject: &str,
        level: &str,
        content_type: &str,
        length: &str,
    ) -> Result<String, JsError> {
        self.run(&FormFields::new(topic, subject, level, content_type, length))
    }

    /// Highlight `query`; returns the match count
    pub fn search(&mut self, query: &str) -> usize {
        self.session.search(query)
    }

    #[wasm_bindgen(js_name = closeSearch)]
    pub fn close_search(&mut self) {
        self.session.close_search();
    }

    /// Display markup of the current article, highlights included
    pub fn html(&mut self) -> Option<String> {
        self.session.html()
    }

    /// Visible text of the current article, for the clipboard
    #[wasm_bindgen(js_name = plainText)]
    pub fn plain_text(&mut self) -> Result<String, JsError> {
        Ok(self.session.clipboard_text()?)
    }

    /// Report whether the clipboard write succeeded
    #[wasm_bindgen(js_name = copyFinished)]
    pub fn copy_finished(&mut self, copied: bool) {
        self.session.copy_finished(copied);
    }

    /// `{ word_count, reading_minutes }` of the current article
    pub fn meta(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.meta())?)
    }

    /// `{ filename, content }` of the Markdown download
    pub fn markdown(&mut self) -> Result<JsValue, JsError> {
        let export = self.session.markdown_export()?;
        Ok(serde_wasm_bindgen::to_value(&export)?)
    }

    /// Standalone page to open in a print window
    pub fn printable(&mut self) -> Result<String, JsError> {
        Ok(self.session.printable_export()?)
    }

    /// Form object for a sample topic (wrapping index)
    #[wasm_bindgen(js_name = loadSample)]
    pub fn load_sample(&mut self, index: usize) -> Result<JsValue, JsError> {
        let sample = edudoc_core::samples::sample(index);
        let fields = self.session.load_sample(sample);
        Ok(serde_wasm_bindgen::to_value(&fields)?)
    }

    /// `{ severity, message }` of the notice to show, if any
    pub fn notice(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.notice())?)
    }

    /// Message of the notice to show, if any
    #[wasm_bindgen(js_name = noticeMessage)]
    pub fn notice_message(&self) -> Option<String> {
        self.session.notice().map(|n| n.message.clone())
    }

    #[wasm_bindgen(js_name = dismissNotice)]
    pub fn dismiss_notice(&mut self) {
        self.session.dismiss_notice();
    }

    /// Auto-dismiss delay for notices, in milliseconds
    #[wasm_bindgen(js_name = noticeTimeout)]
    pub fn notice_timeout(&self) -> u32 {
        u32::try_from(self.session.settings().notices.dismiss_after_ms).unwrap_or(u32::MAX)
    }

    fn run(&mut self, fields: &FormFields) -> Result<String, JsError> {
        self.session.generate(fields)?;
        Ok(self.session.html().unwrap_or_default())
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
