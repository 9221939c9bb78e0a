//! edudoc-core - Educational article generation
//!
//! Core library for edudoc: turns a request form into a structured article,
//! renders it for display, print and Markdown export, and highlights search
//! matches inside the rendered text.
//!
//! # Example
//!
//! ```
//! use edudoc_ast::FormFields;
//! use edudoc_core::{render, template, to_markdown, validate};
//!
//! let fields = FormFields::new("Roman Law", "History", "Beginner", "Tutorial", "Medium");
//! let input = validate(&fields).unwrap();
//!
//! let doc = template::generate(&input);
//! assert_eq!(doc.title, "Roman Law: A Beginner Tutorial");
//!
//! let rendered = render::render(&doc);
//! assert_eq!(rendered.text.nodes.len(), rendered.blocks.len());
//!
//! let markdown = to_markdown(&doc);
//! assert!(markdown.starts_with("# Roman Law: A Beginner Tutorial"));
//! ```

pub mod config;
pub mod error;
pub mod markdown;
pub mod meta;
pub mod notice;
pub mod progress;
pub mod render;
pub mod samples;
pub mod search;
pub mod session;
pub mod template;
pub mod validate;

// Re-export main types and functions
pub use config::Settings;
pub use error::{DocumentError, Result, SessionError, SettingsError, ValidationError};
pub use markdown::{markdown_filename, to_markdown};
pub use meta::ContentMeta;
pub use notice::{Notice, Severity};
pub use render::{DocumentRenderer, RenderedDocument, RendererConfig};
pub use search::{HighlightRef, SearchHighlighter, SearchState};
pub use session::{MarkdownExport, PendingGeneration, Session};
pub use template::{ContentTemplateEngine, TemplateKind};
pub use validate::validate;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
