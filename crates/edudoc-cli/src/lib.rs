//! edudoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for edudoc:
//! - Generate: build an article from a request and print or save it
//! - Export: write the Markdown file and the printable page to a directory
//! - Search: highlight a query inside a generated article
//! - Samples: list the built-in sample topics
//!
//! # Library Usage
//!
//! ```ignore
//! use edudoc_cli::{generate_command, OutputFormat};
//!
//! let fields = FormFields::new("Roman Law", "History", "Beginner", "Tutorial", "Medium");
//! generate_command(&fields, OutputFormat::Markdown, Some(&path), false, Settings::default())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Print an article as Markdown
//! edudoc generate --topic "Roman Law" --subject History --level Beginner \
//!     --content-type Tutorial --format markdown
//!
//! # Save the Markdown file and the printable page
//! edudoc export --topic "Roman Law" --subject History --level Beginner \
//!     --content-type Tutorial --dir out/
//!
//! # Highlight a query
//! edudoc search --topic "Roman Law" --subject History --level Beginner \
//!     --content-type Tutorial --query law
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{export_command, generate_command, samples_command, search_command};
pub use app::{
    load_settings, marked_text, render_output, run_cli, search_summary, OutputFormat, RequestArgs,
};
