//! edudoc-ast - Document model definitions
//!
//! This crate provides the types shared by every edudoc crate: the
//! validated form input, the generated document, its display blocks and
//! the text model that search highlighting operates on.

pub mod block;
pub mod document;
pub mod form;
pub mod run;

pub use block::DisplayBlock;
pub use document::{Document, Section};
pub use form::{ContentType, FormFields, FormInput, Length, Level, ParseOptionError, Subject};
pub use run::{RunKind, TextModel, TextNode, TextRun};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "1.0.0");
    }
}
