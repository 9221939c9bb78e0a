//! Markdown export
//!
//! Converts a [`Document`] into a Markdown file body and derives the file
//! name it is saved under.

use std::fmt::Write;
use std::sync::OnceLock;

use regex::Regex;

use edudoc_ast::Document;

static TAG_RE: OnceLock<Regex> = OnceLock::new();

/// Render a document as Markdown
///
/// The title becomes the only level-1 heading, each section a level-2
/// heading followed by its content with any markup tags stripped. `**bold**`
/// passes through unchanged. A `## References` bullet list closes the file
/// when the document has references.
pub fn to_markdown(doc: &Document) -> String {
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    let mut out = String::new();

    write!(out, "# {}\n\n", doc.title).unwrap();

    for section in &doc.sections {
        write!(out, "## {}\n\n", section.heading).unwrap();
        write!(out, "{}\n\n", tag_re.replace_all(&section.content, "")).unwrap();
    }

    if !doc.references.is_empty() {
        out.push_str("## References\n\n");
        for reference in &doc.references {
            writeln!(out, "- {}", reference).unwrap();
        }
    }

    out
}

/// File name for the Markdown export of a document titled `title`
///
/// ASCII letters and digits are kept lower-cased; every other character
/// becomes `_`.
pub fn markdown_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.md", stem)
}
