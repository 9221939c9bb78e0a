//! Integration tests for the edudoc CLI
//!
//! These run the commands end to end against a temporary directory:
//! request -> article -> files on disk.

use std::fs;

use tempfile::TempDir;

use edudoc_ast::FormFields;
use edudoc_cli::{
    export_command, generate_command, load_settings, marked_text, render_output, search_command,
    search_summary, OutputFormat,
};
use edudoc_core::{Session, Settings};

fn roman_law() -> FormFields {
    FormFields::new("Roman Law", "History", "Beginner", "Tutorial", "Medium")
}

#[test]
fn test_generate_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("article.md");

    generate_command(
        &roman_law(),
        OutputFormat::Markdown,
        Some(&path),
        false,
        Settings::default(),
    )
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Roman Law: A Beginner Tutorial\n\n## Introduction\n\n"));
    assert!(content.contains("## Conclusion and Next Steps"));
    assert!(content.ends_with("- Industry Case Studies and Best Practices\n"));
}

#[test]
fn test_generate_each_format() {
    let dir = TempDir::new().unwrap();

    for (format, name) in [
        (OutputFormat::Html, "a.html"),
        (OutputFormat::Print, "b.html"),
        (OutputFormat::Text, "c.txt"),
        (OutputFormat::Json, "d.json"),
    ] {
        let path = dir.path().join(name);
        generate_command(&roman_law(), format, Some(&path), false, Settings::default()).unwrap();
        assert!(path.exists(), "{:?}", format);
    }

    let html = fs::read_to_string(dir.path().join("a.html")).unwrap();
    assert!(html.starts_with("<h1>Roman Law: A Beginner Tutorial</h1>"));
    assert!(!html.contains("<!DOCTYPE html>"));

    let page = fs::read_to_string(dir.path().join("b.html")).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));

    let text = fs::read_to_string(dir.path().join("c.txt")).unwrap();
    assert!(text.starts_with("Roman Law: A Beginner Tutorial\nIntroduction\n"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("d.json")).unwrap()).unwrap();
    assert_eq!(json["document"]["title"], "Roman Law: A Beginner Tutorial");
    assert_eq!(json["document"]["sections"].as_array().unwrap().len(), 5);
    assert!(json["meta"]["word_count"].as_u64().unwrap() > 0);
}

#[test]
fn test_generate_rejects_invalid_request() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.md");

    let fields = FormFields::new("   ", "History", "Beginner", "Tutorial", "Medium");
    let err = generate_command(
        &fields,
        OutputFormat::Markdown,
        Some(&path),
        false,
        Settings::default(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Please enter a topic or syllabus outline");
    assert!(!path.exists());
}

#[test]
fn test_generate_rejects_unknown_subject() {
    let fields = FormFields::new("Roman Law", "Astrology", "Beginner", "Tutorial", "Medium");
    let err = generate_command(&fields, OutputFormat::Text, None, false, Settings::default())
        .unwrap_err();
    assert!(err.to_string().contains("Astrology"));
}

#[test]
fn test_export_writes_markdown_and_page() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("exports");

    let paths = export_command(&roman_law(), &out, Settings::default()).unwrap();

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], out.join("roman_law__a_beginner_tutorial.md"));
    assert_eq!(paths[1], out.join("roman_law__a_beginner_tutorial.html"));

    let markdown = fs::read_to_string(&paths[0]).unwrap();
    assert!(markdown.starts_with("# Roman Law: A Beginner Tutorial"));

    let page = fs::read_to_string(&paths[1]).unwrap();
    assert!(page.contains("<title>Roman Law: A Beginner Tutorial</title>"));
    assert!(!page.contains("search-highlight"));
}

#[test]
fn test_search_command_counts_matches() {
    assert_eq!(
        search_command(&roman_law(), "roman", Settings::default()).unwrap(),
        4
    );
    assert_eq!(
        search_command(&roman_law(), "r", Settings::default()).unwrap(),
        0
    );
}

#[test]
fn test_search_summary_follows_highlighter() {
    let mut session = Session::new();
    session.generate(&roman_law()).unwrap();

    let count = session.search(" r ");
    assert_eq!(count, 0);
    assert_eq!(
        search_summary(&session, " r ", count),
        "Query too short (minimum 2 characters)"
    );

    let count = session.search("  roman ");
    assert_eq!(search_summary(&session, "  roman ", count), "4 match(es) for \"roman\"");

    let settings = Settings::from_toml_str("[search]\nmin_query_len = 1\n").unwrap();
    let mut session = Session::with_settings(settings);
    session.generate(&roman_law()).unwrap();
    let count = session.search("r");
    assert!(count > 0);
    assert_eq!(
        search_summary(&session, "r", count),
        format!("{} match(es) for \"r\"", count)
    );
}

#[test]
fn test_marked_text() {
    let mut session = Session::new();
    session.generate(&roman_law()).unwrap();
    session.search("LAW");

    let marked = marked_text(session.rendered().unwrap());
    assert!(marked.starts_with("Roman [[Law]]: A Beginner Tutorial\n"));
    assert_eq!(marked.matches("[[").count(), 4);

    session.close_search();
    let plain = marked_text(session.rendered().unwrap());
    assert_eq!(plain, session.clipboard_text().unwrap());
}

#[test]
fn test_render_output_without_document() {
    let mut session = Session::new();
    let err = render_output(&mut session, OutputFormat::Markdown).unwrap_err();
    assert_eq!(err.to_string(), "No content to download");
}

#[test]
fn test_settings_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("edudoc.toml");
    fs::write(
        &config,
        "[reading]\nwords_per_minute = 100\n\n[search]\nmin_query_len = 1\nhighlight_class = \"hit\"\n",
    )
    .unwrap();

    let settings = load_settings(Some(&config)).unwrap();
    assert_eq!(settings.reading.words_per_minute, 100);
    assert_eq!(settings.search.highlight_class, "hit");

    // One-character queries become searchable with a lower minimum.
    assert!(search_command(&roman_law(), "r", settings.clone()).unwrap() > 0);

    let mut session = Session::with_settings(settings);
    session.generate(&roman_law()).unwrap();
    session.search("roman");
    let html = render_output(&mut session, OutputFormat::Html).unwrap();
    assert!(html.contains("<span class=\"hit\">Roman</span>"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("edudoc.toml");
    fs::write(&config, "[reading]\nwords_per_minute = 0\n").unwrap();

    let err = load_settings(Some(&config)).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config"));
}
