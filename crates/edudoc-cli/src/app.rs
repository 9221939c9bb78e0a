//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use edudoc_ast::{FormFields, RunKind};
use edudoc_core::progress::run_phases;
use edudoc_core::samples::SAMPLE_TOPICS;
use edudoc_core::{RenderedDocument, Session, Settings};

/// Output format for generated articles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Display markup (HTML fragment)
    #[default]
    Html,
    /// Markdown export
    Markdown,
    /// Standalone printable HTML page
    Print,
    /// Plain visible text, as copied to the clipboard
    Text,
    /// Document and reading figures as JSON
    Json,
}

/// The request form, as command-line options
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Topic or syllabus outline; only the first line becomes the title
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Subject area (e.g. "Computer Science", "History")
    #[arg(short, long)]
    pub subject: Option<String>,

    /// Difficulty level (Beginner, Intermediate or Advanced)
    #[arg(short, long)]
    pub level: Option<String>,

    /// Content type (e.g. Tutorial, "Study Guide")
    #[arg(long)]
    pub content_type: Option<String>,

    /// Length (Short, Medium or Long)
    #[arg(long, default_value = "Medium")]
    pub length: String,

    /// Use a built-in sample topic instead (1-based, see `edudoc samples`)
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..=SAMPLE_TOPICS.len() as u64),
        conflicts_with_all = ["topic", "subject", "level", "content_type"]
    )]
    pub sample: Option<u64>,
}

impl RequestArgs {
    /// Form values for this request
    ///
    /// A `sample` number outside the listed samples is ignored and the
    /// explicit fields are used; the command line rejects such numbers.
    pub fn to_fields(&self) -> FormFields {
        let sample = self
            .sample
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| SAMPLE_TOPICS.get(i));
        if let Some(sample) = sample {
            return sample.form_fields();
        }
        FormFields {
            topic: self.topic.clone(),
            subject: self.subject.clone(),
            level: self.level.clone(),
            content_type: self.content_type.clone(),
            length: Some(self.length.clone()),
        }
    }
}

#[derive(Parser)]
#[command(name = "edudoc")]
#[command(author, version, about = "Educational articles from a short request", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an article and print or save it
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the progress phases while generating
        #[arg(long)]
        progress: bool,
    },

    /// Write the Markdown file and the printable page to a directory
    Export {
        #[command(flatten)]
        request: RequestArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Highlight a query inside a generated article
    Search {
        #[command(flatten)]
        request: RequestArgs,

        /// Text to look for (case-insensitive)
        #[arg(short, long)]
        query: String,
    },

    /// List the built-in sample topics
    Samples {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            request,
            format,
            output,
            progress,
        } => {
            generate_command(
                &request.to_fields(),
                format,
                output.as_deref(),
                progress,
                settings,
            )?;
        }
        Commands::Export { request, dir } => {
            export_command(&request.to_fields(), &dir, settings)?;
        }
        Commands::Search { request, query } => {
            search_command(&request.to_fields(), &query, settings)?;
        }
        Commands::Samples { json } => {
            samples_command(json)?;
        }
    }

    Ok(())
}

/// Execute the generate command
pub fn generate_command(
    fields: &FormFields,
    format: OutputFormat,
    output: Option<&Path>,
    progress: bool,
    settings: Settings,
) -> Result<()> {
    let mut session = Session::with_settings(settings);
    let pending = session.begin_generation(fields)?;

    if progress {
        let delay = session.settings().progress.step_delay();
        run_phases(
            delay,
            |phase| eprintln!("[{:>3}%] {}", phase.percent, phase.message),
            std::thread::sleep,
        );
    }

    session
        .complete(pending)
        .context("Generation was superseded by a newer request")?;

    let content = render_output(&mut session, format)?;
    let meta = session.meta().context("No content generated")?;

    match output {
        Some(path) => {
            fs::write(path, &content)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;

            let title = session.current().map(|d| d.title.as_str()).unwrap_or_default();
            println!("edudoc v{}", edudoc_core::VERSION);
            println!("Generated: {}", title);
            println!("  {} | {}", meta.words_label(), meta.reading_label());
            println!("  Created: {}", path.display());
        }
        None => {
            println!("{}", content);
            info!(
                words = meta.word_count,
                minutes = meta.reading_minutes,
                "content meta"
            );
        }
    }

    Ok(())
}

/// Produce the current document of `session` in `format`
pub fn render_output(session: &mut Session, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Html => session.html().context("No content generated")?,
        OutputFormat::Markdown => session.markdown_export()?.content,
        OutputFormat::Print => session.printable_export()?,
        OutputFormat::Text => session.clipboard_text()?,
        OutputFormat::Json => {
            let document = session.current().context("No content generated")?;
            let value = serde_json::json!({
                "document": document,
                "meta": session.meta(),
            });
            serde_json::to_string_pretty(&value).context("Failed to serialize document to JSON")?
        }
    };
    Ok(content)
}

/// Execute the export command
///
/// Writes `<slug>.md` and `<slug>.html` into `dir` and returns their paths.
pub fn export_command(fields: &FormFields, dir: &Path, settings: Settings) -> Result<Vec<PathBuf>> {
    let mut session = Session::with_settings(settings);
    session.generate(fields)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let markdown = session.markdown_export()?;
    let markdown_path = dir.join(&markdown.filename);
    fs::write(&markdown_path, &markdown.content)
        .with_context(|| format!("Failed to write Markdown: {}", markdown_path.display()))?;

    let page = session.printable_export()?;
    let page_path = markdown_path.with_extension("html");
    fs::write(&page_path, &page)
        .with_context(|| format!("Failed to write printable page: {}", page_path.display()))?;

    println!("edudoc v{}", edudoc_core::VERSION);
    println!("  Created: {}", markdown_path.display());
    println!("  Created: {}", page_path.display());
    println!();
    println!("Export complete!");

    Ok(vec![markdown_path, page_path])
}

/// Execute the search command
///
/// Returns the number of matches.
pub fn search_command(fields: &FormFields, query: &str, settings: Settings) -> Result<usize> {
    let mut session = Session::with_settings(settings);
    session.generate(fields)?;

    let count = session.search(query);
    debug!(query, count, "search finished");

    let rendered = session.rendered().context("No content generated")?;
    println!("{}", marked_text(rendered));
    println!();

    println!("{}", search_summary(&session, query, count));

    Ok(count)
}

/// One-line outcome of a search, as printed by `edudoc search`
pub fn search_summary(session: &Session, query: &str, count: usize) -> String {
    if session.highlighter().accepts(query) {
        format!("{} match(es) for \"{}\"", count, query.trim())
    } else {
        format!(
            "Query too short (minimum {} characters)",
            session.settings().search.min_query_len
        )
    }
}

/// Visible text with highlighted runs wrapped in `[[` `]]`
pub fn marked_text(rendered: &RenderedDocument) -> String {
    rendered
        .text
        .nodes
        .iter()
        .map(|node| {
            node.runs
                .iter()
                .map(|run| match run.kind {
                    RunKind::Plain => run.text.clone(),
                    RunKind::Highlighted => format!("[[{}]]", run.text),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the samples command
pub fn samples_command(json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(&SAMPLE_TOPICS)
            .context("Failed to serialize samples to JSON")?;
        println!("{}", json);
        return Ok(());
    }

    for (i, sample) in SAMPLE_TOPICS.iter().enumerate() {
        println!("{}. {} ({}, {})", i + 1, sample.title, sample.subject, sample.level);
        println!("   Keywords: {}", sample.keywords);
    }
    Ok(())
}

/// Install the stderr log subscriber
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Load settings from a config file or use defaults
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Settings::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        }
        None => {
            let candidates = ["edudoc.toml", ".edudoc.toml"];
            for candidate in candidates {
                if Path::new(candidate).exists() {
                    let content = fs::read_to_string(candidate)?;
                    match Settings::from_toml_str(&content) {
                        Ok(settings) => return Ok(settings),
                        Err(e) => warn!("Ignoring {}: {}", candidate, e),
                    }
                }
            }
            Ok(Settings::default())
        }
    }
}
