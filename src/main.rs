use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use brevity::config::Config;
use brevity::ingest;
use brevity::keywords;
use brevity::output::terminal;
use brevity::readtime;
use brevity::scoring::sentence::Mode;
use brevity::summarize::Summarizer;
use brevity::text::tokenize;

/// Brevity: extractive summarization for text you don't have time for.
///
/// Scores sentences by word frequency, keeps the best ones in their
/// original order, and reports how much reading time the summary saves.
#[derive(Parser)]
#[command(name = "brevity", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a document from a file or stdin
    Summarize {
        /// Input file; omit or use `-` for stdin
        path: Option<PathBuf>,

        /// Summary length: short, medium, or long
        #[arg(long)]
        mode: Option<String>,

        /// Cap input at this many words before summarizing (0 = no cap)
        #[arg(long)]
        max_words: Option<usize>,

        /// How many keywords to extract and highlight
        #[arg(long)]
        keywords: Option<usize>,

        /// Reading speed in words per minute
        #[arg(long)]
        wpm: Option<u32>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Skip keyword highlighting in terminal output
        #[arg(long)]
        no_highlight: bool,

        /// Scrub extraction noise (page markers, ragged whitespace) first
        #[arg(long)]
        clean: bool,
    },

    /// Show the top keywords of a document
    Keywords {
        /// Input file; omit or use `-` for stdin
        path: Option<PathBuf>,

        /// How many keywords to show
        #[arg(long)]
        limit: Option<usize>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Estimate reading time for a document
    Readtime {
        /// Input file; omit or use `-` for stdin
        path: Option<PathBuf>,

        /// Reading speed in words per minute
        #[arg(long)]
        wpm: Option<u32>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("brevity=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            path,
            mode,
            max_words,
            keywords: keyword_limit,
            wpm,
            format,
            no_highlight,
            clean,
        } => {
            // Flags override whatever the environment configured.
            let mut config = Config::load()?;
            if let Some(name) = mode {
                config.mode = Mode::from_name(&name);
            }
            if let Some(wpm) = wpm {
                config.wpm = wpm;
            }
            if let Some(limit) = keyword_limit {
                config.keyword_limit = limit;
            }
            if let Some(cap) = max_words {
                config.max_words = cap;
            }

            let text = load_text(path.as_deref(), clean, config.max_words)?;
            info!(
                "Summarizing {} words in {} mode",
                tokenize::word_count(&text),
                config.mode.as_str()
            );

            let summary = Summarizer::new(config.summary_config()).summarize(&text);

            if parse_format(&format) == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                terminal::display_summary(&summary, !no_highlight);
            }
        }

        Commands::Keywords { path, limit, format } => {
            let config = Config::load()?;
            let limit = limit.unwrap_or(config.keyword_limit);

            let text = ingest::read_input(path.as_deref())?;
            let stopwords = config.stopword_source.stopwords();
            let list = keywords::extract_keywords(&text, limit, &stopwords, config.min_token_len);

            if parse_format(&format) == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                terminal::display_keywords(&list);
            }
        }

        Commands::Readtime { path, wpm } => {
            let config = Config::load()?;
            let wpm = wpm.unwrap_or(config.wpm);

            // No word cap here: an estimate over truncated input would
            // understate the document.
            let text = ingest::read_input(path.as_deref())?;
            let words = tokenize::word_count(&text);
            let minutes = readtime::estimate_minutes(&text, wpm);

            terminal::display_readtime(words, minutes, wpm);
        }
    }

    Ok(())
}

#[derive(PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_format(name: &str) -> OutputFormat {
    match name {
        "json" => OutputFormat::Json,
        "text" => OutputFormat::Text,
        other => {
            warn!("Unknown format '{other}', using text");
            OutputFormat::Text
        }
    }
}

/// Read the document, optionally scrub extraction noise, and apply the
/// input word cap.
fn load_text(path: Option<&Path>, clean: bool, max_words: usize) -> Result<String> {
    let raw = ingest::read_input(path)?;
    let text = if clean { ingest::clean_extracted(&raw) } else { raw };
    if max_words == 0 {
        return Ok(text);
    }
    Ok(tokenize::limit_words(&text, max_words))
}
