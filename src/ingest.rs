// Input ingestion for the CLI: stdin or plain-text files.
//
// The pipeline only ever sees well-formed UTF-8 text. Document formats
// this crate cannot extract (.pdf, .docx, ...) are refused up front
// with a labeled error, and I/O or encoding failures surface as
// extraction failures instead of leaking partial input downstream.

use std::fs;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use thiserror::Error;
use tracing::debug;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static PAGE_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bpage \d+\b").unwrap());

/// Binary document formats that need a real extraction step this crate
/// does not ship.
const UNSUPPORTED_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "ppt", "pptx", "odt"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported format '.{0}': extract the text to a plain file first")]
    UnsupportedFormat(String),
    #[error("Extraction failed: {0}")]
    Extraction(#[from] std::io::Error),
}

/// Read the document from `path`, or from stdin when the path is
/// absent or `-`. Markdown and extensionless files read as plain text.
pub fn read_input(path: Option<&Path>) -> Result<String, IngestError> {
    match path {
        Some(path) if path.as_os_str() != "-" => read_file(path),
        _ => read_stdin(),
    }
}

fn read_file(path: &Path) -> Result<String, IngestError> {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_lowercase();
        if UNSUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(IngestError::UnsupportedFormat(ext));
        }
    }
    debug!("Reading input from {}", path.display());
    Ok(fs::read_to_string(path)?)
}

fn read_stdin() -> Result<String, IngestError> {
    debug!("Reading input from stdin");
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Scrub extraction noise out of pasted or converted text.
///
/// Whitespace runs collapse to single spaces, standalone "Page N"
/// artifacts disappear, and the result is trimmed. "Page" only strips
/// as a whole word, so prose like "rampage 12" is left alone.
pub fn clean_extracted(text: &str) -> String {
    let collapsed = WHITESPACE_RUNS.replace_all(text, " ");
    let stripped = PAGE_MARKERS.replace_all(&collapsed, "");
    WHITESPACE_RUNS.replace_all(&stripped, " ").trim().to_owned()
}
