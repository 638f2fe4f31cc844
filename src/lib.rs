// Brevity: extractive text summarization and reading-time estimation.
//
// This is the library root. The summarization core (text, scoring,
// keywords, highlight, readtime, summarize) is pure and synchronous:
// every request is a function of its input text and config, with no
// shared state between requests. The ingest and output modules are the
// thin I/O and presentation seams around that core; config wires both
// to the environment.

pub mod config;
pub mod highlight;
pub mod ingest;
pub mod keywords;
pub mod output;
pub mod readtime;
pub mod scoring;
pub mod summarize;
pub mod text;
