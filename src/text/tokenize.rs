// Word and sentence tokenization over plain text.
//
// The word model is ASCII: input is lowercased, every character outside
// [a-z0-9] and whitespace is stripped, and what remains splits on
// whitespace runs. Punctuation-only "words" dissolve to nothing, and
// accented or non-Latin characters are stripped the same way, so "café"
// tokenizes as "caf" and fully non-ASCII text yields no words at all.
//
// Sentence splitting is a boundary scan, not a parse: newline runs
// collapse to a single space, then the text splits after every
// terminator (. ! ?) that is followed by whitespace. Abbreviations like
// "Dr. Smith" split early; that is a known limit of the heuristic.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Normalize `text` into lowercase ASCII word tokens.
///
/// Lowercases, strips every character outside `[a-z0-9]` and whitespace,
/// then splits on whitespace runs. Tokens that dissolve entirely (pure
/// punctuation, pure non-ASCII) produce nothing.
pub fn words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Split `text` into trimmed sentences.
///
/// A sentence ends at a terminator (`.`, `!`, `?`) followed by
/// whitespace; the terminator stays with its sentence. A trailing
/// fragment with no terminator still counts, so text without any
/// terminator comes back as a single sentence. Empty and
/// whitespace-only fragments are dropped.
pub fn sentences(text: &str) -> Vec<String> {
    let flat = NEWLINE_RUNS.replace_all(text, " ");

    let mut out = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(&flat) {
        // The terminator is a single ASCII byte; keep it, drop the gap.
        let end = boundary.start() + 1;
        push_trimmed(&mut out, &flat[start..end]);
        start = boundary.end();
    }
    push_trimmed(&mut out, &flat[start..]);

    out
}

fn push_trimmed(out: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_owned());
    }
}

/// Count whitespace-separated words without normalizing them.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Cap `text` at its first `max` whitespace-separated words.
///
/// Text at or under the cap comes back unchanged, original spacing
/// included. Over the cap, the surviving words are rejoined with single
/// spaces. A cap of zero empties any non-empty text.
pub fn limit_words(text: &str, max: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max {
        return text.to_owned();
    }

    words[..max].join(" ")
}
