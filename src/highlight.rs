// Keyword highlighting via whole-word match spans.
//
// One case-insensitive whole-word pattern is compiled per keyword, and
// matching produces byte spans over the display text. Overlaps are
// resolved in a single pass: earliest start wins, and two matches at
// the same start go to the higher-ranked keyword. Markers are inserted
// afterwards from the resolved spans, so marked text is never rescanned
// and a keyword can never match inside another keyword's markers.

use regex_lite::Regex;
use tracing::warn;

/// A resolved match: byte range into the display text plus the rank of
/// the keyword that matched (its position in the keyword list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub keyword: usize,
}

/// Whole-word, case-insensitive matcher for a ranked keyword list.
#[derive(Debug)]
pub struct Highlighter {
    patterns: Vec<(usize, Regex)>,
}

impl Highlighter {
    /// Compile one pattern per keyword. Keyword text is escaped, so
    /// keywords match literally. Empty keywords are skipped; ranks
    /// always refer to positions in the list as given.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for (rank, keyword) in keywords.into_iter().enumerate() {
            let keyword = keyword.as_ref();
            if keyword.is_empty() {
                continue;
            }
            let source = format!(r"(?i)\b{}\b", regex_lite::escape(keyword));
            match Regex::new(&source) {
                Ok(pattern) => patterns.push((rank, pattern)),
                Err(err) => warn!("Skipping unmatchable keyword '{keyword}': {err}"),
            }
        }
        Highlighter { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Non-overlapping match spans for `text`, sorted by start.
    ///
    /// Whole-word matching means a keyword never marks a substring of
    /// a larger word: "cat" finds nothing in "category".
    pub fn spans(&self, text: &str) -> Vec<HighlightSpan> {
        let mut candidates = Vec::new();
        for (rank, pattern) in &self.patterns {
            for hit in pattern.find_iter(text) {
                candidates.push(HighlightSpan {
                    start: hit.start(),
                    end: hit.end(),
                    keyword: *rank,
                });
            }
        }
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.keyword.cmp(&b.keyword)));

        let mut resolved: Vec<HighlightSpan> = Vec::new();
        for span in candidates {
            let clear = match resolved.last() {
                Some(last) => span.start >= last.end,
                None => true,
            };
            if clear {
                resolved.push(span);
            }
        }
        resolved
    }
}

/// Insert an `open`/`close` marker pair around each span.
///
/// Spans must be sorted and non-overlapping, which is what
/// [`Highlighter::spans`] produces. No spans means the text comes back
/// unchanged.
pub fn wrap(text: &str, spans: &[HighlightSpan], open: &str, close: &str) -> String {
    if spans.is_empty() {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(open);
        out.push_str(&text[span.start..span.end]);
        out.push_str(close);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
