// Sentence scoring and selection.
//
// Every sentence scores the sum of its tokens' document frequencies;
// stopwords contribute zero because the frequency table never contains
// them. Selection keeps the top scorers for the mode's share of the
// document, breaking score ties toward the earlier sentence, then
// restores document order so the summary always reads in source order.

use tracing::warn;

use super::frequency::FrequencyTable;
use crate::text::tokenize;

/// How much of the document the selection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Short,
    #[default]
    Medium,
    Long,
}

impl Mode {
    /// Parse a mode name. Unknown names fall back to `Medium` with a
    /// warning instead of failing the request.
    pub fn from_name(name: &str) -> Mode {
        match name.trim().to_lowercase().as_str() {
            "short" => Mode::Short,
            "medium" => Mode::Medium,
            "long" => Mode::Long,
            other => {
                warn!("Unknown summary mode '{other}', using medium");
                Mode::Medium
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Short => "short",
            Mode::Medium => "medium",
            Mode::Long => "long",
        }
    }
}

/// Fraction of sentences retained per mode. Policy knobs, not a
/// contract: callers may tune them, the defaults are the reference
/// values.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRatios {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl Default for SelectionRatios {
    fn default() -> Self {
        SelectionRatios {
            short: 0.10,
            medium: 0.30,
            long: 0.60,
        }
    }
}

impl SelectionRatios {
    pub fn for_mode(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Short => self.short,
            Mode::Medium => self.medium,
            Mode::Long => self.long,
        }
    }
}

/// A sentence with its document position and frequency score.
///
/// The index is assigned at segmentation time and never reassigned;
/// selection reorders by score internally but hands results back in
/// index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub index: usize,
    pub text: String,
    pub score: u64,
}

/// How many sentences a selection should keep.
///
/// Rounds `sentence_count * ratio`, with a floor of one whenever any
/// sentence exists and a ceiling of the full count.
pub fn target_count(sentence_count: usize, ratio: f64) -> usize {
    if sentence_count == 0 {
        return 0;
    }
    let rounded = (sentence_count as f64 * ratio).round() as usize;
    rounded.clamp(1, sentence_count)
}

/// Score each sentence as the sum of its tokens' table counts.
///
/// Sentences are re-tokenized without stopword filtering; filtered and
/// unseen tokens look up as zero, so no second filter pass is needed.
pub fn score_sentences(sentences: &[String], table: &FrequencyTable) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let score = tokenize::words(text)
                .iter()
                .map(|token| u64::from(table.count(token)))
                .sum();
            ScoredSentence {
                index,
                text: text.clone(),
                score,
            }
        })
        .collect()
}

/// Keep the `target` best sentences, returned in document order.
///
/// Ranking is by descending score with ties going to the lower index,
/// which makes the selection deterministic for any input.
pub fn select(mut scored: Vec<ScoredSentence>, target: usize) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index)));
    scored.truncate(target);
    scored.sort_by_key(|sentence| sentence.index);
    scored
}
