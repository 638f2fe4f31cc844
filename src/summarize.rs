// The summarization pipeline.
//
// Splits the document into sentences, builds one frequency table,
// scores and selects sentences for the configured mode, and ranks
// keywords from the same table. Reading time is estimated for the
// source text and for the selection joined with single spaces. The
// whole pass is a pure function of the text and the config, so one
// Summarizer serves any number of independent requests.

use serde::{Deserialize, Serialize};

use crate::keywords;
use crate::readtime;
use crate::scoring::frequency::FrequencyTable;
use crate::scoring::sentence::{self, Mode, SelectionRatios};
use crate::text::stopwords::StopwordSet;
use crate::text::tokenize;

/// Tunables for one summarization request.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub mode: Mode,
    pub keyword_limit: usize,
    pub wpm: u32,
    pub stopwords: StopwordSet,
    pub min_token_len: usize,
    pub ratios: SelectionRatios,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            mode: Mode::Medium,
            keyword_limit: keywords::DEFAULT_KEYWORD_LIMIT,
            wpm: readtime::DEFAULT_WPM,
            stopwords: StopwordSet::builtin(),
            min_token_len: 0,
            ratios: SelectionRatios::default(),
        }
    }
}

/// The output contract: selected sentences in document order, ranked
/// keywords, and reading minutes for the source and for the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub sentences: Vec<String>,
    pub keywords: Vec<String>,
    pub original_minutes: u32,
    pub summary_minutes: u32,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Self {
        Summarizer { config }
    }

    /// Summarize `text` under this summarizer's config.
    ///
    /// Empty or sentence-free input produces an empty summary with
    /// zero reading time, never an error.
    pub fn summarize(&self, text: &str) -> Summary {
        let sentences = tokenize::sentences(text);
        let tokens = tokenize::words(text);
        let table =
            FrequencyTable::build(&tokens, &self.config.stopwords, self.config.min_token_len);

        let ratio = self.config.ratios.for_mode(self.config.mode);
        let target = sentence::target_count(sentences.len(), ratio);
        let selected = sentence::select(sentence::score_sentences(&sentences, &table), target);

        let keywords = keywords::top_keywords(&table, self.config.keyword_limit);

        let selected_text = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Summary {
            sentences: selected.into_iter().map(|s| s.text).collect(),
            keywords,
            original_minutes: readtime::estimate_minutes(text, self.config.wpm),
            summary_minutes: readtime::estimate_minutes(&selected_text, self.config.wpm),
        }
    }
}
