// Keyword extraction by frequency ranking.
//
// The keywords of a document are the highest-count entries of its
// frequency table. Ties rank by first appearance in the text, so the
// output is deterministic and repeat runs agree.

use crate::scoring::frequency::FrequencyTable;
use crate::text::stopwords::StopwordSet;
use crate::text::tokenize;

/// How many keywords a request yields unless configured otherwise.
pub const DEFAULT_KEYWORD_LIMIT: usize = 6;

/// The top `limit` entries of an existing frequency table.
pub fn top_keywords(table: &FrequencyTable, limit: usize) -> Vec<String> {
    table
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_owned())
        .collect()
}

/// Tokenize `text` and return its top `limit` keywords.
///
/// Stopwords and tokens under `min_token_len` never qualify. Empty or
/// all-stopword text yields an empty list.
pub fn extract_keywords(
    text: &str,
    limit: usize,
    stopwords: &StopwordSet,
    min_token_len: usize,
) -> Vec<String> {
    let tokens = tokenize::words(text);
    let table = FrequencyTable::build(&tokens, stopwords, min_token_len);
    top_keywords(&table, limit)
}
