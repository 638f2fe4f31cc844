// Unit tests for keyword extraction.
//
// Focuses on how normalization, stopword choice, and the length floor
// shape the ranking; the happy path lives in the module tests.

use brevity::keywords::{extract_keywords, top_keywords, DEFAULT_KEYWORD_LIMIT};
use brevity::scoring::frequency::FrequencyTable;
use brevity::text::stopwords::StopwordSet;
use brevity::text::tokenize;

// ============================================================
// Normalization feeding the ranking
// ============================================================

#[test]
fn case_variants_merge_before_ranking() {
    let keywords = extract_keywords("Rust rust RUST go", 2, &StopwordSet::none(), 0);
    assert_eq!(keywords, vec!["rust", "go"]);
}

#[test]
fn punctuation_variants_merge_before_ranking() {
    // "it's" and "its" both normalize to "its".
    let keywords = extract_keywords("it's its", 1, &StopwordSet::none(), 0);
    assert_eq!(keywords, vec!["its"]);
}

#[test]
fn keywords_are_normalized_tokens_not_display_text() {
    let keywords = extract_keywords("Don't panic!", 2, &StopwordSet::none(), 0);
    assert_eq!(keywords, vec!["dont", "panic"]);
}

// ============================================================
// Stopword choice changes the outcome
// ============================================================

#[test]
fn stopword_set_decides_whether_function_words_rank() {
    let text = "the the the cat";
    let with_stops = extract_keywords(text, 2, &StopwordSet::builtin(), 0);
    assert_eq!(with_stops, vec!["cat"]);

    let without = extract_keywords(text, 2, &StopwordSet::none(), 0);
    assert_eq!(without, vec!["the", "cat"], "Unfiltered, 'the' dominates");
}

#[test]
fn min_token_len_drops_short_words_from_keywords() {
    let text = "ox ox ox elephant elephant giraffe";
    let keywords = extract_keywords(text, 3, &StopwordSet::none(), 3);
    assert_eq!(keywords, vec!["elephant", "giraffe"]);
}

// ============================================================
// top_keywords agrees with extract_keywords
// ============================================================

#[test]
fn table_reuse_matches_fresh_extraction() {
    let text = "Storms flooded the valley. The valley flooded again. Storms persist.";
    let stopwords = StopwordSet::builtin();

    let direct = extract_keywords(text, DEFAULT_KEYWORD_LIMIT, &stopwords, 0);

    let tokens = tokenize::words(text);
    let table = FrequencyTable::build(&tokens, &stopwords, 0);
    let via_table = top_keywords(&table, DEFAULT_KEYWORD_LIMIT);

    assert_eq!(
        direct, via_table,
        "Extracting from text and from its table must agree"
    );
    assert_eq!(direct[0], "storms");
}

#[test]
fn default_limit_is_six() {
    let text = "a1 a1 b2 b2 c3 c3 d4 d4 e5 e5 f6 f6 g7 g7";
    let keywords = extract_keywords(text, DEFAULT_KEYWORD_LIMIT, &StopwordSet::none(), 0);
    assert_eq!(keywords.len(), 6, "Seven candidates, six survive the default limit");
}
