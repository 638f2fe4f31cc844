// Stopword filtering for the frequency model.
//
// Scoring counts only content words, so common function words ("the",
// "of", "was") are held out of the frequency table. The builtin list is
// a small hand-picked set sized for short English prose; the full
// english list comes from the `stop-words` crate; `none` disables
// filtering entirely.

use std::collections::HashSet;

use super::tokenize;

/// The default filter list. Small on purpose: it removes the highest
/// frequency function words without eating domain vocabulary.
const BUILTIN: [&str; 37] = [
    "the", "is", "am", "are", "a", "an", "of", "to", "and", "in", "on", "for", "with", "that",
    "this", "it", "as", "at", "by", "from", "or", "be", "was", "were", "will", "would", "can",
    "could", "has", "have", "had", "we", "you", "they", "he", "she", "i",
];

/// A set of words excluded from frequency counting.
///
/// Entries are normalized through the word tokenizer, so membership
/// checks agree with the tokens that [`tokenize::words`] produces:
/// `"The"` and `"the"` land on the same entry, and entries that
/// dissolve under tokenization are dropped.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The builtin list of common English function words.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN)
    }

    /// The full English list from the `stop-words` crate. Much broader
    /// than the builtin list; filters aggressively on short texts.
    pub fn english() -> Self {
        Self::from_words(stop_words::get(stop_words::LANGUAGE::English))
    }

    /// An empty set: every word counts toward frequency.
    pub fn none() -> Self {
        StopwordSet {
            words: HashSet::new(),
        }
    }

    /// Build a set from arbitrary entries, normalizing each one.
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = StopwordSet::none();
        set.extend(entries);
        set
    }

    /// Add more entries to the set, normalizing each one.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            for token in tokenize::words(entry.as_ref()) {
                self.words.insert(token);
            }
        }
    }

    /// Whether a normalized word token is filtered.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_filters_function_words() {
        let set = StopwordSet::builtin();
        assert!(set.contains("the"));
        assert!(set.contains("would"));
        assert!(!set.contains("cat"), "Content words must pass through");
        assert_eq!(set.len(), BUILTIN.len(), "Builtin entries are distinct tokens");
    }

    #[test]
    fn test_english_list_is_broader_than_builtin() {
        let english = StopwordSet::english();
        assert!(english.contains("the"));
        assert!(
            english.len() > StopwordSet::builtin().len(),
            "Crate-provided list should dwarf the builtin one"
        );
    }

    #[test]
    fn test_none_filters_nothing() {
        let set = StopwordSet::none();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }

    #[test]
    fn test_entries_normalize_like_tokens() {
        let set = StopwordSet::from_words(["The", "VERY!"]);
        assert!(set.contains("the"));
        assert!(set.contains("very"));
        assert!(!set.contains("The"), "Lookups are against normalized tokens");
    }

    #[test]
    fn test_dissolving_entries_are_dropped() {
        let set = StopwordSet::from_words(["--", "!!"]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_extend_adds_custom_words() {
        let mut set = StopwordSet::builtin();
        set.extend(["Basically"]);
        assert!(set.contains("basically"));
        assert!(set.contains("the"), "Extending keeps the existing entries");
    }
}
