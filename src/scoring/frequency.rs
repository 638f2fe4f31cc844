// Word frequency model over a single document.
//
// Counts normalized word tokens, skipping stopwords and tokens shorter
// than a configured minimum, and remembers the order in which surviving
// words first appeared. First-appearance order is the tie-break
// everywhere a ranking is produced: two words with equal counts rank by
// which one the document used first.

use std::collections::HashMap;

use crate::text::stopwords::StopwordSet;

/// Occurrence counts for the qualifying word tokens of one document.
///
/// Built once per request and read-only afterwards. Iteration follows
/// first-appearance order; `ranked` layers the count ordering on top.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count `tokens`, skipping stopwords and tokens shorter than
    /// `min_token_len`. A minimum of zero disables the length floor.
    pub fn build(tokens: &[String], stopwords: &StopwordSet, min_token_len: usize) -> Self {
        let mut table = FrequencyTable::default();

        for token in tokens {
            // Tokens are ASCII by construction, so byte length is
            // character length.
            if token.len() < min_token_len || stopwords.contains(token) {
                continue;
            }
            match table.index.get(token.as_str()) {
                Some(&slot) => table.entries[slot].1 += 1,
                None => {
                    table.index.insert(token.clone(), table.entries.len());
                    table.entries.push((token.clone(), 1));
                }
            }
        }

        table
    }

    /// Occurrences of a normalized token; zero for anything unseen.
    pub fn count(&self, token: &str) -> u32 {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1,
            None => 0,
        }
    }

    /// Every entry, highest count first. Equal counts keep their
    /// first-appearance order (the sort is stable).
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn table(text: &str, stopwords: &StopwordSet) -> FrequencyTable {
        FrequencyTable::build(&tokenize::words(text), stopwords, 0)
    }

    #[test]
    fn test_counts_exclude_stopwords() {
        let t = table("The cat sat on the mat, the cat!", &StopwordSet::builtin());
        assert_eq!(t.count("cat"), 2);
        assert_eq!(t.count("sat"), 1);
        assert_eq!(t.count("mat"), 1);
        assert_eq!(t.count("the"), 0, "Stopwords must never enter the table");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_unknown_token_counts_zero() {
        let t = table("alpha beta", &StopwordSet::none());
        assert_eq!(t.count("gamma"), 0);
    }

    #[test]
    fn test_ranked_descending_with_first_appearance_ties() {
        let t = table("bb aa bb cc aa dd", &StopwordSet::none());
        let ranked: Vec<&str> = t.ranked().into_iter().map(|(w, _)| w).collect();
        assert_eq!(
            ranked,
            vec!["bb", "aa", "cc", "dd"],
            "Equal counts must rank by which word appeared first"
        );
    }

    #[test]
    fn test_iter_keeps_first_appearance_order() {
        let t = table("delta echo delta charlie", &StopwordSet::none());
        let order: Vec<&str> = t.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["delta", "echo", "charlie"]);
    }

    #[test]
    fn test_min_token_len_floor() {
        let tokens = tokenize::words("cat elephant dog giraffe");
        let t = FrequencyTable::build(&tokens, &StopwordSet::none(), 4);
        assert_eq!(t.count("elephant"), 1);
        assert_eq!(t.count("giraffe"), 1);
        assert_eq!(t.count("cat"), 0, "Tokens under the floor are skipped");
        assert_eq!(t.count("dog"), 0);
    }

    #[test]
    fn test_empty_input_builds_empty_table() {
        let t = table("", &StopwordSet::builtin());
        assert!(t.is_empty());
        assert!(t.ranked().is_empty());
    }
}
