// Reading-time estimation.
//
// Minutes are the whitespace word count divided by a words-per-minute
// rate, rounded up, so any non-empty text reads as at least one minute.
// The function is total: empty text and a zero rate both estimate zero
// minutes instead of erroring.

use crate::text::tokenize;

/// Average adult silent-reading speed, in words per minute.
pub const DEFAULT_WPM: u32 = 220;

/// Estimated whole minutes to read `text` at `wpm`.
pub fn estimate_minutes(text: &str, wpm: u32) -> u32 {
    if wpm == 0 {
        return 0;
    }
    tokenize::word_count(text).div_ceil(wpm as usize) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_zero_minutes() {
        assert_eq!(estimate_minutes("", DEFAULT_WPM), 0);
        assert_eq!(estimate_minutes("   \n ", DEFAULT_WPM), 0);
    }

    #[test]
    fn test_short_text_rounds_up_to_one() {
        assert_eq!(estimate_minutes("just a few words", DEFAULT_WPM), 1);
    }

    #[test]
    fn test_exact_multiple_does_not_round_up() {
        let text = "word ".repeat(DEFAULT_WPM as usize);
        assert_eq!(estimate_minutes(&text, DEFAULT_WPM), 1);
    }

    #[test]
    fn test_one_word_over_rounds_up() {
        let text = "word ".repeat(DEFAULT_WPM as usize + 1);
        assert_eq!(estimate_minutes(&text, DEFAULT_WPM), 2);
    }

    #[test]
    fn test_custom_rate() {
        let text = "word ".repeat(100);
        assert_eq!(estimate_minutes(&text, 50), 2);
    }

    #[test]
    fn test_zero_rate_estimates_zero() {
        assert_eq!(estimate_minutes("some words here", 0), 0);
    }

    #[test]
    fn test_monotonic_in_word_count() {
        let mut last = 0;
        for words in [0, 1, 219, 220, 221, 500, 1000] {
            let text = "word ".repeat(words);
            let minutes = estimate_minutes(&text, DEFAULT_WPM);
            assert!(
                minutes >= last,
                "Minutes must never decrease as word count grows"
            );
            last = minutes;
        }
    }
}
