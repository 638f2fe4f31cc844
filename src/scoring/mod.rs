// Frequency-based scoring: the word table and the sentence ranking
// built on top of it.

pub mod frequency;
pub mod sentence;
