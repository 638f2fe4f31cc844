// Text primitives: word and sentence tokenization, stopword sets.

pub mod stopwords;
pub mod tokenize;
