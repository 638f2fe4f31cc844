// Output formatting: terminal display for summaries and keyword lists.

pub mod terminal;
