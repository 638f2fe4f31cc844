// Colored terminal output for summaries, keyword lists, and reading
// times. All terminal-specific formatting lives here; main.rs
// delegates display to this module.

use colored::Colorize;

use crate::highlight::Highlighter;
use crate::summarize::Summary;

/// Display a summary: reading-time line, selected sentences with
/// keyword occurrences highlighted, and a keyword footer.
pub fn display_summary(summary: &Summary, highlight: bool) {
    if summary.is_empty() {
        println!("Nothing to summarize. The input had no sentences.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Summary ({} sentences) ===", summary.sentences.len()).bold()
    );
    println!(
        "  {} {} min -> {} min",
        "Reading time:".dimmed(),
        summary.original_minutes,
        summary.summary_minutes
    );
    println!();

    let highlighter = if highlight && !summary.keywords.is_empty() {
        Some(Highlighter::new(&summary.keywords))
    } else {
        None
    };

    for sentence in &summary.sentences {
        let line = match &highlighter {
            Some(h) => render_highlighted(sentence, h),
            None => sentence.clone(),
        };
        println!("  {} {}", "-".dimmed(), line);
    }

    if !summary.keywords.is_empty() {
        println!();
        println!(
            "  {} {}",
            "Keywords:".dimmed(),
            summary.keywords.join(", ").dimmed()
        );
    }
    println!();
}

/// Display a ranked keyword list.
pub fn display_keywords(keywords: &[String]) {
    if keywords.is_empty() {
        println!("No keywords found. The input may be empty or all stopwords.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top Keywords ({}) ===", keywords.len()).bold()
    );
    println!();
    for (i, keyword) in keywords.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, keyword.yellow());
    }
    println!();
}

/// Display the reading-time estimate for a document.
pub fn display_readtime(words: usize, minutes: u32, wpm: u32) {
    println!("\n  {} {} words", "Length:".dimmed(), words);
    println!("  {} {} min at {} wpm", "Reading time:".dimmed(), minutes, wpm);
    println!();
}

/// Color every keyword occurrence in `text` without disturbing the
/// surrounding bytes. Span resolution guarantees marked regions never
/// overlap, so the pieces stitch back together cleanly.
fn render_highlighted(text: &str, highlighter: &Highlighter) -> String {
    let spans = highlighter.spans(text);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::new();
    let mut cursor = 0;
    for span in &spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&text[span.start..span.end].yellow().bold().to_string());
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
