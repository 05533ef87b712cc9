//! Shared tokenization rules for the analyzer, retriever, and answerer.
//!
//! All three components must agree on what a sentence is, so the split
//! rule lives here once:
//!
//! - **Sentences**: split on any run of `.`, `!`, `?`; fragments that are
//!   empty or whitespace-only are dropped; the rest are trimmed.
//! - **Words**: split on whitespace runs.
//! - **Paragraphs**: split on runs of two or more consecutive newlines.

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"[.!?]+") {
    Ok(regex) => regex,
    Err(err) => panic!("sentence boundary regex is invalid: {err}"),
});

static PARAGRAPH_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\n{2,}") {
    Ok(regex) => regex,
    Err(err) => panic!("paragraph boundary regex is invalid: {err}"),
});

/// Split text into trimmed, non-empty sentences in document order.
///
/// The terminating punctuation is not part of the returned sentence.
///
/// ```rust
/// use docsense_core::text::split_sentences;
///
/// assert_eq!(split_sentences("One. Two!? Three"), vec!["One", "Two", "Three"]);
/// assert!(split_sentences(" ... ").is_empty());
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into whitespace-delimited words.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into non-blank paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BOUNDARY
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_runs_of_punctuation() {
        let s = split_sentences("Wait... what?! Really.");
        assert_eq!(s, vec!["Wait", "what", "Really"]);
    }

    #[test]
    fn test_sentences_trimmed() {
        let s = split_sentences("  Leading space.\n\nNext line.  ");
        assert_eq!(s, vec!["Leading space", "Next line"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_words("").is_empty());
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn test_words_collapse_whitespace() {
        assert_eq!(split_words(" a\t b\n\nc  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_paragraphs_need_two_newlines() {
        let text = "line one\nline two\n\n\n\npara two\n\n   \n\npara three";
        let p = split_paragraphs(text);
        assert_eq!(p.len(), 3);
        assert_eq!(p[0], "line one\nline two");
    }
}
