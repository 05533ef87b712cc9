//! Document statistics.
//!
//! [`analyze`] turns raw document text into an [`Analysis`]: sentence,
//! word, and paragraph counts, average sentence length, the ten most
//! frequent keywords, an estimated reading time, and a coarse sentiment.
//!
//! # Keyword extraction
//!
//! 1. Lowercase each whitespace-delimited word.
//! 2. Strip every character outside `[a-z0-9]`.
//! 3. Keep tokens longer than [`MIN_KEYWORD_LEN`] characters.
//! 4. Count occurrences, remembering first-seen order.
//! 5. Stable sort by descending count and keep the first [`TOP_KEYWORDS`].
//!
//! Ties therefore keep the order in which the words first appeared.

use indexmap::IndexMap;

use crate::models::{Analysis, KeywordCount, Sentiment};
use crate::text::{split_paragraphs, split_sentences, split_words};

/// Maximum number of keywords reported.
pub const TOP_KEYWORDS: usize = 10;

/// Keywords must be strictly longer than this.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

const POSITIVE_WORDS: &[&str] = &["good", "great", "excellent", "amazing", "wonderful", "positive"];
const NEGATIVE_WORDS: &[&str] = &["bad", "terrible", "poor", "negative", "awful", "horrible"];

/// Compute statistics for a document.
///
/// Never fails: an empty or punctuation-only document yields zero counts
/// and an average sentence length of `0.0`.
pub fn analyze(text: &str) -> Analysis {
    let sentence_count = split_sentences(text).len();
    let words = split_words(text);
    let word_count = words.len();
    let paragraph_count = split_paragraphs(text).len();

    let avg_words_per_sentence = if sentence_count == 0 {
        0.0
    } else {
        round_one_decimal(word_count as f64 / sentence_count as f64)
    };

    Analysis {
        sentence_count,
        word_count,
        paragraph_count,
        avg_words_per_sentence,
        top_words: top_keywords(&words),
        reading_time: word_count.div_ceil(WORDS_PER_MINUTE),
        sentiment: sentiment(&words),
    }
}

/// Normalize a word into a keyword token, or `None` if it is too short.
pub fn keyword_token(word: &str) -> Option<String> {
    let token: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    (token.len() > MIN_KEYWORD_LEN).then_some(token)
}

fn top_keywords(words: &[&str]) -> Vec<KeywordCount> {
    let mut freq: IndexMap<String, usize> = IndexMap::new();
    for word in words {
        if let Some(token) = keyword_token(word) {
            *freq.entry(token).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<KeywordCount> = freq
        .into_iter()
        .map(|(word, count)| KeywordCount { word, count })
        .collect();
    // sort_by is stable, so equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_KEYWORDS);
    ranked
}

fn sentiment(words: &[&str]) -> Sentiment {
    let mut positive = 0usize;
    let mut negative = 0usize;
    for word in words {
        let lower = word.to_lowercase();
        if POSITIVE_WORDS.contains(&lower.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&lower.as_str()) {
            negative += 1;
        }
    }

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let a = analyze("");
        assert_eq!(a.sentence_count, 0);
        assert_eq!(a.word_count, 0);
        assert_eq!(a.paragraph_count, 0);
        assert_eq!(a.avg_words_per_sentence, 0.0);
        assert!(a.top_words.is_empty());
        assert_eq!(a.reading_time, 0);
        assert_eq!(a.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_punctuation_only_has_no_sentences() {
        let a = analyze("... !!! ???");
        assert_eq!(a.sentence_count, 0);
        assert_eq!(a.word_count, 3);
        assert_eq!(a.avg_words_per_sentence, 0.0);
        assert!(a.avg_words_per_sentence.is_finite());
    }

    #[test]
    fn test_basic_counts() {
        let text = "Cats are mammals. Dogs are mammals too.\n\nCats and dogs are common pets.";
        let a = analyze(text);
        assert_eq!(a.sentence_count, 3);
        assert_eq!(a.word_count, 13);
        assert_eq!(a.paragraph_count, 2);
        assert_eq!(a.avg_words_per_sentence, 4.3);
        assert_eq!(a.reading_time, 1);
    }

    #[test]
    fn test_word_count_matches_whitespace_tokens() {
        let text = "  one\ttwo\n three   four. five!  ";
        assert_eq!(analyze(text).word_count, text.split_whitespace().count());
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(201);
        assert_eq!(analyze(&text).reading_time, 2);
        let text = "word ".repeat(200);
        assert_eq!(analyze(&text).reading_time, 1);
    }

    #[test]
    fn test_keywords_stripped_and_filtered() {
        let a = analyze("Rust's \"rust\" RUST! the and a tool-kit");
        assert_eq!(a.top_words[0], KeywordCount { word: "rust".into(), count: 2 });
        assert!(a.top_words.iter().any(|k| k.word == "rusts"));
        assert!(a.top_words.iter().any(|k| k.word == "toolkit"));
        assert!(a.top_words.iter().all(|k| k.word.len() > MIN_KEYWORD_LEN));
    }

    #[test]
    fn test_keyword_ties_keep_first_seen_order() {
        let a = analyze("zeta alpha beta gamma alpha zeta");
        let words: Vec<&str> = a.top_words.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["zeta", "alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_keywords_capped_at_ten() {
        let text = (0..25)
            .map(|i| format!("token{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let a = analyze(&text);
        assert_eq!(a.top_words.len(), TOP_KEYWORDS);
        assert_eq!(a.top_words[0].word, "token00");
    }

    #[test]
    fn test_keywords_sorted_descending() {
        let a = analyze("once twice twice thrice thrice thrice");
        let counts: Vec<usize> = a.top_words.iter().map(|k| k.count).collect();
        assert_eq!(counts, vec![3, 2, 1]);
    }

    #[test]
    fn test_sentiment() {
        assert_eq!(analyze("A great and wonderful day.").sentiment, Sentiment::Positive);
        assert_eq!(analyze("terrible news is bad news").sentiment, Sentiment::Negative);
        assert_eq!(analyze("good and bad news").sentiment, Sentiment::Neutral);
        // punctuation is not stripped before matching
        assert_eq!(analyze("It was bad.").sentiment, Sentiment::Neutral);
    }
}
