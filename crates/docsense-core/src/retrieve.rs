//! Lexical sentence retrieval.
//!
//! Scores every sentence of a document by how many query tokens it
//! contains and returns the best ones as a single "context" string.
//!
//! # Scoring
//!
//! 1. Split the document into sentences (see [`split_sentences`]).
//! 2. Lowercase the query and split it on whitespace. Tokens are used
//!    as-is: no length filter, no punctuation stripping.
//! 3. A sentence's score is the number of distinct query tokens that occur
//!    as substrings of the lowercased sentence. Repeated occurrences of a
//!    token do not add to the score.
//! 4. Keep sentences scoring above zero, stable-sort by descending score,
//!    and take the first [`MAX_CONTEXT_SENTENCES`].
//! 5. If nothing scored, fall back to the first
//!    [`MAX_CONTEXT_SENTENCES`] sentences in document order.
//!
//! The stable sort makes the output fully deterministic: equal scores keep
//! their document order.

use crate::text::split_sentences;

/// Maximum number of sentences joined into a context.
pub const MAX_CONTEXT_SENTENCES: usize = 5;

/// Separator placed between selected sentences.
pub const CONTEXT_SEPARATOR: &str = ". ";

/// A document sentence with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    /// Position of the sentence within the document.
    pub index: usize,
    /// Number of query tokens found in the sentence.
    pub score: usize,
    pub text: String,
}

/// Split a query into lowercase whitespace-delimited tokens.
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Rank the sentences of `content` against `query`.
///
/// Returns at most [`MAX_CONTEXT_SENTENCES`] sentences. Matching sentences
/// come first, ordered by descending score; when no sentence matches, the
/// leading sentences of the document are returned with a score of zero.
pub fn rank_sentences(content: &str, query: &str) -> Vec<ScoredSentence> {
    let sentences = split_sentences(content);
    let tokens = query_tokens(query);

    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .filter_map(|(index, sentence)| {
            let lower = sentence.to_lowercase();
            let score = tokens.iter().filter(|t| lower.contains(t.as_str())).count();
            (score > 0).then(|| ScoredSentence {
                index,
                score,
                text: sentence.to_string(),
            })
        })
        .collect();

    if scored.is_empty() {
        return sentences
            .iter()
            .take(MAX_CONTEXT_SENTENCES)
            .enumerate()
            .map(|(index, sentence)| ScoredSentence {
                index,
                score: 0,
                text: sentence.to_string(),
            })
            .collect();
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_CONTEXT_SENTENCES);
    scored
}

/// Return the sentences of `content` most relevant to `query`, joined
/// with [`CONTEXT_SEPARATOR`].
///
/// No trailing punctuation is added. An empty document yields an empty
/// string.
pub fn extract_context(content: &str, query: &str) -> String {
    rank_sentences(content, query)
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETS: &str = "Cats are mammals. Dogs are mammals too. Cats and dogs are common pets.";

    #[test]
    fn test_cat_query_starts_with_cats() {
        let context = extract_context(PETS, "What is a cat?");
        assert!(context.starts_with("Cats are mammals"), "got: {}", context);
    }

    #[test]
    fn test_highest_score_first() {
        let context = extract_context(PETS, "common pets");
        assert_eq!(context, "Cats and dogs are common pets");
    }

    #[test]
    fn test_ties_keep_document_order() {
        let ranked = rank_sentences(PETS, "dogs");
        let indices: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_token_counted_once_per_sentence() {
        let ranked = rank_sentences("the the the cat. a dog and a bird", "the dog");
        assert_eq!(ranked[0].score, 1);
        assert_eq!(ranked[1].score, 1);
        assert_eq!(ranked[0].index, 0);
    }

    #[test]
    fn test_query_punctuation_kept() {
        // "cat?" keeps its question mark and matches nothing
        let ranked = rank_sentences(PETS, "cat?");
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_no_overlap_falls_back_to_first_five() {
        let text = "One. Two. Three. Four. Five. Six. Seven.";
        assert_eq!(extract_context(text, "zebra"), "One. Two. Three. Four. Five");
    }

    #[test]
    fn test_no_overlap_short_document() {
        assert_eq!(extract_context("Only one sentence here", "zebra"), "Only one sentence here");
    }

    #[test]
    fn test_at_most_five_matches() {
        let text = (0..10)
            .map(|i| format!("match number {}", i))
            .collect::<Vec<_>>()
            .join(". ");
        let ranked = rank_sentences(&text, "match");
        assert_eq!(ranked.len(), MAX_CONTEXT_SENTENCES);
        assert_eq!(ranked[4].index, 4);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(extract_context("", "anything"), "");
        assert_eq!(extract_context("First. Second.", ""), "First. Second");
    }

    #[test]
    fn test_deterministic() {
        let q = "are mammals pets";
        assert_eq!(extract_context(PETS, q), extract_context(PETS, q));
    }
}
