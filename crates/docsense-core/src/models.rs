//! Core data models used throughout DocSense.
//!
//! These types represent the uploaded documents, their cached statistics,
//! and the question-answering transcript. All of them serialize with
//! camelCase field names, which is the shape persisted under the
//! collection key and returned by the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of characters kept in an AI turn's context excerpt.
pub const EXCERPT_CHARS: usize = 200;

/// Marker appended to a truncated context excerpt.
pub const EXCERPT_ELLIPSIS: &str = "...";

/// A single keyword and how often it occurs in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Coarse document tone derived from fixed positive/negative word lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Precomputed statistics describing a document's structure and vocabulary.
///
/// Computed once at upload time by [`analyze`](crate::analyze::analyze)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub sentence_count: usize,
    pub word_count: usize,
    pub paragraph_count: usize,
    /// Rounded to one decimal place; `0.0` when there are no sentences.
    pub avg_words_per_sentence: f64,
    /// Up to ten keywords, most frequent first.
    pub top_words: Vec<KeywordCount>,
    /// Whole minutes at 200 words per minute, rounded up.
    pub reading_time: usize,
    #[serde(default)]
    pub sentiment: Sentiment,
}

/// An uploaded document plus its derived metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Time-derived identifier, strictly increasing within a collection.
    pub id: i64,
    pub name: String,
    pub content: String,
    pub uploaded_at: DateTime<Utc>,
    pub word_count: usize,
    /// Size in kilobytes derived from the character count.
    pub size_kb: f64,
    pub analysis: Analysis,
}

impl Document {
    /// Listing projection without the document body.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id,
            name: self.name.clone(),
            uploaded_at: self.uploaded_at,
            word_count: self.word_count,
            size_kb: self.size_kb,
        }
    }
}

/// Document metadata for library listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: i64,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub word_count: usize,
    pub size_kb: f64,
}

/// Who produced a [`ChatTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
    Ai,
}

/// One entry in the question-answering transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    /// Retrieved context excerpt; only present on [`Role::Ai`] turns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            context: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            context: None,
        }
    }

    /// Build an AI turn, truncating `context` to [`EXCERPT_CHARS`]
    /// characters followed by [`EXCERPT_ELLIPSIS`].
    pub fn ai(content: impl Into<String>, context: &str) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
            context: Some(excerpt(context)),
        }
    }
}

/// Truncate on a character boundary and append the ellipsis marker.
pub fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_CHARS).collect();
    out.push_str(EXCERPT_ELLIPSIS);
    out
}
