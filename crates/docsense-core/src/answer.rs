//! Rule-based answer formatting.
//!
//! [`generate_answer`] shapes retrieved context into a reply by looking at
//! superficial keywords in the query. The dispatch is deliberately shallow
//! and its precedence is fixed; the first matching rule wins:
//!
//! | Order | Query contains | Reply |
//! |-------|----------------|-------|
//! | 1 | `summar` | first three context sentences as a summary |
//! | 2 | `how many` or `count` | numbers found in the context plus the first sentence |
//! | 3 | `what is` or `define` | first context sentence |
//! | 4 | anything else | first three context sentences |
//!
//! The count rule falls through to the default reply when the context
//! contains no digits.

use regex::Regex;
use std::sync::LazyLock;

use crate::retrieve::CONTEXT_SEPARATOR;
use crate::text::split_sentences;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"[0-9]+") {
    Ok(regex) => regex,
    Err(err) => panic!("digit regex is invalid: {err}"),
});

/// Sentences quoted by the summary and default replies.
const QUOTED_SENTENCES: usize = 3;

/// Numbers listed by the count reply.
const LISTED_NUMBERS: usize = 5;

/// Reply used when a definition is requested but the context is empty.
pub const NO_DEFINITION: &str = "I couldn't find a specific definition in the document.";

/// The rule a query is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Summary,
    Count,
    Definition,
    General,
}

/// Classify a query by keyword, in fixed precedence order.
pub fn classify_query(query: &str) -> QueryKind {
    let q = query.to_lowercase();
    if q.contains("summar") {
        QueryKind::Summary
    } else if q.contains("how many") || q.contains("count") {
        QueryKind::Count
    } else if q.contains("what is") || q.contains("define") {
        QueryKind::Definition
    } else {
        QueryKind::General
    }
}

/// Format a reply to `query` from the retrieved `context`.
pub fn generate_answer(context: &str, query: &str) -> String {
    let sentences = split_sentences(context);

    match classify_query(query) {
        QueryKind::Summary => format!(
            "Here's a summary based on the document: {}.",
            leading(&sentences)
        ),
        QueryKind::Count => {
            let numbers: Vec<&str> = DIGIT_RUN
                .find_iter(context)
                .take(LISTED_NUMBERS)
                .map(|m| m.as_str())
                .collect();
            if numbers.is_empty() {
                return general(&sentences);
            }
            let mut reply = format!(
                "Based on the document, I found these numbers: {}.",
                numbers.join(", ")
            );
            if let Some(first) = sentences.first() {
                reply.push(' ');
                reply.push_str(first);
                reply.push('.');
            }
            reply
        }
        QueryKind::Definition => match sentences.first() {
            Some(first) => format!("{}.", first.trim()),
            None => NO_DEFINITION.to_string(),
        },
        QueryKind::General => general(&sentences),
    }
}

fn general(sentences: &[&str]) -> String {
    format!("Based on the document: {}.", leading(sentences))
}

fn leading(sentences: &[&str]) -> String {
    sentences
        .iter()
        .take(QUOTED_SENTENCES)
        .copied()
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}
