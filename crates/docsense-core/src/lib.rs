//! # DocSense Core
//!
//! Shared, WASM-safe logic for DocSense: data models, document statistics,
//! relevance-scored sentence retrieval, the rule-based answer formatter,
//! the key-value store abstraction, and the session controller.
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or other
//! native-only dependencies.
//!
//! ## Pipeline
//!
//! ```text
//! upload ──▶ analyze() ──▶ Analysis (cached on the Document)
//!
//! query ──▶ extract_context() ──▶ generate_answer() ──▶ ChatTurn::ai
//! ```
//!
//! ```rust
//! use docsense_core::{analyze::analyze, answer::generate_answer, retrieve::extract_context};
//!
//! let text = "Cats are mammals. Dogs are mammals too. Cats and dogs are common pets.";
//! let stats = analyze(text);
//! assert_eq!(stats.sentence_count, 3);
//!
//! let context = extract_context(text, "What is a cat?");
//! assert!(context.starts_with("Cats are mammals"));
//! assert_eq!(generate_answer(&context, "What is a cat?"), "Cats are mammals.");
//! ```

pub mod analyze;
pub mod answer;
pub mod models;
pub mod retrieve;
pub mod session;
pub mod store;
pub mod text;
