//! Session controller.
//!
//! A [`Session`] owns the document collection, the active selection, and
//! the chat transcript for that selection. Persistence goes through an
//! injected [`KeyValueStore`]: the collection is read once by
//! [`Session::load`] and written back after every upload or delete.
//!
//! # Query flow
//!
//! ```text
//! begin_query ──▶ [optional latency] ──▶ complete_query
//!   │                                        │
//!   ├─ reject empty query                    ├─ extract_context()
//!   ├─ reject missing selection              ├─ generate_answer()
//!   └─ append user turn                      └─ append ai turn
//! ```
//!
//! [`Session::ask`] runs both halves back to back. All mutation goes
//! through `&mut self`, so a caller sharing a session between tasks must
//! hold its lock across both halves; that serializes queries per session.

use anyhow::Context;
use chrono::Utc;
use thiserror::Error;

use crate::analyze::analyze;
use crate::answer::generate_answer;
use crate::models::{ChatTurn, Document, DocumentSummary};
use crate::retrieve::extract_context;
use crate::store::{KeyValueStore, DOCUMENTS_KEY};

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("query must not be empty")]
    EmptyQuery,
    #[error("no document is selected")]
    NoActiveDocument,
    #[error("document not found: {0}")]
    NotFound(i64),
    #[error("the selected document changed while the query was pending")]
    StaleQuery,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A query that has been accepted and recorded but not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub document_id: i64,
    pub query: String,
}

/// Document collection, active selection, and chat history.
pub struct Session<S: KeyValueStore> {
    store: S,
    storage_key: String,
    documents: Vec<Document>,
    active: Option<i64>,
    chat: Vec<ChatTurn>,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the collection stored under [`DOCUMENTS_KEY`].
    pub async fn load(store: S) -> Result<Self, SessionError> {
        Self::load_with_key(store, DOCUMENTS_KEY).await
    }

    /// Load the collection stored under `key`. A missing key is an empty
    /// collection.
    pub async fn load_with_key(store: S, key: &str) -> Result<Self, SessionError> {
        let documents: Vec<Document> = match store.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse stored document collection '{}'", key))?,
            None => Vec::new(),
        };

        Ok(Self {
            store,
            storage_key: key.to_string(),
            documents,
            active: None,
            chat: Vec::new(),
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn summaries(&self) -> Vec<DocumentSummary> {
        self.documents.iter().map(Document::summary).collect()
    }

    pub fn document(&self, id: i64) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn active_id(&self) -> Option<i64> {
        self.active
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.and_then(|id| self.document(id))
    }

    pub fn chat(&self) -> &[ChatTurn] {
        &self.chat
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Analyze and store a new document, then make it the active one.
    ///
    /// The chat is reset to a single system turn announcing the upload.
    pub async fn upload(&mut self, name: &str, content: &str) -> Result<&Document, SessionError> {
        let analysis = analyze(content);
        let document = Document {
            id: self.next_id(),
            name: name.to_string(),
            content: content.to_string(),
            uploaded_at: Utc::now(),
            word_count: analysis.word_count,
            size_kb: size_kb(content),
            analysis,
        };
        let id = document.id;

        self.documents.push(document);
        if let Err(e) = self.persist().await {
            self.documents.pop();
            return Err(e);
        }

        tracing::info!(id, name, documents = self.documents.len(), "document uploaded");

        self.active = Some(id);
        self.chat = vec![ChatTurn::system(format!(
            "Document \"{}\" uploaded successfully! You can now ask questions about it.",
            name
        ))];

        self.document(id).ok_or(SessionError::NotFound(id))
    }

    /// Make `id` the active document. Switching documents clears the chat.
    pub fn select(&mut self, id: i64) -> Result<&Document, SessionError> {
        if self.document(id).is_none() {
            return Err(SessionError::NotFound(id));
        }
        if self.active != Some(id) {
            self.active = Some(id);
            self.chat.clear();
        }
        self.document(id).ok_or(SessionError::NotFound(id))
    }

    /// Remove a document. Deleting the active document also clears the
    /// selection and the chat.
    pub async fn delete(&mut self, id: i64) -> Result<Document, SessionError> {
        let pos = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or(SessionError::NotFound(id))?;

        let removed = self.documents.remove(pos);
        if let Err(e) = self.persist().await {
            self.documents.insert(pos, removed);
            return Err(e);
        }

        if self.active == Some(id) {
            self.active = None;
            self.chat.clear();
        }

        tracing::info!(id, name = %removed.name, "document deleted");
        Ok(removed)
    }

    /// Validate a query and record the user turn.
    pub fn begin_query(&mut self, query: &str) -> Result<PendingQuery, SessionError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SessionError::EmptyQuery);
        }
        let document_id = self.active.ok_or(SessionError::NoActiveDocument)?;

        self.chat.push(ChatTurn::user(query));
        Ok(PendingQuery {
            document_id,
            query: query.to_string(),
        })
    }

    /// Retrieve context, format the answer, and record the AI turn.
    pub fn complete_query(&mut self, pending: PendingQuery) -> Result<ChatTurn, SessionError> {
        if self.active != Some(pending.document_id) {
            return Err(SessionError::StaleQuery);
        }
        let document = self
            .document(pending.document_id)
            .ok_or(SessionError::NotFound(pending.document_id))?;

        let context = extract_context(&document.content, &pending.query);
        let answer = generate_answer(&context, &pending.query);
        tracing::debug!(
            document_id = pending.document_id,
            query = %pending.query,
            context_chars = context.chars().count(),
            "query answered"
        );

        let turn = ChatTurn::ai(answer, &context);
        self.chat.push(turn.clone());
        Ok(turn)
    }

    /// Ask a question about the active document.
    pub fn ask(&mut self, query: &str) -> Result<ChatTurn, SessionError> {
        let pending = self.begin_query(query)?;
        self.complete_query(pending)
    }

    async fn persist(&self) -> Result<(), SessionError> {
        let raw = serde_json::to_string(&self.documents)
            .context("failed to serialize document collection")?;
        self.store.set(&self.storage_key, &raw).await?;
        Ok(())
    }

    /// Millisecond timestamp, bumped past the newest existing id.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.documents.iter().map(|d| d.id).max() {
            Some(last) if now <= last => last + 1,
            _ => now,
        }
    }
}

/// Kilobytes derived from the character count, two decimals.
pub fn size_kb(content: &str) -> f64 {
    let kb = content.chars().count() as f64 / 1024.0;
    (kb * 100.0).round() / 100.0
}
