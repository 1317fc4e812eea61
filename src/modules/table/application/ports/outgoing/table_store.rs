// src/modules/table/application/ports/outgoing/table_store.rs

use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::records::Resource;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<&'static str>,
}

impl ListQuery {
    /// The query every ordered collection uses: one big page, backend-sorted
    /// by the advisory `order` field.
    pub fn sorted_by_order() -> Self {
        Self {
            page: None,
            limit: Some(100),
            sort: Some("order"),
        }
    }

    /// Singleton fetch (profile).
    pub fn single() -> Self {
        Self {
            page: None,
            limit: Some(1),
            sort: None,
        }
    }

    pub fn paged(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            sort: Some("order"),
        }
    }
}

/// The `{ data, total? }` envelope the table API wraps listings in.
/// `total` is only reported for paginated listings (projects).
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Both variants collapse into one opaque "operation failed" signal at the
/// controller boundary; nothing structured reaches the user.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableStoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Server(u16),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Outgoing port to the generic table API. Single-shot request/response:
/// no retry, no client-side timeout, no caching at this layer.
#[async_trait]
pub trait TableStore<T: Resource>: Send + Sync {
    async fn list(&self, query: ListQuery) -> Result<Page<T>, TableStoreError>;

    /// Persist a new record (no id); the returned record carries the
    /// server-assigned id.
    async fn create(&self, record: &T) -> Result<T, TableStoreError>;

    /// Full replace of an existing record.
    async fn update(&self, id: &str, record: &T) -> Result<T, TableStoreError>;

    /// Partial update; `fields` is the JSON object of fields to change.
    async fn patch(&self, id: &str, fields: serde_json::Value)
        -> Result<T, TableStoreError>;

    async fn delete(&self, id: &str) -> Result<(), TableStoreError>;
}
