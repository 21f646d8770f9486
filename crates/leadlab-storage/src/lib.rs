//! Lead storage abstraction for LeadLab.
//!
//! This crate defines the [`LeadStore`] trait — the seam through which the
//! HTTP server records captured leads, so route handlers stay agnostic of
//! the backing store.
//!
//! One implementation is provided:
//!
//! - [`MemoryStore`] — in-memory, for development and tests. A persistent
//!   backend only needs to implement the trait.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visitor-supplied fields for a lead about to be recorded.
///
/// Field names on the wire are the marketing site's Portuguese ones
/// (`nome`, `email`, `mensagem`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    /// Visitor name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Visitor email address.
    pub email: String,
    /// Free-form message.
    #[serde(rename = "mensagem")]
    pub message: String,
}

/// A recorded lead, as stored and as returned by list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Server-assigned UUID.
    pub id: String,
    /// Visitor name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Visitor email address.
    pub email: String,
    /// Free-form message.
    #[serde(rename = "mensagem")]
    pub message: String,
    /// UTC timestamp assigned when the lead was recorded.
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Promote visitor input to a stored lead, assigning id and timestamp.
    #[must_use]
    pub fn record(new: NewLead) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            message: new.message,
            created_at: Utc::now(),
        }
    }
}

/// A pluggable store for captured leads.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait LeadStore: Send + Sync + 'static {
    /// Record a new lead, assigning it an id and creation timestamp.
    ///
    /// Returns the stored lead so callers can report its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the underlying store fails.
    async fn insert(&self, lead: NewLead) -> Result<Lead, StoreError>;

    /// List recorded leads in insertion order, up to `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the underlying store fails.
    async fn list(&self, limit: usize) -> Result<Vec<Lead>, StoreError>;

    /// Number of recorded leads.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the underlying store fails.
    async fn count(&self) -> Result<usize, StoreError>;
}
