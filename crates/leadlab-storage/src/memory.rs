//! In-memory lead store.
//!
//! Leads live in a `Vec` behind a `RwLock`, in insertion order. Nothing is
//! persisted — all data is lost when the process exits. Use this for
//! development and tests, where a real store without external services is
//! what you want.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Lead, LeadStore, NewLead, StoreError};

/// An in-memory [`LeadStore`] backed by a `Vec`.
///
/// Thread-safe and async-compatible. Cloning shares the underlying data.
///
/// # Examples
///
/// ```
/// # use leadlab_storage::{LeadStore, MemoryStore, NewLead};
/// # #[tokio::main]
/// # async fn main() {
/// let store = MemoryStore::new();
/// let lead = store
///     .insert(NewLead {
///         name: "Ana".to_owned(),
///         email: "ana@x.com".to_owned(),
///         message: "Oi".to_owned(),
///     })
///     .await
///     .unwrap();
/// assert!(!lead.id.is_empty());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl LeadStore for MemoryStore {
    async fn insert(&self, lead: NewLead) -> Result<Lead, StoreError> {
        let lead = Lead::record(lead);
        let mut leads = self.leads.write().await;
        leads.push(lead.clone());
        tracing::debug!(lead_id = %lead.id, "lead stored in memory");
        Ok(lead)
    }

    async fn list(&self, limit: usize) -> Result<Vec<Lead>, StoreError> {
        let leads = self.leads.read().await;
        Ok(leads.iter().take(limit).cloned().collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let leads = self.leads.read().await;
        Ok(leads.len())
    }
}
