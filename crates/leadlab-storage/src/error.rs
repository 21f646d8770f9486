//! Error type for lead stores.

/// Errors returned by [`LeadStore`](crate::LeadStore) implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A lead could not be written.
    #[error("failed to record lead: {0}")]
    Write(String),

    /// Leads could not be read back.
    #[error("failed to read leads: {0}")]
    Read(String),
}
