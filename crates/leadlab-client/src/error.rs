//! Error types for the LeadLab client.

/// Errors that can occur when constructing a [`LeadForm`](crate::LeadForm).
///
/// Submission outcomes are not errors — `submit` always resolves to a
/// [`SubmitOutcome`](crate::SubmitOutcome), never an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum LeadClientError {
    /// Missing or invalid configuration.
    #[error("lead form config error: {0}")]
    Config(String),

    /// The underlying HTTP client could not be built.
    #[error("lead form http error: {0}")]
    Http(#[from] reqwest::Error),
}
