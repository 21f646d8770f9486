//! Lead capture client for the LeadLab backend.
//!
//! [`LeadForm`] is the contact form's controller: it owns one visitor draft
//! at a time, submits it to the lead-storage service, and maps the outcome
//! to a user-facing notification. While a submission is in flight, further
//! submits are dropped rather than queued, so a double-click never records
//! a duplicate lead.
//!
//! # Example
//!
//! ```rust,no_run
//! use leadlab_client::{LeadField, LeadForm, LeadFormConfig, SubmitOutcome};
//!
//! # async fn example() -> Result<(), leadlab_client::LeadClientError> {
//! let form = LeadForm::new(LeadFormConfig::new("http://127.0.0.1:8080"))?;
//! form.update_field(LeadField::Name, "Ana").await;
//! form.update_field(LeadField::Email, "ana@x.com").await;
//! form.update_field(LeadField::Message, "Oi").await;
//!
//! match form.submit().await {
//!     SubmitOutcome::Accepted { message } => println!("{message}"),
//!     other => eprintln!("{:?}", other.notification()),
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod form;
mod types;

pub use error::LeadClientError;
pub use form::LeadForm;
pub use types::{LeadDraft, LeadField, Notification, NotificationKind, SubmitOutcome};

use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure text shown to the visitor when a submission does not go through.
///
/// Collaborator rejection and transport failure share this text on purpose;
/// the tagged [`SubmitOutcome`] is where the two are told apart.
pub const GENERIC_FAILURE_MESSAGE: &str = "Erro ao enviar mensagem. Tente novamente.";

/// Configuration for a [`LeadForm`].
#[derive(Debug, Clone)]
pub struct LeadFormConfig {
    /// Base URL of the lead-storage service, e.g. `http://127.0.0.1:8080`.
    /// The form posts to `{base_url}/api/leads`.
    pub base_url: String,
    /// Request timeout. Default: 10 seconds.
    pub timeout: Duration,
}

impl LeadFormConfig {
    /// Configuration with the given base URL and the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
