//! Lead form controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::LeadClientError;
use crate::types::{LeadAck, LeadDraft, LeadField, SubmitOutcome};
use crate::LeadFormConfig;

/// Controller for one lead-capture form.
///
/// Owns the visitor draft and the in-flight status. Cloning is cheap and
/// shares both, which is how a host wires one form to several UI callbacks.
#[derive(Clone)]
pub struct LeadForm {
    inner: Arc<FormInner>,
}

struct FormInner {
    base_url: String,
    http: reqwest::Client,
    draft: RwLock<LeadDraft>,
    submitting: AtomicBool,
}

impl LeadForm {
    /// Create a form posting to the given backend.
    ///
    /// The draft starts with all fields empty.
    ///
    /// # Errors
    ///
    /// Returns [`LeadClientError::Config`] if the base URL is empty, or
    /// [`LeadClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: LeadFormConfig) -> Result<Self, LeadClientError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(LeadClientError::Config(
                "missing base URL — pass the backend address in LeadFormConfig".to_owned(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("leadlab-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(FormInner {
                base_url,
                http,
                draft: RwLock::new(LeadDraft::default()),
                submitting: AtomicBool::new(false),
            }),
        })
    }

    /// Replace one field of the draft. The other two fields keep their
    /// current values. Always succeeds.
    pub async fn update_field(&self, field: LeadField, value: impl Into<String>) {
        let mut draft = self.inner.draft.write().await;
        draft.set(field, value.into());
    }

    /// Snapshot of the current draft.
    pub async fn draft(&self) -> LeadDraft {
        self.inner.draft.read().await.clone()
    }

    /// Whether a submission is currently in flight.
    ///
    /// Hosts use this to disable the submit control.
    pub fn is_submitting(&self) -> bool {
        self.inner.submitting.load(Ordering::SeqCst)
    }

    /// Submit the current draft to the lead-storage service.
    ///
    /// At most one submission is in flight per form: while one is pending,
    /// further calls return [`SubmitOutcome::Dropped`] without touching the
    /// network. Otherwise exactly one request is issued, and the status is
    /// back to idle by the time the returned future resolves — on every
    /// path, including cancellation.
    ///
    /// The draft is cleared only when the collaborator confirms the lead.
    /// Any failure leaves it intact so the visitor can resubmit without
    /// retyping.
    pub async fn submit(&self) -> SubmitOutcome {
        // Check-and-set, not a lock: the only contention is repeated clicks.
        if self
            .inner
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("submission already in flight, dropping");
            return SubmitOutcome::Dropped;
        }
        let _idle = IdleOnDrop(&self.inner.submitting);

        let snapshot = self.inner.draft.read().await.clone();
        let outcome = self.post_lead(&snapshot).await;

        if matches!(outcome, SubmitOutcome::Accepted { .. }) {
            let mut draft = self.inner.draft.write().await;
            *draft = LeadDraft::default();
        }

        outcome
    }

    async fn post_lead(&self, draft: &LeadDraft) -> SubmitOutcome {
        let url = format!("{}/api/leads", self.inner.base_url);

        let response = match self.inner.http.post(&url).json(draft).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "lead submission could not reach the backend");
                return SubmitOutcome::TransportFailed;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "backend declined the lead");
            return SubmitOutcome::Rejected;
        }

        match response.json::<LeadAck>().await {
            Ok(ack) if ack.success => SubmitOutcome::Accepted {
                message: ack.message,
            },
            Ok(_) => {
                warn!("backend answered but did not record the lead");
                SubmitOutcome::Rejected
            }
            Err(err) => {
                warn!(error = %err, "malformed acknowledgment from backend");
                SubmitOutcome::TransportFailed
            }
        }
    }
}

impl std::fmt::Debug for LeadForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadForm")
            .field("base_url", &self.inner.base_url)
            .field("submitting", &self.is_submitting())
            .finish_non_exhaustive()
    }
}

/// Resets the submitting flag when the attempt ends, however it ends.
struct IdleOnDrop<'a>(&'a AtomicBool);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
