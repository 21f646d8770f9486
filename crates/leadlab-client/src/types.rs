//! Public types for the LeadLab client.

use serde::{Deserialize, Serialize};

use crate::GENERIC_FAILURE_MESSAGE;

/// Identifies one editable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    /// Visitor name.
    Name,
    /// Visitor email address.
    Email,
    /// Free-form message.
    Message,
}

/// The not-yet-submitted visitor input held by the form.
///
/// Serializes to the backend's wire field names (`nome`, `email`,
/// `mensagem`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadDraft {
    /// Visitor name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Visitor email address.
    pub email: String,
    /// Free-form message.
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl LeadDraft {
    /// Whether all three required fields are filled in.
    ///
    /// This is the required-field gate a host should check before calling
    /// [`submit`](crate::LeadForm::submit); the form itself performs no
    /// further client-side validation (format and length checks are the
    /// backend's concern).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    pub(crate) fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Message => self.message = value,
        }
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The collaborator recorded the lead. Carries its confirmation text.
    Accepted {
        /// Confirmation message supplied by the backend.
        message: String,
    },
    /// The collaborator answered but declined to record the lead
    /// (`success: false` or a non-2xx status).
    Rejected,
    /// The request never completed: connection error, timeout, or a
    /// malformed response body.
    TransportFailed,
    /// Another submission was already in flight; no request was issued.
    Dropped,
}

impl SubmitOutcome {
    /// The user-facing notification for this outcome, if any.
    ///
    /// Rejection and transport failure deliberately share the same generic
    /// text. A dropped submit produces no notification.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::Accepted { message } => Some(Notification {
                kind: NotificationKind::Success,
                text: message.clone(),
            }),
            Self::Rejected | Self::TransportFailed => Some(Notification {
                kind: NotificationKind::Error,
                text: GENERIC_FAILURE_MESSAGE.to_owned(),
            }),
            Self::Dropped => None,
        }
    }
}

/// A success or failure signal for the hosting surface to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Whether this is a success or an error notification.
    pub kind: NotificationKind,
    /// Text to display.
    pub text: String,
}

/// Kind of [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The lead was recorded.
    Success,
    /// The submission failed; the visitor should retry.
    Error,
}

// --- Internal API response types ---

/// Acknowledgment body returned by `POST /api/leads`.
#[derive(Debug, Deserialize)]
pub(crate) struct LeadAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
