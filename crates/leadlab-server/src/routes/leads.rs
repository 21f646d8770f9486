//! Lead routes: `/api/leads`
//!
//! Accepts lead-capture submissions from the marketing site's contact form
//! and lists what has been recorded.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;
use leadlab_storage::{Lead, NewLead};

const MAX_NAME_CHARS: usize = 100;
const MAX_MESSAGE_CHARS: usize = 1000;

/// Validate a submitted lead against the form's constraints.
///
/// - All three fields are required (non-empty).
/// - `nome` is capped at 100 characters, `mensagem` at 1000.
/// - `email` must look like an address: something before an `@`, and a
///   dot somewhere after it.
fn validate_lead(lead: &NewLead) -> Result<(), AppError> {
    if lead.name.is_empty() {
        return Err(AppError::BadRequest("nome must not be empty".to_owned()));
    }
    if lead.name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::BadRequest(format!(
            "nome exceeds {MAX_NAME_CHARS} characters"
        )));
    }

    let email_ok = match lead.email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !email_ok {
        return Err(AppError::BadRequest(
            "email is not a valid address".to_owned(),
        ));
    }

    if lead.message.is_empty() {
        return Err(AppError::BadRequest(
            "mensagem must not be empty".to_owned(),
        ));
    }
    if lead.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::BadRequest(format!(
            "mensagem exceeds {MAX_MESSAGE_CHARS} characters"
        )));
    }

    Ok(())
}

/// Build the leads router.
///
/// Paths:
/// - `POST /api/leads` — record a lead
/// - `GET  /api/leads` — list recorded leads
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/leads", get(list_leads).post(create_lead))
}

// ── Response types ───────────────────────────────────────────────────

/// Acknowledgment returned to the contact form.
#[derive(Debug, Serialize)]
pub struct LeadAck {
    pub success: bool,
    pub message: String,
    pub lead_id: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// Record a lead submitted by the contact form.
async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewLead>,
) -> Result<Json<LeadAck>, AppError> {
    validate_lead(&body)?;

    let lead = state.store.insert(body).await.map_err(|err| {
        error!(error = %err, "failed to record lead");
        AppError::from(err)
    })?;

    info!(lead_id = %lead.id, "lead captured");

    Ok(Json(LeadAck {
        success: true,
        message: "Mensagem enviada com sucesso!".to_owned(),
        lead_id: Some(lead.id),
    }))
}

/// List recorded leads, capped at the configured limit.
async fn list_leads(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Lead>>, AppError> {
    let leads = state.store.list(state.list_limit).await?;
    Ok(Json(leads))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, email: &str, message: &str) -> NewLead {
        NewLead {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn complete_lead_passes() {
        assert!(validate_lead(&lead("Ana", "ana@x.com", "Oi")).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_lead(&lead("", "ana@x.com", "Oi")).is_err());
    }

    #[test]
    fn empty_message_is_rejected() {
        assert!(validate_lead(&lead("Ana", "ana@x.com", "")).is_err());
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert!(validate_lead(&lead("Ana", "ana.x.com", "Oi")).is_err());
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        assert!(validate_lead(&lead("Ana", "ana@localhost", "Oi")).is_err());
    }

    #[test]
    fn email_without_local_part_is_rejected() {
        assert!(validate_lead(&lead("Ana", "@x.com", "Oi")).is_err());
    }

    #[test]
    fn name_at_the_limit_passes() {
        assert!(validate_lead(&lead(&"x".repeat(100), "a@x.com", "Oi")).is_ok());
    }

    #[test]
    fn overlong_name_is_rejected() {
        assert!(validate_lead(&lead(&"x".repeat(101), "a@x.com", "Oi")).is_err());
    }

    #[test]
    fn overlong_message_is_rejected() {
        assert!(validate_lead(&lead("Ana", "a@x.com", &"m".repeat(1001))).is_err());
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        // 100 multibyte chars are more than 100 bytes but still valid.
        assert!(validate_lead(&lead(&"ç".repeat(100), "a@x.com", "Oi")).is_ok());
    }
}
