use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_derive::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::auth::authenticate;
use crate::decode::Webhook;
use crate::error::WebhookError;
use crate::event::EventKind;
use crate::models::Id;
use crate::routes::SharedAppState;

/// An accepted delivery, as published to in-process subscribers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Delivery {
    pub event: EventKind,
    pub webhook: Webhook,
}

#[derive(Debug, Serialize)]
pub struct DeliverySummary {
    pub event: EventKind,
    pub member_id: Id,
    pub patron_status: Option<String>,
    pub campaign: Option<Id>,
    pub user: Option<Id>,
    pub rewards: usize,
    pub tiers: usize,
    pub goals: usize,
}

impl From<&Delivery> for DeliverySummary {
    fn from(value: &Delivery) -> Self {
        let webhook = &value.webhook;
        Self {
            event: value.event.clone(),
            member_id: webhook.data.id.clone(),
            patron_status: webhook.data.attributes.patron_status.clone(),
            campaign: webhook.campaign.as_ref().map(|c| c.id.clone()),
            user: webhook.user.as_ref().map(|u| u.id.clone()),
            rewards: webhook.rewards.len(),
            tiers: webhook.tiers.len(),
            goals: webhook.goals.len(),
        }
    }
}

pub async fn handler(
    State(state): State<SharedAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DeliverySummary>, ApiError> {
    let verified = authenticate(&headers, &body[..], &state.secret)?;
    let delivery = Delivery {
        event: verified.event_kind(),
        webhook: verified.decode()?,
    };
    info!(
        event = %delivery.event,
        member = %delivery.webhook.data.id,
        "Patreon webhook received"
    );

    let summary = DeliverySummary::from(&delivery);
    if let Some(tx) = &state.tx {
        if tx.send(delivery).is_err() {
            debug!("no subscribers for Patreon deliveries");
        }
    }

    Ok(Json(summary))
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::Webhook(err) => match err {
                WebhookError::MissingHeaders => StatusCode::BAD_REQUEST,
                WebhookError::SignatureMismatch => StatusCode::UNAUTHORIZED,
                WebhookError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
                WebhookError::UnknownEntityKind(_) => StatusCode::UNPROCESSABLE_ENTITY,
                WebhookError::Io(_) | WebhookError::InvalidSecret => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };
        warn!(status = %code, error = %self, "Patreon webhook rejected");

        let payload = json!({
            "message": self.to_string(),
            "origin": "patreon_webhook"
        });
        (code, Json(payload)).into_response()
    }
}
