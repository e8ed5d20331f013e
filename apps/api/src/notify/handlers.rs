//! Axum route handler for the visitor notification endpoint.

use axum::{extract::State, Json};
use tracing::{error, info};

use crate::mailer::OutgoingEmail;
use crate::models::notify::{NotifyRequest, NotifyResponse};
use crate::notify::format::{build_subject, render_email_body};
use crate::state::AppState;

/// POST /api/notify
///
/// Best-effort: always answers 200. A missing configuration or a failed send
/// is reported in the response body so the chat experience is never blocked.
pub async fn handle_notify(
    State(state): State<AppState>,
    Json(request): Json<NotifyRequest>,
) -> Json<NotifyResponse> {
    let Some(notification) = state.config.notification.as_ref() else {
        info!("Email notification skipped: missing configuration");
        return Json(NotifyResponse::not_configured());
    };

    let email = OutgoingEmail {
        from: notification.sender.clone(),
        to: notification.recipients.clone(),
        subject: build_subject(&request.visitor),
        text: render_email_body(&request.visitor, &request.messages),
    };

    match state.mailer.send(&notification.api_key, &email).await {
        Ok(receipt) => {
            info!(
                "Visitor notification sent to {} recipient(s) (id: {})",
                email.to.len(),
                receipt.id.as_deref().unwrap_or("unknown")
            );
            Json(NotifyResponse::sent())
        }
        Err(e) => {
            error!("Email send error: {e}");
            Json(NotifyResponse::failed(e.message()))
        }
    }
}
