//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::assistant::{WebhookRequest, WebhookResponse, fulfill};
use crate::provider::StationSource;

use super::dto::ErrorResponse;
use super::state::AppState;

/// Characters of a rejected body kept in the debug log.
const LOGGED_BODY_CHARS: usize = 512;

/// Create the application router.
pub fn create_router<S: StationSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/fulfillment", post(fulfillment::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Assistant fulfillment webhook.
///
/// Always answers 200 with a reply for well-formed requests; only an
/// unparseable body is an HTTP error.
async fn fulfillment<S: StationSource + 'static>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<WebhookResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: WebhookRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, len = body.len(), "invalid webhook body");
        debug!(body = %body_preview(&body), "rejected webhook body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let reply = fulfill(state.source.as_ref(), &state.contract, &req).await;
    Ok(Json(reply))
}

/// The start of `body` as text, cut at [`LOGGED_BODY_CHARS`].
fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(LOGGED_BODY_CHARS) {
        Some((cut, _)) => format!("{}... ({} bytes)", &text[..cut], body.len()),
        None => text.into_owned(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
