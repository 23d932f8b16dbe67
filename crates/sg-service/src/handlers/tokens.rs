//! Token issuance handler.
//!
//! `POST /api/token` - called by the mobile client to get an access token
//! before joining a room.

use crate::errors::SgError;
use crate::models::{TokenRequest, TokenResponse};
use crate::observability::metrics;
use crate::routes::AppState;
use crate::services::token_service;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[instrument(skip_all, name = "sg.token.generate")]
pub async fn generate_token(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Result<Json<TokenResponse>, SgError> {
    // Deserialize request body manually to return 400 (not Axum's default 422)
    let request: TokenRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(target: "sg.handlers.tokens", error = %e, "Invalid request body");
        metrics::record_token_issued("bad_request");
        SgError::BadRequest("Invalid request body".to_string())
    })?;

    if request.room_name.is_empty() {
        metrics::record_token_issued("bad_request");
        return Err(SgError::BadRequest("roomName must not be empty".to_string()));
    }
    if request.participant_identity.is_empty() {
        metrics::record_token_issued("bad_request");
        return Err(SgError::BadRequest(
            "participantIdentity must not be empty".to_string(),
        ));
    }

    match token_service::issue_token(
        &state.config,
        &request.room_name,
        &request.participant_identity,
        request.metadata.as_deref(),
    ) {
        Ok(response) => {
            info!(
                target: "sg.handlers.tokens",
                room = %request.room_name,
                identity = %request.participant_identity,
                "Issued room access token"
            );
            metrics::record_token_issued("success");
            Ok(Json(response))
        }
        Err(e) => {
            warn!(target: "sg.handlers.tokens", error = %e, "Token issuance failed");
            metrics::record_token_issued("error");
            Err(e)
        }
    }
}
