//! Login handler

use axum::body::Bytes;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::gateway::types::LoginRequest;
use crate::login::verify;

/// Verify a signed challenge
///
/// The body is parsed as JSON whatever the `Content-Type`. Errors never
/// carry a body; the reason is only logged.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Signature matches the public key"),
        (status = 400, description = "Malformed request or signature rejected"),
        (status = 405, description = "Method not allowed")
    ),
    tag = "Login"
)]
pub async fn login(body: Bytes) -> StatusCode {
    let req: LoginRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!("[LOGIN] Malformed request: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };

    match verify(
        &req.challenge_hidden,
        &req.challenge_visual,
        &req.public_key,
        &req.signature,
        req.version,
    ) {
        Ok(()) => {
            tracing::info!(public_key = %req.public_key, "[LOGIN] Accepted");
            StatusCode::CREATED
        }
        Err(e) if e.is_auth_failure() => {
            tracing::warn!(public_key = %req.public_key, "[LOGIN] Rejected: {}", e);
            StatusCode::BAD_REQUEST
        }
        Err(e) => {
            tracing::warn!("[LOGIN] Bad request: {}", e);
            StatusCode::BAD_REQUEST
        }
    }
}

/// CORS preflight for `/login`.
pub async fn login_preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "content-type"),
        ],
    )
}
