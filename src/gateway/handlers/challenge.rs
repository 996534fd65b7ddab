//! Challenge handler

use axum::Json;

use crate::gateway::types::ChallengeResponse;
use crate::login::ChallengePair;

/// Issue a login challenge
///
/// Returns a fresh hidden/visual pair. Nothing is stored server side.
#[utoipa::path(
    get,
    path = "/challenge",
    responses(
        (status = 200, description = "New challenge pair", body = ChallengeResponse, content_type = "application/json"),
        (status = 405, description = "Method not allowed")
    ),
    tag = "Login"
)]
pub async fn challenge() -> Json<ChallengeResponse> {
    let pair = ChallengePair::issue();
    tracing::debug!(visual = %pair.visual, "[CHALLENGE] issued");

    Json(ChallengeResponse {
        challenge_hidden: pair.hidden.to_hex(),
        challenge_visual: pair.visual.to_string(),
    })
}
