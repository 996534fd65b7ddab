//! OpenAPI Documentation
//!
//! Describes the two login endpoints. Export with
//! `cargo run --bin export_openapi`.

use utoipa::OpenApi;

use crate::gateway::types::{ChallengeResponse, LoginRequest};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Device Login API",
        version = "1.0.0",
        description = "Challenge/response login for hardware signing devices (secp256k1 signed messages).",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5050", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::challenge,
        crate::gateway::handlers::login,
    ),
    components(
        schemas(
            ChallengeResponse,
            LoginRequest,
        )
    ),
    tags(
        (name = "Login", description = "Challenge issue and signature verification")
    )
)]
pub struct ApiDoc;
