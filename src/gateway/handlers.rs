mod challenge;
mod login;

pub use challenge::*;
pub use login::*;

use axum::http::StatusCode;

/// Explicit 405 for methods axum would otherwise route implicitly (HEAD).
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
