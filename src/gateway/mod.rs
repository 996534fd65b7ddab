pub mod handlers;
pub mod openapi;
pub mod types;

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;

/// Build the gateway router.
///
/// Routes:
/// - `GET /challenge` issues a challenge pair
/// - `POST /login` verifies a signed challenge (`OPTIONS` answers CORS preflight)
///
/// Every routed response, 405 included, carries
/// `Access-Control-Allow-Origin: *`.
pub fn router() -> Router {
    Router::new()
        .route(
            "/challenge",
            get(handlers::challenge).head(handlers::method_not_allowed),
        )
        .route(
            "/login",
            post(handlers::login).options(handlers::login_preflight),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}

/// Start HTTP Gateway server
pub async fn run_server(addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Gateway listening on http://{}", addr);
    println!("🚀 Gateway listening on http://{}", addr);
    println!("🎲 Challenge:  GET  /challenge");
    println!("🔑 Login:      POST /login");

    axum::serve(listener, router()).await?;
    Ok(())
}
