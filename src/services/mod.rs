//! Services module - Handler HTTP esposti dal layer di autenticazione

pub mod auth;

// Re-exports per facilitare l'import
pub use auth::{me, refresh_tokens};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
