//! Board auth - token firmati per l'autenticazione delle API
//!
//! Il modulo `token` è indipendente da HTTP; `core` e `services`
//! lo collegano ad axum.

pub mod core;
pub mod dtos;
pub mod services;
pub mod token;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use token::{
    TokenConfig, TokenError, TokenIssuer, TokenKind, TokenPair, TokenVerifier, VerifiedToken,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::root;

    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .nest("/users", configure_user_routes(state.clone()))
        .with_state(state)
}

/// Configura le routes di autenticazione (refresh)
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new().route("/refresh", post(refresh_tokens))
}

/// Configura le routes che richiedono un access token
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/me", get(me))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
