//! Auth services - Rinnovo dei token e identità dell'utente autenticato

use crate::core::{AppError, AppState, AuthenticatedUser};
use crate::dtos::{MeDTO, RefreshRequestDTO, TokenPairDTO};
use crate::token::TokenKind;
use axum::{
    Extension,
    extract::{Json, State},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Scambia un refresh token valido con una nuova coppia access/refresh
#[instrument(skip(state, body))]
pub async fn refresh_tokens(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshRequestDTO>,
) -> Result<Json<TokenPairDTO>, AppError> {
    // 1. Verificare che il token sia un refresh token valido e non scaduto
    // 2. Emettere una nuova coppia per lo stesso utente
    let verified = state
        .verifier
        .verify_kind(&body.refresh_token, TokenKind::Refresh)?;

    let pair = state.issuer.issue_pair(verified.subject_id)?;

    info!("Tokens refreshed for user {}", verified.subject_id);
    Ok(Json(TokenPairDTO::new(pair, verified.subject_id)))
}

/// Restituisce l'id dell'utente autenticato dal middleware
pub async fn me(Extension(current_user): Extension<AuthenticatedUser>) -> Json<MeDTO> {
    Json(MeDTO {
        uid: current_user.user_id,
    })
}
