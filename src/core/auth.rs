use crate::core::{AppError, AppState};
use crate::token::TokenKind;
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Utente autenticato, inserito nelle extension della richiesta dal middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Estrae il token dall'header `Authorization: Bearer <token>`
pub fn bearer_token(req: &Request) -> Result<&str, AppError> {
    let auth_header = match req.headers().get(http::header::AUTHORIZATION) {
        Some(header) => header.to_str().map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::unauthorized("Invalid authorization header")
        })?,
        None => {
            warn!("Missing authorization header");
            return Err(AppError::unauthorized(
                "Please add the access token to the header",
            ));
        }
    };

    let mut header = auth_header.split_whitespace();
    match (header.next(), header.next(), header.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => {
            warn!("Authorization header is not a bearer token");
            Err(AppError::unauthorized("Expected a bearer token"))
        }
    }
}

/// Middleware di autenticazione: accetta solo access token validi e
/// inserisce `AuthenticatedUser` nelle extension.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let verified = {
        let token = bearer_token(&req)?;
        state.verifier.verify_kind(token, TokenKind::Access)?
    };

    info!("User authenticated: {}", verified.subject_id);
    req.extensions_mut().insert(AuthenticatedUser {
        user_id: verified.subject_id,
    });
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(value: &str) -> Request {
        http::Request::builder()
            .header(http::header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_bearer_token_extracted() {
        let req = request_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&req).unwrap(), "abc.def.ghi");

        let req = request_with("bearer abc.def.ghi");
        assert_eq!(bearer_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_rejected() {
        for value in ["", "Bearer", "Basic dXNlcjpwYXNz", "Bearer a b"] {
            let err = bearer_token(&request_with(value)).unwrap_err();
            assert_eq!(err.status(), http::StatusCode::UNAUTHORIZED, "{value}");
        }

        let req = http::Request::builder().body(Body::empty()).unwrap();
        assert!(bearer_token(&req).is_err());
    }
}
