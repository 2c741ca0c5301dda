use crate::token::TokenError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Codice applicativo per token non valido o del tipo sbagliato
pub const CODE_INVALID_TOKEN: u32 = 40002;
/// Codice applicativo per token scaduto
pub const CODE_EXPIRED_TOKEN: u32 = 40003;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    code: Option<u32>,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            code: None,
            details: None,
        }
    }

    pub fn with_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken => {
                Self::unauthorized("Invalid token").with_code(CODE_INVALID_TOKEN)
            }
            TokenError::WrongKind => Self::unauthorized("Invalid token")
                .with_code(CODE_INVALID_TOKEN)
                .with_details("Wrong token type"),
            TokenError::Expired => {
                Self::unauthorized("Token expired").with_code(CODE_EXPIRED_TOKEN)
            }
            TokenError::Internal => Self::internal_server_error("Internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            code: self.code,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_mapping() {
        let invalid = AppError::from(TokenError::InvalidToken);
        assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(invalid.code, Some(CODE_INVALID_TOKEN));

        let wrong_kind = AppError::from(TokenError::WrongKind);
        assert_eq!(wrong_kind.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_kind.code, Some(CODE_INVALID_TOKEN));

        let expired = AppError::from(TokenError::Expired);
        assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(expired.code, Some(CODE_EXPIRED_TOKEN));

        let internal = AppError::from(TokenError::Internal);
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.code, None);
    }
}
