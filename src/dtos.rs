//! DTOs - Corpi JSON di richieste e risposte HTTP

use crate::token::TokenPair;
use serde::{Deserialize, Serialize};

/// Corpo di `POST /auth/refresh`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RefreshRequestDTO {
    pub refresh_token: String,
}

/// Coppia di token restituita al client insieme al suo id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenPairDTO {
    pub access_token: String,
    pub refresh_token: String,
    pub uid: i64,
}

impl TokenPairDTO {
    pub fn new(pair: TokenPair, uid: i64) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            uid,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MeDTO {
    pub uid: i64,
}
