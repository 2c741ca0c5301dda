//! Issuer - Emissione della coppia access/refresh

use base64::{Engine, engine::general_purpose::STANDARD as B64};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use super::{Claims, HEADER_JSON, Signer, TimeSource, TokenConfig, TokenError, TokenKind};

/// Coppia di token restituita da `TokenIssuer::issue_pair`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct TokenIssuer {
    signer: Signer,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    time_source: Arc<dyn TimeSource>,
}

impl TokenIssuer {
    pub fn new(config: &TokenConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            signer: Signer::new(&config.signing_key),
            access_ttl_seconds: config.access_ttl_seconds,
            refresh_ttl_seconds: config.refresh_ttl_seconds(),
            time_source,
        }
    }

    /// Emette access e refresh token per `subject_id`.
    ///
    /// Entrambi i token condividono lo stesso `issued_at`; o vengono
    /// emessi tutti e due oppure la chiamata fallisce con `TokenError::Internal`.
    #[instrument(skip(self))]
    pub fn issue_pair(&self, subject_id: i64) -> Result<TokenPair, TokenError> {
        let issued_at = self.time_source.now();

        let access = Claims {
            issued_at,
            validity_window: self.access_ttl_seconds,
            subject_id,
            kind: TokenKind::Access,
        };
        let refresh = Claims {
            issued_at,
            validity_window: self.refresh_ttl_seconds,
            subject_id,
            kind: TokenKind::Refresh,
        };

        let pair = TokenPair {
            access_token: self.encode(&access)?,
            refresh_token: self.encode(&refresh)?,
        };

        info!("Token pair issued");
        Ok(pair)
    }

    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        debug!("Encoding {:?} token", claims.kind);
        let bytes = serde_json::to_vec(claims).map_err(|e| {
            error!("Failed to serialize claims: {:?}", e);
            TokenError::Internal
        })?;

        let header = B64.encode(HEADER_JSON);
        let payload = B64.encode(bytes);

        Ok(self.signer.seal(&header, &payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::StubTimeSource;

    fn decode_claims(token: &str) -> Claims {
        let payload = token.split('.').nth(1).unwrap();
        serde_json::from_slice(&B64.decode(payload).unwrap()).unwrap()
    }

    fn issuer_at(now: i64) -> TokenIssuer {
        let config = TokenConfig::new("issuer-test-secret").with_access_ttl(600);
        TokenIssuer::new(&config, Arc::new(StubTimeSource::new(now)))
    }

    #[test]
    fn test_pair_shares_issue_time() {
        let pair = issuer_at(1_700_000_000).issue_pair(7).unwrap();

        let access = decode_claims(&pair.access_token);
        let refresh = decode_claims(&pair.refresh_token);

        assert_eq!(access.issued_at, 1_700_000_000);
        assert_eq!(access.issued_at, refresh.issued_at);
        assert_eq!(access.subject_id, 7);
        assert_eq!(refresh.subject_id, 7);
    }

    #[test]
    fn test_refresh_window_is_ten_times_access() {
        let pair = issuer_at(0).issue_pair(1).unwrap();

        let access = decode_claims(&pair.access_token);
        let refresh = decode_claims(&pair.refresh_token);

        assert_eq!(access.kind, TokenKind::Access);
        assert_eq!(refresh.kind, TokenKind::Refresh);
        assert_eq!(access.validity_window, 600);
        assert_eq!(refresh.validity_window, 6000);
    }

    #[test]
    fn test_header_segment_is_fixed() {
        let pair = issuer_at(0).issue_pair(1).unwrap();
        let header = pair.access_token.split('.').next().unwrap();
        assert_eq!(header, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
        assert_eq!(B64.decode(header).unwrap(), HEADER_JSON.as_bytes());
    }

    #[test]
    fn test_same_instant_same_tokens() {
        let issuer = issuer_at(42);
        assert_eq!(issuer.issue_pair(3).unwrap(), issuer.issue_pair(3).unwrap());
    }
}
