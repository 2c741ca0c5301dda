//! Verifier - Validazione di un token presentato dal client

use base64::{Engine, engine::general_purpose::STANDARD as B64};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use super::{Claims, Signer, TimeSource, TokenConfig, TokenError, TokenKind};

const SEPARATOR: char = '.';

/// Esito positivo della verifica
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedToken {
    pub subject_id: i64,
    pub kind: TokenKind,
}

pub struct TokenVerifier {
    signer: Signer,
    time_source: Arc<dyn TimeSource>,
}

impl TokenVerifier {
    pub fn new(config: &TokenConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            signer: Signer::new(&config.signing_key),
            time_source,
        }
    }

    /// Verifica un token.
    ///
    /// I controlli vengono eseguiti in ordine e si interrompono al primo errore:
    /// 1. struttura (esattamente due separatori) -> `InvalidToken`
    /// 2. firma ricalcolata su header e payload -> `InvalidToken`
    /// 3. decodifica del payload -> `Internal`
    /// 4. scadenza (`validity_window < now - issued_at`) -> `Expired`
    #[instrument(skip_all)]
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        if token.matches(SEPARATOR).count() != 2 {
            warn!("Rejected token with malformed structure");
            return Err(TokenError::InvalidToken);
        }

        let mut parts = token.split(SEPARATOR);
        let (Some(header), Some(payload), Some(signature)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::InvalidToken);
        };

        // Confronto tra stringhe semplice, non a tempo costante
        if self.signer.sign(header, payload) != signature {
            warn!("Rejected token with invalid signature");
            return Err(TokenError::InvalidToken);
        }

        let claims = decode_claims(payload)?;

        let now = self.time_source.now();
        if claims.is_expired_at(now) {
            debug!(
                "Token for user {} expired: elapsed {}s, window {}s",
                claims.subject_id,
                claims.elapsed(now),
                claims.validity_window
            );
            return Err(TokenError::Expired);
        }

        debug!("Token verified for user {}", claims.subject_id);
        Ok(VerifiedToken {
            subject_id: claims.subject_id,
            kind: claims.kind,
        })
    }

    /// Come `verify`, ma rifiuta con `WrongKind` un token del tipo sbagliato
    pub fn verify_kind(
        &self,
        token: &str,
        expected: TokenKind,
    ) -> Result<VerifiedToken, TokenError> {
        let verified = self.verify(token)?;
        if verified.kind != expected {
            warn!(
                "Expected {:?} token, got {:?} for user {}",
                expected, verified.kind, verified.subject_id
            );
            return Err(TokenError::WrongKind);
        }
        Ok(verified)
    }
}

// Un payload firmato correttamente ma illeggibile non è un tentativo di
// falsificazione: viene segnalato come errore interno.
fn decode_claims(payload: &str) -> Result<Claims, TokenError> {
    let bytes = B64.decode(payload).map_err(|e| {
        error!("Signed token payload is not valid base64: {:?}", e);
        TokenError::Internal
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        error!("Signed token payload is not valid claims: {:?}", e);
        TokenError::Internal
    })
}
