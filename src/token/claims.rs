//! Claims - Payload incorporato in ogni token

use serde::{Deserialize, Serialize};

/// Header fisso, identico per tutti i token emessi
pub const HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Tipo di token. Sul filo viene codificato come booleano
/// (`true` = access, `false` = refresh).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "bool", into = "bool")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl From<bool> for TokenKind {
    fn from(is_access_token: bool) -> Self {
        if is_access_token {
            TokenKind::Access
        } else {
            TokenKind::Refresh
        }
    }
}

impl From<TokenKind> for bool {
    fn from(kind: TokenKind) -> Self {
        kind == TokenKind::Access
    }
}

// L'ordine dei campi determina l'ordine delle chiavi nel JSON serializzato
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Istante di emissione (secondi Unix)
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Durata di validità in secondi a partire da `issued_at`.
    ///
    /// Nonostante il nome sul filo (`exp`) NON è un timestamp assoluto di
    /// scadenza ma una durata.
    #[serde(rename = "exp")]
    pub validity_window: i64,

    #[serde(rename = "uid")]
    pub subject_id: i64,

    #[serde(rename = "is_access_token")]
    pub kind: TokenKind,
}

impl Claims {
    /// Secondi trascorsi dall'emissione fino a `now`
    pub fn elapsed(&self, now: i64) -> i64 {
        now.saturating_sub(self.issued_at)
    }

    /// Vero se il tempo trascorso supera la finestra di validità.
    /// Un token con `elapsed == validity_window` è ancora valido.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.validity_window < self.elapsed(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_json_layout() {
        let claims = Claims {
            issued_at: 1_700_000_000,
            validity_window: 3600,
            subject_id: 42,
            kind: TokenKind::Access,
        };

        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(
            json,
            r#"{"iat":1700000000,"exp":3600,"uid":42,"is_access_token":true}"#
        );
    }

    #[test]
    fn test_refresh_kind_is_false_on_the_wire() {
        let json = r#"{"iat":10,"exp":36000,"uid":-7,"is_access_token":false}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.kind, TokenKind::Refresh);
        assert_eq!(claims.subject_id, -7);
        assert_eq!(claims.validity_window, 36000);
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims {
            issued_at: 1000,
            validity_window: 60,
            subject_id: 1,
            kind: TokenKind::Access,
        };

        assert!(!claims.is_expired_at(1000));
        assert!(!claims.is_expired_at(1060));
        assert!(claims.is_expired_at(1061));
    }

    #[test]
    fn test_elapsed_does_not_overflow() {
        let claims = Claims {
            issued_at: i64::MIN,
            validity_window: i64::MAX,
            subject_id: 1,
            kind: TokenKind::Refresh,
        };

        assert_eq!(claims.elapsed(i64::MAX), i64::MAX);
        assert!(!claims.is_expired_at(i64::MAX));
    }
}
