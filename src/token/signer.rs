//! Signer - Firma HMAC-SHA256 dei segmenti di un token

use base64::{Engine, engine::general_purpose::STANDARD as B64};
use ring::hmac;

/// Firma deterministica con chiave simmetrica.
///
/// La chiave viene fissata alla costruzione e non cambia più;
/// `Signer` può essere clonato e condiviso tra thread liberamente.
#[derive(Clone)]
pub struct Signer {
    key: hmac::Key,
}

impl Signer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret),
        }
    }

    /// Calcola il segmento di firma per `header` e `payload` già codificati.
    ///
    /// Il digest viene prima convertito in esadecimale, poi la stringa
    /// esadecimale viene codificata in base64 come gli altri segmenti.
    pub fn sign(&self, header: &str, payload: &str) -> String {
        let mut ctx = hmac::Context::with_key(&self.key);
        ctx.update(header.as_bytes());
        ctx.update(payload.as_bytes());
        let tag = ctx.sign();

        B64.encode(hex::encode(tag.as_ref()))
    }

    /// Assembla il token completo `header.payload.signature`
    pub fn seal(&self, header: &str, payload: &str) -> String {
        let signature = self.sign(header, payload);
        format!("{header}.{payload}.{signature}")
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}
