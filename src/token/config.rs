//! Configurazione immutabile dei token

pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 3600;
pub const DEFAULT_REFRESH_TTL_MULTIPLIER: i64 = 10;

/// Chiave di firma e finestre di validità.
///
/// Costruita una sola volta all'avvio e passata per riferimento ai
/// costruttori di `TokenIssuer` e `TokenVerifier`.
#[derive(Clone)]
pub struct TokenConfig {
    pub signing_key: Vec<u8>,
    pub access_ttl_seconds: i64,
    pub refresh_ttl_multiplier: i64,
}

impl TokenConfig {
    /// Configurazione con le finestre di default
    pub fn new(signing_key: impl Into<Vec<u8>>) -> Self {
        Self {
            signing_key: signing_key.into(),
            access_ttl_seconds: DEFAULT_ACCESS_TTL_SECONDS,
            refresh_ttl_multiplier: DEFAULT_REFRESH_TTL_MULTIPLIER,
        }
    }

    pub fn with_access_ttl(mut self, seconds: i64) -> Self {
        self.access_ttl_seconds = seconds;
        self
    }

    pub fn with_refresh_multiplier(mut self, multiplier: i64) -> Self {
        self.refresh_ttl_multiplier = multiplier;
        self
    }

    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
            .saturating_mul(self.refresh_ttl_multiplier)
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("signing_key", &"***")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_multiplier", &self.refresh_ttl_multiplier)
            .finish()
    }
}
