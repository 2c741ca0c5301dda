//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene issuer e verifier dei token, costruiti una volta all'avvio
//! e mai modificati.

use crate::token::{TimeSource, TokenConfig, TokenIssuer, TokenVerifier};
use std::sync::Arc;

/// Stato globale condiviso tra tutte le route e middleware
pub struct AppState {
    /// Emissione delle coppie access/refresh
    pub issuer: TokenIssuer,

    /// Verifica dei token presentati dai client
    pub verifier: TokenVerifier,
}

impl AppState {
    /// Crea una nuova istanza di AppState.
    ///
    /// # Arguments
    /// * `config` - Chiave di firma e finestre di validità
    /// * `time_source` - Orologio condiviso da issuer e verifier
    pub fn new(config: &TokenConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            issuer: TokenIssuer::new(config, time_source.clone()),
            verifier: TokenVerifier::new(config, time_source),
        }
    }
}
