//! Core Module - Componenti infrastrutturali del layer HTTP
//!
//! Questo modulo contiene i componenti che collegano il core dei token ad axum:
//! - Middleware di autenticazione
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AuthenticatedUser, authentication_middleware};
pub use config::{Config, ConfigError};
pub use error::AppError;
pub use state::AppState;
