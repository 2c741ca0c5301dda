//! Token Module - Emissione e verifica dei token firmati
//!
//! Formato sul filo:
//!
//! ```text
//! base64(header_json) . base64(claims_json) . base64(hex(HMAC-SHA256(key, seg0 + seg1)))
//! ```
//!
//! - `Signer`: firma HMAC condivisa da issuer e verifier
//! - `TokenIssuer`: emette la coppia access/refresh
//! - `TokenVerifier`: verifica struttura, firma e scadenza
//!
//! Il modulo non conosce HTTP né lo storage degli utenti.

pub mod claims;
pub mod config;
pub mod error;
pub mod issuer;
pub mod signer;
pub mod time_source;
pub mod verifier;

// Re-exports per facilitare l'import
pub use claims::{Claims, HEADER_JSON, TokenKind};
pub use config::TokenConfig;
pub use error::TokenError;
pub use issuer::{TokenIssuer, TokenPair};
pub use signer::Signer;
pub use time_source::{StubTimeSource, SystemTimeSource, TimeSource};
pub use verifier::{TokenVerifier, VerifiedToken};
