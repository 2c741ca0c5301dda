//! Errori del core dei token
//!
//! Il core non conosce HTTP: la conversione in status code avviene in
//! `core::error::AppError`.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Struttura non valida oppure firma non corrispondente.
    /// Le due cause non vengono distinte di proposito.
    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    Expired,

    /// Token firmato correttamente ma con payload non decodificabile,
    /// oppure errore di serializzazione in emissione.
    #[error("internal token error")]
    Internal,

    /// Token valido ma del tipo sbagliato (access al posto di refresh o viceversa).
    /// Restituito solo da `TokenVerifier::verify_kind`.
    #[error("wrong token kind")]
    WrongKind,
}
