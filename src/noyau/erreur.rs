// src/noyau/erreur.rs
//
// Erreur unique du noyau : un argument que l'opération ne sait pas traiter.
// Aujourd'hui, seul le diviseur nul la déclenche.

/// Message exact remonté pour une division par zéro.
pub const MSG_DIVISEUR_NUL: &str = "divisor must not be zero.";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Opérande invalide (ex: diviseur nul). Le message est affiché tel quel.
    #[error("{0}")]
    InvalidArgument(String),
}

impl CalcError {
    pub(crate) fn diviseur_nul() -> Self {
        CalcError::InvalidArgument(MSG_DIVISEUR_NUL.to_string())
    }
}
