//! Noyau arithmétique
//!
//! Organisation interne :
//! - operations.rs : add / subtract / multiply / divide (+ quotient exact)
//! - erreur.rs     : CalcError (diviseur nul)
//! - eval.rs       : pipeline (Operation -> Resultat + démarche)
//! - format.rs     : affichage des opérations et résultats

pub mod erreur;
pub mod eval;
pub mod format;
pub mod operations;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{evaluer, Demarche, Operation, Resultat};
pub use operations::{add, divide, multiply, subtract};
