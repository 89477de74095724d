//! Noyau — évaluation (pipeline réel)
//!
//! (op, a, b) -> opération de base -> Resultat -> EXACT (fraction / entier) -> démarche
//!
//! Remarque : l'EXACT d'une division est calculé à part (Rational64),
//! le résultat principal reste le quotient flottant.

use log::{debug, warn};

use super::erreur::CalcError;
use super::format::{format_operation, format_rationnel, format_resultat};
use super::operations::{add, divide, multiply, quotient_exact, subtract};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Ordre d'affichage des boutons.
    pub const TOUTES: [Operation; 4] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "−",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Operation::Addition => "soma",
            Operation::Soustraction => "subtração",
            Operation::Multiplication => "multiplicação",
            Operation::Division => "divisão",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resultat {
    Entier(i32),
    Quotient(f64),
}

impl Resultat {
    pub fn as_f64(self) -> f64 {
        match self {
            Resultat::Entier(n) => f64::from(n),
            Resultat::Quotient(q) => q,
        }
    }
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub operation: String,
    pub exact: String,
    pub note: String,
}

/// API publique : applique `op` à (a, b) et retourne:
/// - le résultat (entier, ou quotient flottant pour la division)
/// - la démarche (opération, EXACT, note)
pub fn evaluer(op: Operation, a: i32, b: i32) -> Result<(Resultat, Demarche), CalcError> {
    let operation = format_operation(op, a, b);
    debug!("évaluation: {operation}");

    let (resultat, exact) = match op {
        Operation::Addition => {
            let n = add(a, b);
            (Resultat::Entier(n), n.to_string())
        }
        Operation::Soustraction => {
            let n = subtract(a, b);
            (Resultat::Entier(n), n.to_string())
        }
        Operation::Multiplication => {
            let n = multiply(a, b);
            (Resultat::Entier(n), n.to_string())
        }
        Operation::Division => {
            let q = divide(a, b).inspect_err(|e| warn!("{operation} refusée: {e}"))?;
            let r = quotient_exact(a, b)?;
            (Resultat::Quotient(q), format_rationnel(&r))
        }
    };

    let note = if deborde(op, a, b) {
        format!(
            "Dépassement 32 bits : résultat bouclé (complément à deux), {} exact hors de [{}, {}].",
            op.nom(),
            i32::MIN,
            i32::MAX
        )
    } else {
        String::new()
    };

    debug!("{operation} = {}", format_resultat(&resultat));

    Ok((
        resultat,
        Demarche {
            operation,
            exact,
            note,
        },
    ))
}

/// Vrai si le résultat mathématique ne tient pas dans un i32
/// (le résultat rendu par le noyau a donc bouclé).
pub fn deborde(op: Operation, a: i32, b: i32) -> bool {
    match op {
        Operation::Addition => a.checked_add(b).is_none(),
        Operation::Soustraction => a.checked_sub(b).is_none(),
        Operation::Multiplication => a.checked_mul(b).is_none(),
        // quotient flottant : pas de bouclage possible
        Operation::Division => false,
    }
}
