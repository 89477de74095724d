// src/noyau/format.rs

use num_rational::Rational64;
use num_traits::{One, Zero};

use super::eval::{Operation, Resultat};

/* ------------------------ Helpers ------------------------ */

/// Opérande de droite : parenthèses si négatif ("7 × (-2)").
fn format_operande_droite(n: i32) -> String {
    if n < 0 {
        format!("({n})")
    } else {
        format!("{n}")
    }
}

/* ------------------------ Affichage ------------------------ */

/// "a ⊕ b" avec le symbole de l'opération.
pub fn format_operation(op: Operation, a: i32, b: i32) -> String {
    format!("{a} {} {}", op.symbole(), format_operande_droite(b))
}

/// Entier tel quel ; quotient au format flottant le plus court (3.5, -2, 0.3333333333333333).
pub fn format_resultat(r: &Resultat) -> String {
    match r {
        Resultat::Entier(n) => format!("{n}"),
        // 0 / -3 donne -0.0 : on n'affiche pas de zéro signé
        Resultat::Quotient(q) if q.is_zero() => "0".to_string(),
        Resultat::Quotient(q) => format!("{q}"),
    }
}

/// p/q réduit ; p seul si q = 1.
pub fn format_rationnel(r: &Rational64) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}
