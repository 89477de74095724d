// src/noyau/operations.rs
//
// Les quatre opérations de base sur deux entiers 32 bits.
//
// Règles:
// - fonctions pures, sans état, appelables depuis n'importe quel thread
// - add/subtract/multiply sont totales : le dépassement boucle (complément à deux),
//   comme l'arithmétique `int` 32 bits d'origine, jamais de panic
// - divide : on valide le diviseur AVANT la conversion flottante

use num_rational::Rational64;

use super::erreur::CalcError;

/// Somme `a + b` (bouclage en cas de dépassement).
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Différence `a - b` (minuende, subtraende).
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Produit `a * b`.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Quotient flottant `a / b`.
///
/// Le dividende est converti en `f64` avant la division : 7/2 donne 3.5, pas 3.
/// Échoue avec [`CalcError::InvalidArgument`] si `b == 0`.
pub fn divide(a: i32, b: i32) -> Result<f64, CalcError> {
    if b == 0 {
        return Err(CalcError::diviseur_nul());
    }
    Ok(f64::from(a) / f64::from(b))
}

/// Quotient exact sous forme de fraction réduite (signe porté par le numérateur).
///
/// Calcul en i64 : i32::MIN / -1 reste représentable.
pub fn quotient_exact(a: i32, b: i32) -> Result<Rational64, CalcError> {
    if b == 0 {
        return Err(CalcError::diviseur_nul());
    }
    Ok(Rational64::new(i64::from(a), i64::from(b)))
}
