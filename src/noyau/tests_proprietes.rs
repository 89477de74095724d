//! Tests de propriétés (campagne) : invariants algébriques sur entrées pseudo-aléatoires.
//!
//! - RNG déterministe (seed fixe) : un échec se rejoue à l'identique
//! - bornes incluses exprès (0, ±1, i32::MIN, i32::MAX)
//! - budget temps global

use std::time::{Duration, Instant};

use super::erreur::CalcError;
use super::{add, divide, evaluer, multiply, subtract, Operation};

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    /// Opérande : un tiers de petites valeurs, quelques bornes, le reste sur tout i32.
    fn operande(&mut self) -> i32 {
        match self.next_u32() % 12 {
            0 => 0,
            1 => i32::MAX,
            2 => i32::MIN,
            3 | 4 | 5 | 6 => (self.next_u32() % 201) as i32 - 100,
            _ => self.next_u32() as i32,
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

const TOURS: usize = 5_000;

/* ------------------------ Invariants ------------------------ */

#[test]
fn prop_commutativite() {
    let t0 = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..TOURS {
        let (a, b) = (rng.operande(), rng.operande());
        assert_eq!(add(a, b), add(b, a), "add({a}, {b})");
        assert_eq!(multiply(a, b), multiply(b, a), "multiply({a}, {b})");
        budget(t0, Duration::from_millis(500));
    }
}

#[test]
fn prop_antisymetrie_soustraction() {
    let t0 = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..TOURS {
        let (a, b) = (rng.operande(), rng.operande());
        // négation bouclée : -(i32::MIN) == i32::MIN
        assert_eq!(
            subtract(a, b),
            subtract(b, a).wrapping_neg(),
            "subtract({a}, {b})"
        );
        budget(t0, Duration::from_millis(500));
    }
}

#[test]
fn prop_division_inverse_multiplication() {
    let t0 = Instant::now();
    let mut rng = Rng::new(7);

    for _ in 0..TOURS {
        let (a, b) = (rng.operande(), rng.operande());
        if b == 0 {
            continue;
        }
        let q = divide(a, b).unwrap_or_else(|e| panic!("divide({a}, {b}) err={e}"));
        let a_f = f64::from(a);
        let ecart = (q * f64::from(b) - a_f).abs();
        let tolerance = 1e-9 * a_f.abs().max(1.0);
        assert!(ecart <= tolerance, "divide({a}, {b}) * {b} = {} != {a}", q * f64::from(b));
        budget(t0, Duration::from_millis(500));
    }
}

#[test]
fn prop_division_par_zero_toujours_refusee() {
    let mut rng = Rng::new(1);
    let attendu = CalcError::InvalidArgument("divisor must not be zero.".into());

    for a in [0, 1, -1, i32::MIN, i32::MAX] {
        assert_eq!(divide(a, 0), Err(attendu.clone()), "divide({a}, 0)");
    }
    for _ in 0..TOURS {
        let a = rng.operande();
        assert_eq!(divide(a, 0), Err(attendu.clone()), "divide({a}, 0)");
        assert_eq!(
            evaluer(Operation::Division, a, 0).map(|(r, _)| r),
            Err(attendu.clone())
        );
    }
}

#[test]
fn prop_pipeline_coherent_avec_operations() {
    let mut rng = Rng::new(0xDEAD_BEEF);

    for _ in 0..TOURS {
        let (a, b) = (rng.operande(), rng.operande());
        for op in Operation::TOUTES {
            let attendu = match op {
                Operation::Addition => Ok(f64::from(add(a, b))),
                Operation::Soustraction => Ok(f64::from(subtract(a, b))),
                Operation::Multiplication => Ok(f64::from(multiply(a, b))),
                Operation::Division => divide(a, b),
            };
            let obtenu = evaluer(op, a, b).map(|(r, _)| r.as_f64());
            assert_eq!(obtenu, attendu, "evaluer({op:?}, {a}, {b})");
        }
    }
}

#[test]
fn prop_determinisme() {
    // même entrée, même sortie (aucun état caché)
    let mut rng = Rng::new(99);
    for _ in 0..500 {
        let (a, b) = (rng.operande(), rng.operande());
        for op in Operation::TOUTES {
            assert_eq!(evaluer(op, a, b), evaluer(op, a, b));
        }
    }
}
