//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (opérandes, opération, résultat, erreur, démarche)
//! et offrir des actions simples (=, CLR, AC, ⇄) sans logique d’affichage.
//!
//! Contrats :
//! - Une erreur efface résultat + EXACT + démarche (rien de périmé à l’écran).
//! - Actions déterministes, sans effet de bord caché.

use calculadora::noyau::format::format_resultat;
use calculadora::noyau::{evaluer, Demarche, Operation};

/// Opérandes au démarrage (7 ÷ 2 montre tout de suite un quotient non entier).
const A_DEFAUT: i32 = 7;
const B_DEFAUT: i32 = 2;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub a: i32,
    pub b: i32,
    pub operation: Operation,

    // --- sorties ---
    pub resultat: String, // résultat principal (entier ou quotient flottant)
    pub exact: String,    // forme exacte (fraction réduite pour la division)
    pub erreur: String,   // message d’erreur du noyau, verbatim

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            a: A_DEFAUT,
            b: B_DEFAUT,
            operation: Operation::Division,
            resultat: String::new(),
            exact: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
        }
    }
}

impl AppCalc {
    /// = : évalue (a, opération, b) via le noyau et dépose le résultat ou l’erreur.
    pub fn evaluer(&mut self) {
        match evaluer(self.operation, self.a, self.b) {
            Ok((resultat, demarche)) => {
                self.erreur.clear();
                self.resultat = format_resultat(&resultat);
                self.exact = demarche.exact.clone();
                self.demarche = demarche;
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// Sélectionne l’opération puis évalue aussitôt.
    pub fn choisir_operation(&mut self, op: Operation) {
        self.operation = op;
        self.evaluer();
    }

    /// ⇄ : échange a et b (les résultats affichés ne correspondent plus => effacés).
    pub fn permuter_operandes(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
        self.clear_resultats();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher aux opérandes).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.exact.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// AC : remise à zéro totale (opérandes et opération par défaut).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// Utilitaire : placer une erreur (et couper les sorties devenues non fiables).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat.clear();
        self.exact.clear();
        self.demarche = Demarche::default();
    }
}
