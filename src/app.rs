// src/app.rs
//
// Calculadora — module App (racine)
// ---------------------------------
// - Déclare les sous-modules (etat.rs + vue.rs)
// - Ré-exporte AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournit l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = remise à zéro totale (comme bouton "AC").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.reset_total();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
