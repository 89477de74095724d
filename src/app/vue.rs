// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Opérandes saisies par DragValue (entiers bornés, pas de texte à analyser)
// - Clavier : Enter évalue
// - Tactile : gros boutons

use eframe::egui;

use calculadora::noyau::Operation;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculadora");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("operandes")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                ui.label("a :");
                ui.add(egui::DragValue::new(&mut self.a).speed(1));
                ui.end_row();

                ui.label("b :");
                ui.add(egui::DragValue::new(&mut self.b).speed(1));
                ui.end_row();
            });

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        // Opérations : un clic sélectionne ET évalue
        ui.horizontal(|ui| {
            for op in Operation::TOUTES {
                let actif = self.operation == op;
                let resp = ui
                    .add_sized(
                        [46.0, 32.0],
                        egui::Button::new(op.symbole()).selected(actif),
                    )
                    .on_hover_text(op.nom());
                if resp.clicked() {
                    self.choisir_operation(op);
                }
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
            }
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "⇄", "Échange a et b", Action::Permuter);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        ui.add_space(6.0);

        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(
                    ui,
                    "Opération",
                    "demarche_operation",
                    &self.demarche.operation,
                );
                Self::champ_demarche(ui, "EXACT", "demarche_exact", &self.demarche.exact);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Permuter => self.permuter_operandes(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Permuter,
    ClearResultats,
    ResetTotal,
}
