// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier physique est lu ici (événements globaux, aucun champ texte).
// - Les boutons du pavé sont gérés dans vue.rs.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use calculatrice_base::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl AppCalc {
    /// Clavier : chiffres/opérateurs via Event::Text, touches spéciales via Event::Key.
    ///
    /// - Enter = "=" ; Backspace = DEL ; Escape/Suppr = C
    /// - Ctrl+C (Event::Copy) = copie de l’affichage
    fn clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => self.taper(&texte),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.touche(Touche::Egal),
                    egui::Key::Backspace => self.touche(Touche::Effacer),
                    egui::Key::Escape | egui::Key::Delete => self.reset_total(),
                    _ => {}
                },
                egui::Event::Copy => {
                    let texte = self.texte_a_copier();
                    ctx.copy_text(texte);
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
