// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : texte aligné à droite, bouton « Copier » au-dessus
// - Pavé 5×4 : C DEL % ÷ / 7 8 9 × / 4 5 6 - / 1 2 3 + / +/- 0 . =
// - Portrait / paysage selon la place disponible (boutons compacts en paysage)
//
// Note :
// - Le clavier physique est géré dans app.rs (événements globaux).

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::{Operation, Touche};

/* ------------------------ Palette ------------------------ */

const NOIR: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
const GRIS_FONCE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const GRIS_CLAIR: Color32 = Color32::from_rgb(0xA5, 0xA5, 0xA5);
const ORANGE: Color32 = Color32::from_rgb(0xFF, 0x9F, 0x0A);
const BLANC: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/* ------------------------ Pavé ------------------------ */

const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::ToutEffacer,
        Touche::Effacer,
        Touche::Operation(Operation::Modulo),
        Touche::Operation(Operation::Division),
    ],
    [
        Touche::Chiffre('7'),
        Touche::Chiffre('8'),
        Touche::Chiffre('9'),
        Touche::Operation(Operation::Multiplication),
    ],
    [
        Touche::Chiffre('4'),
        Touche::Chiffre('5'),
        Touche::Chiffre('6'),
        Touche::Operation(Operation::Soustraction),
    ],
    [
        Touche::Chiffre('1'),
        Touche::Chiffre('2'),
        Touche::Chiffre('3'),
        Touche::Operation(Operation::Addition),
    ],
    [
        Touche::Negation,
        Touche::Chiffre('0'),
        Touche::Decimal,
        Touche::Egal,
    ],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Disposition {
    Portrait,
    Paysage,
}

impl Disposition {
    fn depuis_taille(taille: egui::Vec2) -> Self {
        if taille.x > taille.y {
            Disposition::Paysage
        } else {
            Disposition::Portrait
        }
    }

    fn hauteur_bouton(self) -> f32 {
        match self {
            Disposition::Portrait => 68.0,
            Disposition::Paysage => 45.0,
        }
    }

    fn taille_texte_bouton(self) -> f32 {
        match self {
            Disposition::Portrait => 28.0,
            Disposition::Paysage => 18.0,
        }
    }

    fn taille_affichage(self) -> f32 {
        match self {
            Disposition::Portrait => 64.0,
            Disposition::Paysage => 48.0,
        }
    }

    fn espacement(self) -> f32 {
        match self {
            Disposition::Portrait => 12.0,
            Disposition::Paysage => 6.0,
        }
    }

    fn hauteur_pave(self) -> f32 {
        let rangees = PAVE.len() as f32;
        rangees * self.hauteur_bouton() + (rangees - 1.0) * self.espacement()
    }
}

/// (fond, texte) d’un bouton, comme sur le pavé d’origine.
fn couleurs(touche: Touche) -> (Color32, Color32) {
    match touche {
        Touche::ToutEffacer
        | Touche::Effacer
        | Touche::Negation
        | Touche::Operation(Operation::Modulo) => (GRIS_CLAIR, NOIR),
        Touche::Operation(_) | Touche::Egal => (ORANGE, BLANC),
        Touche::Chiffre(_) | Touche::Decimal => (GRIS_FONCE, BLANC),
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let disposition = Disposition::depuis_taille(ui.available_size());
        let esp = disposition.espacement();

        ui.painter().rect_filled(ui.max_rect(), 0.0, NOIR);
        ui.spacing_mut().item_spacing = egui::vec2(esp, esp);

        self.ui_affichage(ui, disposition);
        ui.add_space(esp);
        self.ui_pave(ui, disposition);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui, disposition: Disposition) {
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let copier = ui
                    .add(
                        egui::Button::new(RichText::new("Copier").size(14.0).color(GRIS_CLAIR))
                            .frame(false),
                    )
                    .on_hover_text("Copie l’affichage dans le presse-papier");
                if copier.clicked() {
                    let texte = self.texte_a_copier();
                    ui.ctx().copy_text(texte);
                }
                if self.copie_faite {
                    ui.label(RichText::new("Copié").size(14.0).color(GRIS_CLAIR));
                }
            });
        });

        // L’écran prend toute la hauteur que le pavé laisse libre.
        let taille_texte = disposition.taille_affichage();
        let hauteur = (ui.available_height()
            - disposition.hauteur_pave()
            - disposition.espacement())
        .max(taille_texte * 1.2);

        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), hauteur),
            egui::Layout::bottom_up(egui::Align::Max),
            |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                            ui.add(
                                egui::Label::new(
                                    RichText::new(self.moteur.affichage())
                                        .size(taille_texte)
                                        .color(BLANC),
                                )
                                .wrap(),
                            );
                        });
                    });
            },
        );
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, disposition: Disposition) {
        let esp = disposition.espacement();
        let largeur = ((ui.available_width() - 3.0 * esp) / 4.0).max(40.0);
        let taille = egui::vec2(largeur, disposition.hauteur_bouton());

        // L’opération choisie reste surlignée jusqu’au prochain opérande.
        let en_cours = self.moteur.operation_en_cours();

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([esp, esp])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        let (fond, texte) = couleurs(touche);
                        let actif = matches!(touche, Touche::Operation(op) if Some(op) == en_cours);

                        let bouton = egui::Button::new(
                            RichText::new(touche.libelle())
                                .size(disposition.taille_texte_bouton())
                                .color(texte),
                        )
                        .fill(fond)
                        .corner_radius(taille.y / 2.0)
                        .selected(actif);

                        if ui.add_sized(taille, bouton).clicked() {
                            self.touche(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
