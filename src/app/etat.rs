//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur de la calculatrice + le petit état d’UX
//! (retour visuel « Copié »), et offrir les actions que la vue déclenche.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par `MoteurCalcul`.
//! - Une seule touche traitée à la fois (thread UI).

use crate::noyau::{MoteurCalcul, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub moteur: MoteurCalcul,

    // --- UX ---
    // Vrai juste après « Copier », jusqu’à la prochaine touche.
    pub copie_faite: bool,
}

impl AppCalc {
    /// Une touche du pavé ou du clavier.
    pub fn touche(&mut self, touche: Touche) {
        self.moteur.appliquer(touche);
        self.copie_faite = false;
    }

    /// Texte tapé (clavier / collage) : les caractères inconnus sont ignorés.
    pub fn taper(&mut self, texte: &str) {
        self.moteur.taper(texte);
        self.copie_faite = false;
    }

    /// C : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.touche(Touche::ToutEffacer);
    }

    /// Texte à déposer dans le presse-papier (l’affichage tel quel).
    pub fn texte_a_copier(&mut self) -> String {
        self.copie_faite = true;
        self.moteur.texte_presse_papier()
    }
}
