// src/noyau/touches.rs
//
// Une touche = un événement du moteur. Le pavé (boutons) et le clavier
// physique passent tous deux par `MoteurCalcul::appliquer`.

use tracing::trace;

use super::moteur::MoteurCalcul;
use super::operation::Operation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operation(Operation),
    Egal,
    Decimal,
    Negation,
    Effacer,
    ToutEffacer,
}

impl Touche {
    /// Caractère tapé au clavier -> touche.
    ///
    /// `,` vaut `.` (clavier français), `*`/`x` valent `×`, `/` vaut `÷`.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' | ',' => Some(Touche::Decimal),
            '=' => Some(Touche::Egal),
            _ => {
                let mut buf = [0u8; 4];
                Operation::depuis_symbole(c.encode_utf8(&mut buf)).map(Touche::Operation)
            }
        }
    }

    /// Libellé du bouton correspondant.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Operation(op) => op.symbole().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Decimal => ".".to_string(),
            Touche::Negation => "+/-".to_string(),
            Touche::Effacer => "DEL".to_string(),
            Touche::ToutEffacer => "C".to_string(),
        }
    }
}

impl MoteurCalcul {
    pub fn appliquer(&mut self, touche: Touche) {
        trace!(?touche, "touche");
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Operation(op) => self.saisir_operation(op),
            Touche::Egal => self.egal(),
            Touche::Decimal => self.saisir_decimal(),
            Touche::Negation => self.negation(),
            Touche::Effacer => self.effacer_dernier(),
            Touche::ToutEffacer => self.effacer_tout(),
        }
    }

    /// Tape une suite de caractères clavier ; les inconnus sont ignorés.
    pub fn taper(&mut self, texte: &str) {
        for touche in texte.chars().filter_map(Touche::depuis_caractere) {
            self.appliquer(touche);
        }
    }
}
