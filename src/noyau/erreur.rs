// src/noyau/erreur.rs
//
// Erreurs internes du calcul. Jamais remontées à l’appelant du moteur :
// soit abandon silencieux (opérande illisible), soit état Erreur.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("opérande illisible : {0:?}")]
    OperandeInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini (dépassement)")]
    ResultatNonFini,
}

impl ErreurCalcul {
    /// Vrai si l’erreur doit s’afficher (jeton d’erreur) plutôt qu’être ignorée.
    pub fn est_visible(&self) -> bool {
        !matches!(self, ErreurCalcul::OperandeInvalide(_))
    }
}
