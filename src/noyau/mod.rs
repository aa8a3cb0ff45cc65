//! Noyau de la calculatrice quatre opérations
//!
//! Organisation interne :
//! - operation.rs : les cinq opérations (+ - × ÷ %) et leur symbole
//! - format.rs    : lecture des opérandes tapés, affichage des résultats
//! - erreur.rs    : erreurs internes du calcul (jamais remontées)
//! - moteur.rs    : machine à états (saisie / en attente / erreur)
//! - touches.rs   : touche -> événement du moteur (pavé + clavier)

pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operation;
pub mod touches;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::{MoteurCalcul, JETON_ERREUR};
pub use operation::Operation;
pub use touches::Touche;
