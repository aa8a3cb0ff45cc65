//! Calculatrice de base (quatre opérations + modulo)
//!
//! - noyau : moteur de saisie (machine à états, sans UI)
//! - app   : coque eframe/egui (affichage, pavé, presse-papier)

pub mod app;
pub mod noyau;
