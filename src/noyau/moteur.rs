//! Moteur de saisie : machine à états de la calculatrice quatre opérations.
//!
//! Source de vérité = `Etat` (variante étiquetée), jamais la chaîne affichée.
//! L’affichage est *rendu* depuis l’état :
//! - `Saisie`    : "12.5"  (ou "0" si rien n’est tapé)
//! - `EnAttente` : "12.5 × 3" / "12.5 × " (opérande droit encore vide)
//! - `Erreur`    : "Erreur"
//!
//! Contrats :
//! - Aucune opération publique n’échoue : une faute devient un affichage.
//! - Enchaînement strict gauche → droite, sans priorité : 1 + 2 × 3 = 9.
//! - Un opérande contient au plus un `.` et au plus un `-` en tête.

use tracing::{debug, trace};

use super::erreur::ErreurCalcul;
use super::format::{basculer_signe, est_zero_seul, formater_resultat, lire_operande};
use super::operation::Operation;

/// Jeton affiché après une division (ou un modulo) par zéro.
pub const JETON_ERREUR: &str = "Erreur";

#[derive(Clone, Debug, PartialEq)]
enum Etat {
    /// Premier opérande, ou résultat affiché après `=` (`frais`).
    Saisie { operande: String, frais: bool },

    /// Opération choisie ; `droite` peut être vide.
    EnAttente {
        gauche: String,
        operation: Operation,
        droite: String,
    },

    /// Après ÷0 / %0 / dépassement. Un chiffre repart de zéro, C remet à zéro.
    Erreur,
}

impl Default for Etat {
    fn default() -> Self {
        Etat::Saisie {
            operande: String::new(),
            frais: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MoteurCalcul {
    etat: Etat,
}

impl MoteurCalcul {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture (pour la vue) ------------------------ */

    /// Texte affiché. Jamais vide.
    pub fn affichage(&self) -> String {
        match &self.etat {
            Etat::Saisie { operande, .. } if operande.is_empty() => "0".to_string(),
            Etat::Saisie { operande, .. } => operande.clone(),
            Etat::EnAttente {
                gauche,
                operation,
                droite,
            } => format!("{gauche} {} {droite}", operation.symbole()),
            Etat::Erreur => JETON_ERREUR.to_string(),
        }
    }

    /// Texte à copier dans le presse-papier : l’affichage tel quel.
    pub fn texte_presse_papier(&self) -> String {
        self.affichage()
    }

    /// Opérande en cours de saisie (droit si une opération est choisie).
    pub fn nombre_courant(&self) -> &str {
        match &self.etat {
            Etat::Saisie { operande, .. } => operande,
            Etat::EnAttente { droite, .. } => droite,
            Etat::Erreur => "",
        }
    }

    /// Opérande gauche capturé au choix de l’opération ; vide sinon.
    pub fn nombre_precedent(&self) -> &str {
        match &self.etat {
            Etat::EnAttente { gauche, .. } => gauche,
            _ => "",
        }
    }

    pub fn operation_en_cours(&self) -> Option<Operation> {
        match &self.etat {
            Etat::EnAttente { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Vrai si le prochain chiffre (ou `.`) repart d’un nombre neuf.
    pub fn remise_a_zero_attendue(&self) -> bool {
        match &self.etat {
            Etat::Saisie { frais, .. } => *frais,
            Etat::EnAttente { .. } => false,
            Etat::Erreur => true,
        }
    }

    pub fn est_en_erreur(&self) -> bool {
        matches!(self.etat, Etat::Erreur)
    }

    /* ------------------------ Événements ------------------------ */

    /// Chiffre `0`..`9`. Tout autre caractère est ignoré.
    ///
    /// Zéro de tête supprimé par opérande : `1 + 05` s’affiche `1 + 5`.
    pub fn saisir_chiffre(&mut self, chiffre: char) {
        if !chiffre.is_ascii_digit() {
            trace!(?chiffre, "caractère non numérique ignoré");
            return;
        }

        if self.remise_a_zero_attendue() {
            self.etat = Etat::Saisie {
                operande: chiffre.to_string(),
                frais: false,
            };
            return;
        }
        if let Some(operande) = self.operande_courant_mut() {
            pousser_chiffre(operande, chiffre);
        }
    }

    pub fn saisir_operation(&mut self, op: Operation) {
        let suivant = match &self.etat {
            Etat::Erreur => {
                trace!(%op, "opération ignorée en erreur");
                return;
            }

            // Rien de tapé : le "0" affiché devient l’opérande gauche.
            Etat::Saisie { operande, .. } => Etat::EnAttente {
                gauche: if operande.is_empty() {
                    "0".to_string()
                } else {
                    operande.clone()
                },
                operation: op,
                droite: String::new(),
            },

            // Opérateur pressé deux fois : on remplace simplement l’opération.
            Etat::EnAttente { gauche, droite, .. } if droite.is_empty() => Etat::EnAttente {
                gauche: gauche.clone(),
                operation: op,
                droite: String::new(),
            },

            // Enchaînement : on replie l’opération existante d’abord.
            Etat::EnAttente {
                gauche,
                operation,
                droite,
            } => match calculer(gauche, *operation, droite) {
                Ok(resultat) => {
                    debug!(%resultat, suivante = %op, "opération repliée");
                    Etat::EnAttente {
                        gauche: resultat,
                        operation: op,
                        droite: String::new(),
                    }
                }
                Err(e) => match etat_apres_echec(e) {
                    Some(etat) => etat,
                    None => return,
                },
            },
        };

        self.etat = suivant;
    }

    /// `=` : sans effet tant qu’il manque un opérande ou l’opération.
    pub fn egal(&mut self) {
        let Etat::EnAttente {
            gauche,
            operation,
            droite,
        } = &self.etat
        else {
            return;
        };
        if droite.is_empty() {
            return;
        }

        let suivant = match calculer(gauche, *operation, droite) {
            Ok(resultat) => {
                debug!(%resultat, "résultat");
                Etat::Saisie {
                    operande: resultat,
                    frais: true,
                }
            }
            Err(e) => match etat_apres_echec(e) {
                Some(etat) => etat,
                None => return,
            },
        };

        self.etat = suivant;
    }

    /// `+/-` : bascule le signe de l’opérande courant (pas de "0", pas de vide).
    pub fn negation(&mut self) {
        let Some(operande) = self.operande_courant_mut() else {
            return;
        };

        if operande.is_empty() || operande.as_str() == "0" {
            return;
        }
        *operande = basculer_signe(operande);
    }

    pub fn saisir_decimal(&mut self) {
        if self.remise_a_zero_attendue() {
            self.etat = Etat::Saisie {
                operande: "0.".to_string(),
                frais: false,
            };
            return;
        }
        let Some(operande) = self.operande_courant_mut() else {
            return;
        };

        if operande.contains('.') {
            return;
        }
        if operande.is_empty() {
            operande.push_str("0.");
        } else {
            operande.push('.');
        }
    }

    /// Retour arrière (⌫).
    ///
    /// - "0" ou erreur : rien
    /// - résultat affiché : équivaut à C
    /// - opérande droit vide : annule le choix de l’opération
    /// - sinon : retire un caractère (et un `-` resté seul)
    pub fn effacer_dernier(&mut self) {
        if self.est_en_erreur() || self.affichage() == "0" {
            return;
        }
        if self.remise_a_zero_attendue() {
            self.effacer_tout();
            return;
        }

        if let Etat::EnAttente { gauche, droite, .. } = &mut self.etat {
            if droite.is_empty() {
                let gauche = std::mem::take(gauche);
                self.etat = Etat::Saisie {
                    operande: gauche,
                    frais: false,
                };
                return;
            }
        }

        if let Some(operande) = self.operande_courant_mut() {
            retirer_caractere(operande);
        }
    }

    /// C : retour à l’état initial.
    pub fn effacer_tout(&mut self) {
        self.etat = Etat::default();
    }

    fn operande_courant_mut(&mut self) -> Option<&mut String> {
        match &mut self.etat {
            Etat::Saisie { operande, .. } | Etat::EnAttente { droite: operande, .. } => {
                Some(operande)
            }
            Etat::Erreur => None,
        }
    }
}

/* ------------------------ Outils internes ------------------------ */

fn pousser_chiffre(operande: &mut String, chiffre: char) {
    if est_zero_seul(operande) {
        operande.pop();
    }
    operande.push(chiffre);
}

fn retirer_caractere(operande: &mut String) {
    operande.pop();
    if operande.as_str() == "-" {
        operande.clear();
    }
}

/// Calcule `gauche op droite` et rend le texte du résultat.
fn calculer(gauche: &str, op: Operation, droite: &str) -> Result<String, ErreurCalcul> {
    let a = lire_operande(gauche)?;
    let b = lire_operande(droite)?;
    let r = op.appliquer(a, b)?;
    Ok(formater_resultat(r))
}

/// Erreur visible => état Erreur ; opérande illisible => `None` (état inchangé).
fn etat_apres_echec(e: ErreurCalcul) -> Option<Etat> {
    if e.est_visible() {
        debug!(erreur = %e, "calcul en erreur");
        Some(Etat::Erreur)
    } else {
        debug!(erreur = %e, "calcul abandonné");
        None
    }
}
