// src/noyau/format.rs

use super::erreur::ErreurCalcul;

/// Plus grand entier représenté exactement par un f64 (2^53).
const ENTIER_EXACT_MAX: f64 = 9_007_199_254_740_992.0;

/* ------------------------ Lecture d’un opérande ------------------------ */

/// Lit un opérande construit par le moteur : `-`? chiffres, au plus un `.`.
///
/// Plus strict que `str::parse::<f64>` (qui accepte `inf`, `1e5`, `+3`…) :
/// l’affichage ne doit jamais contenir autre chose que des chiffres.
pub fn lire_operande(s: &str) -> Result<f64, ErreurCalcul> {
    let invalide = || ErreurCalcul::OperandeInvalide(s.to_string());

    let corps = s.strip_prefix('-').unwrap_or(s);
    let mut points = 0usize;
    let mut chiffres = 0usize;
    for c in corps.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => points += 1,
            _ => return Err(invalide()),
        }
    }
    if chiffres == 0 || points > 1 {
        return Err(invalide());
    }

    s.parse::<f64>().map_err(|_| invalide())
}

/* ------------------------ Affichage d’un résultat ------------------------ */

/// Formate un résultat fini :
/// - entier mathématique => sans `.0` (et jamais `-0`)
/// - sinon => plus courte écriture décimale qui relit la même valeur
///
/// `Display` de f64 n’utilise jamais la notation exponentielle, donc la sortie
/// reste un jeton relisible par `lire_operande`.
pub fn formater_resultat(r: f64) -> String {
    if r == 0.0 {
        return "0".to_string();
    }
    if r.fract() == 0.0 && r.abs() <= ENTIER_EXACT_MAX {
        return format!("{}", r as i64);
    }
    format!("{r}")
}

/* ------------------------ Jeton numérique ------------------------ */

/// Bascule le signe `-` en tête d’un jeton.
pub fn basculer_signe(s: &str) -> String {
    match s.strip_prefix('-') {
        Some(reste) => reste.to_string(),
        None => format!("-{s}"),
    }
}

/// `0` ou `-0` : un chiffre tapé remplace ce zéro au lieu de s’y ajouter.
pub fn est_zero_seul(s: &str) -> bool {
    s == "0" || s == "-0"
}
