//! Tests fuzz safe : robustesse + déterminisme + invariants d’état.
//!
//! But : marteler le moteur avec des suites de touches aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::moteur::{MoteurCalcul, JETON_ERREUR};
use super::operation::Operation;
use super::touches::Touche;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres surreprésentés (sinon les opérandes restent vides)
    match rng.pick(20) {
        0..=9 => Touche::Chiffre(char::from(b'0' + rng.pick(10) as u8)),
        10..=13 => Touche::Operation(Operation::TOUTES[rng.pick(5) as usize]),
        14 => Touche::Egal,
        15 => Touche::Decimal,
        16 => Touche::Negation,
        17 | 18 => Touche::Effacer,
        _ => Touche::ToutEffacer,
    }
}

/* ------------------------ Invariants ------------------------ */

/// Contexte d’échec, formaté seulement si une assertion casse.
struct Ctx<'a> {
    essai: usize,
    touches: &'a [Touche],
}

impl std::fmt::Display for Ctx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "essai={} touches={:?}", self.essai, self.touches)
    }
}

fn check_jeton(jeton: &str, ctx: &Ctx) {
    let corps = jeton.strip_prefix('-').unwrap_or(jeton);
    assert!(!corps.contains('-'), "au plus un '-' en tête: {ctx}");
    assert!(
        corps.chars().filter(|&c| c == '.').count() <= 1,
        "au plus un '.': {ctx}"
    );
    assert!(
        corps.chars().all(|c| c.is_ascii_digit() || c == '.'),
        "jeton non numérique: {ctx}"
    );
}

fn check_invariants(m: &MoteurCalcul, ctx: &Ctx) {
    let aff = m.affichage();
    assert!(!aff.is_empty(), "affichage vide: {ctx}");

    if m.est_en_erreur() {
        assert_eq!(aff, JETON_ERREUR, "{ctx}");
        assert!(m.nombre_courant().is_empty(), "{ctx}");
        assert!(m.nombre_precedent().is_empty(), "{ctx}");
        assert!(m.operation_en_cours().is_none(), "{ctx}");
        return;
    }

    match m.operation_en_cours() {
        None => {
            // un seul jeton, pas d’opérande gauche
            assert!(!aff.contains(' '), "jeton unique attendu: {ctx}");
            assert!(m.nombre_precedent().is_empty(), "{ctx}");
            check_jeton(&aff, ctx);
        }
        Some(op) => {
            // "<gauche> <sym> <droite>"
            assert!(!m.nombre_precedent().is_empty(), "gauche vide: {ctx}");
            assert!(!m.remise_a_zero_attendue(), "{ctx}");
            let attendu = format!(
                "{} {} {}",
                m.nombre_precedent(),
                op.symbole(),
                m.nombre_courant()
            );
            assert_eq!(aff, attendu, "{ctx}");
            check_jeton(m.nombre_precedent(), ctx);
            if !m.nombre_courant().is_empty() {
                check_jeton(m.nombre_courant(), ctx);
            }
        }
    }

    assert_ne!(m.nombre_courant(), "-", "'-' seul: {ctx}");
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_apres_chaque_touche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vu_erreur = 0usize;
    let mut vu_attente = 0usize;

    for essai in 0..300 {
        budget(t0, max);

        let mut m = MoteurCalcul::new();
        let mut trace: Vec<Touche> = Vec::new();

        for _ in 0..40 {
            let t = gen_touche(&mut rng);
            trace.push(t);
            m.appliquer(t);

            check_invariants(
                &m,
                &Ctx {
                    essai,
                    touches: &trace,
                },
            );

            if m.est_en_erreur() {
                vu_erreur += 1;
            }
            if m.operation_en_cours().is_some() {
                vu_attente += 1;
            }
        }
    }

    // Le fuzz doit balayer les états intéressants.
    assert!(vu_attente > 100, "trop peu d’états en attente: {vu_attente}");
    assert!(vu_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let rejouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut m = MoteurCalcul::new();
        let mut sorties = Vec::new();
        for _ in 0..200 {
            m.appliquer(gen_touche(&mut rng));
            sorties.push(m.affichage());
        }
        sorties
    };

    assert_eq!(rejouer(0xBADC0DE), rejouer(0xBADC0DE));
}

#[test]
fn fuzz_safe_clear_toujours_initial() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let mut m = MoteurCalcul::new();
        for _ in 0..(rng.pick(30) + 1) {
            m.appliquer(gen_touche(&mut rng));
        }
        m.effacer_tout();

        assert_eq!(m.affichage(), "0");
        assert_eq!(m.nombre_courant(), "");
        assert_eq!(m.nombre_precedent(), "");
        assert!(m.operation_en_cours().is_none());
        assert!(!m.remise_a_zero_attendue());
    }
}
