// src/noyau/operation.rs

use super::erreur::ErreurCalcul;

/// Les cinq opérations binaires du pavé.
///
/// Les symboles sont fixes : la vue les affiche tels quels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
}

impl Operation {
    pub const TOUTES: [Operation; 5] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Modulo,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
            Operation::Modulo => "%",
        }
    }

    /// Inverse de `symbole` (accepte aussi `*`, `x` et `/` du clavier).
    pub fn depuis_symbole(s: &str) -> Option<Operation> {
        match s {
            "+" => Some(Operation::Addition),
            "-" => Some(Operation::Soustraction),
            "×" | "*" | "x" | "X" => Some(Operation::Multiplication),
            "÷" | "/" => Some(Operation::Division),
            "%" => Some(Operation::Modulo),
            _ => None,
        }
    }

    /// Applique l’opération en flottant.
    ///
    /// - ÷0 et %0 (y compris -0) => `DivisionParZero`
    /// - dépassement (±∞, NaN) => `ResultatNonFini`
    /// - Modulo : reste natif, le signe suit le dividende.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        let r = match self {
            Operation::Addition => a + b,
            Operation::Soustraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a / b
            }
            Operation::Modulo => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a % b
            }
        };

        if !r.is_finite() {
            return Err(ErreurCalcul::ResultatNonFini);
        }
        Ok(r)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbole())
    }
}
