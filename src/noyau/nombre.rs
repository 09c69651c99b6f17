// src/noyau/nombre.rs
//
// Valeur numérique du noyau.
// - Exact    : rationnel exact (littéraux entiers ou décimaux, + - * / et puissances entières)
// - Approche : flottant f64 (exposant non entier, ou puissance exacte trop grosse)
//
// Règles :
// - Exact op Exact reste Exact (sauf garde-fou sur la taille des puissances).
// - Dès qu’un opérande est Approche, le résultat est Approche.
// - Un résultat Approche doit être fini et réel : sinon erreur (jamais NaN/∞ silencieux).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, One, Signed, ToPrimitive, Zero};

use std::fmt;

use crate::erreur::ErreurCalcul;

/// Garde-fou : taille max (en bits) estimée d’une puissance exacte.
/// Au-delà, on passe en f64 si le résultat y tient, sinon erreur explicite.
pub const BITS_EXACT_MAX: u64 = 1 << 16;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Exact(BigRational),
    Approche(f64),
}

impl Nombre {
    /// Vrai si la valeur est mathématiquement entière (quelle que soit sa représentation).
    pub fn est_entier(&self) -> bool {
        match self {
            Nombre::Exact(r) => r.is_integer(),
            Nombre::Approche(v) => v.is_finite() && v.fract() == 0.0,
        }
    }

    pub fn est_zero(&self) -> bool {
        match self {
            Nombre::Exact(r) => r.is_zero(),
            Nombre::Approche(v) => *v == 0.0,
        }
    }

    pub fn est_negatif(&self) -> bool {
        match self {
            Nombre::Exact(r) => r.is_negative(),
            Nombre::Approche(v) => *v < 0.0,
        }
    }

    /// Approximation f64 (`None` si le rationnel n’est pas convertible).
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Nombre::Exact(r) => r.to_f64(),
            Nombre::Approche(v) => Some(*v),
        }
    }

    /// Opérande f64 d’un calcul mixte : une conversion impossible est une erreur.
    fn flottant(&self) -> Result<f64, ErreurCalcul> {
        self.to_f64()
            .ok_or_else(|| ErreurCalcul::invalide("valeur non convertible en flottant"))
    }

    /// Construit un résultat approché, en refusant NaN et ±∞.
    fn approche(v: f64) -> Result<Nombre, ErreurCalcul> {
        if v.is_nan() {
            return Err(ErreurCalcul::invalide("résultat non réel"));
        }
        if v.is_infinite() {
            return Err(ErreurCalcul::invalide("dépassement de capacité"));
        }
        Ok(Nombre::Approche(v))
    }

    pub fn oppose(self) -> Nombre {
        match self {
            Nombre::Exact(r) => Nombre::Exact(-r),
            Nombre::Approche(v) => Nombre::Approche(-v),
        }
    }

    pub fn ajoute(&self, b: &Nombre) -> Result<Nombre, ErreurCalcul> {
        match (self, b) {
            (Nombre::Exact(x), Nombre::Exact(y)) => Ok(Nombre::Exact(x + y)),
            _ => Self::approche(self.flottant()? + b.flottant()?),
        }
    }

    pub fn soustrait(&self, b: &Nombre) -> Result<Nombre, ErreurCalcul> {
        match (self, b) {
            (Nombre::Exact(x), Nombre::Exact(y)) => Ok(Nombre::Exact(x - y)),
            _ => Self::approche(self.flottant()? - b.flottant()?),
        }
    }

    pub fn multiplie(&self, b: &Nombre) -> Result<Nombre, ErreurCalcul> {
        match (self, b) {
            (Nombre::Exact(x), Nombre::Exact(y)) => Ok(Nombre::Exact(x * y)),
            _ => Self::approche(self.flottant()? * b.flottant()?),
        }
    }

    /// Division réelle : 7/2 = 3.5, 9/3 = 3.
    pub fn divise(&self, b: &Nombre) -> Result<Nombre, ErreurCalcul> {
        if b.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        match (self, b) {
            (Nombre::Exact(x), Nombre::Exact(y)) => Ok(Nombre::Exact(x / y)),
            _ => Self::approche(self.flottant()? / b.flottant()?),
        }
    }

    /// Division entière (plancher) : 7//2 = 3, -7//2 = -4.
    pub fn divise_entier(&self, b: &Nombre) -> Result<Nombre, ErreurCalcul> {
        if b.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        match (self, b) {
            (Nombre::Exact(x), Nombre::Exact(y)) => Ok(Nombre::Exact((x / y).floor())),
            _ => Self::approche((self.flottant()? / b.flottant()?).floor()),
        }
    }

    /// Puissance : exacte si l’exposant est un entier raisonnable, sinon f64.
    pub fn puissance(&self, exposant: &Nombre) -> Result<Nombre, ErreurCalcul> {
        // 0^(-n) : même famille d’erreur qu’une division par zéro
        if self.est_zero() && exposant.est_negatif() {
            return Err(ErreurCalcul::DivisionParZero);
        }

        if let (Nombre::Exact(base), Nombre::Exact(e)) = (self, exposant) {
            if e.is_integer() {
                if let Some(n) = e.to_integer().to_i64() {
                    if bits_estimes(base, n) <= BITS_EXACT_MAX {
                        return Ok(Nombre::Exact(puissance_exacte(base, n)));
                    }
                }

                // résultat exact fini mais trop gros : f64 s’il y tient, sinon limite nommée
                let v = self.flottant()?.powf(exposant.flottant()?);
                if !v.is_finite() {
                    return Err(ErreurCalcul::invalide(format!(
                        "puissance exacte trop grande (limite de {BITS_EXACT_MAX} bits)"
                    )));
                }
                return Ok(Nombre::Approche(v));
            }
        }

        Self::approche(self.flottant()?.powf(exposant.flottant()?))
    }
}

/// Taille (bits) estimée de base^n, sans la calculer.
fn bits_estimes(base: &BigRational, n: i64) -> u64 {
    let bits = base.numer().bits().max(base.denom().bits());
    bits.saturating_mul(n.unsigned_abs())
}

/// base^n exact : numérateur et dénominateur élevés séparément, inverse si n < 0.
/// Appelée seulement sous `BITS_EXACT_MAX` (donc |n| petit dès que base ∉ {0}).
fn puissance_exacte(base: &BigRational, n: i64) -> BigRational {
    if n == 0 {
        return BigRational::one();
    }
    if base.is_zero() {
        return BigRational::zero();
    }

    let k = n.unsigned_abs() as usize;
    // fraction réduite => puissances premières entre elles, dénominateur > 0
    let p = BigRational::new_raw(pow(base.numer().clone(), k), pow(base.denom().clone(), k));
    if n < 0 {
        p.recip()
    } else {
        p
    }
}

/* ------------------------ Conversions ------------------------ */

impl From<BigRational> for Nombre {
    fn from(r: BigRational) -> Self {
        Nombre::Exact(r)
    }
}

impl From<BigInt> for Nombre {
    fn from(n: BigInt) -> Self {
        Nombre::Exact(BigRational::from_integer(n))
    }
}

impl From<i64> for Nombre {
    fn from(n: i64) -> Self {
        Nombre::from(BigInt::from(n))
    }
}

impl From<i32> for Nombre {
    fn from(n: i32) -> Self {
        Nombre::from(BigInt::from(n))
    }
}

impl From<f64> for Nombre {
    fn from(v: f64) -> Self {
        Nombre::Approche(v)
    }
}

/// `{}` : précision par défaut ; `{:.N}` : N décimales.
impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimales = f.precision().unwrap_or(super::format::DECIMALES_DEFAUT);
        f.write_str(&super::format::format_result(self.clone(), decimales))
    }
}
