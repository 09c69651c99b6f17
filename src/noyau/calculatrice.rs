//! Calculatrice : opérations f64 pures, sans état.
//!
//! Indépendante de l’évaluateur d’expressions ; les deux doivent s’accorder
//! sur + - * /.

use crate::erreur::ErreurCalcul;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    if b == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(a / b)
}

pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// Modulo “plancher” : le reste prend le signe du diviseur (-7 mod 3 = 2).
pub fn modulo(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    if b == 0.0 {
        return Err(ErreurCalcul::ModuloParZero);
    }
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

pub fn square_root(a: f64) -> Result<f64, ErreurCalcul> {
    if a < 0.0 {
        return Err(ErreurCalcul::RadicandeNegatif);
    }
    Ok(a.sqrt())
}
