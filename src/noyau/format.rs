// src/noyau/format.rs
//
// Affichage d’un résultat numérique.
// - Valeur entière (quelle que soit la représentation) : forme entière, sans point ni zéros.
// - Sinon : virgule fixe avec exactement `decimales` chiffres.
//
// Arrondi : demi-pair, appliqué à la valeur EXACTE de la représentation.
// - Approche(f64) : `format!("{:.N}")` de Rust (arrondi correct sur la valeur binaire,
//   donc 2.675_f64 -> "2.67" puisque le binaire est sous le milieu).
// - Exact(rationnel) : même règle sur le rationnel (2.675 exact -> "2.68", 0.125 -> "0.12").

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::nombre::Nombre;

/// Précision par défaut (nombre de décimales).
pub const DECIMALES_DEFAUT: usize = 2;

/// Garde-fou : précision maximale acceptée par l’UI et la configuration.
pub const DECIMALES_MAX: usize = 200;

/// Formate un résultat avec `decimales` chiffres après le point (si non entier).
pub fn format_result(valeur: impl Into<Nombre>, decimales: usize) -> String {
    match valeur.into() {
        Nombre::Exact(r) => format_rationnel(&r, decimales),
        Nombre::Approche(v) => format_flottant(v, decimales),
    }
}

/// `format_result` avec la précision par défaut (2).
pub fn format_result_defaut(valeur: impl Into<Nombre>) -> String {
    format_result(valeur, DECIMALES_DEFAUT)
}

fn format_flottant(v: f64, decimales: usize) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        // -0.0 -> "0"
        if v == 0.0 {
            return "0".to_string();
        }
        return format!("{v:.0}");
    }
    format!("{v:.decimales$}")
}

fn format_rationnel(r: &BigRational, decimales: usize) -> String {
    if r.is_integer() {
        return r.to_integer().to_string();
    }

    let neg = r.is_negative();
    let scaled = arrondi_demi_pair(&(r.abs() * BigRational::from_integer(pow10(decimales))));
    scaled_to_decimal(&scaled, decimales, neg)
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Entier le plus proche de r (r >= 0), égalités vers le pair.
fn arrondi_demi_pair(r: &BigRational) -> BigInt {
    let plancher = r.floor();
    let reste = r - &plancher;
    let plancher = plancher.to_integer();
    let demi = BigRational::new(BigInt::from(1), BigInt::from(2));

    let monte = if reste > demi {
        true
    } else if reste == demi {
        !(&plancher % 2u32).is_zero()
    } else {
        false
    };

    if monte {
        plancher + 1u32
    } else {
        plancher
    }
}

/// Convertit un entier “scalé” (×10^digits, positif) en texte décimal, signe à part.
fn scaled_to_decimal(scaled: &BigInt, digits: usize, neg: bool) -> String {
    let signe = if neg { "-" } else { "" };

    let scale = pow10(digits);
    let int_part = scaled / &scale;
    let frac_part = scaled % &scale;

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}
