//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   - jamais de panique, jamais de NaN/∞ renvoyé comme résultat
//!   - même entrée => même sortie
//!   - une erreur est toujours l’une des familles attendues

use std::time::{Duration, Instant};

use super::{eval_expression, format_result, Nombre};
use crate::erreur::ErreurCalcul;

/* ------------------------ Aléa reproductible (xorshift64*) ------------------------ */

struct Alea(u64);

impl Alea {
    fn graine(g: u64) -> Self {
        // xorshift reste bloqué sur 0
        Alea(g | 1)
    }

    fn suivant(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Entier dans [0, n) (0 si n == 0).
    fn pick(&mut self, n: u32) -> u32 {
        match n {
            0 => 0,
            n => (self.suivant() >> 33) as u32 % n,
        }
    }

    fn coin(&mut self) -> bool {
        self.suivant() >> 63 == 1
    }
}

/* ------------------------ Chrono anti-gel ------------------------ */

struct Chrono {
    debut: Instant,
    max: Duration,
}

impl Chrono {
    fn secondes(s: u64) -> Self {
        Chrono {
            debut: Instant::now(),
            max: Duration::from_secs(s),
        }
    }

    fn tic(&self) {
        let ecoule = self.debut.elapsed();
        assert!(ecoule <= self.max, "budget temps dépassé : {ecoule:?} > {:?}", self.max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Alea) -> String {
    let entier = rng.pick(13);
    match rng.pick(4) {
        0 => format!("{entier}.{}", rng.pick(100)),
        1 => format!(".{}", rng.pick(10)),
        _ => format!("{entier}"),
    }
}

fn gen_expr(rng: &mut Alea, profondeur: u32) -> String {
    if profondeur == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, profondeur - 1);
    let b = gen_expr(rng, profondeur - 1);

    match rng.pick(8) {
        0 => format!("{a}+{b}"),
        1 => format!("{a}-{b}"),
        2 => format!("{a}*{b}"),
        3 => format!("{a}/{b}"),
        4 => format!("({a})//({b})"),
        // exposants petits : on veut tester, pas exploser
        5 => format!("({a})^{}", rng.pick(4)),
        6 => format!("-({a})"),
        _ => format!("({a})"),
    }
}

/// Bruit : insère un caractère (valide ou non) à une position aléatoire.
fn bruite(rng: &mut Alea, s: &str) -> String {
    const BRUIT: [char; 12] = ['+', '*', '(', ')', '.', '^', '/', ' ', 'x', '$', '9', '-'];
    let mut chars: Vec<char> = s.chars().collect();
    let pos = rng.pick(chars.len() as u32 + 1) as usize;
    chars.insert(pos, BRUIT[rng.pick(BRUIT.len() as u32) as usize]);
    chars.into_iter().collect()
}

fn verifie(expr: &str) -> Result<Nombre, ErreurCalcul> {
    let r = eval_expression(expr);
    match &r {
        Ok(v) => {
            if let Nombre::Approche(x) = v {
                assert!(x.is_finite(), "résultat non fini pour {expr:?}: {x}");
            }
            // le formateur accepte toute valeur produite
            let _ = format_result(v.clone(), 4);
        }
        Err(ErreurCalcul::ExpressionInvalide(_)) | Err(ErreurCalcul::DivisionParZero) => {}
        Err(e) => panic!("erreur inattendue pour {expr:?}: {e}"),
    }
    r
}

#[test]
fn fuzz_expressions_bien_formees() {
    let chrono = Chrono::secondes(10);
    let mut rng = Alea::graine(0x5eed_cafe);

    for _ in 0..600 {
        chrono.tic();
        let expr = gen_expr(&mut rng, 4);
        let r = verifie(&expr);

        // bien formée : seule la division par zéro (ou un résultat non réel) peut échouer
        if let Err(ErreurCalcul::ExpressionInvalide(m)) = &r {
            assert!(
                m.contains("non réel") || m.contains("dépassement") || m.contains("trop grande"),
                "expr bien formée refusée: {expr:?} ({m})"
            );
        }

        // déterminisme
        assert_eq!(r, eval_expression(&expr), "expr={expr:?}");
    }
}

#[test]
fn fuzz_expressions_bruitees() {
    let chrono = Chrono::secondes(10);
    let mut rng = Alea::graine(42);

    for _ in 0..600 {
        chrono.tic();
        let base = gen_expr(&mut rng, 3);
        let mut expr = bruite(&mut rng, &base);
        if rng.coin() {
            expr = bruite(&mut rng, &expr);
        }
        let _ = verifie(&expr);
    }
}

#[test]
fn fuzz_imbrication_profonde_sans_panique() {
    // thread de test par défaut : l’évaluation ne doit pas dépendre de la taille de pile
    let chrono = Chrono::secondes(10);

    for n in [1usize, 10, 100, 600, 2_000, 10_000] {
        chrono.tic();
        let parens = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(eval_expression(&parens), Ok(Nombre::from(1)), "n={n}");

        let moins = format!("{}1", "-".repeat(n));
        let attendu = if n % 2 == 0 { 1 } else { -1 };
        assert_eq!(verifie(&moins), Ok(Nombre::from(attendu)), "n={n}");

        let somme = vec!["1"; n].join("+");
        assert_eq!(verifie(&somme), Ok(Nombre::from(n as i64)), "n={n}");

        let puissances = format!("{}1", "1^".repeat(n));
        assert_eq!(verifie(&puissances), Ok(Nombre::from(1)), "n={n}");
    }
}
