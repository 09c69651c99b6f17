//! Tests de propriétés : invariants du noyau (évaluateur, formateur, calculatrice).
//!
//! - espaces insignifiants
//! - caractères hors grammaire toujours refusés
//! - accord évaluateur / calculatrice sur + - * /
//! - idempotence du formatage des entiers

use pretty_assertions::assert_eq;

use super::calculatrice;
use super::{eval_expression, format_result, format_result_defaut, Nombre};
use crate::erreur::ErreurCalcul;

fn eval_f64(expr: &str) -> f64 {
    eval_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .to_f64()
        .unwrap_or_else(|| panic!("expr={expr:?} non convertible en f64"))
}

/// Insère des espaces variés entre chaque caractère.
fn aere(expr: &str) -> String {
    let blancs = [" ", "  ", "\t", "\n", " \r\n "];
    expr.chars()
        .enumerate()
        .map(|(i, c)| format!("{}{c}", blancs[i % blancs.len()]))
        .collect::<String>()
        + "   "
}

#[test]
fn prop_espaces_insignifiants() {
    for expr in [
        "2+3",
        "(2+3)*4",
        "(10+5)/3",
        "2^3",
        "-2^2",
        "7//2",
        "1.5*4-0.25",
        "2^-1+3/4",
    ] {
        assert_eq!(
            eval_expression(expr),
            eval_expression(&aere(expr)),
            "expr={expr:?}"
        );
    }
    assert_eq!(eval_expression(" 2 + 3 "), Ok(Nombre::from(5)));
}

#[test]
fn prop_caracteres_hors_grammaire() {
    // toutes les chaînes faites uniquement de caractères interdits
    let interdits = ['a', 'Z', '_', '$', '%', '&', '=', '[', ']', '{', '}', ',', ';', '"', '\'', '!', '~', 'é', '√', 'π'];
    for (i, c) in interdits.iter().enumerate() {
        let seul = c.to_string();
        let repete: String = interdits.iter().cycle().skip(i).take(5).collect();
        for s in [seul, repete] {
            assert!(
                matches!(eval_expression(&s), Err(ErreurCalcul::ExpressionInvalide(_))),
                "s={s:?}"
            );
        }
    }

    // un seul caractère interdit suffit, même au milieu d’une expression valide
    for c in interdits {
        let s = format!("1+{c}2");
        assert!(
            matches!(eval_expression(&s), Err(ErreurCalcul::ExpressionInvalide(_))),
            "s={s:?}"
        );
    }
}

#[test]
fn prop_accord_calculatrice() {
    let operandes = [0.0, 1.0, 2.0, 3.0, 7.0, 10.0, 2.5, 0.5, 12.25];

    for &a in &operandes {
        for &b in &operandes {
            let proche = |x: f64, y: f64| (x - y).abs() <= 1e-9 * x.abs().max(1.0);

            assert!(proche(eval_f64(&format!("{a}+{b}")), calculatrice::add(a, b)));
            assert!(proche(eval_f64(&format!("{a}-{b}")), calculatrice::subtract(a, b)));
            assert!(proche(eval_f64(&format!("{a}*{b}")), calculatrice::multiply(a, b)));

            match calculatrice::divide(a, b) {
                Ok(q) => assert!(proche(eval_f64(&format!("{a}/{b}")), q), "a={a} b={b}"),
                Err(e) => {
                    assert_eq!(e, ErreurCalcul::DivisionParZero);
                    assert_eq!(
                        eval_expression(&format!("{a}/{b}")),
                        Err(ErreurCalcul::DivisionParZero)
                    );
                }
            }
        }
    }
}

#[test]
fn prop_accord_puissance_entiere() {
    for (a, b) in [(2.0, 3.0), (5.0, 0.0), (0.0, 5.0), (-2.0, 3.0), (-2.0, 2.0), (3.0, 2.0)] {
        let expr = format!("({a})^{b}");
        assert_eq!(eval_f64(&expr), calculatrice::power(a, b), "expr={expr:?}");
    }
}

#[test]
fn prop_idempotence_format() {
    for v in [0.0, 1.0, -1.0, 10.0, 123456.0, -3.0, 1e15] {
        let une = format_result_defaut(v);
        let relu: f64 = une.parse().unwrap();
        assert_eq!(format_result_defaut(relu), une);
        assert!(!une.contains('.'), "v={v} -> {une:?}");
    }
}

#[test]
fn prop_pipeline_evaluer_puis_formater() {
    let cas = [
        ("2 + 3", "5"),
        ("(10 + 5) / 3", "5"),
        ("10 / 3", "3.33"),
        ("7 / 2", "3.50"),
        ("-7 / 2", "-3.50"),
        ("2 ^ -2", "0.25"),
        ("0.1 + 0.2", "0.30"),
        ("10 / 3 * 3", "10"),
        ("2 ^ 0.5", "1.41"),
    ];
    for (expr, attendu) in cas {
        let v = eval_expression(expr).unwrap();
        assert_eq!(format_result(v, 2), attendu, "expr={expr:?}");
    }
}
