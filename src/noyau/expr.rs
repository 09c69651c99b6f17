// src/noyau/expr.rs
//
// AST arithmétique (démarche).
// - Rat    : littéral exact (rationnel)
// - Neg    : moins unaire
// - binaires : + - * / // ^
//
// IMPORTANT (SAFE):
// - Aucun noeud “nom”, “appel” ou “accès” : l’arbre ne peut exprimer que de l’arithmétique.
// - Display est récursif : l’arbre n’est construit que via `rpn::from_rpn`, qui borne sa profondeur.
// - L’évaluation ne passe pas par l’arbre (voir `rpn::evalue_rpn`).

use num_rational::BigRational;
use num_traits::One;

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Rat(BigRational),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    DivEntiere(Box<Expr>, Box<Expr>), // a // b
    Puissance(Box<Expr>, Box<Expr>),  // a ^ b
}

/// Affichage entièrement parenthésé (démarche).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        let (a, op, b) = match self {
            Rat(r) => {
                return if r.denom().is_one() {
                    write!(f, "{}", r.numer())
                } else {
                    write!(f, "{}/{}", r.numer(), r.denom())
                };
            }
            Neg(a) => return write!(f, "(-{a})"),

            Add(a, b) => (a, "+", b),
            Sub(a, b) => (a, "-", b),
            Mul(a, b) => (a, "*", b),
            Div(a, b) => (a, "/", b),
            DivEntiere(a, b) => (a, "//", b),
            Puissance(a, b) => (a, "^", b),
        };
        write!(f, "({a} {op} {b})")
    }
}
