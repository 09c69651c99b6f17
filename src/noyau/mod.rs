//! Noyau arithmétique sûr
//!
//! Organisation interne :
//! - jetons.rs       : validation des caractères + tokenisation
//! - rpn.rs          : shunting-yard (syntaxe) + évaluation sur pile + construction Expr
//! - expr.rs         : AST arithmétique (affichage de la démarche)
//! - nombre.rs       : valeur exacte (rationnel) ou approchée (f64)
//! - format.rs       : affichage du résultat (précision contrôlée)
//! - eval.rs         : pipeline complet
//! - calculatrice.rs : opérations f64 sans état

pub mod calculatrice;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_detaille, eval_expression, Demarche};
pub use format::{format_result, format_result_defaut, DECIMALES_DEFAUT, DECIMALES_MAX};
pub use nombre::Nombre;
