//! Noyau — évaluation (pipeline réel)
//!
//! espaces retirés -> caractères validés -> jetons (^ / ** -> puissance)
//!        -> RPN (shunting-yard, syntaxe validée) -> évaluation sur pile
//!
//! L’arbre (Expr) n’est construit que pour la démarche, et seulement s’il reste
//! assez peu profond pour être affiché.
//!
//! Pur et déterministe : seule trace, `log::debug!`.

use log::debug;

use crate::erreur::ErreurCalcul;

use super::jetons::{format_tokens, tokenize, Tok};
use super::nombre::Nombre;
use super::rpn::{evalue_rpn, from_rpn, to_rpn, PROFONDEUR_ARBRE_MAX};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// Jetons validés -> RPN -> valeur.
fn evalue(expr_str: &str) -> Result<(Vec<Tok>, Vec<Tok>, Nombre), ErreurCalcul> {
    let jetons = tokenize(expr_str)?;
    let rpn = to_rpn(&jetons)?;
    debug!("rpn: {}", format_tokens(&rpn));

    let valeur = evalue_rpn(&rpn)?;
    debug!("{expr_str:?} => {valeur:?}");

    Ok((jetons, rpn, valeur))
}

/// API publique : évalue une expression arithmétique restreinte.
pub fn eval_expression(expr_str: &str) -> Result<Nombre, ErreurCalcul> {
    evalue(expr_str).map(|(_, _, valeur)| valeur)
}

/// Comme `eval_expression`, avec la démarche (jetons, RPN, arbre).
pub fn eval_detaille(expr_str: &str) -> Result<(Nombre, Demarche), ErreurCalcul> {
    let (jetons, rpn, valeur) = evalue(expr_str)?;

    // arbre trop profond : la valeur reste bonne, seul l’affichage est omis
    let arbre = match from_rpn(&rpn) {
        Ok(e) => e.to_string(),
        Err(_) => format!("(arbre non affiché : profondeur > {PROFONDEUR_ARBRE_MAX})"),
    };

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        arbre,
    };

    Ok((valeur, d))
}
