//! Erreurs du noyau (évaluation, formatage, calculatrice) et de la configuration.
//!
//! Contrat :
//! - `DivisionParZero` est distincte de `ExpressionInvalide` (l’appelant peut brancher dessus).
//! - Jamais de valeur sentinelle (-1, NaN, ∞) à la place d’une erreur.

use thiserror::Error;

/// Erreur de calcul, remontée telle quelle à l’appelant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Texte mal formé ou hors grammaire (caractère interdit, syntaxe incomplète, entrée vide…).
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),

    /// Diviseur exactement nul (évaluation ou `calculatrice::divide`).
    #[error("division par zéro")]
    DivisionParZero,

    /// Modulo avec un diviseur nul.
    #[error("modulo par zéro")]
    ModuloParZero,

    /// Racine carrée d’un nombre négatif.
    #[error("racine carrée d’un nombre négatif")]
    RadicandeNegatif,
}

impl ErreurCalcul {
    pub fn invalide(msg: impl Into<String>) -> Self {
        ErreurCalcul::ExpressionInvalide(msg.into())
    }
}

/// Erreur de lecture de la configuration (variables d’environnement).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} doit être un entier positif (reçu {valeur:?})")]
    EntierInvalide { var: &'static str, valeur: String },
}
