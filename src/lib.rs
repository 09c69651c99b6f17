//! Calculatrice sûre — noyau arithmétique réutilisable.
//!
//! - `noyau`  : évaluateur d’expressions restreint, formateur, calculatrice f64
//! - `config` : réglages (précision, historique) lus dans l’environnement
//! - `erreur` : erreurs typées

pub mod config;
pub mod erreur;
pub mod noyau;

pub use config::Config;
pub use erreur::{ConfigError, ErreurCalcul};
pub use noyau::{
    calculatrice, eval_detaille, eval_expression, format_result, format_result_defaut, Demarche,
    Nombre,
};
