//! Configuration (variables d’environnement, `.env` chargé par `main`).
//!
//! - `CALC_DECIMALES`  : précision d’affichage par défaut (bornée par `DECIMALES_MAX`)
//! - `CALC_HISTORIQUE` : nombre de calculs gardés dans l’historique
//!
//! Absente => valeur par défaut ; présente mais illisible => `ConfigError`.

use std::env;

use crate::erreur::ConfigError;
use crate::noyau::{DECIMALES_DEFAUT, DECIMALES_MAX};

/// Taille par défaut de l’historique des calculs (UI).
pub const HISTORIQUE_DEFAUT: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Précision d’affichage (bornée par `DECIMALES_MAX`).
    pub decimales: usize,
    /// Nombre de calculs gardés dans l’historique.
    pub historique_max: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            historique_max: HISTORIQUE_DEFAUT,
        }
    }
}

impl Config {
    /// Lit `CALC_DECIMALES` et `CALC_HISTORIQUE` (valeurs par défaut si absentes).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaut = Self::default();

        let decimales = lire_entier(&lookup, "CALC_DECIMALES")?
            .unwrap_or(defaut.decimales)
            .min(DECIMALES_MAX);
        let historique_max =
            lire_entier(&lookup, "CALC_HISTORIQUE")?.unwrap_or(defaut.historique_max);

        Ok(Self {
            decimales,
            historique_max,
        })
    }
}

fn lire_entier(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<usize>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(valeur) => valeur
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EntierInvalide { var, valeur }),
    }
}
