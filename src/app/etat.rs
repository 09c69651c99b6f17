//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, précision,
//! démarche, historique, opérandes) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing) ; seul le formatage du résultat est appelé.
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes : précision <= DECIMALES_MAX, historique <= historique_max.

use std::collections::VecDeque;

use calculatrice_sure::{format_result, Config, Demarche, Nombre};
use calculatrice_sure::noyau::DECIMALES_MAX;

/// Une ligne d’historique : expression saisie + résultat affiché.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigneHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: Option<Nombre>, // dernier résultat brut (reformaté si la précision change)
    pub resultat: String,       // dernier résultat formaté
    pub erreur: String,         // message d’erreur (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique ---
    pub historique: VecDeque<LigneHistorique>,
    pub historique_max: usize,

    // --- opérations directes (calculatrice) ---
    pub operande_a: f64,
    pub operande_b: f64,
    pub resultat_operation: String,

    // --- paramètres ---
    pub decimales: usize,
    decimales_config: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl AppCalc {
    pub fn new(config: Config) -> Self {
        let decimales = config.decimales.min(DECIMALES_MAX);
        Self {
            entree: String::new(),
            valeur: None,
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: VecDeque::new(),
            historique_max: config.historique_max,
            operande_a: 0.0,
            operande_b: 0.0,
            resultat_operation: String::new(),
            decimales,
            decimales_config: decimales,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique + précision de la config).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.resultat_operation.clear();
        self.decimales = self.decimales_config;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.valeur = None;
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE le dernier résultat, mais la démarche est effacée
    /// (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet, puis l’ajouter à l’historique.
    pub fn set_resultat(&mut self, valeur: Nombre, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format_result(valeur.clone(), self.decimales);
        self.valeur = Some(valeur);
        self.demarche = demarche;

        self.pousse_historique(LigneHistorique {
            expression: self.entree.trim().to_string(),
            resultat: self.resultat.clone(),
        });

        self.focus_entree = true;
    }

    fn pousse_historique(&mut self, ligne: LigneHistorique) {
        if self.historique_max == 0 {
            return;
        }
        self.historique.push_front(ligne);
        self.historique.truncate(self.historique_max);
    }

    /// Garde-fou : borne la précision, puis reformate le dernier résultat.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        if let Some(v) = &self.valeur {
            self.resultat = format_result(v.clone(), self.decimales);
        }
        self.focus_entree = true;
    }

    /// Reprend une expression de l’historique dans l’entrée.
    pub fn rappelle(&mut self, index: usize) {
        if let Some(ligne) = self.historique.get(index) {
            self.entree = ligne.expression.clone();
            self.focus_entree = true;
        }
    }
}
