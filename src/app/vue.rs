// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Panneau “Opérations” : appelle directement la calculatrice f64

use eframe::egui;
use log::warn;

use calculatrice_sure::noyau::DECIMALES_MAX;
use calculatrice_sure::{calculatrice, eval_detaille, format_result, ErreurCalcul};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice sûre");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_operations(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (10 + 5) / 3, 2^-1, 7 // 2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + précision
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::Paren);
            self.bouton_insert(ui, ")", ")", InsertKind::Paren);

            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "*", "*", InsertKind::Op);
            self.bouton_insert(ui, "/", "/", InsertKind::Op);
            self.bouton_insert(ui, "//", "//", InsertKind::Op);
            self.bouton_insert(ui, "^", "^", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", "6", InsertKind::Digit);
                self.bouton_insert(ui, ".", ".", InsertKind::Digit);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", "3", InsertKind::Digit);
                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                ui.end_row();
            });
    }

    /// Backspace : retire un opérateur double d’un coup ("//", "**"), sinon un caractère.
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        let n = if self.entree.ends_with("//") || self.entree.ends_with("**") {
            2
        } else {
            1
        };
        for _ in 0..n {
            self.entree.pop();
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        if self.valeur.is_some() {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        } else {
            ui.monospace("—");
        }
    }

    fn ui_operations(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Opérations")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("a :");
                    ui.add(egui::DragValue::new(&mut self.operande_a).speed(0.1));
                    ui.label("b :");
                    ui.add(egui::DragValue::new(&mut self.operande_b).speed(0.1));
                });

                ui.horizontal_wrapped(|ui| {
                    self.bouton_operation(ui, "a + b", Operation::Add);
                    self.bouton_operation(ui, "a - b", Operation::Subtract);
                    self.bouton_operation(ui, "a * b", Operation::Multiply);
                    self.bouton_operation(ui, "a / b", Operation::Divide);
                    self.bouton_operation(ui, "a ^ b", Operation::Power);
                    self.bouton_operation(ui, "a mod b", Operation::Modulo);
                    self.bouton_operation(ui, "sqrt(a)", Operation::SquareRoot);
                });

                if !self.resultat_operation.is_empty() {
                    Self::champ_monospace(ui, "operation_out", &self.resultat_operation, 1);
                }
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel = None;

        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("vide");
                }
                for (i, ligne) in self.historique.iter().enumerate() {
                    let texte = format!("{} = {}", ligne.expression, ligne.resultat);
                    if ui
                        .add(egui::Button::new(egui::RichText::new(texte).monospace()))
                        .on_hover_text("Reprendre cette expression")
                        .clicked()
                    {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.rappelle(i);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            // chiffres et parenthèses : pas d’espaces auto (les espaces sont insignifiants)
            InsertKind::Digit | InsertKind::Paren => self.entree.push_str(to_insert),
        }

        self.focus_entree = true;
    }

    fn bouton_operation(&mut self, ui: &mut egui::Ui, label: &str, op: Operation) {
        if !ui.button(label).clicked() {
            return;
        }

        let (a, b) = (self.operande_a, self.operande_b);
        let r: Result<f64, ErreurCalcul> = match op {
            Operation::Add => Ok(calculatrice::add(a, b)),
            Operation::Subtract => Ok(calculatrice::subtract(a, b)),
            Operation::Multiply => Ok(calculatrice::multiply(a, b)),
            Operation::Divide => calculatrice::divide(a, b),
            Operation::Power => Ok(calculatrice::power(a, b)),
            Operation::Modulo => calculatrice::modulo(a, b),
            Operation::SquareRoot => calculatrice::square_root(a),
        };

        self.resultat_operation = match r {
            Ok(v) => format!("{label} = {}", format_result(v, self.decimales)),
            Err(e) => {
                warn!("opération {label} ({a}, {b}) : {e}");
                format!("{label} : {e}")
            }
        };
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match eval_detaille(&self.entree) {
            Ok((valeur, demarche)) => self.set_resultat(valeur, demarche),
            Err(e) => {
                warn!("évaluation refusée pour {:?} : {e}", self.entree);
                self.set_erreur(e.to_string());
            }
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    Paren,
}

#[derive(Clone, Copy, Debug)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    SquareRoot,
}
