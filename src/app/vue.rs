// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Clavier : Enter évalue (quand le champ a le focus)
// - Tactile : pavé numérique + opérateurs, focus redonné après clic (focus_entree)
// - Panneaux : résultat, démarche (jetons / RPN), historique cliquable

use eframe::egui;

use calculatrice_rpn::{eval_expression, format_nombre};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2 + 3) * 4, 2 ** 3 ** 2, 17 // 5, .5 + 1")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // singleline : Enter fait perdre le focus au champ
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        const LIGNES: [[(&str, InsertKind); 5]; 4] = [
            [
                ("7", InsertKind::Digit),
                ("8", InsertKind::Digit),
                ("9", InsertKind::Digit),
                ("/", InsertKind::Op),
                ("//", InsertKind::Op),
            ],
            [
                ("4", InsertKind::Digit),
                ("5", InsertKind::Digit),
                ("6", InsertKind::Digit),
                ("*", InsertKind::Op),
                ("%", InsertKind::Op),
            ],
            [
                ("1", InsertKind::Digit),
                ("2", InsertKind::Digit),
                ("3", InsertKind::Digit),
                ("-", InsertKind::Op),
                ("**", InsertKind::Op),
            ],
            [
                ("0", InsertKind::Digit),
                (".", InsertKind::Digit),
                ("(", InsertKind::OpenParen),
                (")", InsertKind::CloseParen),
                ("+", InsertKind::Op),
            ],
        ];

        egui::Grid::new("pave_rpn")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in LIGNES {
                    for (texte, kind) in ligne {
                        self.bouton_insert(ui, texte, kind);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel = None;

        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("(vide)");
                }
                for (i, ligne) in self.historique.iter().enumerate() {
                    let texte = format!("{} = {}", ligne.expression, ligne.resultat);
                    if ui
                        .selectable_label(false, egui::RichText::new(texte).monospace())
                        .on_hover_text("Recharger cette expression")
                        .clicked()
                    {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.rappel_historique(i);
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
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
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }
        insere(&mut self.entree, texte, kind);
        self.focus_entree = true;
    }

    /// Évalue l’expression via le noyau, puis dépose résultat / démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match eval_expression(&self.entree) {
            Ok(ev) => self.set_resultat(format_nombre(ev.valeur), ev.demarche),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

/// Insertion d’un symbole avec espacement lisible (les espaces sont ignorés par le noyau).
fn insere(entree: &mut String, texte: &str, kind: InsertKind) {
    match kind {
        InsertKind::Digit => entree.push_str(texte),
        InsertKind::CloseParen => {
            let coupe = entree.trim_end_matches(' ').len();
            entree.truncate(coupe);
            entree.push_str(texte);
        }
        InsertKind::OpenParen => {
            if entree.ends_with(|c: char| c.is_ascii_digit() || c == ')') {
                entree.push(' ');
            }
            entree.push_str(texte);
        }
        InsertKind::Op => {
            let coupe = entree.trim_end_matches(' ').len();
            entree.truncate(coupe);
            if !entree.is_empty() && !entree.ends_with('(') {
                entree.push(' ');
            }
            entree.push_str(texte);
            entree.push(' ');
        }
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
    OpenParen,
    CloseParen,
}
