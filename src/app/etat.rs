//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, historique)
//! et offrir des opérations simples (C/CLR/AC/DEL) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné (HISTORIQUE_MAX).

use calculatrice_rpn::Demarche;

/// Nombre max d’entrées gardées dans l’historique.
pub const HISTORIQUE_MAX: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct LigneHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (jetons + RPN) ---
    pub demarche: Demarche,

    // --- historique (plus récent en tête) ---
    pub historique: Vec<LigneHistorique>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole ("**" et "//" d’un coup), espaces finaux compris.
    pub fn backspace_entree(&mut self) {
        let coupe = self.entree.trim_end_matches(' ').len();
        self.entree.truncate(coupe);

        if self.entree.ends_with("**") || self.entree.ends_with("//") {
            self.entree.truncate(self.entree.len() - 2);
        } else {
            self.entree.pop();
        }

        let coupe = self.entree.trim_end_matches(' ').len();
        self.entree.truncate(coupe);
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE le dernier résultat ; la démarche (non fiable) est effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat + démarche, et l’ajouter à l’historique.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;

        self.historique.insert(
            0,
            LigneHistorique {
                expression: self.entree.trim().to_string(),
                resultat: self.resultat.clone(),
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);

        self.focus_entree = true;
    }

    /// Recharge une expression de l’historique dans l’entrée.
    pub fn rappel_historique(&mut self, index: usize) {
        if let Some(ligne) = self.historique.get(index) {
            self.entree = ligne.expression.clone();
        }
        self.focus_entree = true;
    }
}
