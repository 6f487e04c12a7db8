//! Noyau de calcul flottant
//!
//! Organisation interne :
//! - operateurs.rs : symboles + table précédence / associativité
//! - jetons.rs     : tokenisation (espaces retirés, positions d’origine conservées)
//! - rpn.rs        : shunting-yard -> RPN
//! - eval.rs       : évaluation RPN + pipeline complet
//! - format.rs     : affichage des nombres
//! - erreur.rs     : taxonomie des erreurs

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use erreur::{CalcError, Resultat};
pub use eval::{calculate, eval_expression, evaluate, Demarche, Evaluation};
pub use format::format_nombre;
pub use jetons::{tokenize, Token};
pub use rpn::{to_postfix, PostfixEntry};
