//! Calculatrice RPN : évaluation d’expressions arithmétiques flottantes.
//!
//! `calculate("2 + 3 * 4")` enchaîne tokenize -> to_postfix -> evaluate
//! et renvoie la valeur ou la première [`CalcError`] rencontrée.

pub mod noyau;

pub use noyau::{
    calculate, eval_expression, evaluate, format_nombre, to_postfix, tokenize, CalcError,
    Demarche, Evaluation, PostfixEntry, Resultat, Token,
};
