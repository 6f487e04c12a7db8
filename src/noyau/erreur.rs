// src/noyau/erreur.rs
//
// Taxonomie fermée des erreurs du noyau.
// Une variante par cas détecté ; la première erreur rencontrée termine le calcul.

use thiserror::Error;

/// Résultat du noyau.
pub type Resultat<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Entrée vide ou uniquement des blancs.
    #[error("Expression vide")]
    EmptyExpression,

    /// Erreur lexicale. `position` = index de caractère dans l’entrée ORIGINALE (avant retrait des espaces).
    #[error("Caractère non supporté en position {position} : '{character}'")]
    UnsupportedCharacter { position: usize, character: char },

    /// Littéral (ou résultat) hors de la plage des flottants finis.
    #[error("Nombre trop grand")]
    NumericOverflow,

    #[error("Parenthèses non équilibrées")]
    UnbalancedParentheses,

    /// RPN mal formée (garde-fou : ne doit pas arriver après to_postfix).
    #[error("Opérandes insuffisants")]
    InsufficientOperands,

    /// La pile finale ne contient pas exactement une valeur.
    #[error("Expression invalide")]
    InvalidExpression,

    #[error("Division par zéro")]
    DivisionByZero,

    /// 0 ** (négatif), ou base négative avec exposant non entier.
    #[error("Puissance invalide : {base} ** {exponent}")]
    InvalidPower { base: f64, exponent: f64 },

    /// Invariant interne violé.
    #[error("Opérateur inconnu : {0}")]
    UnknownOperator(String),
}
