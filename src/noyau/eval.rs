//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de valeurs
//!
//! Contrôles de domaine : division par zéro (/ // %), 0 ** négatif,
//! base négative ** exposant non entier, débordement vers ±∞.

use num_traits::{Float, Zero};
use tracing::debug;

use super::erreur::{CalcError, Resultat};
use super::jetons::{format_tokens, tokenize};
use super::operateurs::{BinOp, Op, UnOp};
use super::rpn::{format_postfix, to_postfix, PostfixEntry};

/// Étapes intermédiaires (panneau d’explication).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub demarche: Demarche,
}

/// API publique : tokenize -> to_postfix -> evaluate, première erreur propagée.
pub fn calculate(expression: &str) -> Resultat<f64> {
    let res = tokenize(expression)
        .and_then(|jetons| to_postfix(&jetons))
        .and_then(|rpn| evaluate(&rpn));
    journalise(expression, res.as_ref().copied());
    res
}

/// Comme `calculate`, mais conserve la démarche (jetons + RPN) pour l’affichage.
pub fn eval_expression(expr_str: &str) -> Resultat<Evaluation> {
    let res = pipeline_detaille(expr_str);
    journalise(expr_str, res.as_ref().map(|e| e.valeur));
    res
}

fn pipeline_detaille(expr_str: &str) -> Resultat<Evaluation> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;

    // 2) RPN
    let rpn = to_postfix(&jetons)?;

    // 3) Valeur
    let valeur = evaluate(&rpn)?;

    Ok(Evaluation {
        valeur,
        demarche: Demarche {
            jetons: format_tokens(&jetons),
            rpn: format_postfix(&rpn),
        },
    })
}

fn journalise(expr: &str, res: Result<f64, &CalcError>) {
    match res {
        Ok(v) => debug!(expr, valeur = v, "expression évaluée"),
        Err(err) => debug!(expr, %err, "expression rejetée"),
    }
}

/// Évalue une RPN avec une pile de valeurs.
pub fn evaluate(postfix: &[PostfixEntry]) -> Resultat<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(postfix.len());

    for entry in postfix {
        match *entry {
            PostfixEntry::Number(n) => st.push(n),

            PostfixEntry::Operator(Op::Unaire(u)) => {
                let x = st.pop().ok_or(CalcError::InsufficientOperands)?;
                st.push(match u {
                    UnOp::Plus => x,
                    UnOp::Minus => -x,
                });
            }

            PostfixEntry::Operator(Op::Binaire(op)) => {
                // b = premier dépilé (droite), a = second (gauche)
                let (Some(b), Some(a)) = (st.pop(), st.pop()) else {
                    return Err(CalcError::InsufficientOperands);
                };
                st.push(applique(op, a, b)?);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(CalcError::InvalidExpression),
    }
}

fn applique(op: BinOp, a: f64, b: f64) -> Resultat<f64> {
    let r = match op {
        BinOp::Plus => a + b,
        BinOp::Minus => a - b,
        BinOp::Star => a * b,
        BinOp::Slash => a / diviseur(b)?,
        BinOp::StarStar => puissance(a, b)?,
        BinOp::SlashSlash => floor_div(a, diviseur(b)?),
        BinOp::Percent => floor_mod(a, diviseur(b)?),
    };

    // Opérandes toujours finis ici : un résultat infini est un débordement.
    if r.is_infinite() {
        Err(CalcError::NumericOverflow)
    } else {
        Ok(r)
    }
}

fn diviseur(b: f64) -> Resultat<f64> {
    if b.is_zero() {
        Err(CalcError::DivisionByZero)
    } else {
        Ok(b)
    }
}

fn puissance(base: f64, exponent: f64) -> Resultat<f64> {
    let invalide = (base.is_zero() && exponent < 0.0) || (base < 0.0 && exponent.fract() != 0.0);
    if invalide {
        return Err(CalcError::InvalidPower { base, exponent });
    }
    let r = base.powf(exponent);
    if r.is_nan() {
        return Err(CalcError::InvalidPower { base, exponent });
    }
    Ok(r)
}

/// Division entière par défaut (quotient arrondi vers -∞), calculée via le reste fmod.
fn floor_div<F: Float>(a: F, b: F) -> F {
    let m = a % b;
    let mut div = (a - m) / b;
    if !m.is_zero() && (b < F::zero()) != (m < F::zero()) {
        div = div - F::one();
    }

    if div.is_zero() {
        // zéro signé comme le quotient exact
        return if (a / b).is_sign_negative() {
            -F::zero()
        } else {
            F::zero()
        };
    }

    let bas = div.floor();
    let demi = F::one() / (F::one() + F::one());
    if div - bas > demi {
        bas + F::one()
    } else {
        bas
    }
}

/// Reste associé : même signe que le diviseur.
fn floor_mod<F: Float>(a: F, b: F) -> F {
    let m = a % b;
    if m.is_zero() {
        return if b < F::zero() { -F::zero() } else { F::zero() };
    }
    if (b < F::zero()) != (m < F::zero()) {
        m + b
    } else {
        m
    }
}
