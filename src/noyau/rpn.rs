// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Nombre : sortie directe
// - Opérateur (binaire ou unaire) v : on dépile tant que le sommet n’est pas '('
//   et que sa précédence l’exige (> si v est associatif à droite, >= sinon), puis on empile v
// - '(' : empilée
// - ')' : on dépile jusqu’à '(' (jetée) ; pile vide avant => parenthèses non équilibrées
// - Fin : on vide la pile ; une '(' restante => parenthèses non équilibrées

use tracing::trace;

use super::erreur::{CalcError, Resultat};
use super::format::format_nombre;
use super::jetons::Token;
use super::operateurs::Op;

/// Entrée de la RPN : littéral ou opérateur, dans l’ordre d’évaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PostfixEntry {
    Number(f64),
    Operator(Op),
}

/// Contenu de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Op),
    ParenG,
}

/// Convertit une suite de jetons en RPN.
///
/// Exemple:
///   jetons: 2 + 3 * 4
///   rpn:    2 3 4 * +
pub fn to_postfix(tokens: &[Token]) -> Resultat<Vec<PostfixEntry>> {
    let mut out: Vec<PostfixEntry> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    for tok in tokens {
        match *tok {
            Token::Number(n) => out.push(PostfixEntry::Number(n)),

            Token::Operator(b) => empile_op(Op::Binaire(b), &mut ops, &mut out),
            Token::UnaryOperator(u) => empile_op(Op::Unaire(u), &mut ops, &mut out),

            Token::LeftParen => ops.push(Pile::ParenG),

            Token::RightParen => loop {
                match ops.pop() {
                    Some(Pile::ParenG) => break,
                    Some(Pile::Op(op)) => out.push(PostfixEntry::Operator(op)),
                    None => return Err(CalcError::UnbalancedParentheses),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::Op(op) => out.push(PostfixEntry::Operator(op)),
            Pile::ParenG => return Err(CalcError::UnbalancedParentheses),
        }
    }

    trace!(rpn = %format_postfix(&out), "shunting-yard");
    Ok(out)
}

fn empile_op(v: Op, ops: &mut Vec<Pile>, out: &mut Vec<PostfixEntry>) {
    while let Some(&Pile::Op(top)) = ops.last() {
        if !top.sort_avant(v) {
            break;
        }
        ops.pop();
        out.push(PostfixEntry::Operator(top));
    }
    ops.push(Pile::Op(v));
}

/// RPN en texte (démarche / journal).
pub fn format_postfix(rpn: &[PostfixEntry]) -> String {
    rpn.iter()
        .map(|e| match e {
            PostfixEntry::Number(n) => format_nombre(*n),
            PostfixEntry::Operator(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
