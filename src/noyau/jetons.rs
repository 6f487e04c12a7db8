// src/noyau/jetons.rs
//
// Tokenisation.
// - retrait des espaces ' ' avec table de correspondance vers l’entrée originale (index_map)
// - nombres : \d*\.\d+ | \d+  (".5" accepté)
// - symboles : ** // + - * / % ( )   (** et // prioritaires sur * et /)
// - reclassement des + / - unaires après le balayage

use tracing::trace;

use super::erreur::{CalcError, Resultat};
use super::format::format_nombre;
use super::operateurs::{BinOp, UnOp};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinOp),
    UnaryOperator(UnOp),
    LeftParen,
    RightParen,
}

/// Tokenize une expression.
///
/// Les positions d’erreur sont des index de caractères dans `expression` (avant retrait des espaces).
pub fn tokenize(expression: &str) -> Resultat<Vec<Token>> {
    if expression.trim().is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    // Seul ' ' est retiré : une tabulation au milieu reste un caractère non supporté.
    let mut chars: Vec<char> = Vec::with_capacity(expression.len());
    let mut index_map: Vec<usize> = Vec::with_capacity(expression.len());
    for (i, c) in expression.chars().enumerate() {
        if c != ' ' {
            chars.push(c);
            index_map.push(i);
        }
    }

    let mut bruts = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if let Some(fin) = fin_nombre(&chars, pos) {
            let texte: String = chars[pos..fin].iter().collect();
            let n: f64 = texte
                .parse()
                .map_err(|_| hors_jeu(&chars, &index_map, pos))?;
            if !n.is_finite() {
                return Err(CalcError::NumericOverflow);
            }
            bruts.push(Token::Number(n));
            pos = fin;
            continue;
        }

        // Symboles doubles d’abord
        if pos + 1 < chars.len() {
            let (a, b) = (chars[pos], chars[pos + 1]);
            if (a, b) == ('*', '*') || (a, b) == ('/', '/') {
                let sym: String = [a, b].iter().collect();
                bruts.push(Token::Operator(sym.parse()?));
                pos += 2;
                continue;
            }
        }

        let tok = match chars[pos] {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c @ ('+' | '-' | '*' | '/' | '%') => Token::Operator(c.to_string().parse()?),
            _ => return Err(hors_jeu(&chars, &index_map, pos)),
        };
        bruts.push(tok);
        pos += 1;
    }

    let jetons = reclasse_unaires(bruts);
    trace!(jetons = %format_tokens(&jetons), "tokenisation");
    Ok(jetons)
}

/// Fin (exclue) d’un nombre commençant à `pos`, s’il y en a un.
fn fin_nombre(chars: &[char], pos: usize) -> Option<usize> {
    let chiffres = |depuis: usize| {
        chars[depuis..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count()
    };

    let entiers = chiffres(pos);
    let point = pos + entiers;

    // \d*\.\d+
    if point < chars.len() && chars[point] == '.' {
        let decimales = chiffres(point + 1);
        if decimales > 0 {
            return Some(point + 1 + decimales);
        }
    }

    // \d+
    if entiers > 0 {
        Some(point)
    } else {
        None
    }
}

fn hors_jeu(chars: &[char], index_map: &[usize], pos: usize) -> CalcError {
    CalcError::UnsupportedCharacter {
        position: index_map[pos],
        character: chars[pos],
    }
}

/// + / - devient unaire en tête, ou juste après un opérateur binaire ou une '('.
fn reclasse_unaires(bruts: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(bruts.len());

    for tok in bruts {
        let attend_operande = matches!(
            out.last(),
            None | Some(Token::Operator(_)) | Some(Token::LeftParen)
        );
        let tok = match tok {
            Token::Operator(BinOp::Plus) if attend_operande => Token::UnaryOperator(UnOp::Plus),
            Token::Operator(BinOp::Minus) if attend_operande => Token::UnaryOperator(UnOp::Minus),
            t => t,
        };
        out.push(tok);
    }

    out
}

/// Liste des jetons en texte (démarche / journal).
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Number(n) => format_nombre(*n),
            Token::Operator(op) => op.symbole().to_string(),
            Token::UnaryOperator(op) => op.symbole().to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
