// src/noyau/operateurs.rs
//
// Opérateurs + table statique précédence / associativité.
//
//   + -          : 1, gauche
//   * / // %     : 2, gauche
//   **           : 3, droite
//   u+ u-        : 4, droite

use std::fmt;
use std::str::FromStr;

use super::erreur::CalcError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash, // //
    Percent,
    StarStar, // **
}

/// Opérateurs unaires (issus du reclassement de + / -).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOp {
    Plus,
    Minus,
}

/// Opérateur tel qu’il circule dans la pile du shunting-yard et dans la RPN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Binaire(BinOp),
    Unaire(UnOp),
}

impl BinOp {
    pub fn symbole(self) -> &'static str {
        match self {
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Star => "*",
            BinOp::Slash => "/",
            BinOp::SlashSlash => "//",
            BinOp::Percent => "%",
            BinOp::StarStar => "**",
        }
    }
}

impl FromStr for BinOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(BinOp::Plus),
            "-" => Ok(BinOp::Minus),
            "*" => Ok(BinOp::Star),
            "/" => Ok(BinOp::Slash),
            "//" => Ok(BinOp::SlashSlash),
            "%" => Ok(BinOp::Percent),
            "**" => Ok(BinOp::StarStar),
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}

impl UnOp {
    pub fn symbole(self) -> &'static str {
        match self {
            UnOp::Plus => "u+",
            UnOp::Minus => "u-",
        }
    }
}

impl Op {
    pub fn precedence(self) -> u8 {
        match self {
            Op::Binaire(BinOp::Plus | BinOp::Minus) => 1,
            Op::Binaire(BinOp::Star | BinOp::Slash | BinOp::SlashSlash | BinOp::Percent) => 2,
            Op::Binaire(BinOp::StarStar) => 3,
            Op::Unaire(_) => 4,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Op::Binaire(BinOp::StarStar) | Op::Unaire(_) => Assoc::Droite,
            Op::Binaire(_) => Assoc::Gauche,
        }
    }

    /// `self` (sommet de pile) doit-il sortir avant d’empiler `entrant` ?
    pub fn sort_avant(self, entrant: Op) -> bool {
        match entrant.assoc() {
            Assoc::Droite => self.precedence() > entrant.precedence(),
            Assoc::Gauche => self.precedence() >= entrant.precedence(),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Binaire(b) => f.write_str(b.symbole()),
            Op::Unaire(u) => f.write_str(u.symbole()),
        }
    }
}
