//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - tirages déterministes (graine fixe)
//! - profondeur bornée
//! - budget temps global
//! - erreurs acceptées : domaine numérique seulement (division par zéro, puissance, débordement)
//! - invariant clé : un succès est toujours un flottant fini

use std::time::{Duration, Instant};

use super::{calculate, eval_expression, CalcError};

/* ------------------------ Tirages déterministes ------------------------ */

/// LCG à graine fixe : mêmes expressions à chaque exécution.
struct Tirage {
    etat: u64,
}

impl Tirage {
    fn new(graine: u64) -> Self {
        Self { etat: graine }
    }

    /// Index dans 0..n (n > 0).
    fn index(&mut self, n: usize) -> usize {
        self.etat = self.etat.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.etat >> 33) as usize) % n
    }

    fn parmi<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        &options[self.index(options.len())]
    }

    fn pile(&mut self) -> bool {
        self.index(2) == 1
    }
}

/// Garde-fou temps : un pipeline sans récursion reste linéaire.
fn dans_budget(debut: Instant, max: Duration) {
    assert!(debut.elapsed() <= max, "budget temps dépassé: {max:?}");
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &CalcError) -> bool {
    matches!(
        e,
        CalcError::DivisionByZero | CalcError::InvalidPower { .. } | CalcError::NumericOverflow
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

// inclut 0 (division par zéro) et des décimaux ".5"
const NOMBRES: [&str; 10] = ["0", ".5", "2.5", "10", "0.25", "5", "6", "7", "8", "9"];

fn gen_nombre(t: &mut Tirage) -> String {
    t.parmi(&NOMBRES).to_string()
}

const OPS: [&str; 7] = ["+", "-", "*", "/", "//", "%", "**"];

fn gen_expr(t: &mut Tirage, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(t);
    }

    match t.index(10) {
        0..=2 => gen_nombre(t),
        3 => {
            // unaire toujours suivi d’une '(' : pas de "--"
            let u = t.parmi(&["-", "+"]);
            format!("{u}({})", gen_expr(t, depth - 1))
        }
        _ => {
            let op = t.parmi(&OPS);
            let a = gen_expr(t, depth - 1);
            let b = gen_expr(t, depth - 1);
            if t.pile() {
                format!("({a} {op} {b})")
            } else {
                format!("{a}{op}{b}")
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_pas_de_panique_resultats_finis() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut t = Tirage::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..200 {
        dans_budget(t0, max);

        let expr = gen_expr(&mut t, 4);

        match calculate(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "non fini: expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
            }
        }

        // Même expression divisée par zéro : toujours une erreur attendue
        let div0 = format!("({expr}) / 0");
        match calculate(&div0) {
            Ok(v) => panic!("succès inattendu: expr={div0:?} v={v}"),
            Err(e) => assert!(is_erreur_attendue(&e), "expr={div0:?} err={e}"),
        }
    }

    // On veut des succès, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // Même seed => mêmes expressions => mêmes sorties
    let mut r1 = Tirage::new(0xBADC0DE_u64);
    let mut r2 = Tirage::new(0xBADC0DE_u64);

    for _ in 0..80 {
        dans_budget(t0, max);

        let e1 = gen_expr(&mut r1, 4);
        let e2 = gen_expr(&mut r2, 4);
        assert_eq!(e1, e2);

        let a = calculate(&e1).map(f64::to_bits);
        let b = calculate(&e2).map(f64::to_bits);
        assert_eq!(a, b, "expr={e1:?}");

        // La démarche ne change pas la valeur
        let d = eval_expression(&e1).map(|ev| ev.valeur.to_bits());
        assert_eq!(a, d, "expr={e1:?}");
    }
}

#[test]
fn fuzz_safe_caractere_injecte() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut t = Tirage::new(0x5EED_u64);
    let intrus = ['a', 'ф', '^', '$', '\t', '='];

    for _ in 0..60 {
        dans_budget(t0, max);

        let expr = gen_expr(&mut t, 3);
        let c = *t.parmi(&intrus);

        // "expr <c>" : position = nombre de caractères avant + 1 espace
        let avec = format!("{expr} {c}");
        let position = expr.chars().count() + 1;

        assert_eq!(
            calculate(&avec),
            Err(CalcError::UnsupportedCharacter {
                position,
                character: c
            }),
            "expr={avec:?}"
        );
    }
}

#[test]
fn fuzz_safe_longues_chaines_sans_recursion() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    // 5000 termes : 1+1+...+1
    let somme = vec!["1"; 5000].join("+");
    assert_eq!(calculate(&somme), Ok(5000.0));
    dans_budget(t0, max);

    // 2000 parenthèses imbriquées
    let profond = format!("{}7{}", "(".repeat(2000), ")".repeat(2000));
    assert_eq!(calculate(&profond), Ok(7.0));
    dans_budget(t0, max);

    // 1001 unaires alternés par '(' : -(-(...-(1)...))
    let unaires = format!("{}1{}", "-(".repeat(1001), ")".repeat(1001));
    assert_eq!(calculate(&unaires), Ok(-1.0));
    dans_budget(t0, max);
}
