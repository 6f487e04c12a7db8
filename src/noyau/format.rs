// src/noyau/format.rs
//
// Affichage des nombres (résultat, démarche).

/// Texte le plus court qui relit la même valeur ; toujours une partie décimale
/// pour les entiers (14.0, -2.0), notation exponentielle pour les très grands/petits.
pub fn format_nombre(x: f64) -> String {
    format!("{x:?}")
}
