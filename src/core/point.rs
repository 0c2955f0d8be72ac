//! Vektor-Primitive: Punkt-Arithmetik, Normalisierung, Winkel und Kreuzprodukt.
//!
//! `Point` ist ein reiner Werttyp (`glam::DVec2`) und wird ausschließlich
//! über seinen Wert verglichen.

use glam::DVec2;
use std::f64::consts::TAU;

/// 2D-Punkt bzw. 2D-Vektor in Zeichnungseinheiten.
pub type Point = DVec2;

/// Normalisiert `v`. Der Nullvektor bleibt der Nullvektor.
pub fn normalize(v: DVec2) -> DVec2 {
    v.normalize_or_zero()
}

/// z-Komponente des Kreuzprodukts (positiv = Linkskurve).
pub fn cross(a: DVec2, b: DVec2) -> f64 {
    a.perp_dot(b)
}

/// Winkel zwischen zwei Einheitsvektoren in `[0, π]`.
pub fn angle_between(a: DVec2, b: DVec2) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Polarwinkel eines Vektors in `(-π, π]`.
pub fn polar_angle(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Bildet einen Winkel auf `[0, 2π)` ab.
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Vorzeichenbehaftete Fläche eines Polygons (Shoelace-Formel).
///
/// Positiv bei Umlauf gegen den Uhrzeigersinn (y nach oben).
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice * 0.5
}
