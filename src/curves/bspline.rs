//! Uniformer B-Spline (approximierend) über die de-Boor-Rekursion.

use super::linear::resample_linear;
use crate::core::Point;
use crate::shared::options::KNOT_EPSILON;

/// Höchster unterstützter Grad.
pub const MAX_DEGREE: u32 = 5;

/// Toleranz für das Zusammenfallen von Kurvenanfang und -ende.
const CLOSURE_EPSILON: f64 = 1e-9;

/// Geklemmter uniformer Knotenvektor der Länge `control_count + degree + 1`.
///
/// `0` für `i ≤ d`, `n - d + 1` für `i ≥ m - d`, sonst `i - d`
/// (mit `n = control_count - 1`, `m = n + d + 1`).
pub fn clamped_knot_vector(control_count: usize, degree: usize) -> Vec<f64> {
    let n = control_count as isize - 1;
    let d = degree as isize;
    let m = n + d + 1;
    (0..=m)
        .map(|i| {
            if i <= d {
                0.0
            } else if i >= m - d {
                (n - d + 1) as f64
            } else {
                (i - d) as f64
            }
        })
        .collect()
}

/// De-Boor-Auswertung im Knotenintervall `[u_k, u_{k+1})`.
fn de_boor(k: usize, u: f64, degree: usize, knots: &[f64], controls: &[Point]) -> Point {
    let mut d: Vec<Point> = (0..=degree).map(|j| controls[k - degree + j]).collect();
    for r in 1..=degree {
        for j in (r..=degree).rev() {
            let i = k - degree + j;
            let denom = knots[i + degree + 1 - r] - knots[i];
            let alpha = if denom.abs() < KNOT_EPSILON {
                0.0
            } else {
                (u - knots[i]) / denom
            };
            d[j] = (1.0 - alpha) * d[j - 1] + alpha * d[j];
        }
    }
    d[degree]
}

/// Baut die Kontrollpunkte: offene Pfade duplizieren Start/Ende `degree`-mal,
/// geschlossene hängen die ersten `degree` Punkte an.
fn control_points(points: &[Point], closed: bool, degree: usize) -> Vec<Point> {
    let mut controls = Vec::with_capacity(points.len() + 2 * degree);
    if closed {
        controls.extend_from_slice(points);
        controls.extend((0..degree).map(|i| points[i % points.len()]));
    } else {
        let first = points[0];
        let last = points[points.len() - 1];
        controls.extend(std::iter::repeat(first).take(degree));
        controls.extend_from_slice(points);
        controls.extend(std::iter::repeat(last).take(degree));
    }
    controls
}

/// Wertet einen uniformen B-Spline vom Grad `degree` (begrenzt auf 1..=5) aus.
///
/// Grad 1 entspricht `resample_linear`. Die Kurve liegt in der konvexen Hülle
/// der Kontrollpunkte, läuft aber im Allgemeinen nicht durch die Stützpunkte.
pub fn uniform_b_spline(
    points: &[Point],
    closed: bool,
    degree: u32,
    segments_per_piece: usize,
) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let degree = degree.clamp(1, MAX_DEGREE) as usize;
    if degree == 1 {
        return resample_linear(points, closed, segments_per_piece);
    }

    let controls = control_points(points, closed, degree);
    if controls.len() <= degree {
        return points.to_vec();
    }

    let knots = clamped_knot_vector(controls.len(), degree);
    let n = controls.len() - 1;
    let segments = segments_per_piece.max(1);

    let mut result: Vec<Point> = Vec::with_capacity((n - degree + 1) * segments + 2);
    let mut first_span = true;
    for k in degree..=n {
        let (u0, u1) = (knots[k], knots[k + 1]);
        if u1 - u0 < KNOT_EPSILON {
            continue;
        }
        let first_step = if first_span { 0 } else { 1 };
        first_span = false;
        for s in first_step..=segments {
            let u = u0 + (u1 - u0) * (s as f64 / segments as f64);
            let p = de_boor(k, u, degree, &knots, &controls);
            // Die geklemmten Randintervalle liefern konstante Stücke
            if result.last() != Some(&p) {
                result.push(p);
            }
        }
    }

    if closed {
        // Schlusspunkt = erster Abtastpunkt
        if let Some(first) = result.first().copied() {
            match result.last_mut() {
                Some(last) if first.distance(*last) < CLOSURE_EPSILON => *last = first,
                _ => result.push(first),
            }
        }
    }

    log::trace!(
        "B-Spline Grad {}: {} Kontrollpunkte, {} Knoten → {} Punkte",
        degree,
        controls.len(),
        knots.len(),
        result.len()
    );
    result
}
