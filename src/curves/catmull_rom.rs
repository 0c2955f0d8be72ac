//! Catmull-Rom-Spline mit Spannungsparameter.
//!
//! Die Kurve läuft durch alle Stützpunkte. Für Rand-Segmente offener Pfade
//! werden Phantom-Punkte gespiegelt, geschlossene Pfade laufen modulo N um.

use super::linear::resample_linear;
use crate::core::Point;

/// Vier aufeinanderfolgende Punkte eines Spline-Segments.
///
/// Die Kurve des Segments verläuft von `p1` nach `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRomSegment {
    /// Index des Segments (= Index von `p1`)
    pub index: usize,
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CatmullRomSegment {
    /// Hermite-Tangenten `(m1, m2)` für `tau = (1 - tension) / 2`.
    pub fn tangents(&self, tau: f64) -> (Point, Point) {
        (tau * (self.p2 - self.p0), tau * (self.p3 - self.p1))
    }

    /// Punkt auf dem Segment für `t ∈ [0, 1]`.
    pub fn point(&self, tau: f64, t: f64) -> Point {
        let (m1, m2) = self.tangents(tau);
        hermite(self.p1, self.p2, m1, m2, t)
    }

    /// Koeffizienten des Segment-Polynoms in der Reihenfolge `[t³, t², t, 1]`.
    ///
    /// `P(t) = [t³ t² t 1] · M(tau) · [P0 P1 P2 P3]ᵀ`
    pub fn coefficients(&self, tau: f64) -> [Point; 4] {
        let m = basis_matrix(tau);
        let p = [self.p0, self.p1, self.p2, self.p3];
        m.map(|row| {
            row.iter()
                .zip(p.iter())
                .fold(Point::ZERO, |acc, (w, pt)| acc + *w * *pt)
        })
    }
}

/// Catmull-Rom-Basismatrix (Zeilen `t³, t², t, 1`; Spalten `P0..P3`).
pub fn basis_matrix(tau: f64) -> [[f64; 4]; 4] {
    [
        [-tau, 2.0 - tau, -2.0 + tau, tau],
        [2.0 * tau, -3.0 + tau, 3.0 - 2.0 * tau, -tau],
        [-tau, 0.0, tau, 0.0],
        [0.0, 1.0, 0.0, 0.0],
    ]
}

/// Kubische Hermite-Interpolation zwischen `p1` und `p2`.
pub fn hermite(p1: Point, p2: Point, m1: Point, m2: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * p1 + h10 * m1 + h01 * p2 + h11 * m2
}

/// Liefert die Segment-Nachbarschaften `(p0, p1, p2, p3)` aller Segmente.
///
/// Offene Pfade: `N-1` Segmente, Phantom-Punkte durch Spiegelung am Rand.
/// Geschlossene Pfade: `N` Segmente mit Indizes modulo N.
pub fn catmull_rom_segments(points: &[Point], closed: bool) -> Vec<CatmullRomSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let count = points.len();
    let get = |idx: isize| -> Point {
        if closed {
            return points[idx.rem_euclid(count as isize) as usize];
        }
        if idx < 0 {
            // Phantom-Punkt vor dem Start
            2.0 * points[0] - points[1]
        } else if idx as usize >= count {
            2.0 * points[count - 1] - points[count - 2]
        } else {
            points[idx as usize]
        }
    };

    let last = if closed { count } else { count - 1 };
    (0..last)
        .map(|i| {
            let i = i as isize;
            CatmullRomSegment {
                index: i as usize,
                p0: get(i - 1),
                p1: get(i),
                p2: get(i + 1),
                p3: get(i + 2),
            }
        })
        .collect()
}

/// Berechnet eine dichte Punktliste entlang eines Catmull-Rom-Splines durch `points`.
///
/// `tension` wird auf `[0, 1]` begrenzt. Bei `tension = 1` verschwinden die
/// Tangenten und die Kurve liegt auf den Sehnen; ausgegeben wird dann die
/// gleichmäßig parametrisierte Sehne (identisch zu `resample_linear`).
pub fn catmull_rom(
    points: &[Point],
    closed: bool,
    tension: f64,
    segments_per_edge: usize,
) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let tension = if tension.is_finite() {
        tension.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let tau = (1.0 - tension) * 0.5;
    if tau <= f64::EPSILON {
        return resample_linear(points, closed, segments_per_edge);
    }

    let segments = segments_per_edge.max(1);
    let spline_segments = catmull_rom_segments(points, closed);
    let mut result = Vec::with_capacity(spline_segments.len() * segments + 1);

    for seg in &spline_segments {
        if log::log_enabled!(log::Level::Trace) {
            let [a, b, c, d] = seg.coefficients(tau);
            log::trace!(
                "Catmull-Rom Segment {}: tau={:.4} x(t)={:.6}t³{:+.6}t²{:+.6}t{:+.6} y(t)={:.6}t³{:+.6}t²{:+.6}t{:+.6}",
                seg.index, tau, a.x, b.x, c.x, d.x, a.y, b.y, c.y, d.y
            );
        }

        let (m1, m2) = seg.tangents(tau);
        let first_step = if seg.index == 0 { 0 } else { 1 };
        for s in first_step..=segments {
            let t = s as f64 / segments as f64;
            result.push(hermite(seg.p1, seg.p2, m1, m2, t));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Klassische Catmull-Rom-Formel (tau = 0.5) als Referenz.
    fn catmull_rom_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        0.5 * ((2.0 * p1)
            + (-p0 + p2) * t
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
            + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
    }

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(6.0, -1.0),
            Point::new(10.0, 2.0),
        ]
    }

    #[test]
    fn test_two_points_straight_line() {
        let points = vec![Point::ZERO, Point::new(10.0, 0.0)];
        let result = catmull_rom(&points, false, 0.5, 10);
        assert_eq!(result.len(), 11);
        assert!((result[0] - Point::ZERO).length() < 1e-9);
        assert!((result[10] - Point::new(10.0, 0.0)).length() < 1e-9);
        assert!(result.iter().all(|p| p.y.abs() < 1e-9));
    }

    #[test]
    fn test_passes_through_control_points() {
        let points = zigzag();
        let segments = 8;
        let result = catmull_rom(&points, false, 0.3, segments);
        assert_eq!(result.len(), 3 * segments + 1);
        for (i, p) in points.iter().enumerate() {
            let sample = result[i * segments];
            assert!(
                sample.distance(*p) < 1e-9,
                "Punkt {} verfehlt: {:?} vs {:?}",
                i,
                sample,
                p
            );
        }
    }

    #[test]
    fn test_closed_wraps_and_ends_on_start() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        let result = catmull_rom(&points, true, 0.0, 4);
        assert_eq!(result.len(), 4 * 4 + 1);
        assert!(result.last().unwrap().distance(points[0]) < 1e-9);
        // Symmetrie: der Bogen zwischen (0,0) und (4,0) beult nach außen (y < 0)
        assert!(result[2].y < 0.0);
    }

    #[test]
    fn test_default_tension_matches_classic_formula() {
        let points = zigzag();
        for seg in catmull_rom_segments(&points, false) {
            for &t in &[0.0, 0.25, 0.5, 0.9] {
                let expected = catmull_rom_point(seg.p0, seg.p1, seg.p2, seg.p3, t);
                // Klassisch: tau = 0.5 ↔ tension = 0
                let actual = seg.point(0.5, t);
                assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
                assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_coefficients_agree_with_hermite() {
        let points = zigzag();
        let tau = 0.35;
        for seg in catmull_rom_segments(&points, true) {
            let [a, b, c, d] = seg.coefficients(tau);
            for &t in &[0.0, 0.3, 0.7, 1.0] {
                let poly = a * t * t * t + b * t * t + c * t + d;
                let herm = seg.point(tau, t);
                assert!(poly.distance(herm) < 1e-9, "t={}: {:?} vs {:?}", t, poly, herm);
            }
        }
    }

    #[test]
    fn test_open_phantoms_are_reflections() {
        let points = zigzag();
        let segs = catmull_rom_segments(&points, false);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].p0, Point::new(-3.0, -4.0));
        assert_eq!(segs[2].p3, Point::new(14.0, 5.0));
    }

    #[test]
    fn test_full_tension_equals_linear() {
        let points = zigzag();
        let curve = catmull_rom(&points, false, 1.0, 5);
        let linear = resample_linear(&points, false, 5);
        assert_eq!(curve.len(), linear.len());
        for (a, b) in curve.iter().zip(&linear) {
            assert!(a.distance(*b) < 1e-9);
        }
    }

    #[test]
    fn test_tension_out_of_range_is_clamped() {
        let points = zigzag();
        assert_eq!(
            catmull_rom(&points, false, 7.0, 4),
            catmull_rom(&points, false, 1.0, 4)
        );
        assert_eq!(
            catmull_rom(&points, false, -2.0, 4),
            catmull_rom(&points, false, 0.0, 4)
        );
    }
}
