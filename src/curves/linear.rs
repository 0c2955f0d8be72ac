//! Gleichmäßige Unterteilung gerader Kanten.

use crate::core::Point;

/// Unterteilt jede Kante in `segments_per_edge` gleich lange Stücke.
///
/// Der gemeinsame Punkt zweier Kanten wird nur einmal ausgegeben. Geschlossene
/// Pfade enden wieder auf dem ersten Punkt.
pub fn resample_linear(points: &[Point], closed: bool, segments_per_edge: usize) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let segments = segments_per_edge.max(1);
    let count = points.len();
    let edges = if closed { count } else { count - 1 };

    let mut result = Vec::with_capacity(edges * segments + 1);
    for i in 0..edges {
        let p1 = points[i];
        let p2 = points[(i + 1) % count];
        let first_step = if i == 0 { 0 } else { 1 };
        for s in first_step..=segments {
            let t = s as f64 / segments as f64;
            result.push(p1.lerp(p2, t));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_count_and_endpoints() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
        ];
        let result = resample_linear(&pts, false, 4);
        assert_eq!(result.len(), 2 * 4 + 1);
        assert_eq!(result[0], pts[0]);
        assert_eq!(result[4], pts[1]);
        assert_eq!(*result.last().unwrap(), pts[2]);
        assert_eq!(result[1], Point::new(1.0, 0.0));
    }

    #[test]
    fn test_closed_returns_to_start() {
        let pts = vec![Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let result = resample_linear(&pts, true, 2);
        assert_eq!(result.len(), 3 * 2 + 1);
        assert_eq!(*result.last().unwrap(), pts[0]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(resample_linear(&[], false, 8).is_empty());
        let single = vec![Point::new(3.0, 3.0)];
        assert_eq!(resample_linear(&single, true, 8), single);
        // 0 Segmente → wie 1 Segment
        let pts = vec![Point::ZERO, Point::X];
        assert_eq!(resample_linear(&pts, false, 0), pts);
    }
}
