//! Eckenrundung: ersetzt Vertices durch Kreisbögen oder affine Viertel-Ellipsen.
//!
//! Pro Ecke wird ein transienter `Corner` berechnet (Tangentenpunkte, Bogen-Basis,
//! Sweep-Richtung). Der Versatz der Tangentenpunkte ist nie größer als die
//! halbe kürzere Nachbarkante, unabhängig vom angeforderten Radius.

use super::RadiusMode;
use crate::core::point::{angle_between, cross, normalize, polar_angle, wrap_angle};
use crate::core::Point;
use crate::shared::options::{ANGLE_EPSILON, CIRCLE_DETERMINANT_EPSILON, LENGTH_EPSILON};
use std::f64::consts::{FRAC_PI_2, PI};

/// Bogen-Geometrie einer gerundeten Ecke
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerShape {
    /// Kreisbogen von `start_angle` nach `end_angle`
    Circle {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
    /// Viertel-Ellipse in der schiefen Basis der beiden Kanten
    Affine {
        origin: Point,
        /// Vom Vertex zum eingehenden Tangentenpunkt
        axis_in: Point,
        /// Vom Vertex zum ausgehenden Tangentenpunkt
        axis_out: Point,
    },
}

/// Transienter Konstruktions-Datensatz einer gerundeten Ecke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Ursprünglicher Vertex
    pub vertex: Point,
    /// Tangentenpunkt auf der eingehenden Kante
    pub tangent_in: Point,
    /// Tangentenpunkt auf der ausgehenden Kante
    pub tangent_out: Point,
    /// Abstand der Tangentenpunkte vom Vertex
    pub offset: f64,
    /// Kreuzprodukt der Kantenrichtungen (< 0 = konkave Ecke bei Umlauf gegen den Uhrzeigersinn)
    pub turn: f64,
    pub shape: CornerShape,
}

/// Richtungen, Längen und Knickwinkel an einem Vertex.
#[derive(Debug, Clone, Copy)]
struct CornerFrame {
    dir_in: Point,
    dir_out: Point,
    len_in: f64,
    len_out: f64,
    angle: f64,
    turn: f64,
}

impl CornerFrame {
    /// `None` bei entarteten Kanten oder Knickwinkeln nahe 0 bzw. π.
    fn new(prev: Point, curr: Point, next: Point) -> Option<Self> {
        let edge_in = curr - prev;
        let edge_out = next - curr;
        let len_in = edge_in.length();
        let len_out = edge_out.length();
        if len_in <= LENGTH_EPSILON || len_out <= LENGTH_EPSILON {
            return None;
        }
        let dir_in = normalize(edge_in);
        let dir_out = normalize(edge_out);
        let angle = angle_between(dir_in, dir_out);
        if !angle.is_finite() || angle < ANGLE_EPSILON || angle > PI - ANGLE_EPSILON {
            return None;
        }
        Some(Self {
            dir_in,
            dir_out,
            len_in,
            len_out,
            angle,
            turn: cross(dir_in, dir_out),
        })
    }

    fn offset(&self, mode: RadiusMode, value: f64) -> Option<f64> {
        let offset = fillet_offset(self.len_in, self.len_out, self.angle, mode, value);
        (offset > LENGTH_EPSILON).then_some(offset)
    }
}

/// Versatz der Tangentenpunkte vom Vertex.
///
/// - `Relative`: `clamp01(value) · min(len_in, len_out) / 2`
/// - `Absolute`: `min(min(len_in, len_out) / 2, value · tan(angle / 2))`
///
/// `angle` ist der Knickwinkel zwischen den Kantenrichtungen.
pub fn fillet_offset(len_in: f64, len_out: f64, angle: f64, mode: RadiusMode, value: f64) -> f64 {
    let max_offset = len_in.min(len_out) * 0.5;
    let value = if value.is_finite() { value } else { 0.0 };
    match mode {
        RadiusMode::Relative => value.clamp(0.0, 1.0) * max_offset,
        RadiusMode::Absolute => max_offset.min(value.max(0.0) * (angle * 0.5).tan()),
    }
}

/// Umkreis durch drei Punkte. `None` bei (nahezu) kollinearen Punkten.
pub fn circumcircle(a: Point, b: Point, c: Point) -> Option<(Point, f64)> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < CIRCLE_DETERMINANT_EPSILON {
        return None;
    }
    let (a2, b2, c2) = (a.length_squared(), b.length_squared(), c.length_squared());
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    let center = Point::new(ux, uy);
    Some((center, center.distance(a)))
}

/// Liegt `mid` auf dem Bogen von `start` nach `end` in der angegebenen Drehrichtung?
fn is_angle_between(start: f64, mid: f64, end: f64, clockwise: bool) -> bool {
    let (s, m, e) = (wrap_angle(start), wrap_angle(mid), wrap_angle(end));
    if clockwise {
        if s < e {
            m <= s || m >= e
        } else {
            m <= s && m >= e
        }
    } else if s > e {
        m >= s || m <= e
    } else {
        m >= s && m <= e
    }
}

/// Sweep-Winkel (≥ 0) von `start` nach `end` in der angegebenen Drehrichtung.
fn sweep(start: f64, end: f64, clockwise: bool) -> f64 {
    if clockwise {
        wrap_angle(start - end)
    } else {
        wrap_angle(end - start)
    }
}

impl Corner {
    /// Baut die Ecke `curr` zwischen `prev` und `next`.
    ///
    /// `exact = true`: Kreis durch Tangentenpunkte und Vertex. Konkave Ecken laufen
    /// über die Seite des Vertex, konvexe über die gegenüberliegende Seite.
    /// `exact = false`: affine Viertel-Ellipse ohne Entartungsfälle.
    pub fn build(
        prev: Point,
        curr: Point,
        next: Point,
        mode: RadiusMode,
        value: f64,
        exact: bool,
    ) -> Option<Corner> {
        let frame = CornerFrame::new(prev, curr, next)?;
        let offset = frame.offset(mode, value)?;
        let tangent_in = curr - frame.dir_in * offset;
        let tangent_out = curr + frame.dir_out * offset;

        let shape = if exact {
            let (center, radius) = circumcircle(tangent_in, curr, tangent_out)?;
            let start_angle = polar_angle(tangent_in - center);
            let end_angle = polar_angle(tangent_out - center);
            let mid_angle = polar_angle(curr - center);
            let through_vertex = frame.turn < 0.0;
            let mid_on_cw = is_angle_between(start_angle, mid_angle, end_angle, true);
            let mid_on_ccw = is_angle_between(start_angle, mid_angle, end_angle, false);
            let clockwise = match (mid_on_cw, mid_on_ccw) {
                (true, false) => through_vertex,
                (false, true) => !through_vertex,
                // Vertex fällt auf einen Tangentenpunkt: kürzeren Bogen nehmen
                _ => sweep(start_angle, end_angle, true) <= sweep(start_angle, end_angle, false),
            };
            CornerShape::Circle {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
            }
        } else {
            CornerShape::Affine {
                origin: curr,
                axis_in: tangent_in - curr,
                axis_out: tangent_out - curr,
            }
        };

        Some(Corner {
            vertex: curr,
            tangent_in,
            tangent_out,
            offset,
            turn: frame.turn,
            shape,
        })
    }

    /// Klassische Rundung: Kreis, der beide Kanten in den Tangentenpunkten berührt.
    ///
    /// Radius `offset / tan(angle / 2)`, Mittelpunkt auf der Normalen der
    /// eingehenden Kante zur Innenseite des Knicks.
    pub fn inscribed(
        prev: Point,
        curr: Point,
        next: Point,
        mode: RadiusMode,
        value: f64,
    ) -> Option<Corner> {
        let frame = CornerFrame::new(prev, curr, next)?;
        let offset = frame.offset(mode, value)?;
        let tangent_in = curr - frame.dir_in * offset;
        let tangent_out = curr + frame.dir_out * offset;

        let radius = offset / (frame.angle * 0.5).tan().max(ANGLE_EPSILON);
        let normal = if frame.turn > 0.0 {
            frame.dir_in.perp()
        } else {
            -frame.dir_in.perp()
        };
        let center = tangent_in + normal * radius;

        Some(Corner {
            vertex: curr,
            tangent_in,
            tangent_out,
            offset,
            turn: frame.turn,
            shape: CornerShape::Circle {
                center,
                radius,
                start_angle: polar_angle(tangent_in - center),
                end_angle: polar_angle(tangent_out - center),
                clockwise: frame.turn < 0.0,
            },
        })
    }

    /// Punkt auf dem Bogen für `t ∈ [0, 1]` (t = 0 → `tangent_in`).
    pub fn arc_point(&self, t: f64) -> Point {
        match self.shape {
            CornerShape::Circle {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
            } => {
                let total = sweep(start_angle, end_angle, clockwise);
                let angle = if clockwise {
                    start_angle - total * t
                } else {
                    start_angle + total * t
                };
                center + radius * Point::new(angle.cos(), angle.sin())
            }
            CornerShape::Affine {
                origin,
                axis_in,
                axis_out,
            } => {
                let a = PI + FRAC_PI_2 * t;
                origin + axis_out * (1.0 + a.cos()) + axis_in * (1.0 + a.sin())
            }
        }
    }

    /// Hängt Tangentenpunkt-ein, innere Bogenpunkte und Tangentenpunkt-aus an.
    ///
    /// Fällt `tangent_in` mit dem zuletzt ausgegebenen Punkt zusammen (volle
    /// Rundung zweier Nachbarecken), wird er nicht doppelt ausgegeben.
    fn emit(&self, steps: usize, out: &mut Vec<Point>) {
        if !out
            .last()
            .is_some_and(|p| p.distance(self.tangent_in) <= LENGTH_EPSILON)
        {
            out.push(self.tangent_in);
        }
        for i in 1..steps {
            out.push(self.arc_point(i as f64 / steps as f64));
        }
        out.push(self.tangent_out);
    }
}

/// Gemeinsamer Rahmen: offene Pfade behalten Start und Ende, geschlossene Pfade
/// runden jeden Vertex und enden wieder auf dem ersten Punkt.
fn round_corners(
    points: &[Point],
    closed: bool,
    segments_per_arc: usize,
    build: impl Fn(Point, Point, Point) -> Option<Corner>,
) -> Vec<Point> {
    let count = points.len();
    if count < 2 {
        return points.to_vec();
    }
    let steps = segments_per_arc.max(2);
    let mut result = Vec::with_capacity(count * (steps + 1) + 1);
    let mut rounded = 0usize;

    let mut corner_at = |i: usize, result: &mut Vec<Point>| {
        let prev = points[(i + count - 1) % count];
        let next = points[(i + 1) % count];
        match build(prev, points[i], next) {
            Some(corner) => {
                rounded += 1;
                corner.emit(steps, result);
            }
            None => result.push(points[i]),
        }
    };

    if closed {
        for i in 0..count {
            corner_at(i, &mut result);
        }
        // Letzte Ecke kann bereits auf dem ersten Tangentenpunkt enden
        let n = result.len();
        if let Some(first) = result.first().copied() {
            if n > 1 && result[n - 1].distance(first) <= LENGTH_EPSILON {
                result[n - 1] = first;
            } else {
                result.push(first);
            }
        }
    } else {
        result.push(points[0]);
        for i in 1..count - 1 {
            corner_at(i, &mut result);
        }
        result.push(points[count - 1]);
    }

    log::trace!(
        "Eckenrundung: {} von {} Ecken gerundet, {} Punkte",
        rounded,
        if closed { count } else { count.saturating_sub(2) },
        result.len()
    );
    result
}

/// Rundet die Ecken eines Pfads (exakter Kreisbogen oder affine Näherung).
pub fn fillet_path(
    points: &[Point],
    closed: bool,
    mode: RadiusMode,
    value: f64,
    segments_per_arc: usize,
    exact: bool,
) -> Vec<Point> {
    round_corners(points, closed, segments_per_arc, |prev, curr, next| {
        Corner::build(prev, curr, next, mode, value, exact)
    })
}

/// Rundet die Ecken mit kantentangentialen Kreisbögen (`Corner::inscribed`).
pub fn inscribed_fillet_path(
    points: &[Point],
    closed: bool,
    mode: RadiusMode,
    value: f64,
    segments_per_arc: usize,
) -> Vec<Point> {
    round_corners(points, closed, segments_per_arc, |prev, curr, next| {
        Corner::inscribed(prev, curr, next, mode, value)
    })
}
